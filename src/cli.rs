use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shiyi-check")]
#[command(about = "词汇释义比对工具（有道网页释义版）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 读取词库、抓取有道释义并比对，输出结果JSON
    Check {
        /// 词库Excel文件（含 单词 和 释义 两列）
        #[arg(required = true)]
        input: PathBuf,

        /// 输出JSON文件（默认: 输入文件同名.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 工作表名（默认: 第一个工作表）
        #[arg(short, long)]
        sheet: Option<String>,

        /// 离线模式：使用表格自带的 有道释义 列，不联网抓取
        #[arg(long)]
        offline: bool,
    },

    /// 从比对结果JSON生成多表Excel报告
    Export {
        /// 比对结果JSON文件
        #[arg(required = true)]
        input: PathBuf,

        /// 输出Excel文件（默认: 释义比对报告_时间戳.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 读取、抓取、比对、导出一步完成
    Run {
        /// 词库Excel文件（含 单词 和 释义 两列）
        #[arg(required = true)]
        input: PathBuf,

        /// 输出Excel文件（默认: 释义比对报告_时间戳.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 工作表名（默认: 第一个工作表）
        #[arg(short, long)]
        sheet: Option<String>,

        /// 离线模式：使用表格自带的 有道释义 列，不联网抓取
        #[arg(long)]
        offline: bool,

        /// 同时保留中间结果JSON
        #[arg(long)]
        keep_json: bool,
    },

    /// 查看/修改抓取配置
    Config {
        /// 显示当前配置
        #[arg(long)]
        show: bool,

        /// 设置请求超时（秒）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 设置请求间隔（毫秒）
        #[arg(long)]
        set_interval: Option<u64>,

        /// 设置取用义项数
        #[arg(long)]
        set_max_senses: Option<usize>,
    },
}
