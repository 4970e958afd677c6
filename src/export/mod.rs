pub mod excel;

pub use excel::generate_report;
