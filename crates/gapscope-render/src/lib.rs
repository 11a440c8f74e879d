//! Output formats for keyword opportunities.

mod csv_writer;
mod human;
mod jsonl;
mod report;

pub use csv_writer::CsvWriter;
pub use human::HumanWriter;
pub use jsonl::{JSONL_VERSION, JsonlWriter};
pub use report::ReportWriter;
