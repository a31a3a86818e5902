//! Report rendering

pub mod report_writer;

pub use report_writer::{format_summary, format_summary_json, write_summary, ReportFormat};
