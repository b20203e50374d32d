//! Report file and console output

pub mod console;
pub mod report_writer;

pub use report_writer::{read_duplicates_json, write_duplicates_json, DuplicateRecord};
