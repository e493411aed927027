/// Line scanning and filtering of a record file.
pub mod record_file;
pub use record_file::{Matching, RecordFile, SourceError, matching, parse_line};
