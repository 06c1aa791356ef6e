#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
pub mod records;
pub mod report;

pub use catalog::{Catalog, RecordError, StorageError, load_request, parse_request};
pub use records::Request;
pub use report::{FilterReport, WorkoutReport};
