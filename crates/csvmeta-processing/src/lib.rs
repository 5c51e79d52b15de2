//! csvmeta processing pipeline
//!
//! [`EventHandler`] runs one invocation: read the event, extract metadata with
//! [`MetadataExtractor`], persist it, announce it, and answer with a
//! [`HandlerResponse`].

pub mod csv_scan;
pub mod error;
pub mod extractor;
pub mod handler;
pub mod response;

pub use csv_scan::{CsvScanner, ScanError, TableShape};
pub use error::{ExtractionError, PipelineError};
pub use extractor::MetadataExtractor;
pub use handler::EventHandler;
pub use response::HandlerResponse;
