//! # shobai I/O
//!
//! Line-oriented plumbing around the statistics core:
//!
//! - [`LineReader`] - Lazy, single-pass iteration over the lines of a file or reader
//! - [`ProgressTracker`] - Periodic progress/throughput/ETA reports through a [`ProgressSink`]
//! - [`ResourceLocator`] - Resolve resource names against search roots, falling back to paths
//! - [`corpus`] - Stopword list and IDF table loaders, line counting

pub mod error;
pub mod lines;
pub mod progress;
pub mod resource;
pub mod corpus;

pub use error::{Error, Result};
pub use lines::LineReader;
pub use progress::{ProgressReport, ProgressSink, ProgressTracker, TracingSink, DEFAULT_REPORT_EVERY};
pub use resource::{ResourceLocator, RESOURCE_PATH_VAR};
pub use corpus::{count_lines, read_idfs, read_stopwords};
