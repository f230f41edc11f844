pub mod configs;
pub mod error;
pub mod experian;
pub mod ingest;
pub mod runtime;
pub mod sanitize;
pub mod server;
pub mod types;
pub mod xml_tree;

pub use error::IngestError;
pub use ingest::{ingest_report, parse_report};
