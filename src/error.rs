use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The document is not well-formed XML.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// The assembled record cannot be persisted.
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
