//! Error handling for the job fit analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobFitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Ranking was requested against a corpus with no documents.
    #[error("Cannot rank against an empty job description corpus")]
    EmptyCorpus,

    /// An alternative match was required but the corpus is too small to provide one.
    #[error("At least 2 job descriptions are required for an alternative match, found {found}")]
    InsufficientCorpus { found: usize },

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobFitError>;
