//! Error handling for the CV parser

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Phrase matcher error: {0}")]
    Matcher(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("Entity model output error: {0}")]
    ModelOutput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CvParserError>;
