use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Precondition error: {0}")]
    PreconditionError(String),
}
