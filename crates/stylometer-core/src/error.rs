use thiserror::Error;

#[derive(Error, Debug)]
pub enum StylometerError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("No model available: run analyze() before querying")]
    NotAnalyzed,

    #[error("Unknown author: '{0}'")]
    UnknownAuthor(String),
}

pub type SmResult<T> = Result<T, StylometerError>;
