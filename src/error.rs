use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwipeKeyError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout Error: {0}")]
    Layout(String),

    #[error("Vocabulary Error: {0}")]
    Vocabulary(String),
}

pub type SkResult<T> = Result<T, SwipeKeyError>;
