use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("input not found: {0}")]
    InputNotFound(String),

    #[error("input too large: {actual} characters exceeds limit of {limit}")]
    InputTooLarge { actual: usize, limit: usize },

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
