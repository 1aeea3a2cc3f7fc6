use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShockError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("schema error in {path}: {detail}")]
    Schema { path: String, detail: String },

    #[error("duplicate measure_id in {path}: {key}")]
    DuplicateKey { path: String, key: String },

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShockError>;
