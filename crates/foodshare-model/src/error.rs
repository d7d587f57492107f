use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
