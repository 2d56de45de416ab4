use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("failed to load default content: {0}")]
    LoadFailed(String),
    #[error("failed to reset content: {0}")]
    ResetFailed(String),
    #[error("could not fetch default content: {0}")]
    Fetch(String),
    #[error("browser storage error: {0}")]
    Storage(String),
    #[error("invalid content json: {0}")]
    Json(#[from] serde_json::Error),
}
