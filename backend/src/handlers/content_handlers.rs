use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("default content file {0} does not exist")]
    Missing(PathBuf),
    #[error("failed to read default content: {0}")]
    Io(#[from] std::io::Error),
    #[error("default content is not valid JSON: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("default content must be a JSON object")]
    NotAnObject,
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let status = match self {
            ContentError::Missing(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

/// Reads the default document from disk. The file is read on every call so it
/// can be edited without restarting the server.
pub async fn load_default_content(path: &Path) -> Result<Value, ContentError> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ContentError::Missing(path.to_path_buf()),
        _ => ContentError::Io(e),
    })?;
    let document: Value = serde_json::from_str(&text)?;
    if !document.is_object() {
        return Err(ContentError::NotAnObject);
    }
    Ok(document)
}

pub async fn get_default_content(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ContentError> {
    let document = load_default_content(&state.config.content_file)
        .await
        .map_err(|e| {
            tracing::error!("Serving default content failed: {}", e);
            e
        })?;
    Ok(Json(document))
}
