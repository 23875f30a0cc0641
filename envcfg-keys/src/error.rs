//! Error types for `envcfg-keys`.

use thiserror::Error;

/// Errors surfaced while rendering reports.
#[derive(Debug, Error)]
pub enum KeysError {
    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
