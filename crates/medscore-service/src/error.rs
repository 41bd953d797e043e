use medscore_instruments::error::ScoringError;
use medscore_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No template under the requested code or id. Callers map this to an
    /// "unknown instrument" response, not a server error.
    #[error("survey template not found: {0}")]
    TemplateNotFound(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
