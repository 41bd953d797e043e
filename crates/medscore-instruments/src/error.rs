use medscore_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The template's questions document could not be read. Nothing was
    /// scored.
    #[error("malformed template '{code}': {source}")]
    MalformedTemplate {
        code: String,
        #[source]
        source: CoreError,
    },
}
