use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed questions document: {0}")]
    MalformedQuestions(#[source] serde_json::Error),

    #[error("malformed scoring logic document: {0}")]
    MalformedScoringLogic(#[source] serde_json::Error),

    #[error("malformed interpretation rules document: {0}")]
    MalformedRules(String),

    #[error("invalid survey options format: {0}")]
    InvalidOptions(String),
}
