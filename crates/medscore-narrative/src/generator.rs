use std::future::Future;

use tracing::warn;

use crate::error::NarrativeError;
use crate::normalize::normalize_advice_text;

/// A language model that turns a system prompt and a user prompt into text.
pub trait TextGenerator: Send + Sync {
    fn generate_text(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, NarrativeError>> + Send;
}

/// Ask `generator` for a narrative and clean it up.
///
/// Returns `None` when no generator is configured, when the call fails, or
/// when nothing is left after disclaimer removal. Failures are logged and
/// never propagated: a narrative is always optional.
pub async fn narrate<G: TextGenerator>(
    generator: Option<&G>,
    system_prompt: &str,
    user_prompt: &str,
) -> Option<String> {
    let generator = generator?;

    match generator.generate_text(system_prompt, user_prompt).await {
        Ok(text) => {
            let text = normalize_advice_text(&text);
            if text.is_empty() {
                warn!("generated narrative was empty after normalization");
                None
            } else {
                Some(text)
            }
        }
        Err(e) => {
            warn!(error = %e, "narrative generation failed");
            None
        }
    }
}
