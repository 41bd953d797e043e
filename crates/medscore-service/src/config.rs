use std::env;
use std::path::PathBuf;

use medscore_narrative::error::NarrativeError;
use medscore_narrative::prompts::PromptSet;

pub const DEFAULT_BUCKET: &str = "medscore";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bucket: String,
    pub region: String,
    /// Bedrock model for narratives. `None` disables generation and every
    /// narrative uses the templated fallback.
    pub model_id: Option<String>,
    /// JSON file overriding the default prompts.
    pub prompts_path: Option<PathBuf>,
}

impl ServiceConfig {
    /// Read `MEDSCORE_BUCKET`, `AWS_REGION`, `MEDSCORE_MODEL_ID` and
    /// `MEDSCORE_PROMPTS_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            bucket: var("MEDSCORE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: var("MEDSCORE_MODEL_ID"),
            prompts_path: var("MEDSCORE_PROMPTS_PATH").map(PathBuf::from),
        }
    }

    /// The configured prompts, or the defaults when no file is set.
    pub fn prompts(&self) -> Result<PromptSet, NarrativeError> {
        match &self.prompts_path {
            Some(path) => PromptSet::load(path),
            None => Ok(PromptSet::default()),
        }
    }
}
