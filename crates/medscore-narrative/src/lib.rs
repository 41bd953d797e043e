//! medscore-narrative
//!
//! Free-text narratives around a computed score: prompt assembly, model
//! invocation through Bedrock, templated fallbacks, and disclaimer cleanup.

pub mod advice;
pub mod bedrock;
pub mod error;
pub mod generator;
pub mod normalize;
pub mod prompts;
