//! medscore-core
//!
//! Pure domain types and object key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the scoring
//! engine, the stores, and the service layer.

pub mod document;
pub mod error;
pub mod models;
pub mod s3_keys;
