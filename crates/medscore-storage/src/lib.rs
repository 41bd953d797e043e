//! medscore-storage
//!
//! Persistence for templates, responses, patients, and advice. The store
//! traits are the seam the service layer depends on; [`s3::S3Store`] is
//! the deployed backend and [`memory::MemoryStore`] backs tests and local
//! runs.

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;
