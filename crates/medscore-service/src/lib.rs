//! medscore-service
//!
//! Orchestration over the scoring engine: template lookup, submission,
//! patient advice, audit events, and environment configuration.

pub mod audit;
pub mod config;
pub mod error;
pub mod service;
