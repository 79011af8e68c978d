//! Domain layer for logbridge
//!
//! This module contains the logger contract, the backend capability
//! contract and the value types that flow between them.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{LogError, LogResult};
