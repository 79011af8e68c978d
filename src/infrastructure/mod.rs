//! Infrastructure layer module
//!
//! This module contains the adapters and integrations behind the domain ports:
//! - Logger adapter, formatters and backends
//! - Configuration management
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
