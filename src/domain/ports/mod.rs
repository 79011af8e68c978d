//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces on either side of the adapter:
//! - Logger / InfoLogger: the generic contract callers program against
//! - Backend / Formatter: the capabilities a leveled backend must provide
//!
//! These traits keep callers independent of the concrete backend.

pub mod backend;
pub mod logger;

pub use backend::{Backend, Formatter};
pub use logger::{InfoLogger, Logger};
