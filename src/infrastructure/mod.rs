//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! file I/O, persistence, and logging.

pub mod logging;
pub mod persistence;

pub use logging::*;
pub use persistence::*;
