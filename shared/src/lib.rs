//! Shared types for the HR portal core
//!
//! Common types used across the portal crates: the data models that make
//! up the persisted document, the payload structs the presentation layer
//! submits, and the unified error system.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
