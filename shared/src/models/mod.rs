//! Data models
//!
//! Shared between the portal core and whatever presentation layer is bound
//! to it. All collections live inside [`Document`], the single persisted
//! aggregate; the `*Create`/`*Update` structs are the form payloads.

pub mod account;
pub mod department;
pub mod document;
pub mod employee;
pub mod request;

// Re-exports
pub use account::*;
pub use department::*;
pub use document::*;
pub use employee::*;
pub use request::*;
