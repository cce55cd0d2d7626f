//! HR self-service portal core
//!
//! UI-agnostic core of the portal demo: a single-document store mirrored
//! into a local key-value database, a hash router with role-gated
//! navigation guards, and the session flow that ties them together.
//!
//! Presentation layers bind through the render-callback and notifier
//! interfaces on [`Router`]; the core never touches a widget. Destructive
//! actions go through the two-step [`Confirmations`] protocol instead of
//! blocking dialogs.

pub mod auth;
pub mod confirm;
pub mod logger;
pub mod notify;
pub mod paths;
pub mod router;
pub mod storage;
pub mod store;

// Re-exports
pub use auth::{AuthManager, Session};
pub use confirm::{Confirmations, PendingAction};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use paths::PortalPaths;
pub use router::{GuardDecision, Route, Router, Transition};
pub use storage::{PortalStorage, StorageError, StorageResult};
pub use store::Store;
