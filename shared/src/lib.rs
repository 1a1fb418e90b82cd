//! Shared types for the role editor
//!
//! Role models, the access vocabulary (modules, actions, client scope) and
//! the unified error types used by the editor and by the hosting application.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCode};
