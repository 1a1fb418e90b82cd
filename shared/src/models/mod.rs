//! Data models
//!
//! Shared between the role editor and its hosting application.
//! Identifiers of roles, subsections, client groups and clients are `String`s.

pub mod access;
pub mod role;

// Re-exports
pub use access::*;
pub use role::*;
