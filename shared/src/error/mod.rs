//! Unified error system for the role editor
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 4xxx: Role editor errors
//! - 5xxx: Capability catalog errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::RoleNotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::RoleNameExists, "A role named \"Manager\" already exists");
//!
//! // Create an error with details
//! let err = AppError::new(ErrorCode::UnknownSubsection)
//!     .with_detail("subsection", "payroll");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;
