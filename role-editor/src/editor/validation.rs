//! Save-time validation of a role draft

use shared::error::{AppError, ErrorCode};
use std::fmt;

/// A rule the draft violates; every violation is reported at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    DuplicateName(String),
    NoModulesEnabled,
    /// The reserved Owner/Admin role can only be viewed
    ReadOnlyRole,
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::NameRequired => ErrorCode::RoleNameRequired,
            ValidationError::DuplicateName(_) => ErrorCode::RoleNameExists,
            ValidationError::NoModulesEnabled => ErrorCode::NoModulesEnabled,
            ValidationError::ReadOnlyRole => ErrorCode::CannotModifyAdmin,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameRequired => f.write_str("Role name is required"),
            ValidationError::DuplicateName(name) => {
                write!(f, "A role named \"{name}\" already exists")
            }
            ValidationError::NoModulesEnabled => f.write_str("At least one module must be enabled"),
            ValidationError::ReadOnlyRole => f.write_str("Owner/Admin role cannot be modified"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            ValidationError::DuplicateName(name) => app.with_detail("name", name),
            _ => app,
        }
    }
}

/// Check name presence, name uniqueness and module count
///
/// Uniqueness is case-insensitive against `existing_roles`, skipping the
/// role's own name when editing.
pub fn validate_role(
    name: &str,
    original_name: Option<&str>,
    existing_roles: &[String],
    enabled_modules: usize,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::NameRequired);
    }

    let normalized = trimmed.to_lowercase();
    let duplicate = existing_roles
        .iter()
        .any(|existing| existing.to_lowercase() == normalized && Some(existing.as_str()) != original_name);
    if duplicate {
        errors.push(ValidationError::DuplicateName(trimmed.to_string()));
    }

    if enabled_modules == 0 {
        errors.push(ValidationError::NoModulesEnabled);
    }

    errors
}
