//! Unified error codes for the role editor
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 4xxx: Role editor errors
//! - 5xxx: Capability catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 2xxx: Permission ====================
    /// Cannot modify the owner/admin role
    CannotModifyAdmin = 2004,
    /// Cannot delete the owner/admin role
    CannotDeleteAdmin = 2005,
    /// Default roles are protected from deletion
    DefaultRoleProtected = 2006,

    // ==================== 4xxx: Role editor ====================
    /// Role name is required
    RoleNameRequired = 4001,
    /// Role name already exists
    RoleNameExists = 4002,
    /// At least one module must be enabled
    NoModulesEnabled = 4003,
    /// Subsection is not part of the catalog
    UnknownSubsection = 4004,
    /// Action is not allowed for the subsection
    ActionNotAllowed = 4005,
    /// Client group is not part of the catalog
    UnknownClientGroup = 4006,
    /// Client is not part of the catalog
    UnknownClient = 4007,
    /// Client selection requires assigned access mode
    ClientScopeNotAssigned = 4008,
    /// Dashboard widget is not part of the catalog
    UnknownDashboardWidget = 4009,
    /// Role not found
    RoleNotFound = 4101,

    // ==================== 5xxx: Catalog ====================
    /// Catalog failed validation
    CatalogInvalid = 5001,
    /// Catalog contains a duplicate identifier
    CatalogDuplicateId = 5002,
    /// Catalog references an unknown identifier
    CatalogUnknownReference = 5003,

    // ==================== 9xxx: System ====================
    /// File could not be read
    IoError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidFormat => "Invalid format",

            // Permission
            ErrorCode::CannotModifyAdmin => "Owner/Admin role cannot be modified",
            ErrorCode::CannotDeleteAdmin => "Owner/Admin role cannot be deleted",
            ErrorCode::DefaultRoleProtected => "Default roles cannot be deleted",

            // Role editor
            ErrorCode::RoleNameRequired => "Role name is required",
            ErrorCode::RoleNameExists => "Role name already exists",
            ErrorCode::NoModulesEnabled => "At least one module must be enabled",
            ErrorCode::UnknownSubsection => "Unknown permission subsection",
            ErrorCode::ActionNotAllowed => "Action is not allowed for this subsection",
            ErrorCode::UnknownClientGroup => "Unknown client group",
            ErrorCode::UnknownClient => "Unknown client",
            ErrorCode::ClientScopeNotAssigned => {
                "Client selection requires assigned client access"
            }
            ErrorCode::UnknownDashboardWidget => "Unknown dashboard widget",
            ErrorCode::RoleNotFound => "Role not found",

            // Catalog
            ErrorCode::CatalogInvalid => "Capability catalog is invalid",
            ErrorCode::CatalogDuplicateId => "Capability catalog contains a duplicate id",
            ErrorCode::CatalogUnknownReference => "Capability catalog references an unknown id",

            // System
            ErrorCode::IoError => "File could not be read",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            6 => Ok(ErrorCode::InvalidFormat),

            // Permission
            2004 => Ok(ErrorCode::CannotModifyAdmin),
            2005 => Ok(ErrorCode::CannotDeleteAdmin),
            2006 => Ok(ErrorCode::DefaultRoleProtected),

            // Role editor
            4001 => Ok(ErrorCode::RoleNameRequired),
            4002 => Ok(ErrorCode::RoleNameExists),
            4003 => Ok(ErrorCode::NoModulesEnabled),
            4004 => Ok(ErrorCode::UnknownSubsection),
            4005 => Ok(ErrorCode::ActionNotAllowed),
            4006 => Ok(ErrorCode::UnknownClientGroup),
            4007 => Ok(ErrorCode::UnknownClient),
            4008 => Ok(ErrorCode::ClientScopeNotAssigned),
            4009 => Ok(ErrorCode::UnknownDashboardWidget),
            4101 => Ok(ErrorCode::RoleNotFound),

            // Catalog
            5001 => Ok(ErrorCode::CatalogInvalid),
            5002 => Ok(ErrorCode::CatalogDuplicateId),
            5003 => Ok(ErrorCode::CatalogUnknownReference),

            // System
            9006 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
