use shared::error::{AppError, ErrorCode};
use shared::models::{Action, ModuleId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by editor operations that reference catalog entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("At least one module must be enabled")]
    NoModulesEnabled,

    #[error("Unknown subsection: {0}")]
    UnknownSubsection(String),

    #[error("Action {action} is not allowed for subsection {subsection}")]
    ActionNotAllowed { subsection: String, action: Action },

    #[error("Unknown client group: {0}")]
    UnknownClientGroup(String),

    #[error("Unknown client: {0}")]
    UnknownClient(String),

    #[error("Client selection requires assigned client access")]
    ClientScopeNotAssigned,

    #[error("Unknown dashboard widget: {0}")]
    UnknownDashboardWidget(String),
}

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        let message = err.to_string();
        match err {
            EditorError::NoModulesEnabled => AppError::new(ErrorCode::NoModulesEnabled),
            EditorError::UnknownSubsection(id) => {
                AppError::with_message(ErrorCode::UnknownSubsection, message)
                    .with_detail("subsection", id)
            }
            EditorError::ActionNotAllowed { subsection, action } => {
                AppError::with_message(ErrorCode::ActionNotAllowed, message)
                    .with_detail("subsection", subsection)
                    .with_detail("action", action.as_str())
            }
            EditorError::UnknownClientGroup(id) => {
                AppError::with_message(ErrorCode::UnknownClientGroup, message)
                    .with_detail("group", id)
            }
            EditorError::UnknownClient(id) => {
                AppError::with_message(ErrorCode::UnknownClient, message).with_detail("client", id)
            }
            EditorError::ClientScopeNotAssigned => AppError::new(ErrorCode::ClientScopeNotAssigned),
            EditorError::UnknownDashboardWidget(widget) => {
                AppError::with_message(ErrorCode::UnknownDashboardWidget, message)
                    .with_detail("widget", widget)
            }
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;

/// Errors raised while loading or validating a capability catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Module listed twice: {0}")]
    DuplicateModule(ModuleId),

    #[error("Subsection listed twice: {0}")]
    DuplicateSubsection(String),

    #[error("Subsection {0} allows no actions")]
    EmptySubsection(String),

    #[error("Subsection {0} does not allow view")]
    MissingView(String),

    #[error("Dashboard widget listed twice: {0}")]
    DuplicateWidget(String),

    #[error("Client group listed twice: {0}")]
    DuplicateGroup(String),

    #[error("Client listed twice: {0}")]
    DuplicateClient(String),

    #[error("Client {client} references unknown group {group}")]
    UnknownGroup { client: String, group: String },
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        let code = match &err {
            CatalogError::Io { .. } => ErrorCode::IoError,
            CatalogError::Parse(_) => ErrorCode::InvalidFormat,
            CatalogError::DuplicateModule(_)
            | CatalogError::DuplicateSubsection(_)
            | CatalogError::DuplicateWidget(_)
            | CatalogError::DuplicateGroup(_)
            | CatalogError::DuplicateClient(_) => ErrorCode::CatalogDuplicateId,
            CatalogError::EmptySubsection(_) | CatalogError::MissingView(_) => {
                ErrorCode::CatalogInvalid
            }
            CatalogError::UnknownGroup { .. } => ErrorCode::CatalogUnknownReference,
        };
        if code == ErrorCode::IoError {
            tracing::error!(error = %err, error_code = ?code, "Catalog file could not be read");
        }
        AppError::with_message(code, message)
    }
}

/// Errors raised by the role directory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Role not found: {0}")]
    NotFound(String),

    #[error("Owner/Admin role cannot be deleted")]
    OwnerAdmin,

    #[error("Default role cannot be deleted: {0}")]
    ProtectedRole(String),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        let message = err.to_string();
        match err {
            DirectoryError::NotFound(id) => {
                AppError::with_message(ErrorCode::RoleNotFound, message).with_detail("role", id)
            }
            DirectoryError::OwnerAdmin => AppError::new(ErrorCode::CannotDeleteAdmin),
            DirectoryError::ProtectedRole(name) => {
                AppError::with_message(ErrorCode::DefaultRoleProtected, message)
                    .with_detail("role", name)
            }
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
