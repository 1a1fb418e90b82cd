//! Role capability editor
//!
//! Authoring of firm roles as a bundle of module access, per-subsection
//! actions, dashboard widgets and client scope.
//!
//! - [`catalog`]: the vocabulary modules, subsections and clients come from
//! - [`rules`]: action implication rules applied on every toggle
//! - [`editor`]: the two-step wizard that produces a [`shared::models::RolePayload`]
//! - [`directory`]: the in-memory role list editors are opened from

pub mod catalog;
pub mod config;
pub mod directory;
pub mod editor;
pub mod error;
pub mod logger;
pub mod rules;

pub use catalog::CapabilityCatalog;
pub use config::EditorConfig;
pub use directory::{DirectorySession, RoleDirectory, RoleFilter, RoleRecord, RoleStats};
pub use editor::{
    CallbackHost, ClientScope, EditorHost, EditorMode, RoleDraft, RoleEditor, SaveRejected,
    ValidationError, WizardStep,
};
pub use error::{CatalogError, DirectoryError, EditorError};
