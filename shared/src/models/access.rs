//! Access Model
//!
//! Closed vocabularies of the capability model: top-level modules,
//! fine-grained actions and client access scope.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Top-level access area (12 fixed modules)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleId {
    Dashboard,
    Clients,
    DocumentCenter,
    Projects,
    Tasks,
    Billing,
    Signatures,
    Organizer,
    Calendar,
    Email,
    Texting,
    Settings,
}

impl ModuleId {
    /// All modules in display order
    pub const ALL: [ModuleId; 12] = [
        ModuleId::Dashboard,
        ModuleId::Clients,
        ModuleId::DocumentCenter,
        ModuleId::Projects,
        ModuleId::Tasks,
        ModuleId::Billing,
        ModuleId::Signatures,
        ModuleId::Organizer,
        ModuleId::Calendar,
        ModuleId::Email,
        ModuleId::Texting,
        ModuleId::Settings,
    ];

    /// Wire identifier (`documentCenter`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::Clients => "clients",
            ModuleId::DocumentCenter => "documentCenter",
            ModuleId::Projects => "projects",
            ModuleId::Tasks => "tasks",
            ModuleId::Billing => "billing",
            ModuleId::Signatures => "signatures",
            ModuleId::Organizer => "organizer",
            ModuleId::Calendar => "calendar",
            ModuleId::Email => "email",
            ModuleId::Texting => "texting",
            ModuleId::Settings => "settings",
        }
    }

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "Dashboard",
            ModuleId::Clients => "Clients",
            ModuleId::DocumentCenter => "Document Center",
            ModuleId::Projects => "Projects",
            ModuleId::Tasks => "Tasks",
            ModuleId::Billing => "Billing",
            ModuleId::Signatures => "Signatures",
            ModuleId::Organizer => "Organizer",
            ModuleId::Calendar => "Calendar",
            ModuleId::Email => "Email",
            ModuleId::Texting => "Texting",
            ModuleId::Settings => "Settings",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained permission action
///
/// Ordering follows the declaration order so action sets serialize as
/// `view, create, edit, delete, export, manage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Export,
    Manage,
}

/// Set of actions granted on one subsection
pub type ActionSet = BTreeSet<Action>;

impl Action {
    pub const ALL: [Action; 6] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Export,
        Action::Manage,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Manage => "manage",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// Which clients a role can see
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientAccessMode {
    #[default]
    All,
    Assigned,
}

/// How assigned clients are picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentMethod {
    Groups,
    Individual,
}
