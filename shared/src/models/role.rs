//! Role Model

use super::access::{Action, AssignmentMethod, ClientAccessMode, ModuleId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Reserved system role with implicit full access; never editable
pub const OWNER_ADMIN_ROLE: &str = "Owner/Admin";

/// Role badge color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleColor {
    #[default]
    Purple,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl RoleColor {
    pub const ALL: [RoleColor; 7] = [
        RoleColor::Purple,
        RoleColor::Blue,
        RoleColor::Green,
        RoleColor::Yellow,
        RoleColor::Orange,
        RoleColor::Red,
        RoleColor::Gray,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RoleColor::Purple => "purple",
            RoleColor::Blue => "blue",
            RoleColor::Green => "green",
            RoleColor::Yellow => "yellow",
            RoleColor::Orange => "orange",
            RoleColor::Red => "red",
            RoleColor::Gray => "gray",
        }
    }

    /// Parse a host-supplied color, falling back to purple for anything unknown
    pub fn parse_or_default(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        match Self::ALL.into_iter().find(|c| c.as_str() == normalized) {
            Some(color) => color,
            None => {
                tracing::warn!(color = %value, "Unknown role color, using default");
                Self::default()
            }
        }
    }
}

impl fmt::Display for RoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role as listed by the host (input to the editor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Raw color string; unknown values fall back to purple
    #[serde(default)]
    pub color: String,
    /// System-protected role (cannot be deleted or renamed)
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub user_count: u32,
}

impl RoleSummary {
    pub fn is_owner_admin(&self) -> bool {
        self.name == OWNER_ADMIN_ROLE
    }
}

/// Per-module enabled flags, flattened into the payload as
/// `dashboardEnabled` … `settingsEnabled`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleFlags {
    pub dashboard_enabled: bool,
    pub clients_enabled: bool,
    pub document_center_enabled: bool,
    pub projects_enabled: bool,
    pub tasks_enabled: bool,
    pub billing_enabled: bool,
    pub signatures_enabled: bool,
    pub organizer_enabled: bool,
    pub calendar_enabled: bool,
    pub email_enabled: bool,
    pub texting_enabled: bool,
    pub settings_enabled: bool,
}

impl ModuleFlags {
    pub fn from_enabled(enabled: &BTreeSet<ModuleId>) -> Self {
        let mut flags = Self::default();
        for module in enabled {
            *flags.slot_mut(*module) = true;
        }
        flags
    }

    pub fn get(&self, module: ModuleId) -> bool {
        match module {
            ModuleId::Dashboard => self.dashboard_enabled,
            ModuleId::Clients => self.clients_enabled,
            ModuleId::DocumentCenter => self.document_center_enabled,
            ModuleId::Projects => self.projects_enabled,
            ModuleId::Tasks => self.tasks_enabled,
            ModuleId::Billing => self.billing_enabled,
            ModuleId::Signatures => self.signatures_enabled,
            ModuleId::Organizer => self.organizer_enabled,
            ModuleId::Calendar => self.calendar_enabled,
            ModuleId::Email => self.email_enabled,
            ModuleId::Texting => self.texting_enabled,
            ModuleId::Settings => self.settings_enabled,
        }
    }

    fn slot_mut(&mut self, module: ModuleId) -> &mut bool {
        match module {
            ModuleId::Dashboard => &mut self.dashboard_enabled,
            ModuleId::Clients => &mut self.clients_enabled,
            ModuleId::DocumentCenter => &mut self.document_center_enabled,
            ModuleId::Projects => &mut self.projects_enabled,
            ModuleId::Tasks => &mut self.tasks_enabled,
            ModuleId::Billing => &mut self.billing_enabled,
            ModuleId::Signatures => &mut self.signatures_enabled,
            ModuleId::Organizer => &mut self.organizer_enabled,
            ModuleId::Calendar => &mut self.calendar_enabled,
            ModuleId::Email => &mut self.email_enabled,
            ModuleId::Texting => &mut self.texting_enabled,
            ModuleId::Settings => &mut self.settings_enabled,
        }
    }

    pub fn enabled_modules(&self) -> BTreeSet<ModuleId> {
        ModuleId::ALL
            .into_iter()
            .filter(|m| self.get(*m))
            .collect()
    }

    pub fn enabled_count(&self) -> usize {
        ModuleId::ALL.into_iter().filter(|m| self.get(*m)).count()
    }
}

/// Serializable role definition handed to the host on save
///
/// Sets are emitted as sorted arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePayload {
    pub name: String,
    pub description: String,
    pub color: RoleColor,
    pub access_all_clients: bool,
    /// Subsection id -> granted actions
    pub permissions: BTreeMap<String, Vec<Action>>,
    #[serde(flatten)]
    pub modules: ModuleFlags,
    pub dashboard_modules: Vec<String>,
    pub client_access_mode: ClientAccessMode,
    pub assignment_method: Option<AssignmentMethod>,
    pub selected_client_groups: Vec<String>,
    pub selected_clients: Vec<String>,
}
