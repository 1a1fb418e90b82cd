//! Role directory
//!
//! In-memory list of the firm's roles. It opens editors over its records and
//! receives their saves through [`DirectorySession`].

use crate::catalog::CapabilityCatalog;
use crate::editor::{EditorHost, RoleDraft, RoleEditor};
use crate::error::{DirectoryError, DirectoryResult};
use crate::rules;
use shared::models::{Action, ModuleId, RoleColor, RolePayload, RoleSummary};
use std::collections::BTreeSet;
use std::sync::Arc;

/// A listed role together with its saved definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRecord {
    pub summary: RoleSummary,
    pub definition: RolePayload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Default,
    Custom,
}

impl RoleFilter {
    fn matches(self, role: &RoleSummary) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Default => role.is_default,
            RoleFilter::Custom => !role.is_default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleStats {
    pub total: usize,
    pub default: usize,
    pub custom: usize,
    pub total_users: u32,
}

struct StockRole {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    color: RoleColor,
    is_default: bool,
    user_count: u32,
    modules: &'static [ModuleId],
    /// Actions withheld on every subsection (with everything that implies them)
    withheld: &'static [Action],
    access_all_clients: bool,
}

const STOCK_ROLES: &[StockRole] = &[
    StockRole {
        id: "owner",
        name: shared::models::OWNER_ADMIN_ROLE,
        description: "Full access to all features and settings",
        color: RoleColor::Purple,
        is_default: true,
        user_count: 1,
        modules: &ModuleId::ALL,
        withheld: &[],
        access_all_clients: true,
    },
    StockRole {
        id: "cpa",
        name: "CPA / Partner",
        description: "Senior accountant with broad access",
        color: RoleColor::Blue,
        is_default: true,
        user_count: 3,
        modules: &ModuleId::ALL,
        withheld: &[],
        access_all_clients: true,
    },
    StockRole {
        id: "manager",
        name: "Manager",
        description: "Team manager with client oversight",
        color: RoleColor::Green,
        is_default: true,
        user_count: 2,
        modules: &[
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
        ],
        withheld: &[],
        access_all_clients: true,
    },
    StockRole {
        id: "staff",
        name: "Staff Accountant",
        description: "Standard team member with limited access",
        color: RoleColor::Gray,
        is_default: false,
        user_count: 5,
        modules: &[
            ModuleId::Dashboard,
            ModuleId::Clients,
            ModuleId::DocumentCenter,
            ModuleId::Projects,
            ModuleId::Tasks,
            ModuleId::Calendar,
            ModuleId::Email,
            ModuleId::Texting,
        ],
        withheld: &[Action::Delete, Action::Manage],
        access_all_clients: false,
    },
    StockRole {
        id: "bookkeeper",
        name: "Bookkeeper",
        description: "Financial record keeping and basic client access",
        color: RoleColor::Yellow,
        is_default: false,
        user_count: 2,
        modules: &[
            ModuleId::Dashboard,
            ModuleId::Clients,
            ModuleId::DocumentCenter,
            ModuleId::Billing,
        ],
        withheld: &[Action::Delete],
        access_all_clients: false,
    },
];

impl StockRole {
    fn record(&self, catalog: &CapabilityCatalog) -> RoleRecord {
        let mut draft = RoleDraft::blank(catalog, self.access_all_clients);
        draft.name = self.name.to_string();
        draft.description = self.description.to_string();
        draft.color = self.color;
        draft.enabled_modules = self.modules.iter().copied().collect();

        let withheld: BTreeSet<Action> = self
            .withheld
            .iter()
            .flat_map(|action| rules::revoke_closure(*action))
            .collect();
        for actions in draft.permissions.values_mut() {
            actions.retain(|a| !withheld.contains(a));
        }

        RoleRecord {
            summary: RoleSummary {
                id: self.id.to_string(),
                name: self.name.to_string(),
                description: self.description.to_string(),
                color: self.color.as_str().to_string(),
                is_default: self.is_default,
                user_count: self.user_count,
            },
            definition: draft.to_payload(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoleDirectory {
    catalog: Arc<CapabilityCatalog>,
    roles: Vec<RoleRecord>,
}

impl RoleDirectory {
    pub fn new(catalog: Arc<CapabilityCatalog>) -> Self {
        Self {
            catalog,
            roles: Vec::new(),
        }
    }

    /// Directory holding the stock roles of a new firm
    pub fn with_defaults(catalog: Arc<CapabilityCatalog>) -> Self {
        let roles = STOCK_ROLES.iter().map(|stock| stock.record(&catalog)).collect();
        Self { catalog, roles }
    }

    pub fn catalog(&self) -> &Arc<CapabilityCatalog> {
        &self.catalog
    }

    pub fn roles(&self) -> &[RoleRecord] {
        &self.roles
    }

    pub fn get(&self, id: &str) -> Option<&RoleRecord> {
        self.roles.iter().find(|r| r.summary.id == id)
    }

    /// Names of every listed role, for duplicate-name checks
    pub fn names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.summary.name.clone()).collect()
    }

    pub fn filter(&self, filter: RoleFilter) -> Vec<&RoleRecord> {
        self.roles
            .iter()
            .filter(|r| filter.matches(&r.summary))
            .collect()
    }

    pub fn stats(&self) -> RoleStats {
        let default = self.roles.iter().filter(|r| r.summary.is_default).count();
        RoleStats {
            total: self.roles.len(),
            default,
            custom: self.roles.len() - default,
            total_users: self.roles.iter().map(|r| r.summary.user_count).sum(),
        }
    }

    // ==================== Editors ====================

    pub fn open_create(&self) -> RoleEditor {
        RoleEditor::create(Arc::clone(&self.catalog), self.names())
    }

    pub fn open_edit(&self, id: &str) -> DirectoryResult<RoleEditor> {
        let record = self.require(id)?;
        Ok(RoleEditor::from_payload(
            Arc::clone(&self.catalog),
            &record.summary,
            &record.definition,
            self.names(),
        ))
    }

    /// Create-mode editor seeded from an existing role
    pub fn open_based_on(&self, id: &str) -> DirectoryResult<RoleEditor> {
        let record = self.require(id)?;
        Ok(RoleEditor::based_on(
            Arc::clone(&self.catalog),
            &record.definition,
            self.names(),
        ))
    }

    /// Host for one editor: `None` creates a role, `Some(id)` updates it
    pub fn session(&mut self, role_id: Option<&str>) -> DirectorySession<'_> {
        DirectorySession {
            directory: self,
            role_id: role_id.map(str::to_string),
            saved_id: None,
            cancelled: false,
        }
    }

    pub fn delete(&mut self, id: &str) -> DirectoryResult<RoleRecord> {
        let index = self
            .roles
            .iter()
            .position(|r| r.summary.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;

        let summary = &self.roles[index].summary;
        if summary.is_owner_admin() {
            return Err(DirectoryError::OwnerAdmin);
        }
        if summary.is_default {
            return Err(DirectoryError::ProtectedRole(summary.name.clone()));
        }

        let record = self.roles.remove(index);
        tracing::info!(role_id = %id, name = %record.summary.name, "Role deleted");
        Ok(record)
    }

    fn require(&self, id: &str) -> DirectoryResult<&RoleRecord> {
        self.get(id).ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    fn insert(&mut self, payload: RolePayload) -> String {
        let id = format!("custom-{}", uuid::Uuid::new_v4());
        tracing::info!(role_id = %id, name = %payload.name, "Role created");
        self.roles.push(RoleRecord {
            summary: RoleSummary {
                id: id.clone(),
                name: payload.name.clone(),
                description: payload.description.clone(),
                color: payload.color.as_str().to_string(),
                is_default: false,
                user_count: 0,
            },
            definition: payload,
        });
        id
    }

    fn update(&mut self, id: &str, payload: RolePayload) -> bool {
        let Some(record) = self.roles.iter_mut().find(|r| r.summary.id == id) else {
            tracing::warn!(role_id = %id, "Saved role is no longer listed");
            return false;
        };
        record.summary.name = payload.name.clone();
        record.summary.description = payload.description.clone();
        record.summary.color = payload.color.as_str().to_string();
        record.definition = payload;
        tracing::info!(role_id = %id, name = %record.summary.name, "Role updated");
        true
    }
}

/// [`EditorHost`] that writes a finished editor back into the directory
pub struct DirectorySession<'a> {
    directory: &'a mut RoleDirectory,
    role_id: Option<String>,
    saved_id: Option<String>,
    cancelled: bool,
}

impl DirectorySession<'_> {
    /// Id of the created or updated role after a save
    pub fn saved_id(&self) -> Option<&str> {
        self.saved_id.as_deref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl EditorHost for DirectorySession<'_> {
    fn on_save(&mut self, role: RolePayload) {
        self.saved_id = match &self.role_id {
            Some(id) => self.directory.update(id, role).then(|| id.clone()),
            None => Some(self.directory.insert(role)),
        };
    }

    fn on_cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> RoleDirectory {
        RoleDirectory::with_defaults(Arc::new(CapabilityCatalog::builtin()))
    }

    #[test]
    fn test_stock_roles() {
        let directory = directory();
        assert_eq!(
            directory.names(),
            vec!["Owner/Admin", "CPA / Partner", "Manager", "Staff Accountant", "Bookkeeper"]
        );
        assert_eq!(
            directory.stats(),
            RoleStats {
                total: 5,
                default: 3,
                custom: 2,
                total_users: 13,
            }
        );
        assert_eq!(directory.filter(RoleFilter::Custom).len(), 2);
        assert_eq!(directory.filter(RoleFilter::All).len(), 5);
    }

    #[test]
    fn test_stock_definitions_respect_implications() {
        let directory = directory();
        let catalog = directory.catalog().clone();
        for record in directory.roles() {
            for (id, actions) in &record.definition.permissions {
                let set = actions.iter().copied().collect();
                let allowed = &catalog.subsection(id).unwrap().actions;
                assert!(rules::is_closed(&set, allowed), "{} / {id}", record.summary.name);
            }
        }

        let staff = &directory.get("staff").unwrap().definition;
        assert_eq!(
            staff.permissions["client-teams"],
            vec![Action::View, Action::Create, Action::Edit]
        );
        assert!(!staff.modules.settings_enabled);
        assert!(!staff.access_all_clients);
    }

    #[test]
    fn test_delete_protections() {
        let mut directory = directory();
        assert_eq!(directory.delete("owner"), Err(DirectoryError::OwnerAdmin));
        assert_eq!(
            directory.delete("manager"),
            Err(DirectoryError::ProtectedRole("Manager".to_string()))
        );
        assert_eq!(
            directory.delete("ghost"),
            Err(DirectoryError::NotFound("ghost".to_string()))
        );

        let removed = directory.delete("bookkeeper").unwrap();
        assert_eq!(removed.summary.name, "Bookkeeper");
        assert_eq!(directory.stats().total, 4);
    }

    #[test]
    fn test_open_edit_unknown_role() {
        let directory = directory();
        assert!(matches!(
            directory.open_edit("ghost"),
            Err(DirectoryError::NotFound(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_cancel_leaves_directory_untouched() {
        let mut directory = directory();
        let before = directory.roles().to_vec();
        let mut editor = directory.open_edit("staff").unwrap();
        editor.set_description("changed");

        let mut session = directory.session(Some("staff"));
        editor.cancel(&mut session);
        assert!(session.is_cancelled());
        assert_eq!(session.saved_id(), None);
        assert_eq!(directory.roles(), before.as_slice());
    }
}
