//! In-memory role draft and its payload conversion

use super::client_scope::ClientScope;
use crate::catalog::CapabilityCatalog;
use crate::rules;
use shared::models::{ActionSet, ModuleFlags, ModuleId, RoleColor, RolePayload};
use std::collections::{BTreeMap, BTreeSet};

/// The unsaved role being authored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub color: RoleColor,
    pub enabled_modules: BTreeSet<ModuleId>,
    /// Modules that have been auto-populated or hydrated at least once
    pub configured_modules: BTreeSet<ModuleId>,
    pub dashboard_modules: BTreeSet<String>,
    /// Subsection id -> granted actions; entries of disabled modules stay but are inert
    pub permissions: BTreeMap<String, ActionSet>,
    pub client_scope: ClientScope,
}

impl RoleDraft {
    /// Blank draft with every module enabled and populated
    pub fn blank(catalog: &CapabilityCatalog, access_all_clients: bool) -> Self {
        let mut draft = Self {
            name: String::new(),
            description: String::new(),
            color: RoleColor::default(),
            enabled_modules: ModuleId::ALL.into_iter().collect(),
            configured_modules: BTreeSet::new(),
            dashboard_modules: BTreeSet::new(),
            permissions: BTreeMap::new(),
            client_scope: ClientScope::new(access_all_clients),
        };
        for module in ModuleId::ALL {
            draft.populate_if_new(catalog, module);
        }
        draft
    }

    /// Rebuild a draft from a saved payload
    ///
    /// Host input is checked against the catalog: unknown subsections,
    /// widgets, groups and clients are dropped, and every action set is
    /// narrowed to its allowed actions and closed under the implication rules.
    pub fn from_payload(catalog: &CapabilityCatalog, payload: &RolePayload) -> Self {
        let mut permissions = BTreeMap::new();
        for (id, actions) in &payload.permissions {
            let Some(subsection) = catalog.subsection(id) else {
                tracing::warn!(subsection = %id, "Dropped unknown subsection from role payload");
                continue;
            };
            let given: ActionSet = actions.iter().copied().collect();
            let repaired = rules::repair(&given, &subsection.actions);
            if repaired != given {
                tracing::warn!(subsection = %id, ?given, ?repaired, "Repaired action set from role payload");
            }
            permissions.insert(id.clone(), repaired);
        }

        let dashboard_modules = known(&payload.dashboard_modules, "dashboard widget", |w| {
            catalog.dashboard_widgets.iter().any(|known| known == w)
        });
        let selected_groups = known(&payload.selected_client_groups, "client group", |g| {
            catalog.group(g).is_some()
        });
        let selected_clients = known(&payload.selected_clients, "client", |c| {
            catalog.client(c).is_some()
        });

        Self {
            name: payload.name.clone(),
            description: payload.description.clone(),
            color: payload.color,
            enabled_modules: payload.modules.enabled_modules(),
            configured_modules: BTreeSet::new(),
            dashboard_modules,
            permissions,
            client_scope: ClientScope::from_parts(
                payload.access_all_clients,
                payload.client_access_mode,
                payload.assignment_method,
                selected_groups,
                selected_clients,
            ),
        }
    }

    /// Mark modules that already carry state as configured
    pub fn mark_configured(&mut self, catalog: &CapabilityCatalog) {
        for module in ModuleId::ALL {
            let has_state = if module == ModuleId::Dashboard {
                !self.dashboard_modules.is_empty()
            } else {
                catalog
                    .subsection_ids(module)
                    .iter()
                    .any(|id| self.permissions.contains_key(*id))
            };
            if has_state || self.enabled_modules.contains(&module) {
                self.configured_modules.insert(module);
            }
        }
    }

    /// First-time population of a module's defaults
    ///
    /// Returns false when the module was configured before.
    pub fn populate_if_new(&mut self, catalog: &CapabilityCatalog, module: ModuleId) -> bool {
        if !self.configured_modules.insert(module) {
            return false;
        }

        if module == ModuleId::Dashboard {
            if self.dashboard_modules.is_empty() {
                self.dashboard_modules = catalog.dashboard_widgets.iter().cloned().collect();
            }
        } else {
            for (id, actions) in catalog.full_actions(module) {
                let entry = self.permissions.entry(id).or_default();
                if entry.is_empty() {
                    *entry = actions;
                }
            }
        }
        true
    }

    pub fn to_payload(&self) -> RolePayload {
        RolePayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            color: self.color,
            access_all_clients: self.client_scope.access_all_clients(),
            permissions: self
                .permissions
                .iter()
                .map(|(id, actions)| (id.clone(), actions.iter().copied().collect()))
                .collect(),
            modules: ModuleFlags::from_enabled(&self.enabled_modules),
            dashboard_modules: self.dashboard_modules.iter().cloned().collect(),
            client_access_mode: self.client_scope.mode(),
            assignment_method: self.client_scope.assignment_method(),
            selected_client_groups: self.client_scope.selected_groups().iter().cloned().collect(),
            selected_clients: self.client_scope.selected_clients().iter().cloned().collect(),
        }
    }
}

fn known(ids: &[String], kind: &str, is_known: impl Fn(&str) -> bool) -> BTreeSet<String> {
    ids.iter()
        .filter(|id| {
            let keep = is_known(id.as_str());
            if !keep {
                tracing::warn!(id = %id, kind, "Dropped unknown id from role payload");
            }
            keep
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Action;

    #[test]
    fn test_blank_draft_is_fully_populated() {
        let catalog = CapabilityCatalog::builtin();
        let draft = RoleDraft::blank(&catalog, false);

        assert_eq!(draft.enabled_modules.len(), 12);
        assert_eq!(draft.configured_modules.len(), 12);
        assert_eq!(draft.dashboard_modules.len(), 11);
        assert_eq!(draft.permissions.len(), 25);
        assert_eq!(
            draft.permissions["signatures"],
            [Action::View, Action::Create, Action::Delete, Action::Export]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn test_populate_only_once() {
        let catalog = CapabilityCatalog::builtin();
        let mut draft = RoleDraft::blank(&catalog, false);
        draft.permissions.insert("tasks".to_string(), ActionSet::new());
        assert!(!draft.populate_if_new(&catalog, ModuleId::Tasks));
        assert!(draft.permissions["tasks"].is_empty());
    }

    #[test]
    fn test_payload_trims_text() {
        let catalog = CapabilityCatalog::builtin();
        let mut draft = RoleDraft::blank(&catalog, false);
        draft.name = "  Reviewer ".to_string();
        draft.description = " Reads things\n".to_string();
        let payload = draft.to_payload();
        assert_eq!(payload.name, "Reviewer");
        assert_eq!(payload.description, "Reads things");
        assert_eq!(payload.modules.enabled_count(), 12);
    }

    #[test]
    fn test_from_payload_restores_state() {
        let catalog = CapabilityCatalog::builtin();
        let mut draft = RoleDraft::blank(&catalog, true);
        draft.enabled_modules.remove(&ModuleId::Email);
        draft.dashboard_modules.remove("Leads");

        let mut restored = RoleDraft::from_payload(&catalog, &draft.to_payload());
        restored.mark_configured(&catalog);

        assert_eq!(restored.permissions, draft.permissions);
        assert_eq!(restored.enabled_modules, draft.enabled_modules);
        assert_eq!(restored.dashboard_modules, draft.dashboard_modules);
        assert_eq!(restored.client_scope, draft.client_scope);
        // email is disabled but its permission entry survived, so it counts as configured
        assert!(restored.configured_modules.contains(&ModuleId::Email));
    }

    #[test]
    fn test_from_payload_repairs_host_input() {
        let catalog = CapabilityCatalog::builtin();
        let mut payload = RoleDraft::blank(&catalog, false).to_payload();
        payload.permissions.insert("tasks".to_string(), vec![Action::Delete]);
        payload
            .permissions
            .insert("client-overview".to_string(), vec![Action::View, Action::Manage]);
        payload
            .permissions
            .insert("no-such-subsection".to_string(), vec![Action::View]);
        payload.dashboard_modules.push("Payroll".to_string());
        payload.selected_client_groups = vec!["tax".to_string(), "vip".to_string()];
        payload.selected_clients = vec!["1".to_string(), "99".to_string()];

        let draft = RoleDraft::from_payload(&catalog, &payload);
        assert_eq!(
            draft.permissions["tasks"],
            [Action::View, Action::Edit, Action::Delete].into_iter().collect()
        );
        assert_eq!(draft.permissions["client-overview"], [Action::View].into_iter().collect());
        assert!(!draft.permissions.contains_key("no-such-subsection"));
        assert_eq!(draft.dashboard_modules.len(), 11);
        assert!(!draft.dashboard_modules.contains("Payroll"));
        assert_eq!(draft.client_scope.selected_groups().len(), 1);
        assert_eq!(draft.client_scope.selected_clients().len(), 1);

        let out = draft.to_payload();
        assert!(!out.permissions.contains_key("no-such-subsection"));
        for (id, actions) in &out.permissions {
            let set = actions.iter().copied().collect();
            assert!(rules::is_closed(&set, &catalog.subsection(id).unwrap().actions), "{id}");
        }
    }
}
