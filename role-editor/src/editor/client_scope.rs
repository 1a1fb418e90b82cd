//! Client access scope of a role draft

use crate::catalog::{CapabilityCatalog, Client};
use crate::error::{EditorError, EditorResult};
use shared::models::{AssignmentMethod, ClientAccessMode};
use std::collections::BTreeSet;

/// Which clients the role can see, and how assigned clients were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientScope {
    access_all_clients: bool,
    mode: ClientAccessMode,
    assignment_method: Option<AssignmentMethod>,
    selected_groups: BTreeSet<String>,
    selected_clients: BTreeSet<String>,
}

impl ClientScope {
    pub fn new(access_all_clients: bool) -> Self {
        Self {
            access_all_clients,
            ..Self::default()
        }
    }

    pub fn from_parts(
        access_all_clients: bool,
        mode: ClientAccessMode,
        assignment_method: Option<AssignmentMethod>,
        selected_groups: BTreeSet<String>,
        selected_clients: BTreeSet<String>,
    ) -> Self {
        Self {
            access_all_clients,
            mode,
            assignment_method,
            selected_groups,
            selected_clients,
        }
    }

    pub fn access_all_clients(&self) -> bool {
        self.access_all_clients
    }

    pub fn mode(&self) -> ClientAccessMode {
        self.mode
    }

    pub fn assignment_method(&self) -> Option<AssignmentMethod> {
        self.assignment_method
    }

    pub fn selected_groups(&self) -> &BTreeSet<String> {
        &self.selected_groups
    }

    pub fn selected_clients(&self) -> &BTreeSet<String> {
        &self.selected_clients
    }

    pub fn toggle_access_all(&mut self) {
        self.access_all_clients = !self.access_all_clients;
    }

    /// Switching to `All` discards any partial assignment
    pub fn set_mode(&mut self, mode: ClientAccessMode) {
        self.mode = mode;
        if mode == ClientAccessMode::All {
            self.assignment_method = None;
            self.selected_groups.clear();
            self.selected_clients.clear();
        }
    }

    pub fn set_assignment_method(&mut self, method: AssignmentMethod) -> EditorResult<()> {
        self.require_assigned()?;
        self.assignment_method = Some(method);
        Ok(())
    }

    /// Select or deselect a client group; returns whether it is now selected
    ///
    /// Selecting unions the group's members into the client selection.
    /// Deselecting removes every member of that group, even a client that a
    /// still-selected group also covers.
    pub fn toggle_group(&mut self, catalog: &CapabilityCatalog, group: &str) -> EditorResult<bool> {
        self.require_assigned()?;
        if catalog.group(group).is_none() {
            return Err(EditorError::UnknownClientGroup(group.to_string()));
        }

        let members = catalog.group_members(group);
        if self.selected_groups.remove(group) {
            for client in &members {
                self.selected_clients.remove(client);
            }
            Ok(false)
        } else {
            self.selected_groups.insert(group.to_string());
            self.selected_clients.extend(members);
            Ok(true)
        }
    }

    /// Flip one client's membership; returns whether it is now selected
    pub fn toggle_client(&mut self, catalog: &CapabilityCatalog, client: &str) -> EditorResult<bool> {
        self.require_assigned()?;
        if catalog.client(client).is_none() {
            return Err(EditorError::UnknownClient(client.to_string()));
        }

        if self.selected_clients.remove(client) {
            Ok(false)
        } else {
            self.selected_clients.insert(client.to_string());
            Ok(true)
        }
    }

    /// Drop a client from the selection list
    pub fn remove_client(&mut self, client: &str) -> bool {
        self.selected_clients.remove(client)
    }

    pub fn clear_selection(&mut self) {
        self.selected_groups.clear();
        self.selected_clients.clear();
    }

    /// Catalog clients whose name contains `query` (case-insensitive)
    pub fn search_clients<'a>(&self, catalog: &'a CapabilityCatalog, query: &str) -> Vec<&'a Client> {
        let needle = query.to_lowercase();
        catalog
            .clients
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Selected clients whose name or any group name contains `query`
    pub fn search_selected_clients<'a>(
        &self,
        catalog: &'a CapabilityCatalog,
        query: &str,
    ) -> Vec<&'a Client> {
        let needle = query.to_lowercase();
        catalog
            .clients
            .iter()
            .filter(|c| self.selected_clients.contains(&c.id))
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.groups.iter().any(|g| {
                        catalog
                            .group(g)
                            .is_some_and(|group| group.name.to_lowercase().contains(&needle))
                    })
            })
            .collect()
    }

    fn require_assigned(&self) -> EditorResult<()> {
        if self.mode == ClientAccessMode::Assigned {
            Ok(())
        } else {
            Err(EditorError::ClientScopeNotAssigned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned() -> ClientScope {
        let mut scope = ClientScope::new(false);
        scope.set_mode(ClientAccessMode::Assigned);
        scope
    }

    fn ids(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_toggle_group_requires_assigned_mode() {
        let catalog = CapabilityCatalog::builtin();
        let mut scope = ClientScope::new(false);
        assert_eq!(
            scope.toggle_group(&catalog, "tax"),
            Err(EditorError::ClientScopeNotAssigned)
        );
        assert_eq!(
            scope.set_assignment_method(AssignmentMethod::Groups),
            Err(EditorError::ClientScopeNotAssigned)
        );
    }

    #[test]
    fn test_toggle_group_adds_and_removes_members() {
        let catalog = CapabilityCatalog::builtin();
        let mut scope = assigned();

        assert_eq!(scope.toggle_group(&catalog, "audit"), Ok(true));
        assert_eq!(scope.selected_clients(), &ids(&["3", "5", "7", "10", "15"]));
        assert_eq!(scope.selected_groups(), &ids(&["audit"]));

        assert_eq!(scope.toggle_group(&catalog, "audit"), Ok(false));
        assert!(scope.selected_clients().is_empty());
        assert!(scope.selected_groups().is_empty());
    }

    #[test]
    fn test_deselecting_group_drops_shared_members() {
        // Known quirk: client 5 is in both tax and audit but is removed
        // together with tax while audit stays selected.
        let catalog = CapabilityCatalog::builtin();
        let mut scope = assigned();
        scope.toggle_group(&catalog, "tax").unwrap();
        scope.toggle_group(&catalog, "audit").unwrap();
        assert!(scope.selected_clients().contains("5"));

        scope.toggle_group(&catalog, "tax").unwrap();
        assert_eq!(scope.selected_groups(), &ids(&["audit"]));
        assert!(!scope.selected_clients().contains("5"));
        assert_eq!(scope.selected_clients(), &ids(&["3", "7", "10", "15"]));
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = CapabilityCatalog::builtin();
        let mut scope = assigned();
        assert_eq!(
            scope.toggle_group(&catalog, "vip"),
            Err(EditorError::UnknownClientGroup("vip".to_string()))
        );
        assert_eq!(
            scope.toggle_client(&catalog, "99"),
            Err(EditorError::UnknownClient("99".to_string()))
        );
    }

    #[test]
    fn test_switching_to_all_discards_assignment() {
        let catalog = CapabilityCatalog::builtin();
        let mut scope = assigned();
        scope.set_assignment_method(AssignmentMethod::Individual).unwrap();
        scope.toggle_client(&catalog, "2").unwrap();
        scope.toggle_group(&catalog, "inactive").unwrap();

        scope.set_mode(ClientAccessMode::All);
        assert_eq!(scope.mode(), ClientAccessMode::All);
        assert_eq!(scope.assignment_method(), None);
        assert!(scope.selected_groups().is_empty());
        assert!(scope.selected_clients().is_empty());

        // switching back does not restore anything
        scope.set_mode(ClientAccessMode::Assigned);
        assert!(scope.selected_clients().is_empty());
    }

    #[test]
    fn test_individual_clients_mix_with_groups() {
        let catalog = CapabilityCatalog::builtin();
        let mut scope = assigned();
        scope.toggle_group(&catalog, "inactive").unwrap();
        assert_eq!(scope.toggle_client(&catalog, "6"), Ok(true));
        assert_eq!(scope.toggle_client(&catalog, "12"), Ok(false));
        assert_eq!(scope.selected_clients(), &ids(&["6"]));
        assert!(scope.remove_client("6"));
        assert!(!scope.remove_client("6"));
    }

    #[test]
    fn test_search() {
        let catalog = CapabilityCatalog::builtin();
        let mut scope = assigned();

        let found: Vec<_> = scope
            .search_clients(&catalog, "CORP")
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(found, vec!["1", "13"]);

        scope.toggle_client(&catalog, "4").unwrap();
        scope.toggle_client(&catalog, "6").unwrap();
        // "tax" matches Smith & Sons through the "Tax Clients" group name
        let found: Vec<_> = scope
            .search_selected_clients(&catalog, "tax")
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(found, vec!["4"]);
        assert_eq!(scope.search_selected_clients(&catalog, "").len(), 2);
    }

    #[test]
    fn test_clear_selection() {
        let catalog = CapabilityCatalog::builtin();
        let mut scope = assigned();
        scope.toggle_group(&catalog, "consulting").unwrap();
        scope.clear_selection();
        assert!(scope.selected_groups().is_empty());
        assert!(scope.selected_clients().is_empty());
        assert_eq!(scope.mode(), ClientAccessMode::Assigned);
    }
}
