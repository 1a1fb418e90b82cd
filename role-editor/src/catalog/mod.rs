//! Capability catalog
//!
//! The fixed vocabulary an editor works against: modules and their
//! subsections with allowed actions, dashboard widgets, client groups and
//! clients. Editors receive the catalog by `Arc`, so hosts and tests can
//! inject any catalog instead of the builtin one.

mod builtin;

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use shared::models::{ActionSet, ModuleId, RoleColor};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

/// A permission unit inside a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsectionSpec {
    pub id: String,
    pub name: String,
    /// Allowed actions; also the full set used when the module is auto-populated
    pub actions: ActionSet,
}

/// A top-level module with its subsections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSpec {
    pub id: ModuleId,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subsections: Vec<SubsectionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: RoleColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Ids of the groups this client belongs to
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityCatalog {
    pub modules: Vec<ModuleSpec>,
    #[serde(default)]
    pub dashboard_widgets: Vec<String>,
    #[serde(default)]
    pub client_groups: Vec<ClientGroup>,
    #[serde(default)]
    pub clients: Vec<Client>,
}

impl CapabilityCatalog {
    /// Parse and validate a catalog from JSON
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            modules = catalog.modules.len(),
            clients = catalog.clients.len(),
            "Loaded capability catalog"
        );
        Ok(catalog)
    }

    /// Check structural rules the editor relies on
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut modules = HashSet::new();
        let mut subsections = HashSet::new();
        for module in &self.modules {
            if !modules.insert(module.id) {
                return Err(CatalogError::DuplicateModule(module.id));
            }
            for sub in &module.subsections {
                if !subsections.insert(sub.id.as_str()) {
                    return Err(CatalogError::DuplicateSubsection(sub.id.clone()));
                }
                if sub.actions.is_empty() {
                    return Err(CatalogError::EmptySubsection(sub.id.clone()));
                }
                if !sub.actions.contains(&shared::models::Action::View) {
                    return Err(CatalogError::MissingView(sub.id.clone()));
                }
            }
        }

        let mut widgets = HashSet::new();
        for widget in &self.dashboard_widgets {
            if !widgets.insert(widget.as_str()) {
                return Err(CatalogError::DuplicateWidget(widget.clone()));
            }
        }

        let mut groups = HashSet::new();
        for group in &self.client_groups {
            if !groups.insert(group.id.as_str()) {
                return Err(CatalogError::DuplicateGroup(group.id.clone()));
            }
        }

        let mut clients = HashSet::new();
        for client in &self.clients {
            if !clients.insert(client.id.as_str()) {
                return Err(CatalogError::DuplicateClient(client.id.clone()));
            }
            if let Some(group) = client.groups.iter().find(|g| !groups.contains(g.as_str())) {
                return Err(CatalogError::UnknownGroup {
                    client: client.id.clone(),
                    group: group.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn module(&self, id: ModuleId) -> Option<&ModuleSpec> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn subsection(&self, id: &str) -> Option<&SubsectionSpec> {
        self.modules
            .iter()
            .flat_map(|m| m.subsections.iter())
            .find(|s| s.id == id)
    }

    pub fn module_of_subsection(&self, id: &str) -> Option<ModuleId> {
        self.modules
            .iter()
            .find(|m| m.subsections.iter().any(|s| s.id == id))
            .map(|m| m.id)
    }

    /// Subsection ids of a module in display order
    pub fn subsection_ids(&self, module: ModuleId) -> Vec<&str> {
        self.module(module)
            .map(|m| m.subsections.iter().map(|s| s.id.as_str()).collect())
            .unwrap_or_default()
    }

    /// Full allowed action set of every subsection of a module
    pub fn full_actions(&self, module: ModuleId) -> BTreeMap<String, ActionSet> {
        self.module(module)
            .map(|m| {
                m.subsections
                    .iter()
                    .map(|s| (s.id.clone(), s.actions.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn group(&self, id: &str) -> Option<&ClientGroup> {
        self.client_groups.iter().find(|g| g.id == id)
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Ids of every client that belongs to `group`
    pub fn group_members(&self, group: &str) -> BTreeSet<String> {
        self.clients
            .iter()
            .filter(|c| c.groups.iter().any(|g| g == group))
            .map(|c| c.id.clone())
            .collect()
    }

    pub fn group_size(&self, group: &str) -> usize {
        self.clients
            .iter()
            .filter(|c| c.groups.iter().any(|g| g == group))
            .count()
    }
}
