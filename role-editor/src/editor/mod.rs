//! Role editor
//!
//! A two-step wizard over one [`RoleDraft`]:
//!
//! 1. Area selection: enable or disable the 12 modules.
//! 2. Permission configuration: per-subsection actions, dashboard widgets
//!    and client access scope for the enabled modules.
//!
//! The editor ends in exactly one terminal transition. [`RoleEditor::save`]
//! validates and hands a [`RolePayload`] to the host, and
//! [`RoleEditor::cancel`] discards the draft. Both consume the editor.
//!
//! The reserved Owner/Admin role opens read-only: every mutator is ignored
//! and the display accessors report full access.

mod client_scope;
mod draft;
mod host;
mod validation;

pub use client_scope::ClientScope;
pub use draft::RoleDraft;
pub use host::{CallbackHost, EditorHost};
pub use validation::{ValidationError, validate_role};

use crate::catalog::{CapabilityCatalog, Client};
use crate::error::{EditorError, EditorResult};
use crate::rules;
use shared::models::{
    Action, ActionSet, AssignmentMethod, ClientAccessMode, ModuleId, RoleColor, RolePayload,
    RoleSummary,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Wizard position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    AreaSelection,
    PermissionConfiguration,
}

/// Whether the draft creates a new role or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit {
        role_id: String,
        original_name: String,
        is_default: bool,
    },
}

#[derive(Debug)]
pub struct RoleEditor {
    catalog: Arc<CapabilityCatalog>,
    mode: EditorMode,
    read_only: bool,
    step: WizardStep,
    existing_roles: Vec<String>,
    draft: RoleDraft,
    validation_errors: Vec<ValidationError>,
}

/// A save that did not reach the host; the editor is handed back intact
#[derive(Debug)]
pub struct SaveRejected {
    pub editor: Box<RoleEditor>,
    pub errors: Vec<ValidationError>,
}

impl SaveRejected {
    pub fn into_editor(self) -> RoleEditor {
        *self.editor
    }
}

impl fmt::Display for SaveRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "role not saved: {}", messages.join("; "))
    }
}

impl std::error::Error for SaveRejected {}

impl RoleEditor {
    // ==================== Construction ====================

    /// Blank draft: every module enabled with its full action set
    pub fn create(catalog: Arc<CapabilityCatalog>, existing_roles: Vec<String>) -> Self {
        let draft = RoleDraft::blank(&catalog, false);
        tracing::debug!(existing = existing_roles.len(), "Opened role editor in create mode");
        Self::assemble(catalog, EditorMode::Create, false, existing_roles, draft)
    }

    /// Draft seeded from a listed role
    pub fn edit(
        catalog: Arc<CapabilityCatalog>,
        role: &RoleSummary,
        existing_roles: Vec<String>,
    ) -> Self {
        let read_only = role.is_owner_admin();
        let mut draft = RoleDraft::blank(&catalog, read_only);
        draft.name = role.name.clone();
        draft.description = role.description.clone();
        draft.color = RoleColor::parse_or_default(&role.color);
        tracing::debug!(role_id = %role.id, read_only, "Opened role editor in edit mode");
        Self::assemble(catalog, Self::edit_mode(role), read_only, existing_roles, draft)
    }

    /// Draft rehydrated from a previously saved payload
    pub fn from_payload(
        catalog: Arc<CapabilityCatalog>,
        role: &RoleSummary,
        payload: &RolePayload,
        existing_roles: Vec<String>,
    ) -> Self {
        let read_only = role.is_owner_admin();
        let mut draft = RoleDraft::from_payload(&catalog, payload);
        draft.name = role.name.clone();
        draft.mark_configured(&catalog);
        if read_only {
            draft.client_scope = ClientScope::new(true);
        }
        tracing::debug!(role_id = %role.id, read_only, "Opened role editor from saved definition");
        Self::assemble(catalog, Self::edit_mode(role), read_only, existing_roles, draft)
    }

    /// Create-mode draft copying another role's definition, with a blank name
    pub fn based_on(
        catalog: Arc<CapabilityCatalog>,
        base: &RolePayload,
        existing_roles: Vec<String>,
    ) -> Self {
        let mut draft = RoleDraft::from_payload(&catalog, base);
        draft.name.clear();
        draft.mark_configured(&catalog);
        tracing::debug!(base = %base.name, "Opened role editor based on existing role");
        Self::assemble(catalog, EditorMode::Create, false, existing_roles, draft)
    }

    fn edit_mode(role: &RoleSummary) -> EditorMode {
        EditorMode::Edit {
            role_id: role.id.clone(),
            original_name: role.name.clone(),
            is_default: role.is_default,
        }
    }

    fn assemble(
        catalog: Arc<CapabilityCatalog>,
        mode: EditorMode,
        read_only: bool,
        existing_roles: Vec<String>,
        draft: RoleDraft,
    ) -> Self {
        Self {
            catalog,
            mode,
            read_only,
            step: WizardStep::AreaSelection,
            existing_roles,
            draft,
            validation_errors: Vec::new(),
        }
    }

    // ==================== Inspection ====================

    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    /// Owner/Admin: view only
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Default roles keep their name
    pub fn is_protected(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { is_default: true, .. })
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Raw draft state, without the Owner/Admin display override
    pub fn draft(&self) -> &RoleDraft {
        &self.draft
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn description(&self) -> &str {
        &self.draft.description
    }

    pub fn color(&self) -> RoleColor {
        self.draft.color
    }

    /// Errors of the last rejected save
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }

    pub fn is_module_enabled(&self, module: ModuleId) -> bool {
        self.read_only || self.draft.enabled_modules.contains(&module)
    }

    pub fn enabled_module_count(&self) -> usize {
        if self.read_only {
            ModuleId::ALL.len()
        } else {
            self.draft.enabled_modules.len()
        }
    }

    /// Enabled modules in display order; only these are shown in step 2
    pub fn visible_modules(&self) -> Vec<ModuleId> {
        ModuleId::ALL
            .into_iter()
            .filter(|m| self.is_module_enabled(*m))
            .collect()
    }

    pub fn has_permission(&self, subsection: &str, action: Action) -> bool {
        if self.read_only {
            return self
                .catalog
                .subsection(subsection)
                .is_some_and(|s| s.actions.contains(&action));
        }
        self.draft
            .permissions
            .get(subsection)
            .is_some_and(|actions| actions.contains(&action))
    }

    /// Granted actions of a subsection (empty when never set)
    pub fn permissions_for(&self, subsection: &str) -> ActionSet {
        if self.read_only {
            return self
                .catalog
                .subsection(subsection)
                .map(|s| s.actions.clone())
                .unwrap_or_default();
        }
        self.draft.permissions.get(subsection).cloned().unwrap_or_default()
    }

    pub fn has_dashboard_module(&self, widget: &str) -> bool {
        if self.read_only {
            return self.catalog.dashboard_widgets.iter().any(|w| w == widget);
        }
        self.draft.dashboard_modules.contains(widget)
    }

    pub fn client_scope(&self) -> &ClientScope {
        &self.draft.client_scope
    }

    pub fn access_all_clients(&self) -> bool {
        self.read_only || self.draft.client_scope.access_all_clients()
    }

    pub fn search_clients(&self, query: &str) -> Vec<&Client> {
        self.draft.client_scope.search_clients(&self.catalog, query)
    }

    pub fn search_selected_clients(&self, query: &str) -> Vec<&Client> {
        self.draft
            .client_scope
            .search_selected_clients(&self.catalog, query)
    }

    /// Serialized snapshot of the current draft
    pub fn to_payload(&self) -> RolePayload {
        self.draft.to_payload()
    }

    // ==================== Wizard ====================

    /// Step 1 -> step 2; blocked while no module is enabled
    pub fn next_step(&mut self) -> EditorResult<()> {
        if self.step == WizardStep::PermissionConfiguration {
            return Ok(());
        }
        if self.enabled_module_count() == 0 {
            tracing::debug!("Blocked permission step: no modules enabled");
            return Err(EditorError::NoModulesEnabled);
        }
        self.step = WizardStep::PermissionConfiguration;
        tracing::debug!(modules = self.enabled_module_count(), "Moved to permission configuration");
        Ok(())
    }

    /// Step 2 -> step 1; keeps every edit
    pub fn previous_step(&mut self) {
        self.step = WizardStep::AreaSelection;
    }

    pub fn can_advance(&self) -> bool {
        self.enabled_module_count() > 0
    }

    // ==================== Role details ====================

    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.ignored("set_name") {
            return;
        }
        if self.is_protected() {
            tracing::debug!("Ignored rename of default role");
            return;
        }
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        if self.ignored("set_description") {
            return;
        }
        self.draft.description = description.into();
    }

    pub fn set_color(&mut self, color: RoleColor) {
        if self.ignored("set_color") {
            return;
        }
        self.draft.color = color;
    }

    // ==================== Modules ====================

    pub fn toggle_module(&mut self, module: ModuleId) {
        if self.ignored("toggle_module") {
            return;
        }
        if self.draft.enabled_modules.remove(&module) {
            tracing::debug!(module = %module, "Disabled module");
        } else {
            self.draft.enabled_modules.insert(module);
            let populated = self.draft.populate_if_new(&self.catalog, module);
            tracing::debug!(module = %module, populated, "Enabled module");
        }
    }

    pub fn set_all_modules(&mut self, enabled: bool) {
        if self.ignored("set_all_modules") {
            return;
        }
        if enabled {
            for module in ModuleId::ALL {
                self.draft.enabled_modules.insert(module);
                self.draft.populate_if_new(&self.catalog, module);
            }
        } else {
            self.draft.enabled_modules.clear();
        }
        tracing::debug!(enabled, "Set all modules");
    }

    // ==================== Permissions ====================

    /// Click one action button; applies the implication rules
    pub fn toggle_permission(&mut self, subsection: &str, action: Action) -> EditorResult<()> {
        if self.ignored("toggle_permission") {
            return Ok(());
        }
        let allowed = self.allowed_actions(subsection)?;
        if !allowed.contains(&action) {
            return Err(EditorError::ActionNotAllowed {
                subsection: subsection.to_string(),
                action,
            });
        }

        let current = self.draft.permissions.get(subsection).cloned().unwrap_or_default();
        let next = rules::apply_toggle(&current, action, &allowed);
        tracing::debug!(subsection, %action, ?next, "Toggled permission");
        self.draft.permissions.insert(subsection.to_string(), next);
        Ok(())
    }

    /// Grant every allowed action on each listed subsection
    pub fn select_all_permissions(&mut self, subsections: &[&str]) -> EditorResult<()> {
        if self.ignored("select_all_permissions") {
            return Ok(());
        }
        let mut full = BTreeMap::new();
        for id in subsections {
            full.insert(id.to_string(), self.allowed_actions(id)?);
        }
        self.select_all_permissions_with(subsections, &full)
    }

    /// Set each listed subsection to the given set directly (missing -> empty)
    pub fn select_all_permissions_with(
        &mut self,
        subsections: &[&str],
        actions_by_id: &BTreeMap<String, ActionSet>,
    ) -> EditorResult<()> {
        if self.ignored("select_all_permissions") {
            return Ok(());
        }
        let mut updates = Vec::with_capacity(subsections.len());
        for id in subsections {
            let allowed = self.allowed_actions(id)?;
            let actions = actions_by_id.get(*id).cloned().unwrap_or_default();
            if let Some(action) = actions.iter().find(|a| !allowed.contains(*a)) {
                return Err(EditorError::ActionNotAllowed {
                    subsection: id.to_string(),
                    action: *action,
                });
            }
            updates.push((id.to_string(), actions));
        }
        tracing::debug!(count = updates.len(), "Bulk-set permissions");
        self.draft.permissions.extend(updates);
        Ok(())
    }

    pub fn deselect_all_permissions(&mut self, subsections: &[&str]) -> EditorResult<()> {
        if self.ignored("deselect_all_permissions") {
            return Ok(());
        }
        for id in subsections {
            self.allowed_actions(id)?;
        }
        for id in subsections {
            self.draft.permissions.insert(id.to_string(), ActionSet::new());
        }
        tracing::debug!(count = subsections.len(), "Cleared permissions");
        Ok(())
    }

    /// "Select All" of one module card
    pub fn select_module_permissions(&mut self, module: ModuleId) -> EditorResult<()> {
        let catalog = Arc::clone(&self.catalog);
        let ids = catalog.subsection_ids(module);
        self.select_all_permissions(&ids)
    }

    /// "Deselect All" of one module card
    pub fn deselect_module_permissions(&mut self, module: ModuleId) -> EditorResult<()> {
        let catalog = Arc::clone(&self.catalog);
        let ids = catalog.subsection_ids(module);
        self.deselect_all_permissions(&ids)
    }

    fn allowed_actions(&self, subsection: &str) -> EditorResult<ActionSet> {
        self.catalog
            .subsection(subsection)
            .map(|s| s.actions.clone())
            .ok_or_else(|| EditorError::UnknownSubsection(subsection.to_string()))
    }

    // ==================== Dashboard widgets ====================

    pub fn toggle_dashboard_module(&mut self, widget: &str) -> EditorResult<()> {
        if self.ignored("toggle_dashboard_module") {
            return Ok(());
        }
        if !self.catalog.dashboard_widgets.iter().any(|w| w == widget) {
            return Err(EditorError::UnknownDashboardWidget(widget.to_string()));
        }
        if !self.draft.dashboard_modules.remove(widget) {
            self.draft.dashboard_modules.insert(widget.to_string());
        }
        Ok(())
    }

    pub fn select_all_dashboard(&mut self) {
        if self.ignored("select_all_dashboard") {
            return;
        }
        self.draft.dashboard_modules = self.catalog.dashboard_widgets.iter().cloned().collect();
    }

    pub fn deselect_all_dashboard(&mut self) {
        if self.ignored("deselect_all_dashboard") {
            return;
        }
        self.draft.dashboard_modules.clear();
    }

    // ==================== Client scope ====================

    pub fn toggle_access_all_clients(&mut self) {
        if self.ignored("toggle_access_all_clients") {
            return;
        }
        self.draft.client_scope.toggle_access_all();
    }

    pub fn set_client_access_mode(&mut self, mode: ClientAccessMode) {
        if self.ignored("set_client_access_mode") {
            return;
        }
        self.draft.client_scope.set_mode(mode);
        tracing::debug!(?mode, "Set client access mode");
    }

    pub fn set_assignment_method(&mut self, method: AssignmentMethod) -> EditorResult<()> {
        if self.ignored("set_assignment_method") {
            return Ok(());
        }
        self.draft.client_scope.set_assignment_method(method)
    }

    /// Returns whether the group is selected afterwards
    pub fn toggle_client_group(&mut self, group: &str) -> EditorResult<bool> {
        if self.ignored("toggle_client_group") {
            return Ok(self.draft.client_scope.selected_groups().contains(group));
        }
        let selected = self.draft.client_scope.toggle_group(&self.catalog, group)?;
        tracing::debug!(group, selected, "Toggled client group");
        Ok(selected)
    }

    /// Returns whether the client is selected afterwards
    pub fn toggle_individual_client(&mut self, client: &str) -> EditorResult<bool> {
        if self.ignored("toggle_individual_client") {
            return Ok(self.draft.client_scope.selected_clients().contains(client));
        }
        self.draft.client_scope.toggle_client(&self.catalog, client)
    }

    pub fn remove_selected_client(&mut self, client: &str) -> bool {
        if self.ignored("remove_selected_client") {
            return false;
        }
        self.draft.client_scope.remove_client(client)
    }

    pub fn clear_client_selection(&mut self) {
        if self.ignored("clear_client_selection") {
            return;
        }
        self.draft.client_scope.clear_selection();
    }

    // ==================== Validation & terminal transitions ====================

    pub fn validate(&self) -> Vec<ValidationError> {
        let original_name = match &self.mode {
            EditorMode::Edit { original_name, .. } => Some(original_name.as_str()),
            EditorMode::Create => None,
        };
        validate_role(
            &self.draft.name,
            original_name,
            &self.existing_roles,
            self.draft.enabled_modules.len(),
        )
    }

    /// Validate and hand the payload to the host
    ///
    /// On rejection nothing is sent and the editor comes back inside the error.
    pub fn save<H: EditorHost + ?Sized>(mut self, host: &mut H) -> Result<(), SaveRejected> {
        let errors = if self.read_only {
            vec![ValidationError::ReadOnlyRole]
        } else {
            self.validate()
        };

        if !errors.is_empty() {
            tracing::warn!(
                errors = ?errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "Role save rejected"
            );
            self.validation_errors = errors.clone();
            return Err(SaveRejected {
                editor: Box::new(self),
                errors,
            });
        }

        let payload = self.draft.to_payload();
        tracing::info!(
            role = %payload.name,
            edit = self.is_edit_mode(),
            modules = payload.modules.enabled_count(),
            "Role saved"
        );
        host.on_save(payload);
        Ok(())
    }

    /// Discard the draft
    pub fn cancel<H: EditorHost + ?Sized>(self, host: &mut H) {
        tracing::info!(edit = self.is_edit_mode(), "Role edit cancelled");
        host.on_cancel();
    }

    fn ignored(&self, operation: &str) -> bool {
        if self.read_only {
            tracing::warn!(operation, "Ignored change to read-only Owner/Admin role");
        }
        self.read_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> RoleEditor {
        RoleEditor::create(Arc::new(CapabilityCatalog::builtin()), vec!["Manager".to_string()])
    }

    fn summary(name: &str, is_default: bool) -> RoleSummary {
        RoleSummary {
            id: "role-1".to_string(),
            name: name.to_string(),
            description: "desc".to_string(),
            color: "blue".to_string(),
            is_default,
            user_count: 2,
        }
    }

    #[test]
    fn test_create_defaults() {
        let editor = editor();
        assert_eq!(editor.step(), WizardStep::AreaSelection);
        assert_eq!(editor.enabled_module_count(), 12);
        assert!(editor.has_permission("billing-reports", Action::Export));
        assert!(!editor.access_all_clients());
        assert_eq!(editor.client_scope().mode(), ClientAccessMode::All);
        assert!(!editor.is_edit_mode());
    }

    #[test]
    fn test_toggle_permission_rejects_unknown_ids() {
        let mut editor = editor();
        assert_eq!(
            editor.toggle_permission("payroll", Action::View),
            Err(EditorError::UnknownSubsection("payroll".to_string()))
        );
        assert_eq!(
            editor.toggle_permission("client-overview", Action::Edit),
            Err(EditorError::ActionNotAllowed {
                subsection: "client-overview".to_string(),
                action: Action::Edit,
            })
        );
    }

    #[test]
    fn test_module_toggle_keeps_inert_permissions() {
        let mut editor = editor();
        editor.deselect_all_permissions(&["tasks"]).unwrap();
        editor.toggle_permission("tasks", Action::Manage).unwrap();

        editor.toggle_module(ModuleId::Tasks);
        assert!(!editor.is_module_enabled(ModuleId::Tasks));
        assert!(!editor.visible_modules().contains(&ModuleId::Tasks));
        // entry survives while disabled
        assert_eq!(
            editor.permissions_for("tasks"),
            [Action::View, Action::Manage].into_iter().collect()
        );

        // re-enabling does not repopulate a configured module
        editor.toggle_module(ModuleId::Tasks);
        assert_eq!(
            editor.permissions_for("tasks"),
            [Action::View, Action::Manage].into_iter().collect()
        );
    }

    #[test]
    fn test_first_enable_populates_module() {
        let catalog = Arc::new(CapabilityCatalog::builtin());
        let base = RoleEditor::create(Arc::clone(&catalog), vec![]);
        let mut payload = base.to_payload();
        payload.modules.email_enabled = false;
        payload.permissions.remove("email");

        let mut editor = RoleEditor::based_on(catalog, &payload, vec![]);
        assert!(editor.permissions_for("email").is_empty());
        editor.toggle_module(ModuleId::Email);
        assert_eq!(
            editor.permissions_for("email"),
            [Action::View, Action::Create, Action::Manage].into_iter().collect()
        );
    }

    #[test]
    fn test_bulk_select_with_rejects_disallowed_actions() {
        let mut editor = editor();
        let mut actions = BTreeMap::new();
        actions.insert(
            "billing-reports".to_string(),
            [Action::View, Action::Delete].into_iter().collect(),
        );
        let before = editor.draft().clone();
        assert!(editor
            .select_all_permissions_with(&["billing-reports"], &actions)
            .is_err());
        assert_eq!(editor.draft(), &before);
    }

    #[test]
    fn test_bulk_select_missing_entry_clears() {
        let mut editor = editor();
        editor
            .select_all_permissions_with(&["billing-reports"], &BTreeMap::new())
            .unwrap();
        assert!(editor.permissions_for("billing-reports").is_empty());
    }

    #[test]
    fn test_module_select_and_deselect() {
        let mut editor = editor();
        editor.deselect_module_permissions(ModuleId::Settings).unwrap();
        for id in ["settings-company", "settings-team", "settings-roles"] {
            assert!(editor.permissions_for(id).is_empty());
        }
        editor.select_module_permissions(ModuleId::Settings).unwrap();
        assert_eq!(
            editor.permissions_for("settings-roles"),
            [Action::View, Action::Manage].into_iter().collect()
        );
    }

    #[test]
    fn test_dashboard_widgets() {
        let mut editor = editor();
        editor.deselect_all_dashboard();
        assert!(!editor.has_dashboard_module("Leads"));
        editor.toggle_dashboard_module("Leads").unwrap();
        assert!(editor.has_dashboard_module("Leads"));
        editor.toggle_dashboard_module("Leads").unwrap();
        assert!(!editor.has_dashboard_module("Leads"));
        editor.select_all_dashboard();
        assert_eq!(editor.draft().dashboard_modules.len(), 11);
    }

    #[test]
    fn test_unknown_dashboard_widget_is_rejected() {
        let mut editor = editor();
        assert_eq!(
            editor.toggle_dashboard_module("Payroll Summary"),
            Err(EditorError::UnknownDashboardWidget("Payroll Summary".to_string()))
        );
        assert_eq!(editor.draft().dashboard_modules.len(), 11);
        assert!(!editor.has_dashboard_module("Payroll Summary"));
    }

    #[test]
    fn test_read_only_ignores_unknown_ids() {
        let catalog = Arc::new(CapabilityCatalog::builtin());
        let mut editor = RoleEditor::edit(catalog, &summary("Owner/Admin", true), vec![]);
        let before = editor.draft().clone();

        assert_eq!(editor.toggle_permission("payroll", Action::View), Ok(()));
        assert_eq!(editor.toggle_permission("client-overview", Action::Edit), Ok(()));
        assert_eq!(editor.select_all_permissions(&["payroll"]), Ok(()));
        assert_eq!(
            editor.select_all_permissions_with(&["payroll"], &BTreeMap::new()),
            Ok(())
        );
        assert_eq!(editor.deselect_all_permissions(&["payroll"]), Ok(()));
        assert_eq!(editor.toggle_dashboard_module("Payroll Summary"), Ok(()));
        assert_eq!(editor.draft(), &before);
    }

    #[test]
    fn test_default_role_keeps_name() {
        let catalog = Arc::new(CapabilityCatalog::builtin());
        let mut editor = RoleEditor::edit(catalog, &summary("Manager", true), vec![]);
        assert!(editor.is_protected());
        editor.set_name("Boss");
        editor.set_description("Runs the office");
        assert_eq!(editor.name(), "Manager");
        assert_eq!(editor.description(), "Runs the office");
        assert_eq!(editor.color(), RoleColor::Blue);
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let catalog = Arc::new(CapabilityCatalog::builtin());
        let mut role = summary("Intern", false);
        role.color = "chartreuse".to_string();
        let editor = RoleEditor::edit(catalog, &role, vec![]);
        assert_eq!(editor.color(), RoleColor::Purple);
    }

    #[test]
    fn test_wizard_back_and_forth_is_lossless() {
        let mut editor = editor();
        editor.toggle_module(ModuleId::Texting);
        editor.next_step().unwrap();
        editor.toggle_permission("billing-invoices", Action::Delete).unwrap();
        let snapshot = editor.draft().clone();

        editor.previous_step();
        assert_eq!(editor.step(), WizardStep::AreaSelection);
        editor.next_step().unwrap();
        assert_eq!(editor.step(), WizardStep::PermissionConfiguration);
        assert_eq!(editor.draft(), &snapshot);
    }

    #[test]
    fn test_save_rejected_keeps_editor() {
        let mut editor = editor();
        editor.set_name("manager");
        editor.set_all_modules(false);

        let mut saved = Vec::new();
        let mut host = CallbackHost::new(|p: RolePayload| saved.push(p), || {});
        let rejected = editor.save(&mut host).unwrap_err();
        assert_eq!(
            rejected.errors,
            vec![
                ValidationError::DuplicateName("manager".to_string()),
                ValidationError::NoModulesEnabled,
            ]
        );
        assert_eq!(
            rejected.to_string(),
            "role not saved: A role named \"manager\" already exists; At least one module must be enabled"
        );

        let editor = rejected.into_editor();
        assert_eq!(editor.validation_errors().len(), 2);
        assert_eq!(editor.name(), "manager");
        drop(host);
        assert!(saved.is_empty());
    }
}
