//! Stock catalog of the practice-management app

use super::{CapabilityCatalog, Client, ClientGroup, ModuleSpec, SubsectionSpec};
use shared::models::{Action, ModuleId, RoleColor};

use Action::{Create, Delete, Edit, Export, Manage, View};

/// Dashboard widgets, in display order
pub const DASHBOARD_WIDGETS: &[&str] = &[
    "Invoices Overview",
    "Client Activity",
    "Leads",
    "Client Overview",
    "My Tasks",
    "Project Tasks",
    "Messages",
    "Meetings",
    "Signed Documents",
    "Organizer",
    "Documents Overview",
];

const CLIENT_GROUPS: &[(&str, &str, RoleColor)] = &[
    ("active", "Active Clients", RoleColor::Green),
    ("tax", "Tax Clients", RoleColor::Blue),
    ("audit", "Audit Clients", RoleColor::Purple),
    ("consulting", "Consulting Clients", RoleColor::Orange),
    ("inactive", "Inactive Clients", RoleColor::Gray),
];

const CLIENTS: &[(&str, &str, &[&str])] = &[
    ("1", "Acme Corporation", &["active", "tax"]),
    ("2", "TechStart Inc", &["active", "consulting"]),
    ("3", "Global Ventures LLC", &["active", "audit"]),
    ("4", "Smith & Sons", &["tax"]),
    ("5", "Johnson Enterprises", &["active", "tax", "audit"]),
    ("6", "Williams Consulting", &["consulting"]),
    ("7", "Brown Industries", &["active", "audit"]),
    ("8", "Davis Holdings", &["tax"]),
    ("9", "Miller Group", &["active", "consulting"]),
    ("10", "Wilson & Co", &["audit"]),
    ("11", "Moore Financial", &["active", "tax"]),
    ("12", "Taylor Services", &["inactive"]),
    ("13", "Anderson Corp", &["active", "tax"]),
    ("14", "Thomas Industries", &["consulting"]),
    ("15", "Jackson Retail", &["active", "audit"]),
];

fn sub(id: &str, name: &str, actions: &[Action]) -> SubsectionSpec {
    SubsectionSpec {
        id: id.to_string(),
        name: name.to_string(),
        actions: actions.iter().copied().collect(),
    }
}

fn module(id: ModuleId, description: &str, subsections: Vec<SubsectionSpec>) -> ModuleSpec {
    ModuleSpec {
        id,
        label: id.label().to_string(),
        description: description.to_string(),
        subsections,
    }
}

impl CapabilityCatalog {
    /// The firm's stock catalog
    pub fn builtin() -> Self {
        let modules = vec![
            module(ModuleId::Dashboard, "Dashboard modules", vec![]),
            module(
                ModuleId::Clients,
                "Client folders",
                vec![
                    sub("client-overview", "Overview/Snapshot", &[View]),
                    sub("client-demographics", "Demographics", &[View, Edit]),
                    sub("client-teams", "Teams", &[View, Create, Edit, Delete]),
                    sub("client-documents", "Documents", &[View, Create, Edit, Delete, Export]),
                ],
            ),
            module(
                ModuleId::DocumentCenter,
                "Documents",
                vec![sub("documents", "Document Actions", &[View, Create, Edit, Delete, Export])],
            ),
            module(
                ModuleId::Projects,
                "Project management",
                vec![
                    sub("project-overview", "Overview", &[View]),
                    sub("project-workflows", "Workflows", &[View, Create, Edit, Delete]),
                    sub("project-tasks", "Tasks", &[View, Create, Edit, Delete]),
                    sub("project-documents", "Documents", &[View, Create, Edit, Delete, Export]),
                    sub("project-team", "Team", &[View, Edit]),
                ],
            ),
            module(
                ModuleId::Tasks,
                "Task management",
                vec![sub("tasks", "Task Actions", &[View, Create, Edit, Delete, Manage])],
            ),
            module(
                ModuleId::Billing,
                "Invoices & payments",
                vec![
                    sub("billing-invoices", "Invoices", &[View, Create, Edit, Delete, Export]),
                    sub("billing-payments", "Payments", &[View, Create, Edit, Export]),
                    sub("billing-expenses", "Expenses", &[View, Create, Edit, Delete]),
                    sub("billing-reports", "Reports", &[View, Export]),
                ],
            ),
            module(
                ModuleId::Signatures,
                "Signature requests",
                vec![sub("signatures", "Signature Actions", &[View, Create, Delete, Export])],
            ),
            module(
                ModuleId::Organizer,
                "Tax organizers",
                vec![sub("organizer", "Organizer Actions", &[View, Create, Edit, Delete, Manage])],
            ),
            module(
                ModuleId::Calendar,
                "Scheduling",
                vec![sub("calendar", "Calendar Actions", &[View, Create, Edit, Delete])],
            ),
            module(
                ModuleId::Email,
                "Email communication",
                vec![sub("email", "Email Actions", &[View, Create, Manage])],
            ),
            module(
                ModuleId::Texting,
                "Text message communication",
                vec![sub("texting", "Texting Actions", &[View, Create])],
            ),
            module(
                ModuleId::Settings,
                "System settings",
                vec![
                    sub("settings-company", "Company Profile", &[View, Edit]),
                    sub("settings-team", "Team Management", &[View, Manage]),
                    sub("settings-roles", "Roles", &[View, Manage]),
                    sub("settings-billing", "Billing Settings", &[View, Edit]),
                    sub("settings-integrations", "Integrations", &[View, Manage]),
                ],
            ),
        ];

        Self {
            modules,
            dashboard_widgets: DASHBOARD_WIDGETS.iter().map(|w| w.to_string()).collect(),
            client_groups: CLIENT_GROUPS
                .iter()
                .map(|(id, name, color)| ClientGroup {
                    id: id.to_string(),
                    name: name.to_string(),
                    color: *color,
                })
                .collect(),
            clients: CLIENTS
                .iter()
                .map(|(id, name, groups)| Client {
                    id: id.to_string(),
                    name: name.to_string(),
                    groups: groups.iter().map(|g| g.to_string()).collect(),
                })
                .collect(),
        }
    }
}
