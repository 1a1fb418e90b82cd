//! Role directory round trips through editor sessions

use role_editor::{CapabilityCatalog, DirectoryError, RoleDirectory, RoleFilter};
use shared::error::{AppError, ErrorCode};
use shared::models::{Action, ModuleId, RoleColor};
use std::sync::Arc;

fn directory() -> RoleDirectory {
    RoleDirectory::with_defaults(Arc::new(CapabilityCatalog::builtin()))
}

#[test]
fn test_create_role_from_scratch() {
    let mut directory = directory();
    let mut editor = directory.open_create();
    editor.set_name("Tax Preparer");
    editor.set_description("Seasonal tax staff");
    editor.set_color(RoleColor::Orange);
    editor.set_all_modules(false);
    editor.toggle_module(ModuleId::Clients);
    editor.toggle_module(ModuleId::DocumentCenter);
    editor.next_step().unwrap();

    let mut session = directory.session(None);
    editor.save(&mut session).unwrap();
    let id = session.saved_id().unwrap().to_string();
    assert!(id.starts_with("custom-"));

    let record = directory.get(&id).unwrap();
    assert_eq!(record.summary.name, "Tax Preparer");
    assert_eq!(record.summary.color, "orange");
    assert_eq!(record.summary.user_count, 0);
    assert!(!record.summary.is_default);
    assert_eq!(record.definition.modules.enabled_count(), 2);

    let stats = directory.stats();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.custom, 3);
    assert_eq!(directory.filter(RoleFilter::Custom).len(), 3);
}

#[test]
fn test_edit_updates_record_in_place() {
    let mut directory = directory();
    let mut editor = directory.open_edit("staff").unwrap();
    assert!(editor.is_edit_mode());
    assert!(!editor.is_module_enabled(ModuleId::Billing));

    editor.toggle_module(ModuleId::Billing);
    // the stored, previously inert grants come back unchanged
    assert!(!editor.has_permission("billing-invoices", Action::Delete));
    assert!(editor.has_permission("billing-invoices", Action::Export));
    editor.toggle_permission("billing-invoices", Action::Delete).unwrap();
    editor.set_name("Staff");

    let mut session = directory.session(Some("staff"));
    editor.save(&mut session).unwrap();
    assert_eq!(session.saved_id(), Some("staff"));

    let record = directory.get("staff").unwrap();
    assert_eq!(record.summary.name, "Staff");
    assert_eq!(record.summary.user_count, 5);
    assert!(record.definition.modules.billing_enabled);
    assert_eq!(
        record.definition.permissions["billing-invoices"],
        vec![
            Action::View,
            Action::Create,
            Action::Edit,
            Action::Delete,
            Action::Export
        ]
    );
    assert_eq!(directory.roles().len(), 5);
}

#[test]
fn test_default_role_name_is_locked() {
    let mut directory = directory();
    let mut editor = directory.open_edit("manager").unwrap();
    editor.set_name("Team Lead");
    editor.set_color(RoleColor::Red);

    let mut session = directory.session(Some("manager"));
    editor.save(&mut session).unwrap();

    let record = directory.get("manager").unwrap();
    assert_eq!(record.summary.name, "Manager");
    assert_eq!(record.summary.color, "red");
}

#[test]
fn test_duplicate_name_is_not_stored() {
    let mut directory = directory();
    let mut editor = directory.open_based_on("bookkeeper").unwrap();
    editor.set_name("cpa / partner");

    let mut session = directory.session(None);
    let rejected = editor.save(&mut session).unwrap_err();
    assert_eq!(session.saved_id(), None);
    assert_eq!(directory.roles().len(), 5);

    let err: AppError = rejected.errors[0].clone().into();
    assert_eq!(err.code, ErrorCode::RoleNameExists);
}

#[test]
fn test_owner_admin_cannot_be_saved_or_deleted() {
    let mut directory = directory();
    let editor = directory.open_edit("owner").unwrap();
    assert!(editor.is_read_only());

    let before = directory.get("owner").unwrap().clone();
    let mut session = directory.session(Some("owner"));
    assert!(editor.save(&mut session).is_err());
    assert_eq!(directory.get("owner"), Some(&before));

    let err: AppError = directory.delete("owner").unwrap_err().into();
    assert_eq!(err.code, ErrorCode::CannotDeleteAdmin);
}

#[test]
fn test_delete_custom_role() {
    let mut directory = directory();
    assert!(matches!(
        directory.delete("cpa"),
        Err(DirectoryError::ProtectedRole(name)) if name == "CPA / Partner"
    ));
    directory.delete("staff").unwrap();
    assert!(directory.get("staff").is_none());
    assert_eq!(directory.stats().total_users, 8);

    let err: AppError = directory.delete("staff").unwrap_err().into();
    assert_eq!(err.code, ErrorCode::RoleNotFound);
}
