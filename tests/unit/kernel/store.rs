use super::*;
use crate::kernel::services::ports::SessionState;
use crate::kernel::state::{InputDialogKind, PageTab, PendingAction, DELETE_CONFIRM_MESSAGE};
use crate::models::{
    add_child, AboutUs, Forest, FormField, NodeId, OrgField, OrgNode, SequentialIdSource,
};

fn new_store() -> Store {
    Store::new(AppState::new(32))
}

fn sample_doc() -> AboutUs {
    let child = OrgNode::new(NodeId::from("c1"), "Alice", "Engineer");
    let root = OrgNode::new(NodeId::from("r1"), "Bob", "CEO")
        .with_children(Forest::from_nodes([child]));
    let sibling = OrgNode::new(NodeId::from("r2"), "Carol", "CFO");
    AboutUs {
        company_name: "Acme".to_string(),
        organization_structure: Forest::from_nodes([root, sibling]),
        ..AboutUs::default()
    }
}

fn loaded_store() -> Store {
    let mut store = new_store();
    let _ = store.dispatch(Action::SessionResolved(SessionState::signed_in("admin")));
    let _ = store.dispatch(Action::ReloadDocument);
    let _ = store.dispatch(Action::DocumentLoaded(Some(sample_doc())));
    store
}

fn editing_store() -> Store {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::BeginEdit);
    store
}

fn type_text(store: &mut Store, text: &str) -> Vec<Effect> {
    let mut effects = Vec::new();
    for ch in text.chars() {
        effects.extend(store.dispatch(Action::InputDialogAppend(ch)).effects);
    }
    effects
}

#[test]
fn signed_out_session_redirects_to_login() {
    let mut store = new_store();
    let result = store.dispatch(Action::SessionResolved(SessionState::signed_out()));
    assert!(matches!(result.effects.as_slice(), [Effect::RedirectToLogin]));
}

#[test]
fn signed_in_session_clears_loading_screen() {
    let mut store = new_store();
    let result = store.dispatch(Action::SessionResolved(SessionState::signed_in("admin")));
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert!(!store.state().show_loading());
}

#[test]
fn reload_emits_load_once_while_in_flight() {
    let mut store = new_store();
    let first = store.dispatch(Action::ReloadDocument);
    assert!(matches!(first.effects.as_slice(), [Effect::LoadDocument]));
    assert!(store.state().document.loading);

    let second = store.dispatch(Action::ReloadDocument);
    assert!(second.effects.is_empty());
    assert!(!second.state_changed);
}

#[test]
fn absent_document_loads_as_empty_form() {
    let mut store = new_store();
    let _ = store.dispatch(Action::ReloadDocument);
    let _ = store.dispatch(Action::DocumentLoaded(None));

    assert!(!store.state().document.loading);
    assert!(store.state().document.saved.is_none());
    assert!(store.state().forest().is_empty());
    assert_eq!(store.state().form, AboutUs::default());
}

#[test]
fn load_failure_is_reported_in_status() {
    let mut store = new_store();
    let _ = store.dispatch(Action::ReloadDocument);
    let _ = store.dispatch(Action::DocumentLoadFailed {
        error: "disk on fire".to_string(),
    });

    let state = store.state();
    assert!(!state.document.loading);
    assert_eq!(state.document.error.as_deref(), Some("disk on fire"));
    assert!(state.ui.status.as_ref().is_some_and(|s| s.is_error));
}

#[test]
fn begin_edit_selects_first_chart_node() {
    let store = editing_store();
    assert!(store.state().ui.is_editing);
    assert_eq!(store.state().ui.org_selected, Some(NodeId::from("r1")));
}

#[test]
fn reload_is_ignored_while_editing() {
    let mut store = editing_store();
    let result = store.dispatch(Action::ReloadDocument);
    assert!(result.effects.is_empty());
    assert!(!store.state().document.loading);
}

#[test]
fn form_field_dialog_writes_trimmed_value() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::FieldEditSelected);
    assert!(matches!(
        store.state().ui.input_dialog.kind,
        Some(InputDialogKind::FormField(FormField::CompanyName))
    ));
    assert_eq!(store.state().ui.input_dialog.value, "Acme");

    let _ = type_text(&mut store, " Inc  ");
    let _ = store.dispatch(Action::InputDialogAccept);

    assert!(!store.state().ui.input_dialog.visible);
    assert_eq!(store.state().form.company_name, "Acme Inc");
    assert_eq!(
        store.state().document.saved.as_ref().map(|d| d.company_name.as_str()),
        Some("Acme")
    );
}

#[test]
fn invalid_email_keeps_dialog_open() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::SetActiveTab(PageTab::Contact));
    let _ = store.dispatch(Action::FieldEditSelected);
    let _ = type_text(&mut store, "nobody");
    let result = store.dispatch(Action::InputDialogAccept);

    assert!(result.state_changed);
    assert!(store.state().ui.input_dialog.visible);
    assert!(store.state().ui.input_dialog.error.is_some());
    assert!(store.state().form.email.is_empty());
}

#[test]
fn dialog_backspace_and_cursor_respect_char_boundaries() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::FormSetField {
        field: FormField::CompanyName,
        value: String::new(),
    });
    let _ = store.dispatch(Action::FieldEditSelected);
    let _ = type_text(&mut store, "añb");

    let _ = store.dispatch(Action::InputDialogCursorLeft);
    let _ = store.dispatch(Action::InputDialogBackspace);
    assert_eq!(store.state().ui.input_dialog.value, "ab");
    assert_eq!(store.state().ui.input_dialog.cursor, 1);

    let _ = store.dispatch(Action::InputDialogCursorRight);
    assert_eq!(store.state().ui.input_dialog.cursor, 2);
    let result = store.dispatch(Action::InputDialogCursorRight);
    assert!(!result.state_changed);
}

#[test]
fn org_field_dialog_emits_live_edits() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::OrgMoveSelection { delta: 1 });
    assert_eq!(store.state().ui.org_selected, Some(NodeId::from("c1")));

    let _ = store.dispatch(Action::OrgEditField {
        field: OrgField::Name,
    });
    assert_eq!(store.state().ui.input_dialog.value, "Alice");

    let effects = type_text(&mut store, "!");
    match effects.as_slice() {
        [Effect::OrgFieldEdited { id, field, value }] => {
            assert_eq!(id, &NodeId::from("c1"));
            assert_eq!(*field, OrgField::Name);
            assert_eq!(value, "Alice!");
        }
        other => panic!("unexpected effects: {other:?}"),
    }

    let accept = store.dispatch(Action::InputDialogAccept);
    assert!(accept.effects.is_empty());
    assert!(!store.state().ui.input_dialog.visible);
}

#[test]
fn delete_requires_confirmation() {
    let mut store = editing_store();
    let request = store.dispatch(Action::OrgRequestDelete);
    assert!(request.effects.is_empty());

    let dialog = &store.state().ui.confirm_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.message, DELETE_CONFIRM_MESSAGE);
    assert!(dialog.message.contains("subordinates"));
    assert_eq!(
        dialog.on_confirm,
        Some(PendingAction::RemoveOrgNode {
            id: NodeId::from("r1")
        })
    );

    let accepted = store.dispatch(Action::ConfirmDialogAccept);
    match accepted.effects.as_slice() {
        [Effect::RemoveOrgNode(confirmation)] => {
            assert_eq!(confirmation.id(), &NodeId::from("r1"));
        }
        other => panic!("unexpected effects: {other:?}"),
    }
    assert!(!store.state().ui.confirm_dialog.visible);
}

#[test]
fn declined_delete_dispatches_nothing() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::OrgRequestDelete);
    let result = store.dispatch(Action::ConfirmDialogCancel);
    assert!(result.effects.is_empty());
    assert!(!store.state().ui.confirm_dialog.visible);
    assert_eq!(store.state().forest().len(), 3);
}

#[test]
fn chart_change_replaces_forest_and_keeps_selection_visible() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::OrgMoveSelection { delta: 2 });
    assert_eq!(store.state().ui.org_selected, Some(NodeId::from("r2")));

    let without_r2 = crate::models::remove(store.state().forest(), &NodeId::from("r2"));
    let _ = store.dispatch(Action::OrgTreeChanged(without_r2.clone()));

    assert!(store.state().forest().ptr_eq(&without_r2));
    assert_eq!(store.state().ui.org_selected, Some(NodeId::from("c1")));
}

#[test]
fn chart_change_outside_edit_mode_is_ignored() {
    let mut store = loaded_store();
    let before = store.state().forest().clone();
    let result = store.dispatch(Action::OrgTreeChanged(Forest::new()));
    assert!(!result.state_changed);
    assert!(store.state().forest().ptr_eq(&before));
}

#[test]
fn cancel_restores_saved_document() {
    let mut store = editing_store();
    let mut ids = SequentialIdSource::new("n");
    let grown = add_child(store.state().forest(), &NodeId::from("r2"), &mut ids);
    let _ = store.dispatch(Action::OrgTreeChanged(grown));
    let _ = store.dispatch(Action::FormSetField {
        field: FormField::Vision,
        value: "Everywhere".to_string(),
    });

    let _ = store.dispatch(Action::CancelEdit);

    let state = store.state();
    assert!(!state.ui.is_editing);
    assert_eq!(Some(&state.form), state.document.saved.as_ref());
    assert_eq!(state.forest().len(), 3);
}

#[test]
fn cancel_without_loaded_document_resets_to_empty() {
    let mut store = new_store();
    let _ = store.dispatch(Action::SessionResolved(SessionState::signed_in("admin")));
    let _ = store.dispatch(Action::BeginEdit);
    let _ = store.dispatch(Action::FormSetField {
        field: FormField::CompanyName,
        value: "Draft".to_string(),
    });
    let _ = store.dispatch(Action::CancelEdit);
    assert_eq!(store.state().form, AboutUs::default());
}

#[test]
fn save_sends_form_and_success_leaves_edit_mode() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::FormSetField {
        field: FormField::Mission,
        value: "Ship it".to_string(),
    });

    let result = store.dispatch(Action::Save);
    let sent = match result.effects.as_slice() {
        [Effect::SaveDocument(doc)] => doc.clone(),
        other => panic!("unexpected effects: {other:?}"),
    };
    assert_eq!(sent.mission, "Ship it");
    assert!(store.state().document.saving);

    let again = store.dispatch(Action::Save);
    assert!(again.effects.is_empty());

    let _ = store.dispatch(Action::DocumentSaved(sent.clone()));
    let state = store.state();
    assert!(!state.ui.is_editing);
    assert!(!state.document.saving);
    assert_eq!(state.document.saved.as_ref(), Some(&sent));
    assert_eq!(state.ui.status.as_ref().map(|s| s.text.as_str()), Some("Saved"));
}

#[test]
fn save_failure_stays_in_edit_mode() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::Save);
    let _ = store.dispatch(Action::DocumentSaveFailed {
        error: "offline".to_string(),
    });

    let state = store.state();
    assert!(state.ui.is_editing);
    assert!(!state.document.saving);
    let status = state.ui.status.as_ref().expect("status");
    assert!(status.is_error);
    assert_eq!(status.text, crate::kernel::SAVE_FAILED_MESSAGE);
}

#[test]
fn save_outside_edit_mode_is_ignored() {
    let mut store = loaded_store();
    let result = store.dispatch(Action::Save);
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn field_selection_clamps_to_tab_fields() {
    let mut store = editing_store();
    let _ = store.dispatch(Action::FieldMoveSelection { delta: 10 });
    assert_eq!(store.state().ui.field_selected, 2);
    assert_eq!(store.state().ui.selected_field(), Some(FormField::LogoUrl));

    let _ = store.dispatch(Action::CycleTab { delta: 1 });
    assert_eq!(store.state().ui.active_tab, PageTab::Organization);
    assert_eq!(store.state().ui.field_selected, 0);
    let result = store.dispatch(Action::FieldMoveSelection { delta: 1 });
    assert!(!result.state_changed);
}
