use tracing::debug;

use super::{Action, AppState, Effect};

mod dialogs;
mod document;
mod form;
mod org;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        debug!(?action, "dispatch");
        match action {
            Action::SessionResolved(_)
            | Action::ReloadDocument
            | Action::DocumentLoaded(_)
            | Action::DocumentLoadFailed { .. }
            | Action::DocumentSaved(_)
            | Action::DocumentSaveFailed { .. }
            | Action::BeginEdit
            | Action::CancelEdit
            | Action::Save => self.reduce_document_action(action),
            Action::SetActiveTab(_)
            | Action::CycleTab { .. }
            | Action::FieldMoveSelection { .. }
            | Action::FieldEditSelected
            | Action::FormSetField { .. }
            | Action::DismissStatus => self.reduce_form_action(action),
            Action::OrgMoveSelection { .. }
            | Action::OrgEditField { .. }
            | Action::OrgRequestDelete
            | Action::OrgTreeChanged(_) => self.reduce_org_action(action),
            Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel
            | Action::ConfirmDialogAccept
            | Action::ConfirmDialogCancel => self.reduce_dialog_action(action),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
