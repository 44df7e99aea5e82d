use crate::kernel::state::{DeleteConfirmation, InputDialogKind, PendingAction};
use crate::kernel::{Action, Effect};
use crate::models::FormField;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_dialog_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return DispatchResult::unchanged();
                }

                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                self.live_org_edit()
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return DispatchResult::unchanged();
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                self.live_org_edit()
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return DispatchResult::unchanged();
                }

                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != dialog.cursor;
                dialog.cursor = prev;
                DispatchResult::changed(changed)
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor >= dialog.value.len() {
                    return DispatchResult::unchanged();
                }

                let next = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                let changed = next != dialog.cursor;
                dialog.cursor = next;
                DispatchResult::changed(changed)
            }
            Action::InputDialogAccept => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return DispatchResult::unchanged();
                }

                let Some(InputDialogKind::FormField(field)) = dialog.kind.clone() else {
                    // Chart fields were applied on every keystroke.
                    dialog.reset();
                    return DispatchResult::changed(true);
                };

                let value = dialog.value.trim().to_string();
                if field == FormField::Email && !value.is_empty() && !value.contains('@') {
                    let prev = dialog.error.replace("Invalid email address".to_string());
                    return DispatchResult::changed(prev.as_deref() != dialog.error.as_deref());
                }

                dialog.reset();
                if self.state.ui.is_editing {
                    self.state.form.set_field(field, value);
                }
                DispatchResult::changed(true)
            }
            Action::InputDialogCancel => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return DispatchResult::unchanged();
                }
                dialog.reset();
                DispatchResult::changed(true)
            }
            Action::ConfirmDialogAccept => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return DispatchResult::unchanged();
                }
                let pending = dialog.on_confirm.take();
                dialog.reset();

                match pending {
                    Some(PendingAction::RemoveOrgNode { id }) if self.state.ui.is_editing => {
                        DispatchResult::effect(Effect::RemoveOrgNode(DeleteConfirmation::granted(
                            id,
                        )))
                    }
                    _ => DispatchResult::changed(true),
                }
            }
            Action::ConfirmDialogCancel => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return DispatchResult::unchanged();
                }
                dialog.reset();
                DispatchResult::changed(true)
            }
            _ => unreachable!("non-dialog action routed to dialog reducer"),
        }
    }

    /// After the dialog value changed: chart fields are pushed out immediately.
    fn live_org_edit(&self) -> DispatchResult {
        let dialog = &self.state.ui.input_dialog;
        match &dialog.kind {
            Some(InputDialogKind::OrgField { id, field }) if self.state.ui.is_editing => {
                DispatchResult::effect(Effect::OrgFieldEdited {
                    id: id.clone(),
                    field: *field,
                    value: dialog.value.clone(),
                })
            }
            _ => DispatchResult::changed(true),
        }
    }
}
