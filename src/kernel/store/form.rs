use crate::kernel::state::InputDialogKind;
use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_form_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetActiveTab(tab) => {
                let ui = &mut self.state.ui;
                if ui.active_tab == tab {
                    return DispatchResult::unchanged();
                }
                ui.active_tab = tab;
                ui.field_selected = 0;
                DispatchResult::changed(true)
            }
            Action::CycleTab { delta } => {
                let ui = &mut self.state.ui;
                let next = ui.active_tab.offset(delta);
                if next == ui.active_tab {
                    return DispatchResult::unchanged();
                }
                ui.active_tab = next;
                ui.field_selected = 0;
                DispatchResult::changed(true)
            }
            Action::FieldMoveSelection { delta } => {
                let ui = &mut self.state.ui;
                let len = ui.active_tab.fields().len();
                if !ui.is_editing || len == 0 {
                    return DispatchResult::unchanged();
                }
                let next = (ui.field_selected as isize + delta).clamp(0, len as isize - 1) as usize;
                let changed = next != ui.field_selected;
                ui.field_selected = next;
                DispatchResult::changed(changed)
            }
            Action::FieldEditSelected => {
                let ui = &mut self.state.ui;
                if !ui.is_editing || ui.dialog_open() {
                    return DispatchResult::unchanged();
                }
                let Some(field) = ui.selected_field() else {
                    return DispatchResult::unchanged();
                };
                ui.input_dialog.open(
                    InputDialogKind::FormField(field),
                    field.label(),
                    field.placeholder(),
                    self.state.form.field(field),
                );
                DispatchResult::changed(true)
            }
            Action::FormSetField { field, value } => {
                if !self.state.ui.is_editing || self.state.form.field(field) == value {
                    return DispatchResult::unchanged();
                }
                self.state.form.set_field(field, value);
                DispatchResult::changed(true)
            }
            Action::DismissStatus => DispatchResult::changed(self.state.ui.status.take().is_some()),
            _ => unreachable!("non-form action routed to form reducer"),
        }
    }
}
