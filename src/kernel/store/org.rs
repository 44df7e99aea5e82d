use tracing::warn;

use crate::kernel::state::{InputDialogKind, PendingAction, DELETE_CONFIRM_MESSAGE};
use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_org_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::OrgMoveSelection { delta } => {
                if !self.state.ui.is_editing {
                    return DispatchResult::unchanged();
                }
                let ids = self.state.visible_org_ids();
                if ids.is_empty() {
                    return DispatchResult::unchanged();
                }
                let current = self
                    .state
                    .ui
                    .org_selected
                    .as_ref()
                    .and_then(|id| ids.iter().position(|candidate| candidate == id))
                    .unwrap_or(0);
                let next = (current as isize + delta).clamp(0, ids.len() as isize - 1) as usize;
                let next_id = ids[next].clone();
                let changed = self.state.ui.org_selected.as_ref() != Some(&next_id);
                self.state.ui.org_selected = Some(next_id);
                DispatchResult::changed(changed)
            }
            Action::OrgEditField { field } => {
                if !self.state.ui.is_editing || self.state.ui.dialog_open() {
                    return DispatchResult::unchanged();
                }
                let Some(id) = self.state.ui.org_selected.clone() else {
                    return DispatchResult::unchanged();
                };
                let Some(node) = self.state.form.organization_structure.find(&id) else {
                    return DispatchResult::unchanged();
                };
                let value = node.field(field).to_string();
                self.state.ui.input_dialog.open(
                    InputDialogKind::OrgField { id, field },
                    field.label(),
                    "",
                    &value,
                );
                DispatchResult::changed(true)
            }
            Action::OrgRequestDelete => {
                if !self.state.ui.is_editing || self.state.ui.dialog_open() {
                    return DispatchResult::unchanged();
                }
                let Some(id) = self.state.ui.org_selected.clone() else {
                    return DispatchResult::unchanged();
                };
                if !self.state.form.organization_structure.contains(&id) {
                    return DispatchResult::unchanged();
                }
                let dialog = &mut self.state.ui.confirm_dialog;
                dialog.visible = true;
                dialog.message = DELETE_CONFIRM_MESSAGE.to_string();
                dialog.on_confirm = Some(PendingAction::RemoveOrgNode { id });
                DispatchResult::changed(true)
            }
            Action::OrgTreeChanged(forest) => {
                if !self.state.ui.is_editing {
                    warn!("chart change delivered outside edit mode");
                    return DispatchResult::unchanged();
                }
                if forest.ptr_eq(&self.state.form.organization_structure) {
                    return DispatchResult::unchanged();
                }
                let prev_index = self.selected_org_index();
                self.state.form.organization_structure = forest;

                let dialog_target_gone = match &self.state.ui.input_dialog.kind {
                    Some(InputDialogKind::OrgField { id, .. }) => {
                        !self.state.form.organization_structure.contains(id)
                    }
                    _ => false,
                };
                if dialog_target_gone {
                    self.state.ui.input_dialog.reset();
                }
                self.sync_org_selection_near(prev_index.unwrap_or(0));
                DispatchResult::changed(true)
            }
            _ => unreachable!("non-chart action routed to chart reducer"),
        }
    }

    fn selected_org_index(&self) -> Option<usize> {
        let selected = self.state.ui.org_selected.as_ref()?;
        self.state
            .visible_org_ids()
            .iter()
            .position(|id| id == selected)
    }

    /// Keeps the chart selection on a visible node.
    pub(super) fn sync_org_selection(&mut self) -> bool {
        self.sync_org_selection_near(0)
    }

    /// Like [`Self::sync_org_selection`], but a vanished selection moves to the
    /// row at `fallback` (clamped) instead of the first row.
    fn sync_org_selection_near(&mut self, fallback: usize) -> bool {
        let ids = self.state.visible_org_ids();
        let ui = &mut self.state.ui;
        let next = match ui.org_selected.as_ref() {
            Some(id) if ids.contains(id) => return false,
            _ if ids.is_empty() => None,
            _ => Some(ids[fallback.min(ids.len() - 1)].clone()),
        };
        let changed = ui.org_selected != next;
        ui.org_selected = next;
        changed
    }
}
