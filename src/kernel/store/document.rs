use tracing::{info, warn};

use crate::kernel::state::{StatusMessage, SAVE_FAILED_MESSAGE};
use crate::kernel::{Action, Effect};

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_document_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SessionResolved(session) => {
                let redirect = session.requires_login();
                let changed = self.state.session != session;
                self.state.session = session;
                if redirect {
                    warn!("no identity after session resolution");
                    return DispatchResult::effect(Effect::RedirectToLogin);
                }
                DispatchResult::changed(changed)
            }
            Action::ReloadDocument => {
                let doc = &mut self.state.document;
                if self.state.ui.is_editing || doc.loading {
                    return DispatchResult::unchanged();
                }
                doc.loading = true;
                doc.error = None;
                DispatchResult::effect(Effect::LoadDocument)
            }
            Action::DocumentLoaded(loaded) => {
                let doc = &mut self.state.document;
                doc.loading = false;
                doc.error = None;
                doc.saved = loaded;
                if !self.state.ui.is_editing {
                    self.state.form = doc.saved.clone().unwrap_or_default();
                    self.sync_org_selection();
                }
                info!(
                    present = self.state.document.saved.is_some(),
                    "about us document loaded"
                );
                DispatchResult::changed(true)
            }
            Action::DocumentLoadFailed { error } => {
                let doc = &mut self.state.document;
                doc.loading = false;
                self.state.ui.status = Some(StatusMessage::error(format!(
                    "Failed to load: {error}"
                )));
                doc.error = Some(error);
                DispatchResult::changed(true)
            }
            Action::BeginEdit => {
                if self.state.ui.is_editing || self.state.show_loading() {
                    return DispatchResult::unchanged();
                }
                let ui = &mut self.state.ui;
                ui.is_editing = true;
                ui.field_selected = 0;
                ui.status = None;
                self.sync_org_selection();
                DispatchResult::changed(true)
            }
            Action::CancelEdit => {
                if !self.state.ui.is_editing {
                    return DispatchResult::unchanged();
                }
                self.state.form = self.state.document.saved.clone().unwrap_or_default();
                let ui = &mut self.state.ui;
                ui.is_editing = false;
                ui.input_dialog.reset();
                ui.confirm_dialog.reset();
                ui.status = None;
                self.sync_org_selection();
                DispatchResult::changed(true)
            }
            Action::Save => {
                if !self.state.ui.is_editing || self.state.document.saving {
                    return DispatchResult::unchanged();
                }
                self.state.document.saving = true;
                self.state.ui.status = Some(StatusMessage::info("Saving..."));
                DispatchResult::effect(Effect::SaveDocument(self.state.form.clone()))
            }
            Action::DocumentSaved(saved) => {
                self.state.document.saving = false;
                self.state.document.error = None;
                self.state.form = saved.clone();
                self.state.document.saved = Some(saved);
                let ui = &mut self.state.ui;
                ui.is_editing = false;
                ui.input_dialog.reset();
                ui.confirm_dialog.reset();
                ui.status = Some(StatusMessage::info("Saved"));
                self.sync_org_selection();
                info!("about us document saved");
                DispatchResult::changed(true)
            }
            Action::DocumentSaveFailed { error } => {
                self.state.document.saving = false;
                self.state.document.error = Some(error);
                self.state.ui.status = Some(StatusMessage::error(SAVE_FAILED_MESSAGE));
                DispatchResult::changed(true)
            }
            _ => unreachable!("non-document action routed to document reducer"),
        }
    }
}
