use tracing::debug;

use super::{AboutUsPage, PageExit};
use crate::app::org_tree::OrgControl;
use crate::kernel::{Action as KernelAction, Effect as KernelEffect};

impl AboutUsPage {
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    fn run_effect(&mut self, effect: KernelEffect) -> bool {
        match effect {
            KernelEffect::LoadDocument => {
                self.runtime.fetch_document();
                false
            }
            KernelEffect::SaveDocument(doc) => {
                debug!(nodes = doc.organization_structure.len(), "saving document");
                self.runtime.replace_document(doc);
                false
            }
            KernelEffect::RedirectToLogin => {
                self.exit = Some(PageExit::SignInRequired);
                true
            }
            KernelEffect::OrgFieldEdited { id, field, value } => {
                self.apply_org_control(OrgControl::EditField { id, field, value })
            }
            KernelEffect::RemoveOrgNode(confirmation) => {
                self.apply_org_control(OrgControl::Delete(confirmation))
            }
        }
    }
}
