use crate::kernel::state::DeleteConfirmation;
use crate::models::{AboutUs, NodeId, OrgField};

#[derive(Debug)]
pub enum Effect {
    LoadDocument,
    SaveDocument(AboutUs),
    RedirectToLogin,
    /// A live org field dialog changed; the chart component turns it into an update.
    OrgFieldEdited {
        id: NodeId,
        field: OrgField,
        value: String,
    },
    RemoveOrgNode(DeleteConfirmation),
}
