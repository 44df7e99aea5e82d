use crate::kernel::services::ports::SessionState;
use crate::models::{AboutUs, Forest, FormField, NodeId, OrgField, SocialPlatform};

pub const DELETE_CONFIRM_MESSAGE: &str = "Delete this position and all its subordinates?";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to update. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageTab {
    #[default]
    Info,
    Organization,
    VisionMission,
    History,
    Contact,
}

impl PageTab {
    pub const ALL: [PageTab; 5] = [
        PageTab::Info,
        PageTab::Organization,
        PageTab::VisionMission,
        PageTab::History,
        PageTab::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Company Info",
            Self::Organization => "Organization",
            Self::VisionMission => "Vision & Mission",
            Self::History => "History",
            Self::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Info => 0,
            Self::Organization => 1,
            Self::VisionMission => 2,
            Self::History => 3,
            Self::Contact => 4,
        }
    }

    /// Wraps around in both directions.
    pub fn offset(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let i = (self.index() as isize + delta).rem_euclid(len);
        Self::ALL[i as usize]
    }

    /// Form fields shown on this tab, in display order. The organization tab has
    /// none; it hosts the chart editor instead.
    pub fn fields(self) -> &'static [FormField] {
        match self {
            Self::Info => &[
                FormField::CompanyName,
                FormField::Description,
                FormField::LogoUrl,
            ],
            Self::Organization => &[],
            Self::VisionMission => &[FormField::Vision, FormField::Mission],
            Self::History => &[FormField::History],
            Self::Contact => &[
                FormField::Email,
                FormField::Phone,
                FormField::Address,
                FormField::Social(SocialPlatform::Website),
                FormField::Social(SocialPlatform::Facebook),
                FormField::Social(SocialPlatform::Instagram),
                FormField::Social(SocialPlatform::Linkedin),
                FormField::Social(SocialPlatform::Twitter),
            ],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    /// Last snapshot fetched from or written to the gateway.
    pub saved: Option<AboutUs>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    RemoveOrgNode { id: NodeId },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

impl ConfirmDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Proof that the user accepted the delete confirmation for `id`.
///
/// Only the kernel mints these, when the confirm dialog is accepted; the chart
/// component requires one to dispatch a removal.
#[derive(Debug, PartialEq, Eq)]
pub struct DeleteConfirmation {
    id: NodeId,
}

impl DeleteConfirmation {
    pub(crate) fn granted(id: NodeId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDialogKind {
    FormField(FormField),
    /// Live edit: every keystroke is applied to the chart.
    OrgField { id: NodeId, field: OrgField },
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub placeholder: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn open(&mut self, kind: InputDialogKind, title: &str, placeholder: &str, value: &str) {
        self.visible = true;
        self.title = title.to_string();
        self.placeholder = placeholder.to_string();
        self.value = value.to_string();
        self.cursor = self.value.len();
        self.error = None;
        self.kind = Some(kind);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub is_editing: bool,
    pub active_tab: PageTab,
    pub field_selected: usize,
    pub org_selected: Option<NodeId>,
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub status: Option<StatusMessage>,
}

impl UiState {
    pub fn dialog_open(&self) -> bool {
        self.input_dialog.visible || self.confirm_dialog.visible
    }

    pub fn selected_field(&self) -> Option<FormField> {
        self.active_tab.fields().get(self.field_selected).copied()
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub session: SessionState,
    pub document: DocumentState,
    /// Working copy edited by the form; owns the canonical chart.
    pub form: AboutUs,
    pub ui: UiState,
    pub max_tree_depth: usize,
}

impl AppState {
    pub fn new(max_tree_depth: usize) -> Self {
        Self {
            session: SessionState::resolving(),
            document: DocumentState::default(),
            form: AboutUs::default(),
            ui: UiState::default(),
            max_tree_depth: max_tree_depth.max(1),
        }
    }

    pub fn forest(&self) -> &Forest {
        &self.form.organization_structure
    }

    pub fn show_loading(&self) -> bool {
        self.session.is_resolving
            || (self.document.loading && self.document.saved.is_none() && !self.ui.is_editing)
    }

    /// Chart rows that can be selected, depth-first, honouring the depth limit.
    pub fn visible_org_ids(&self) -> Vec<NodeId> {
        self.forest()
            .iter()
            .filter(|(depth, _)| *depth < self.max_tree_depth)
            .map(|(_, node)| node.id().clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
