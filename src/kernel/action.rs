use crate::kernel::services::ports::SessionState;
use crate::kernel::state::PageTab;
use crate::models::{AboutUs, Forest, FormField, OrgField};

#[derive(Debug, Clone)]
pub enum Action {
    SessionResolved(SessionState),
    ReloadDocument,
    DocumentLoaded(Option<AboutUs>),
    DocumentLoadFailed {
        error: String,
    },
    DocumentSaved(AboutUs),
    DocumentSaveFailed {
        error: String,
    },
    SetActiveTab(PageTab),
    CycleTab {
        delta: isize,
    },
    BeginEdit,
    CancelEdit,
    Save,
    FieldMoveSelection {
        delta: isize,
    },
    FieldEditSelected,
    FormSetField {
        field: FormField,
        value: String,
    },
    OrgMoveSelection {
        delta: isize,
    },
    OrgEditField {
        field: OrgField,
    },
    OrgRequestDelete,
    /// The chart component's `onChange`: replaces the whole forest.
    OrgTreeChanged(Forest),
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,
    ConfirmDialogAccept,
    ConfirmDialogCancel,
    DismissStatus,
}
