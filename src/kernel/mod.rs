//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use state::{
    AppState, ConfirmDialogState, DeleteConfirmation, DocumentState, InputDialogKind,
    InputDialogState, PageTab, PendingAction, StatusMessage, UiState, DELETE_CONFIRM_MESSAGE,
    SAVE_FAILED_MESSAGE,
};
pub use store::{DispatchResult, Store};
