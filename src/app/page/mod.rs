//! The About Us page: owns the kernel store and wires its effects to the runtime.

use ratatui::layout::Rect;
use ratatui::Frame;

use super::org_tree::{OrgControl, OrgTree};
use super::theme::UiTheme;
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime};
use crate::kernel::{Action as KernelAction, AppState, Store};
use crate::models::{IdSource, UuidIdSource};

mod bridge;
mod input;
mod render;
mod text_window;

/// Why the page wants the event loop to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageExit {
    Quit,
    SignInRequired,
}

pub struct AboutUsPage {
    store: Store,
    runtime: AsyncRuntime,
    ids: Box<dyn IdSource>,
    theme: UiTheme,
    exit: Option<PageExit>,
    last_render_area: Option<Rect>,
}

impl AboutUsPage {
    pub fn new(runtime: AsyncRuntime, max_tree_depth: usize, theme: UiTheme) -> Self {
        Self {
            store: Store::new(AppState::new(max_tree_depth)),
            runtime,
            ids: Box::new(UuidIdSource),
            theme,
            exit: None,
            last_render_area: None,
        }
    }

    pub fn with_id_source(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Kicks off session resolution and the initial document fetch.
    pub fn start(&mut self) {
        self.runtime.resolve_session();
        let _ = self.dispatch_kernel(KernelAction::ReloadDocument);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn exit(&self) -> Option<PageExit> {
        self.exit
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::SessionResolved(session) => {
                self.dispatch_kernel(KernelAction::SessionResolved(session))
            }
            AppMessage::DocumentLoaded(doc) => {
                self.dispatch_kernel(KernelAction::DocumentLoaded(doc))
            }
            AppMessage::DocumentLoadFailed { error } => {
                self.dispatch_kernel(KernelAction::DocumentLoadFailed { error })
            }
            AppMessage::DocumentSaved(doc) => self.dispatch_kernel(KernelAction::DocumentSaved(doc)),
            AppMessage::DocumentSaveFailed { error } => {
                self.dispatch_kernel(KernelAction::DocumentSaveFailed { error })
            }
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        input::handle_key(self, key)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.last_render_area = Some(area);
        render::render(self, frame, area);
    }

    pub fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }

    fn org_tree(&self) -> OrgTree<'_> {
        let state = self.store.state();
        OrgTree::new(state.forest(), state.ui.is_editing).with_max_depth(state.max_tree_depth)
    }

    /// Runs a chart control and delivers the resulting forest to the form.
    fn apply_org_control(&mut self, control: OrgControl) -> bool {
        let state = self.store.state();
        let next = OrgTree::new(state.forest(), state.ui.is_editing)
            .with_max_depth(state.max_tree_depth)
            .dispatch(control, self.ids.as_mut());
        match next {
            Some(forest) => self.dispatch_kernel(KernelAction::OrgTreeChanged(forest)),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/page.rs"]
mod tests;
