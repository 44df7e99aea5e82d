use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{AboutUsPage, PageExit};
use crate::app::org_tree::OrgControl;
use crate::kernel::{Action as KernelAction, PageTab};
use crate::models::OrgField;

pub(super) fn handle_key(page: &mut AboutUsPage, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        page.exit = Some(PageExit::Quit);
        return true;
    }

    let ui = &page.store.state().ui;
    if ui.input_dialog.visible {
        return handle_input_dialog_key(page, key, ctrl);
    }
    if ui.confirm_dialog.visible {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char('y') => KernelAction::ConfirmDialogAccept,
            KeyCode::Esc | KeyCode::Char('n') => KernelAction::ConfirmDialogCancel,
            _ => return false,
        };
        return page.dispatch_kernel(action);
    }
    if page.store.state().show_loading() {
        return false;
    }

    if ctrl && key.code == KeyCode::Char('s') {
        return page.dispatch_kernel(KernelAction::Save);
    }
    match key.code {
        KeyCode::Tab => return page.dispatch_kernel(KernelAction::CycleTab { delta: 1 }),
        KeyCode::BackTab => return page.dispatch_kernel(KernelAction::CycleTab { delta: -1 }),
        KeyCode::Char(ch @ '1'..='5') => {
            let index = ch as usize - '1' as usize;
            return page.dispatch_kernel(KernelAction::SetActiveTab(PageTab::ALL[index]));
        }
        _ => {}
    }

    if page.store.state().ui.is_editing {
        handle_edit_key(page, key)
    } else {
        handle_read_only_key(page, key)
    }
}

fn handle_input_dialog_key(page: &mut AboutUsPage, key: KeyEvent, ctrl: bool) -> bool {
    let action = match key.code {
        KeyCode::Esc => KernelAction::InputDialogCancel,
        KeyCode::Enter => KernelAction::InputDialogAccept,
        KeyCode::Backspace => KernelAction::InputDialogBackspace,
        KeyCode::Left => KernelAction::InputDialogCursorLeft,
        KeyCode::Right => KernelAction::InputDialogCursorRight,
        KeyCode::Char(ch) if !ctrl => KernelAction::InputDialogAppend(ch),
        _ => return false,
    };
    page.dispatch_kernel(action)
}

fn handle_read_only_key(page: &mut AboutUsPage, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            page.exit = Some(PageExit::Quit);
            true
        }
        KeyCode::Char('e') => page.dispatch_kernel(KernelAction::BeginEdit),
        KeyCode::Char('r') | KeyCode::F(5) => page.dispatch_kernel(KernelAction::ReloadDocument),
        KeyCode::Esc => page.dispatch_kernel(KernelAction::DismissStatus),
        _ => false,
    }
}

fn handle_edit_key(page: &mut AboutUsPage, key: KeyEvent) -> bool {
    if key.code == KeyCode::Esc {
        return page.dispatch_kernel(KernelAction::CancelEdit);
    }

    if page.store.state().ui.active_tab != PageTab::Organization {
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => KernelAction::FieldMoveSelection { delta: -1 },
            KeyCode::Down | KeyCode::Char('j') => KernelAction::FieldMoveSelection { delta: 1 },
            KeyCode::Enter => KernelAction::FieldEditSelected,
            _ => return false,
        };
        return page.dispatch_kernel(action);
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => KernelAction::OrgMoveSelection { delta: -1 },
        KeyCode::Down | KeyCode::Char('j') => KernelAction::OrgMoveSelection { delta: 1 },
        KeyCode::Char('n') | KeyCode::Enter => KernelAction::OrgEditField {
            field: OrgField::Name,
        },
        KeyCode::Char('t') => KernelAction::OrgEditField {
            field: OrgField::Position,
        },
        KeyCode::Char('u') => KernelAction::OrgEditField {
            field: OrgField::Photo,
        },
        KeyCode::Char('d') | KeyCode::Delete => KernelAction::OrgRequestDelete,
        KeyCode::Char('a') => return add_node(page),
        _ => return false,
    };
    page.dispatch_kernel(action)
}

fn add_node(page: &mut AboutUsPage) -> bool {
    let state = page.store.state();
    let control = if state.forest().is_empty() {
        OrgControl::AddRoot
    } else {
        match state.ui.org_selected.clone() {
            Some(parent) => OrgControl::AddChild { parent },
            None => return false,
        }
    };
    page.apply_org_control(control)
}
