use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::text_window;
use super::AboutUsPage;
use crate::kernel::PageTab;

pub const NOT_SET: &str = "Not set";
pub const LOADING: &str = "Loading...";

pub(super) fn render(page: &AboutUsPage, frame: &mut Frame, area: Rect) {
    let state = page.store.state();
    if state.show_loading() {
        let y = area.y + area.height / 2;
        frame.render_widget(
            Paragraph::new(LOADING)
                .alignment(Alignment::Center)
                .style(Style::default().fg(page.theme.palette_muted_fg)),
            Rect::new(area.x, y, area.width, 1.min(area.height)),
        );
        return;
    }

    let [header, tabs, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(page, frame, header);
    render_tabs(page, frame, tabs);
    if state.ui.active_tab == PageTab::Organization {
        page.org_tree()
            .render(frame, body, state.ui.org_selected.as_ref(), &page.theme);
    } else {
        render_fields(page, frame, body);
    }
    render_status(page, frame, status);
    render_input_dialog(page, frame, area);
    render_confirm_dialog(page, frame, area);
}

fn render_header(page: &AboutUsPage, frame: &mut Frame, area: Rect) {
    let state = page.store.state();
    let name = state
        .document
        .saved
        .as_ref()
        .map_or("Your Company", |doc| doc.display_name());
    let mut spans = vec![
        Span::styled(
            " About Us ",
            Style::default()
                .fg(page.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(name.to_string()),
    ];
    if state.ui.is_editing {
        spans.push(Span::styled(
            "  [editing]",
            Style::default().fg(page.theme.accent_fg),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(page: &AboutUsPage, frame: &mut Frame, area: Rect) {
    let active = page.store.state().ui.active_tab;
    let tabs = Tabs::new(PageTab::ALL.iter().map(|tab| tab.label()))
        .select(active.index())
        .style(Style::default().fg(page.theme.tab_inactive_fg))
        .highlight_style(
            Style::default()
                .bg(page.theme.tab_active_bg)
                .fg(page.theme.tab_active_fg),
        )
        .divider("|");
    frame.render_widget(tabs, area);
}

fn render_fields(page: &AboutUsPage, frame: &mut Frame, area: Rect) {
    let state = page.store.state();
    let theme = &page.theme;
    let editing = state.ui.is_editing;
    let muted = Style::default().fg(theme.palette_muted_fg);

    let mut lines = Vec::new();
    for (index, field) in state.ui.active_tab.fields().iter().enumerate() {
        let selected = editing && index == state.ui.field_selected;
        let label_style = if selected {
            Style::default()
                .bg(theme.palette_selected_bg)
                .fg(theme.palette_selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let value = state.form.field(*field);
        let value_line = match (value.is_empty(), editing) {
            (false, _) => Line::from(value),
            (true, true) => Line::from(Span::styled(field.placeholder(), muted)),
            (true, false) => Line::from(Span::styled(NOT_SET, muted)),
        };
        lines.push(value_line);
        lines.push(Line::raw(""));
    }

    let border = if editing {
        theme.focus_border
    } else {
        theme.inactive_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", state.ui.active_tab.label()));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_status(page: &AboutUsPage, frame: &mut Frame, area: Rect) {
    let state = page.store.state();
    let theme = &page.theme;
    if let Some(status) = state.ui.status.as_ref() {
        let fg = if status.is_error {
            theme.error_fg
        } else {
            theme.accent_fg
        };
        frame.render_widget(
            Paragraph::new(Span::styled(status.text.as_str(), Style::default().fg(fg))),
            area,
        );
        return;
    }

    let key = Style::default().fg(theme.accent_fg);
    let hints: &[(&str, &str)] = if state.ui.is_editing {
        &[
            ("[Enter]", " Edit  "),
            ("[Ctrl+S]", " Save  "),
            ("[Esc]", " Cancel  "),
            ("[Tab]", " Next tab"),
        ]
    } else {
        &[
            ("[e]", " Edit  "),
            ("[r]", " Reload  "),
            ("[Tab]", " Next tab  "),
            ("[q]", " Quit"),
        ]
    };
    let spans: Vec<Span<'_>> = hints
        .iter()
        .flat_map(|(k, label)| [Span::styled(*k, key), Span::raw(*label)])
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn input_dialog_area(area: Rect) -> Rect {
    let width = 60.min(area.width.saturating_sub(4));
    let height = 6.min(area.height.saturating_sub(2));
    centered(area, width, height)
}

fn render_confirm_dialog(page: &AboutUsPage, frame: &mut Frame, area: Rect) {
    let dialog = &page.store.state().ui.confirm_dialog;
    if !dialog.visible {
        return;
    }

    let width = 56.min(area.width.saturating_sub(4));
    let height = 6.min(area.height.saturating_sub(2));
    if width < 20 || height < 4 {
        return;
    }
    let dialog_area = centered(area, width, height);
    frame.render_widget(Clear, dialog_area);

    let base_style = Style::default()
        .bg(page.theme.palette_bg)
        .fg(page.theme.palette_fg);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(page.theme.palette_border))
            .title(" Confirm ")
            .style(base_style),
        dialog_area,
    );

    let hint_line = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(page.theme.accent_fg)),
        Span::raw(" Delete  "),
        Span::styled("[Esc]", Style::default().fg(page.theme.palette_muted_fg)),
        Span::raw(" Cancel"),
    ]);
    let content = Paragraph::new(vec![
        Line::from(dialog.message.as_str()),
        Line::raw(""),
        hint_line,
    ])
    .style(base_style)
    .wrap(Wrap { trim: true });
    frame.render_widget(content, inner(dialog_area));
}

fn render_input_dialog(page: &AboutUsPage, frame: &mut Frame, area: Rect) {
    let dialog = &page.store.state().ui.input_dialog;
    if !dialog.visible {
        return;
    }

    let popup_area = input_dialog_area(area);
    if popup_area.width < 20 || popup_area.height < 5 {
        return;
    }
    frame.render_widget(Clear, popup_area);

    let theme = &page.theme;
    let base_style = Style::default().bg(theme.palette_bg).fg(theme.palette_fg);
    let muted_style = Style::default().fg(theme.palette_muted_fg);
    let title = if dialog.title.is_empty() {
        " Input ".to_string()
    } else {
        format!(" {} ", dialog.title)
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.palette_border))
            .title(title)
            .style(base_style),
        popup_area,
    );

    let inner = inner(popup_area);
    let prefix = "> ";
    let cursor = dialog.cursor.min(dialog.value.len());
    let (start, end) = text_window::window(
        dialog.value.as_str(),
        cursor,
        inner.width.saturating_sub(prefix.width() as u16) as usize,
    );

    let mut lines = Vec::with_capacity(3);
    if dialog.value.is_empty() && !dialog.placeholder.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(prefix, base_style),
            Span::styled(dialog.placeholder.as_str(), muted_style),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled(prefix, base_style),
            Span::styled(dialog.value.get(start..end).unwrap_or_default(), base_style),
        ]));
    }
    match dialog.error.as_deref() {
        Some(err) => lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(theme.error_fg),
        ))),
        None => lines.push(Line::raw("")),
    }
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(theme.accent_fg)),
        Span::raw(" Done  "),
        Span::styled("[Esc]", muted_style),
        Span::raw(" Close"),
    ]));

    frame.render_widget(Paragraph::new(lines).style(base_style), inner);
}

pub(super) fn cursor_position(page: &AboutUsPage) -> Option<(u16, u16)> {
    let area = page.last_render_area?;
    let dialog = &page.store.state().ui.input_dialog;
    if !dialog.visible {
        return None;
    }

    let popup_area = input_dialog_area(area);
    if popup_area.width < 20 || popup_area.height < 5 {
        return None;
    }
    let inner = inner(popup_area);
    let prefix_w = "> ".width() as u16;
    let cursor = dialog.cursor.min(dialog.value.len());
    let (start, _end) = text_window::window(
        dialog.value.as_str(),
        cursor,
        inner.width.saturating_sub(prefix_w) as usize,
    );
    let before_w = dialog.value.get(start..cursor).unwrap_or_default().width() as u16;

    let x = inner
        .x
        .saturating_add(prefix_w)
        .saturating_add(before_w)
        .min(inner.x + inner.width.saturating_sub(1));
    Some((x, inner.y))
}
