//! Organization chart component.
//!
//! The component owns no chart state: it renders the `data` it is given and every
//! control returns the next forest, which the caller hands back to the owning form.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::{debug, warn};

use super::theme::UiTheme;
use crate::kernel::services::ports::settings::DEFAULT_MAX_TREE_DEPTH;
use crate::kernel::DeleteConfirmation;
use crate::models::{
    add_child, append_root, remove, update, Forest, IdSource, NodeId, NodePatch, OrgField, OrgNode,
};

pub const EMPTY_EDIT_TITLE: &str = "Start Organization Chart";
pub const EMPTY_EDIT_HINT: &str = "Create Root Node";
pub const EMPTY_READ_ONLY: &str = "No organization structure available.";
pub const TRUNCATED_MARKER: &str = "…";

/// A mutation request from one of the chart's controls.
#[derive(Debug)]
pub enum OrgControl {
    EditField {
        id: NodeId,
        field: OrgField,
        value: String,
    },
    AddChild {
        parent: NodeId,
    },
    /// Only offered while the chart is empty.
    AddRoot,
    Delete(DeleteConfirmation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoBadge {
    /// No photo on record.
    Placeholder,
    Photo,
    /// A photo is recorded but cannot be shown; never written back.
    Fallback,
}

impl PhotoBadge {
    pub fn for_node(node: &OrgNode) -> Self {
        match node.photo() {
            None => Self::Placeholder,
            Some(reference) if is_displayable_photo(reference) => Self::Photo,
            Some(_) => Self::Fallback,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Placeholder => "[ ]",
            Self::Photo => "[@]",
            Self::Fallback => "[x]",
        }
    }
}

fn is_displayable_photo(reference: &str) -> bool {
    let reference = reference.trim();
    ["https://", "http://"].iter().any(|scheme| {
        reference.len() > scheme.len()
            && reference
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgRowKind<'a> {
    Node(&'a OrgNode),
    /// Stands in for children below the depth limit.
    Truncated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgRow<'a> {
    pub depth: usize,
    /// Connector glyphs drawn before the card.
    pub prefix: String,
    pub kind: OrgRowKind<'a>,
}

impl OrgRow<'_> {
    pub fn node_id(&self) -> Option<&NodeId> {
        match self.kind {
            OrgRowKind::Node(node) => Some(node.id()),
            OrgRowKind::Truncated => None,
        }
    }
}

pub struct OrgTree<'a> {
    data: &'a Forest,
    is_editing: bool,
    max_depth: usize,
}

impl<'a> OrgTree<'a> {
    pub fn new(data: &'a Forest, is_editing: bool) -> Self {
        Self {
            data,
            is_editing,
            max_depth: DEFAULT_MAX_TREE_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Applies one control and returns the forest to deliver to the owner.
    ///
    /// `None` means nothing should be delivered: the chart is read-only, the
    /// addressed node is gone, or the control is not offered in this state.
    pub fn dispatch(&self, control: OrgControl, ids: &mut dyn IdSource) -> Option<Forest> {
        if !self.is_editing {
            debug!(?control, "chart control ignored in read-only mode");
            return None;
        }

        match control {
            OrgControl::EditField { id, field, value } => {
                if !self.data.contains(&id) {
                    warn!(id = %id, "field edit for a node that no longer exists");
                    return None;
                }
                Some(update(self.data, &id, &NodePatch::for_field(field, value)))
            }
            OrgControl::AddChild { parent } => {
                let Some(depth) = self.depth_of(&parent) else {
                    warn!(id = %parent, "add child under a node that no longer exists");
                    return None;
                };
                if depth + 1 >= self.max_depth {
                    warn!(id = %parent, max_depth = self.max_depth, "chart depth limit reached");
                    return None;
                }
                Some(add_child(self.data, &parent, ids))
            }
            OrgControl::AddRoot => {
                if !self.data.is_empty() {
                    return None;
                }
                Some(append_root(self.data, ids))
            }
            OrgControl::Delete(confirmation) => {
                if !self.data.contains(confirmation.id()) {
                    warn!(id = %confirmation.id(), "delete for a node that no longer exists");
                    return None;
                }
                Some(remove(self.data, confirmation.id()))
            }
        }
    }

    fn depth_of(&self, id: &NodeId) -> Option<usize> {
        self.data
            .iter()
            .find(|(_, node)| node.id() == id)
            .map(|(depth, _)| depth)
    }

    /// Depth-first rows with their connector prefixes.
    pub fn rows(&self) -> Vec<OrgRow<'a>> {
        let mut rows = Vec::with_capacity(self.data.len());
        let mut guides = String::new();
        push_rows(self.data, 0, self.max_depth, &mut guides, &mut rows);
        rows
    }

    pub fn lines(&self, selected: Option<&NodeId>, theme: &UiTheme) -> Vec<Line<'a>> {
        let muted = Style::default().fg(theme.palette_muted_fg);

        if self.data.is_empty() {
            return if self.is_editing {
                vec![
                    Line::from(Span::styled(
                        EMPTY_EDIT_TITLE,
                        Style::default()
                            .fg(theme.header_fg)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(vec![
                        Span::styled("[a]", Style::default().fg(theme.accent_fg)),
                        Span::raw(" "),
                        Span::raw(EMPTY_EDIT_HINT),
                    ]),
                ]
            } else {
                vec![Line::from(Span::styled(EMPTY_READ_ONLY, muted))]
            };
        }

        let connector = Style::default().fg(theme.connector_fg);
        self.rows()
            .into_iter()
            .map(|row| {
                let mut spans = vec![Span::styled(row.prefix, connector)];
                match row.kind {
                    OrgRowKind::Truncated => spans.push(Span::styled(TRUNCATED_MARKER, muted)),
                    OrgRowKind::Node(node) => {
                        let is_selected = self.is_editing && selected == Some(node.id());
                        let card = if is_selected {
                            Style::default()
                                .bg(theme.palette_selected_bg)
                                .fg(theme.palette_selected_fg)
                        } else {
                            Style::default()
                        };
                        let badge = PhotoBadge::for_node(node);
                        let badge_style = match badge {
                            PhotoBadge::Fallback => card.fg(theme.error_fg),
                            _ => card.fg(theme.accent_fg),
                        };
                        spans.push(Span::styled(badge.glyph(), badge_style));
                        spans.push(Span::styled(" ", card));
                        if node.name().is_empty() {
                            spans.push(Span::styled("(unnamed)", card.fg(theme.palette_muted_fg)));
                        } else {
                            spans.push(Span::styled(
                                node.name(),
                                card.add_modifier(Modifier::BOLD),
                            ));
                        }
                        if !node.position().is_empty() {
                            spans.push(Span::styled(" · ", card));
                            spans.push(Span::styled(node.position(), card));
                        }
                    }
                }
                Line::from(spans)
            })
            .collect()
    }

    /// Renders the chart, scrolled so the selected row stays visible.
    pub fn render(&self, frame: &mut Frame, area: Rect, selected: Option<&NodeId>, theme: &UiTheme) {
        let border = if self.is_editing {
            theme.focus_border
        } else {
            theme.inactive_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Organization Structure ");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut lines = self.lines(selected, theme);
        let hint_rows = if self.is_editing && !self.data.is_empty() && inner.height > 1 {
            1
        } else {
            0
        };
        let body_height = inner.height.saturating_sub(hint_rows) as usize;

        let selected_row = selected.and_then(|id| {
            self.rows()
                .iter()
                .position(|row| row.node_id() == Some(id))
        });
        let offset = selected_row
            .map(|row| row.saturating_sub(body_height.saturating_sub(1)))
            .unwrap_or(0);
        let body: Vec<Line<'_>> = lines.drain(..).skip(offset).take(body_height).collect();
        frame.render_widget(
            Paragraph::new(body),
            Rect::new(inner.x, inner.y, inner.width, body_height as u16),
        );

        if hint_rows > 0 {
            let key = Style::default().fg(theme.accent_fg);
            let hint = Line::from(vec![
                Span::styled("[n]", key),
                Span::raw(" Name  "),
                Span::styled("[t]", key),
                Span::raw(" Title  "),
                Span::styled("[u]", key),
                Span::raw(" Photo  "),
                Span::styled("[a]", key),
                Span::raw(" Add subordinate  "),
                Span::styled("[d]", key),
                Span::raw(" Delete"),
            ]);
            let y = inner.y + inner.height - 1;
            frame.render_widget(Paragraph::new(hint), Rect::new(inner.x, y, inner.width, 1));
        }
    }
}

fn push_rows<'f>(
    forest: &'f Forest,
    depth: usize,
    max_depth: usize,
    guides: &mut String,
    out: &mut Vec<OrgRow<'f>>,
) {
    let count = forest.root_count();
    for (i, node) in forest.roots().enumerate() {
        let last = i + 1 == count;
        let connector = match (depth, last) {
            (0, _) => "",
            (_, true) => "└─ ",
            (_, false) => "├─ ",
        };
        out.push(OrgRow {
            depth,
            prefix: format!("{guides}{connector}"),
            kind: OrgRowKind::Node(node),
        });
        if node.is_leaf() {
            continue;
        }

        let mark = guides.len();
        guides.push_str(match (depth, last) {
            (0, _) => "",
            (_, true) => "   ",
            (_, false) => "│  ",
        });
        if depth + 1 >= max_depth {
            out.push(OrgRow {
                depth: depth + 1,
                prefix: format!("{guides}└─ "),
                kind: OrgRowKind::Truncated,
            });
        } else {
            push_rows(node.children(), depth + 1, max_depth, guides, out);
        }
        guides.truncate(mark);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/org_tree.rs"]
mod tests;
