use super::*;
use crate::models::{SequentialIdSource, NEW_NODE_NAME};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn chart() -> Forest {
    let alice = OrgNode::new(NodeId::from("c1"), "Alice", "Engineer");
    let dave = OrgNode::new(NodeId::from("c2"), "Dave", "Designer")
        .with_photo("https://cdn.example.com/dave.png");
    let bob = OrgNode::new(NodeId::from("r1"), "Bob", "CEO")
        .with_children(Forest::from_nodes([alice, dave]));
    let carol = OrgNode::new(NodeId::from("r2"), "Carol", "CFO").with_photo("not a url");
    Forest::from_nodes([bob, carol])
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn read_only_rejects_every_control() {
    let data = chart();
    let tree = OrgTree::new(&data, false);
    let mut ids = SequentialIdSource::new("n");

    assert!(tree
        .dispatch(OrgControl::AddChild { parent: NodeId::from("r1") }, &mut ids)
        .is_none());
    assert!(tree
        .dispatch(
            OrgControl::EditField {
                id: NodeId::from("r1"),
                field: OrgField::Name,
                value: "Zed".to_string(),
            },
            &mut ids,
        )
        .is_none());
    assert!(tree
        .dispatch(
            OrgControl::Delete(DeleteConfirmation::granted(NodeId::from("r1"))),
            &mut ids,
        )
        .is_none());
}

#[test]
fn edit_field_delivers_updated_forest() {
    let data = chart();
    let tree = OrgTree::new(&data, true);
    let mut ids = SequentialIdSource::new("n");

    let next = tree
        .dispatch(
            OrgControl::EditField {
                id: NodeId::from("c1"),
                field: OrgField::Position,
                value: "Staff Engineer".to_string(),
            },
            &mut ids,
        )
        .expect("forest");

    let alice = next.find(&NodeId::from("c1")).expect("alice");
    assert_eq!(alice.position(), "Staff Engineer");
    assert_eq!(alice.name(), "Alice");
    assert_eq!(data.find(&NodeId::from("c1")).map(|n| n.position()), Some("Engineer"));
}

#[test]
fn missing_target_delivers_nothing() {
    let data = chart();
    let tree = OrgTree::new(&data, true);
    let mut ids = SequentialIdSource::new("n");

    let result = tree.dispatch(
        OrgControl::AddChild {
            parent: NodeId::from("ghost"),
        },
        &mut ids,
    );
    assert!(result.is_none());
    assert_eq!(ids.next_id(), NodeId::from("n-1"));
}

#[test]
fn add_root_only_when_empty() {
    let mut ids = SequentialIdSource::new("n");
    let data = chart();
    assert!(OrgTree::new(&data, true)
        .dispatch(OrgControl::AddRoot, &mut ids)
        .is_none());

    let empty = Forest::new();
    let next = OrgTree::new(&empty, true)
        .dispatch(OrgControl::AddRoot, &mut ids)
        .expect("forest");
    assert_eq!(next.root_count(), 1);
    assert_eq!(next.root(0).map(|n| n.name()), Some(NEW_NODE_NAME));
}

#[test]
fn add_child_respects_depth_limit() {
    let data = chart();
    let mut ids = SequentialIdSource::new("n");
    let tree = OrgTree::new(&data, true).with_max_depth(2);

    assert!(tree
        .dispatch(OrgControl::AddChild { parent: NodeId::from("c1") }, &mut ids)
        .is_none());
    let next = tree
        .dispatch(OrgControl::AddChild { parent: NodeId::from("r2") }, &mut ids)
        .expect("forest");
    assert_eq!(next.len(), data.len() + 1);
}

#[test]
fn confirmed_delete_removes_subtree() {
    let data = chart();
    let mut ids = SequentialIdSource::new("n");
    let next = OrgTree::new(&data, true)
        .dispatch(
            OrgControl::Delete(DeleteConfirmation::granted(NodeId::from("r1"))),
            &mut ids,
        )
        .expect("forest");
    assert_eq!(next.ids(), vec![NodeId::from("r2")]);
}

#[test]
fn rows_carry_connectors() {
    let data = chart();
    let tree = OrgTree::new(&data, false);
    let prefixes: Vec<String> = tree.rows().into_iter().map(|row| row.prefix).collect();
    assert_eq!(prefixes, vec!["", "├─ ", "└─ ", ""]);
}

#[test]
fn nested_connectors_extend_guides() {
    let grandchild = OrgNode::new(NodeId::from("g"), "G", "Intern");
    let first = OrgNode::new(NodeId::from("a"), "A", "Lead")
        .with_children(Forest::from_nodes([grandchild]));
    let second = OrgNode::new(NodeId::from("b"), "B", "Lead");
    let root = OrgNode::new(NodeId::from("r"), "R", "CEO")
        .with_children(Forest::from_nodes([first, second]));
    let data = Forest::from_nodes([root]);

    let prefixes: Vec<String> = OrgTree::new(&data, false)
        .rows()
        .into_iter()
        .map(|row| row.prefix)
        .collect();
    assert_eq!(prefixes, vec!["", "├─ ", "│  └─ ", "└─ "]);
}

#[test]
fn deep_levels_collapse_to_marker() {
    let data = chart();
    let rows = OrgTree::new(&data, false).with_max_depth(1).rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].kind, OrgRowKind::Truncated);
    assert_eq!(rows[1].depth, 1);
}

#[test]
fn photo_badges() {
    let data = chart();
    let badge = |id: &str| PhotoBadge::for_node(data.find(&NodeId::from(id)).expect("node"));
    assert_eq!(badge("c1"), PhotoBadge::Placeholder);
    assert_eq!(badge("c2"), PhotoBadge::Photo);
    assert_eq!(badge("r2"), PhotoBadge::Fallback);
    assert_eq!(
        data.find(&NodeId::from("r2")).and_then(|n| n.photo()),
        Some("not a url")
    );
}

#[test]
fn empty_chart_messages_depend_on_mode() {
    let empty = Forest::new();
    let theme = UiTheme::default();

    let read_only = OrgTree::new(&empty, false).lines(None, &theme);
    assert_eq!(read_only.len(), 1);
    assert_eq!(line_text(&read_only[0]), EMPTY_READ_ONLY);

    let editing = OrgTree::new(&empty, true).lines(None, &theme);
    assert_eq!(line_text(&editing[0]), EMPTY_EDIT_TITLE);
    assert!(line_text(&editing[1]).contains(EMPTY_EDIT_HINT));
}

#[test]
fn card_lines_show_name_and_position() {
    let data = chart();
    let theme = UiTheme::default();
    let lines = OrgTree::new(&data, false).lines(None, &theme);
    assert_eq!(line_text(&lines[0]), "[ ] Bob · CEO");
    assert_eq!(line_text(&lines[2]), "└─ [@] Dave · Designer");
    assert_eq!(line_text(&lines[3]), "[x] Carol · CFO");
}

#[test]
fn render_shows_hints_only_in_edit_mode() {
    let data = chart();
    let theme = UiTheme::default();

    let mut terminal = Terminal::new(TestBackend::new(80, 10)).expect("terminal");
    terminal
        .draw(|frame| {
            let area = frame.area();
            OrgTree::new(&data, false).render(frame, area, None, &theme);
        })
        .expect("draw");
    let text = buffer_text(&terminal);
    assert!(text.contains("Organization Structure"));
    assert!(text.contains("Bob"));
    assert!(!text.contains("Add subordinate"));

    let selected = NodeId::from("c1");
    terminal
        .draw(|frame| {
            let area = frame.area();
            OrgTree::new(&data, true).render(frame, area, Some(&selected), &theme);
        })
        .expect("draw");
    assert!(buffer_text(&terminal).contains("Add subordinate"));
}

#[test]
fn edit_hints_take_a_single_row() {
    let data = chart();
    let theme = UiTheme::default();

    // Border leaves four rows: three cards and the hint line.
    let mut terminal = Terminal::new(TestBackend::new(80, 6)).expect("terminal");
    terminal
        .draw(|frame| {
            let area = frame.area();
            OrgTree::new(&data, true).render(frame, area, None, &theme);
        })
        .expect("draw");
    let text = buffer_text(&terminal);
    assert!(text.contains("Dave"));
    assert!(!text.contains("Carol"));
    assert!(text.contains("Add subordinate"));
}

#[test]
fn read_only_then_edit_then_save_round_trips() {
    let data = chart();
    let theme = UiTheme::default();
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");

    for editing in [false, true] {
        terminal
            .draw(|frame| {
                let area = frame.area();
                OrgTree::new(&data, editing).render(frame, area, None, &theme);
            })
            .expect("draw");
    }

    let json = serde_json::to_string(&data).expect("serialize");
    let saved: Forest = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(saved, data);
}
