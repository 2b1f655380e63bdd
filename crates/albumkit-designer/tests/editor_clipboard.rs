//! Clipboard, nudge, delete, and shortcut routing.

use std::collections::HashSet;

use albumkit_core::constants::{NUDGE_STEP, NUDGE_STEP_LARGE, PASTE_OFFSET};
use albumkit_core::geometry::PageRect;
use albumkit_designer::{Design, EditorSession, NudgeDirection, PageSpec, Shortcut};

fn session() -> EditorSession {
    EditorSession::new(Design::new("Test Album", PageSpec::default()))
}

#[test]
fn paste_mints_fresh_ids_and_offsets_positions() {
    let mut session = session();
    let a = session
        .add_photo("ph-a", PageRect::new(10.0, 10.0, 20.0, 20.0))
        .unwrap();
    let b = session
        .add_text("Caption", PageRect::new(40.0, 40.0, 25.0, 10.0))
        .unwrap();
    session.select_only(a);
    session.toggle_selected(b);

    session.copy();
    let pasted = session.paste();
    assert_eq!(pasted.len(), 2);

    let spread = &session.design().spreads[0];
    assert_eq!(spread.elements.len(), 4);

    let existing: HashSet<_> = [a, b].into();
    for id in &pasted {
        assert!(!existing.contains(id), "pasted ids must be fresh");
    }

    let source = spread.element(a).unwrap();
    let copy = spread.element(pasted[0]).unwrap();
    assert_eq!(copy.x, source.x + PASTE_OFFSET);
    assert_eq!(copy.y, source.y + PASTE_OFFSET);

    // Paste replaces the selection with the new elements.
    let selected: HashSet<_> = session.selection().iter().copied().collect();
    assert_eq!(selected, pasted.iter().copied().collect::<HashSet<_>>());
}

#[test]
fn paste_with_empty_clipboard_is_a_noop() {
    let mut session = session();
    session
        .add_photo("ph-a", PageRect::new(10.0, 10.0, 20.0, 20.0))
        .unwrap();
    let before = session.design().clone();
    assert!(session.paste().is_empty());
    assert_eq!(session.design(), &before);
}

#[test]
fn copies_are_by_value_with_no_back_reference() {
    let mut session = session();
    let a = session
        .add_photo("ph-a", PageRect::new(10.0, 10.0, 20.0, 20.0))
        .unwrap();
    session.select_only(a);
    session.copy();

    // Deleting the source after copying must not affect the paste.
    session.delete_selected();
    let pasted = session.paste();
    assert_eq!(pasted.len(), 1);
    let spread = &session.design().spreads[0];
    assert_eq!(spread.elements.len(), 1);
    assert_eq!(spread.element(pasted[0]).unwrap().x, 10.0 + PASTE_OFFSET);
}

#[test]
fn nudge_moves_the_whole_selection() {
    let mut session = session();
    let a = session
        .add_photo("ph-a", PageRect::new(10.0, 10.0, 20.0, 20.0))
        .unwrap();
    let b = session
        .add_photo("ph-b", PageRect::new(50.0, 50.0, 20.0, 20.0))
        .unwrap();
    session.select_only(a);
    session.toggle_selected(b);

    session.nudge(NudgeDirection::Right, false);
    session.nudge(NudgeDirection::Down, true);

    let spread = &session.design().spreads[0];
    assert_eq!(spread.element(a).unwrap().x, 10.0 + NUDGE_STEP);
    assert_eq!(spread.element(a).unwrap().y, 10.0 + NUDGE_STEP_LARGE);
    assert_eq!(spread.element(b).unwrap().x, 50.0 + NUDGE_STEP);
    assert_eq!(spread.element(b).unwrap().y, 50.0 + NUDGE_STEP_LARGE);
}

#[test]
fn delete_removes_selection_and_undo_restores_it() {
    let mut session = session();
    let a = session
        .add_photo("ph-a", PageRect::new(10.0, 10.0, 20.0, 20.0))
        .unwrap();
    session.select_only(a);
    session.delete_selected();

    assert!(session.design().spreads[0].elements.is_empty());
    assert!(session.selection().is_empty());

    assert!(session.undo());
    assert!(session.design().spreads[0].element(a).is_some());
}

#[test]
fn shortcuts_route_to_editor_operations() {
    let mut session = session();
    let a = session
        .add_photo("ph-a", PageRect::new(10.0, 10.0, 20.0, 20.0))
        .unwrap();
    session.select_only(a);

    session.apply_shortcut(Shortcut::Copy);
    session.apply_shortcut(Shortcut::Paste);
    assert_eq!(session.design().spreads[0].elements.len(), 2);

    session.apply_shortcut(Shortcut::Undo);
    assert_eq!(session.design().spreads[0].elements.len(), 1);
    session.apply_shortcut(Shortcut::Redo);
    assert_eq!(session.design().spreads[0].elements.len(), 2);

    session.apply_shortcut(Shortcut::ToggleGrid);
    assert!(session.show_grid());

    session.apply_shortcut(Shortcut::SelectAll);
    assert_eq!(session.selection().len(), 2);
    session.apply_shortcut(Shortcut::Delete);
    assert!(session.design().spreads[0].elements.is_empty());
}
