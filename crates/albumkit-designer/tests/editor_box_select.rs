//! Rubber-band box selection behavior.

use std::collections::HashSet;

use albumkit_core::geometry::{PagePoint, PageRect};
use albumkit_designer::{Design, EditorSession, PageSpec};
use uuid::Uuid;

fn session_with_three() -> (EditorSession, Uuid, Uuid, Uuid) {
    let mut session = EditorSession::new(Design::new("Test Album", PageSpec::default()));
    let a = session
        .add_photo("a", PageRect::new(5.0, 5.0, 10.0, 10.0))
        .unwrap();
    let b = session
        .add_photo("b", PageRect::new(30.0, 30.0, 10.0, 10.0))
        .unwrap();
    let c = session
        .add_photo("c", PageRect::new(70.0, 70.0, 10.0, 10.0))
        .unwrap();
    (session, a, b, c)
}

fn selected_set(session: &EditorSession) -> HashSet<Uuid> {
    session.selection().iter().copied().collect()
}

#[test]
fn box_select_yields_exactly_the_intersecting_set() {
    let (mut session, a, b, c) = session_with_three();

    session.pointer_down(PagePoint::new(2.0, 2.0), false);
    session.pointer_move(PagePoint::new(50.0, 50.0));
    session.pointer_up();

    let selected = selected_set(&session);
    assert_eq!(selected, HashSet::from([a, b]));
    assert!(!selected.contains(&c));
}

#[test]
fn box_select_is_direction_independent() {
    let (mut session, a, b, _) = session_with_three();

    // Top-left to bottom-right.
    session.pointer_down(PagePoint::new(2.0, 2.0), false);
    session.pointer_move(PagePoint::new(50.0, 50.0));
    session.pointer_up();
    let forward = selected_set(&session);

    // Bottom-right to top-left.
    session.pointer_down(PagePoint::new(50.0, 50.0), false);
    session.pointer_move(PagePoint::new(2.0, 2.0));
    session.pointer_up();
    let backward = selected_set(&session);

    assert_eq!(forward, backward);
    assert_eq!(forward, HashSet::from([a, b]));
}

#[test]
fn box_select_recomputes_without_sticky_accumulation() {
    let (mut session, a, b, _) = session_with_three();

    session.pointer_down(PagePoint::new(2.0, 2.0), false);
    // First sweep covers A and B.
    session.pointer_move(PagePoint::new(50.0, 50.0));
    assert_eq!(selected_set(&session), HashSet::from([a, b]));
    // Shrinking the band back drops B again.
    session.pointer_move(PagePoint::new(20.0, 20.0));
    assert_eq!(selected_set(&session), HashSet::from([a]));
    session.pointer_up();
}

#[test]
fn band_rectangle_is_exposed_during_drag_and_cleared_after() {
    let (mut session, ..) = session_with_three();

    session.pointer_down(PagePoint::new(60.0, 60.0), false);
    session.pointer_move(PagePoint::new(50.0, 45.0));
    let band = session.band().expect("band during drag");
    assert_eq!(band, PageRect::new(50.0, 45.0, 10.0, 15.0));

    session.pointer_up();
    assert!(session.band().is_none());
}

#[test]
fn click_on_empty_canvas_clears_selection() {
    let (mut session, a, _, _) = session_with_three();
    session.select_only(a);

    session.pointer_down(PagePoint::new(95.0, 5.0), false);
    session.pointer_up();
    assert!(session.selection().is_empty());
}
