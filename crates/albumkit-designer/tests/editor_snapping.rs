//! Snap-to-guide behavior during move gestures.

use albumkit_core::constants::SNAP_THRESHOLD;
use albumkit_core::geometry::{PagePoint, PageRect};
use albumkit_designer::{Design, EditorSession, PageSpec};

fn session() -> EditorSession {
    EditorSession::new(Design::new("Test Album", PageSpec::default()))
}

#[test]
fn single_element_move_snaps_hard_to_center() {
    let mut session = session();
    let id = session
        .add_photo("ph-1", PageRect::new(10.0, 10.0, 30.0, 30.0))
        .unwrap();

    // Drag so the proposed x lands just inside the threshold of the
    // centered position (x = 35 for a 30-wide element).
    session.pointer_down(PagePoint::new(20.0, 20.0), false);
    session.pointer_move(PagePoint::new(
        20.0 + 25.0 + SNAP_THRESHOLD / 2.0,
        20.0 + 25.0 - SNAP_THRESHOLD / 2.0,
    ));

    let element = session.design().spreads[0].element(id).unwrap();
    // Hard snap: exactly centered, not approximately.
    assert_eq!(element.x, 50.0 - element.width / 2.0);
    assert_eq!(element.y, 50.0 - element.height / 2.0);

    let guides = session.snap_guides();
    assert_eq!(guides.vertical, Some(50.0));
    assert_eq!(guides.horizontal, Some(50.0));

    session.pointer_up();
    let guides = session.snap_guides();
    assert_eq!(guides.vertical, None);
    assert_eq!(guides.horizontal, None);
}

#[test]
fn moves_outside_threshold_do_not_snap() {
    let mut session = session();
    let id = session
        .add_photo("ph-1", PageRect::new(10.0, 10.0, 30.0, 30.0))
        .unwrap();

    session.pointer_down(PagePoint::new(20.0, 20.0), false);
    session.pointer_move(PagePoint::new(30.0, 20.0));
    let element = session.design().spreads[0].element(id).unwrap();
    assert_eq!(element.x, 20.0);
    assert_eq!(session.snap_guides().vertical, None);
    session.pointer_up();
}

#[test]
fn element_snaps_to_canvas_edges() {
    let mut session = session();
    let id = session
        .add_photo("ph-1", PageRect::new(10.0, 10.0, 30.0, 30.0))
        .unwrap();

    // Toward the left edge.
    session.pointer_down(PagePoint::new(20.0, 20.0), false);
    session.pointer_move(PagePoint::new(20.0 - 10.0 + SNAP_THRESHOLD / 2.0, 20.0));
    let element = session.design().spreads[0].element(id).unwrap();
    assert_eq!(element.x, 0.0);
    assert_eq!(session.snap_guides().vertical, Some(0.0));
    session.pointer_up();

    // Toward the right edge (trailing edge at 100). The element now sits
    // at x = 0 after the first snap.
    session.pointer_down(PagePoint::new(10.0, 20.0), false);
    session.pointer_move(PagePoint::new(10.0 + 70.0 - SNAP_THRESHOLD / 2.0, 20.0));
    let element = session.design().spreads[0].element(id).unwrap();
    assert_eq!(element.x, 70.0);
    assert_eq!(session.snap_guides().vertical, Some(100.0));
    session.pointer_up();
}

#[test]
fn multi_element_moves_never_snap() {
    let mut session = session();
    let a = session
        .add_photo("ph-a", PageRect::new(10.0, 10.0, 30.0, 30.0))
        .unwrap();
    let b = session
        .add_photo("ph-b", PageRect::new(60.0, 60.0, 20.0, 20.0))
        .unwrap();
    session.select_only(a);

    // Shift-click-drag on the unselected element starts a two-element
    // move, with a delta that would have snapped a lone element to the
    // canvas center.
    session.pointer_down(PagePoint::new(65.0, 65.0), true);
    session.pointer_move(PagePoint::new(65.0 + 25.0 + SNAP_THRESHOLD / 2.0, 65.0));
    session.pointer_up();

    let spread = &session.design().spreads[0];
    // Raw delta applied, no lock onto the center.
    assert_eq!(spread.element(a).unwrap().x, 35.0 + SNAP_THRESHOLD / 2.0);
    assert_eq!(spread.element(b).unwrap().x, 85.0 + SNAP_THRESHOLD / 2.0);
    assert_eq!(session.snap_guides().vertical, None);
}
