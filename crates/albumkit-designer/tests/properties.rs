//! Property tests for gesture invariants.

use std::collections::HashSet;

use albumkit_core::constants::MIN_ELEMENT_SIZE;
use albumkit_core::geometry::{PagePoint, PageRect};
use albumkit_designer::{Design, EditorSession, Handle, NudgeDirection, PageSpec};
use proptest::prelude::*;

const HANDLES: [Handle; 8] = [
    Handle::N,
    Handle::S,
    Handle::E,
    Handle::W,
    Handle::Ne,
    Handle::Nw,
    Handle::Se,
    Handle::Sw,
];

const DIRECTIONS: [NudgeDirection; 4] = [
    NudgeDirection::Left,
    NudgeDirection::Right,
    NudgeDirection::Up,
    NudgeDirection::Down,
];

fn session_with_photo(rect: PageRect) -> (EditorSession, uuid::Uuid) {
    let mut session = EditorSession::new(Design::new("Prop Album", PageSpec::default()));
    let id = session.add_photo("ph-prop", rect).expect("one spread exists");
    (session, id)
}

proptest! {
    #[test]
    fn resize_never_inverts_or_collapses(
        handle_idx in 0usize..8,
        dx in -200.0f64..200.0,
        dy in -200.0f64..200.0,
    ) {
        let start = PageRect::new(30.0, 30.0, 25.0, 20.0);
        let (mut session, id) = session_with_photo(start);
        session.select_only(id);

        session.begin_resize(HANDLES[handle_idx], PagePoint::new(30.0, 30.0));
        session.pointer_move(PagePoint::new(30.0 + dx, 30.0 + dy));
        session.pointer_up();

        let element = session.design().spreads[0].element(id).expect("element survives");
        prop_assert!(element.width >= MIN_ELEMENT_SIZE);
        prop_assert!(element.height >= MIN_ELEMENT_SIZE);
    }

    #[test]
    fn corner_resize_anchors_the_opposite_corner(
        corner_idx in 0usize..4,
        dx in -60.0f64..60.0,
        dy in -60.0f64..60.0,
    ) {
        let corners = [Handle::Ne, Handle::Nw, Handle::Se, Handle::Sw];
        let handle = corners[corner_idx];
        let start = PageRect::new(30.0, 30.0, 25.0, 20.0);
        let (mut session, id) = session_with_photo(start);
        session.select_only(id);

        session.begin_resize(handle, PagePoint::new(30.0, 30.0));
        session.pointer_move(PagePoint::new(30.0 + dx, 30.0 + dy));
        session.pointer_up();

        let after = session.design().spreads[0].element(id).expect("element survives").rect();
        let anchor_x = match handle {
            Handle::Nw | Handle::Sw => start.x + start.width,
            _ => start.x,
        };
        let anchor_y = match handle {
            Handle::Nw | Handle::Ne => start.y + start.height,
            _ => start.y,
        };
        let after_x = match handle {
            Handle::Nw | Handle::Sw => after.x + after.width,
            _ => after.x,
        };
        let after_y = match handle {
            Handle::Nw | Handle::Ne => after.y + after.height,
            _ => after.y,
        };
        prop_assert!((after_x - anchor_x).abs() < 1e-9);
        prop_assert!((after_y - anchor_y).abs() < 1e-9);
    }

    #[test]
    fn undoing_every_operation_restores_the_initial_document(
        steps in proptest::collection::vec((0usize..4, any::<bool>()), 1..8),
    ) {
        let (mut session, id) = session_with_photo(PageRect::new(40.0, 40.0, 20.0, 20.0));
        session.select_only(id);
        let initial = session.design().clone();

        for (direction_idx, large) in &steps {
            session.nudge(DIRECTIONS[*direction_idx], *large);
        }
        for _ in 0..steps.len() {
            prop_assert!(session.undo());
        }
        prop_assert_eq!(session.design(), &initial);
    }

    #[test]
    fn box_select_is_direction_independent(
        x1 in 0.0f64..100.0,
        y1 in 0.0f64..100.0,
        x2 in 0.0f64..100.0,
        y2 in 0.0f64..100.0,
    ) {
        let mut session = EditorSession::new(Design::new("Prop Album", PageSpec::default()));
        session.add_photo("ph-a", PageRect::new(5.0, 5.0, 20.0, 20.0)).unwrap();
        session.add_photo("ph-b", PageRect::new(40.0, 40.0, 20.0, 20.0)).unwrap();
        session.add_photo("ph-c", PageRect::new(75.0, 75.0, 20.0, 20.0)).unwrap();

        // Both corners must land on empty canvas, otherwise the drag is a
        // move gesture rather than a box selection.
        let spread = &session.design().spreads[0];
        prop_assume!(spread.hit_test(&PagePoint::new(x1, y1)).is_none());
        prop_assume!(spread.hit_test(&PagePoint::new(x2, y2)).is_none());

        let forward = drag_box(&mut session, PagePoint::new(x1, y1), PagePoint::new(x2, y2));
        let backward = drag_box(&mut session, PagePoint::new(x2, y2), PagePoint::new(x1, y1));
        prop_assert_eq!(forward, backward);
    }
}

fn drag_box(session: &mut EditorSession, from: PagePoint, to: PagePoint) -> HashSet<uuid::Uuid> {
    session.pointer_down(from, false);
    session.pointer_move(to);
    let selected = session.selection().iter().copied().collect();
    session.pointer_up();
    selected
}
