use proptest::prelude::*;
use umlsketch_area::{DragPhase, DragState};
use umlsketch_core::{EntityRef, FullRef};

const THRESHOLD: i32 = 5;

proptest! {
    #[test]
    fn click_never_drags(x in -500i32..500, y in -500i32..500, dx in -3i32..=3, dy in -3i32..=3) {
        let mut drag = DragState::new();
        drag.start(x, y, FullRef::from_primary(EntityRef::diagram(1)));
        let phase = drag.move_to(x + dx, y + dy, THRESHOLD);
        prop_assert_eq!(phase, DragPhase::WaitingForMove);
        drag.stop();
        prop_assert!(drag.is_idle());
    }

    #[test]
    fn long_move_passes_through_dragging(
        x in -500i32..500,
        y in -500i32..500,
        dx in 6i32..200,
        flip in any::<bool>(),
    ) {
        let mut drag = DragState::new();
        drag.start(x, y, FullRef::from_primary(EntityRef::diagram(1)));
        let (tx, ty) = if flip { (x, y - dx) } else { (x + dx, y) };
        prop_assert_eq!(drag.move_to(tx, ty, THRESHOLD), DragPhase::Dragging);
        prop_assert_eq!(drag.to(), (tx, ty));
        prop_assert_eq!(drag.from(), (x, y));
        drag.stop();
        prop_assert_eq!(drag.phase(), DragPhase::Idle);
        prop_assert!(drag.dragged_object().is_none());
    }
}
