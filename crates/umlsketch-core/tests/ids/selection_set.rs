use proptest::prelude::*;
use umlsketch_core::{EntityRef, SelectionError, SelectionSet, SELECTION_CAPACITY};

fn filled(count: usize) -> SelectionSet {
    let mut set = SelectionSet::new();
    for row in 0..count as i64 {
        set.add(EntityRef::classifier(row)).expect("room left");
    }
    set
}

#[test]
fn test_duplicate_add_is_rejected() {
    let mut set = SelectionSet::new();
    set.add(EntityRef::feature(1)).expect("empty set");
    assert_eq!(
        set.add(EntityRef::feature(1)),
        Err(SelectionError::Duplicate(EntityRef::feature(1)))
    );
    assert_eq!(set.len(), 1);
}

#[test]
fn test_overflow_keeps_capacity() {
    let mut set = filled(SELECTION_CAPACITY);
    assert!(set.is_full());
    assert_eq!(
        set.add(EntityRef::diagram(1)),
        Err(SelectionError::Full {
            capacity: SELECTION_CAPACITY
        })
    );
    assert_eq!(set.len(), SELECTION_CAPACITY);
    assert!(!set.contains(&EntityRef::diagram(1)));
}

#[test]
fn test_duplicate_wins_over_full() {
    let mut set = filled(SELECTION_CAPACITY);
    assert_eq!(
        set.add(EntityRef::classifier(0)),
        Err(SelectionError::Duplicate(EntityRef::classifier(0)))
    );
}

#[test]
fn test_toggle_on_full_set_removes_member() {
    let mut set = filled(SELECTION_CAPACITY);
    set.toggle(EntityRef::classifier(5)).expect("removal");
    assert_eq!(set.len(), SELECTION_CAPACITY - 1);
}

#[test]
fn test_serde_round_trip_keeps_order() {
    let set = filled(3);
    let json = serde_json::to_string(&set).expect("serialize");
    let back: SelectionSet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.as_slice(), set.as_slice());
}

proptest! {
    #[test]
    fn toggle_twice_restores_membership(
        rows in proptest::collection::vec(0i64..40, 0..20),
        probe in 0i64..40,
    ) {
        let mut set = SelectionSet::new();
        for row in rows {
            let _ = set.add(EntityRef::relationship(row));
        }
        let before = set.contains(&EntityRef::relationship(probe));
        let len = set.len();
        set.toggle(EntityRef::relationship(probe)).expect("below capacity");
        set.toggle(EntityRef::relationship(probe)).expect("below capacity");
        prop_assert_eq!(set.contains(&EntityRef::relationship(probe)), before);
        prop_assert_eq!(set.len(), len);
    }

    #[test]
    fn never_exceeds_capacity(count in 0usize..300) {
        let mut set = SelectionSet::new();
        for row in 0..count as i64 {
            let _ = set.add(EntityRef::diagram(row));
        }
        prop_assert_eq!(set.len(), count.min(SELECTION_CAPACITY));
    }
}
