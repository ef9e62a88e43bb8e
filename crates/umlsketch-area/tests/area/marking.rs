use proptest::prelude::*;
use umlsketch_area::{ActionId, MarkingModel, SubelementId, SubelementKind};
use umlsketch_core::{shared, EntityRef, FullRef, SharedVec, SELECTION_CAPACITY};

fn action() -> impl Strategy<Value = ActionId> {
    prop_oneof![
        Just(ActionId::None),
        Just(ActionId::NewRootDiagram),
        Just(ActionId::NewChildDiagram),
        Just(ActionId::NewSiblingDiagram),
    ]
}

fn kind() -> impl Strategy<Value = SubelementKind> {
    prop_oneof![
        Just(SubelementKind::Void),
        Just(SubelementKind::Outline),
        Just(SubelementKind::Label),
        Just(SubelementKind::Space),
    ]
}

proptest! {
    #[test]
    fn highlight_facets_are_exclusive(
        button in action(),
        kind in kind(),
        row in 1i64..100,
        subelement_last in any::<bool>(),
    ) {
        let mut marking = MarkingModel::new();
        let diagram = EntityRef::diagram(1);

        marking.set_highlighted_button(button);
        marking.set_highlighted(EntityRef::classifier(row), diagram);
        prop_assert_eq!(marking.highlighted_button(), ActionId::None);

        if subelement_last {
            marking.set_highlighted_button(button);
            let hit = SubelementId::new(kind, FullRef::from_primary(EntityRef::relationship(row)), diagram);
            marking.set_highlighted_subelement(&hit, diagram);
            prop_assert_eq!(marking.highlighted_button(), ActionId::None);
            prop_assert_eq!(marking.highlighted_kind(), kind);
        }

        marking.set_highlighted_button(button);
        prop_assert_eq!(marking.highlighted_kind(), SubelementKind::Void);
        prop_assert!(marking.highlighted().is_void());
    }
}

#[test]
fn test_toggle_focus_and_select_twice_clears() {
    let mut marking = MarkingModel::new();
    let diagram = EntityRef::diagram(1);
    let a = FullRef::new(EntityRef::diagram_element(3), EntityRef::classifier(2));

    marking.toggle_focus_and_select(a, diagram);
    assert_eq!(marking.focused(), a);
    assert_eq!(marking.selected().as_slice(), &[EntityRef::diagram_element(3)]);

    marking.toggle_focus_and_select(a, diagram);
    assert!(!marking.focused().is_valid());
    assert!(marking.selected().is_empty());
    assert_eq!(marking.focused_diagram(), diagram);
}

#[test]
fn test_focusing_another_object_adds_to_selection() {
    let mut marking = MarkingModel::new();
    let diagram = EntityRef::diagram(1);
    let a = FullRef::from_primary(EntityRef::relationship(1));
    let b = FullRef::from_primary(EntityRef::relationship(2));

    marking.toggle_focus_and_select(a, diagram);
    marking.toggle_focus_and_select(b, diagram);
    assert_eq!(marking.focused(), b);
    assert_eq!(marking.selected().len(), 2);
}

#[test]
fn test_full_selection_drops_silently() {
    let mut marking = MarkingModel::new();
    for row in 0..SELECTION_CAPACITY as i64 {
        assert!(marking.toggle_selected(EntityRef::feature(row)));
    }
    assert!(!marking.toggle_selected(EntityRef::feature(999)));
    assert_eq!(marking.selected().len(), SELECTION_CAPACITY);
    assert_eq!(marking.dropped_selections(), 1);
}

#[test]
fn test_listeners_receive_real_object() {
    let mut marking = MarkingModel::new();
    let seen: SharedVec<EntityRef> = shared(Vec::new());
    let sink = seen.clone();
    let id = marking.subscribe(move |obj| sink.borrow_mut().push(obj));

    let placed = FullRef::new(EntityRef::diagram_element(8), EntityRef::classifier(4));
    marking.set_focused(placed, EntityRef::diagram(1));
    marking.notify_listeners();
    assert_eq!(*seen.borrow(), vec![EntityRef::classifier(4)]);

    assert!(marking.unsubscribe(id));
    marking.notify_listeners();
    assert_eq!(seen.borrow().len(), 1);
}
