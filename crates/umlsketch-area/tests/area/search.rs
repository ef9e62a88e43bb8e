use crate::common::{click, opened, placed_label, send, tree, Rect, ScriptedLayout};
use umlsketch_area::{Effect, KeyPress, SketchEvent, SubelementId, SubelementKind, Tool};
use umlsketch_core::{EntityRef, FullRef};

#[test]
fn test_click_on_hit_opens_its_diagram_in_edit() {
    let mut t = tree();
    let placed = t.store.insert_classifier(t.child, "Engine");
    let mut area = opened(&t.store, Tool::Navigate);
    area.show_search_results([t.child], &t.store);
    area.marking_mut().toggle_selected(EntityRef::feature(12));
    let layout = ScriptedLayout::new().element(
        Rect::new(0, 0, 40, 40),
        placed_label(placed.element, placed.classifier, t.child),
    );

    send(&mut area, &mut t.store, &layout, SketchEvent::ButtonPress { x: 10, y: 10 });
    assert_eq!(
        area.marking().focused(),
        FullRef::from_primary(placed.classifier)
    );
    assert!(area.drag().is_waiting_for_move());

    let effects = send(&mut area, &mut t.store, &layout, SketchEvent::ButtonRelease { x: 10, y: 10 });
    assert!(effects.contains(&Effect::ToolChanged(Tool::Edit)));
    assert_eq!(area.tool(), Tool::Edit);
    assert_eq!(area.request().focused_diagram(), t.child);
    assert_eq!(area.visible().focused, t.child);
    assert!(area.marking().selected().is_empty());
    assert!(t.store.mutations().is_empty());
}

#[test]
fn test_relationship_hit_is_focused_by_identity() {
    let mut t = tree();
    let mut area = opened(&t.store, Tool::Navigate);
    area.show_search_results([t.grandchild], &t.store);
    let relationship = EntityRef::relationship(40);
    let layout = ScriptedLayout::new().element(
        Rect::new(0, 0, 40, 40),
        SubelementId::new(
            SubelementKind::Label,
            FullRef::from_primary(relationship),
            t.grandchild,
        ),
    );

    send(&mut area, &mut t.store, &layout, SketchEvent::ButtonPress { x: 5, y: 5 });

    assert_eq!(area.marking().focused(), FullRef::from_primary(relationship));
    assert_eq!(area.marking().focused_diagram(), t.grandchild);
}

#[test]
fn test_click_on_nothing_stays_in_search() {
    let mut t = tree();
    let mut area = opened(&t.store, Tool::Navigate);
    area.show_search_results([t.child], &t.store);

    click(&mut area, &mut t.store, &ScriptedLayout::new(), 5, 5);

    assert_eq!(area.tool(), Tool::Search);
    assert!(!area.marking().focused().is_valid());
}

#[test]
fn test_paste_targets_diagram_of_focused_hit() {
    let mut t = tree();
    let placed = t.store.insert_classifier(t.child, "Engine");
    let mut area = opened(&t.store, Tool::Navigate);
    area.show_search_results([t.child], &t.store);
    let layout = ScriptedLayout::new().element(
        Rect::new(0, 0, 40, 40),
        placed_label(placed.element, placed.classifier, t.child),
    );

    send(&mut area, &mut t.store, &layout, SketchEvent::ButtonPress { x: 10, y: 10 });
    send(&mut area, &mut t.store, &layout, SketchEvent::Leave);
    assert_eq!(area.tool(), Tool::Search);
    assert_ne!(area.request().focused_diagram(), t.child);

    let effects = send(
        &mut area,
        &mut t.store,
        &layout,
        SketchEvent::Key(KeyPress::ctrl('v')),
    );

    assert_eq!(effects, vec![Effect::Paste { diagram: t.child }]);
}
