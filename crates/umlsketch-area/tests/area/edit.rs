use crate::common::{click, drag, opened, placed_label, tree, Rect, ScriptedLayout};
use umlsketch_area::{Effect, LayoutOrder, SubelementId, SubelementKind, Tool};
use umlsketch_core::{shared, EntityRef, FullRef, Mutation, SharedVec, UndoMode};

#[test]
fn test_second_click_clears_focus_and_selection() {
    let mut t = tree();
    let placed = t.store.insert_classifier(t.root, "Engine");
    let mut area = opened(&t.store, Tool::Edit);
    let seen: SharedVec<EntityRef> = shared(Vec::new());
    let sink = seen.clone();
    area.subscribe_focus(move |obj| sink.borrow_mut().push(obj));

    let layout = ScriptedLayout::new().element(
        Rect::new(0, 0, 40, 40),
        placed_label(placed.element, placed.classifier, t.root),
    );

    click(&mut area, &mut t.store, &layout, 10, 10);
    assert_eq!(
        area.marking().focused(),
        FullRef::new(placed.element, placed.classifier)
    );
    assert_eq!(area.marking().focused_diagram(), t.root);
    assert_eq!(area.marking().selected().as_slice(), &[placed.element]);

    click(&mut area, &mut t.store, &layout, 10, 10);
    assert!(!area.marking().focused().is_valid());
    assert!(area.marking().selected().is_empty());

    assert_eq!(*seen.borrow(), vec![placed.classifier, EntityRef::VOID]);
    assert!(t.store.mutations().is_empty());
}

#[test]
fn test_drag_commits_x_y_order() {
    let mut t = tree();
    let placed = t.store.insert_classifier(t.root, "Engine");
    let mut area = opened(&t.store, Tool::Edit);
    let dragged = FullRef::new(placed.element, placed.classifier);
    let layout = ScriptedLayout::new()
        .element(
            Rect::new(0, 0, 40, 40),
            placed_label(placed.element, placed.classifier, t.root),
        )
        .order(Rect::new(80, 80, 300, 300), LayoutOrder::XY { x: 100, y: 120 });

    let effects = drag(&mut area, &mut t.store, &layout, (10, 10), (100, 100));

    assert!(effects.contains(&Effect::PreviewOrder {
        object: dragged,
        order: LayoutOrder::XY { x: 100, y: 120 },
    }));
    assert_eq!(
        t.store.mutations(),
        &[Mutation::UpdateClassifierXYOrder {
            classifier: placed.classifier,
            x_order: 100,
            y_order: 120,
            undo: UndoMode::StartNew,
        }]
    );
    assert!(area.drag().is_idle());
}

#[test]
fn test_drag_commits_feature_list_order() {
    let mut t = tree();
    let placed = t.store.insert_classifier(t.root, "Engine");
    let feature = t.store.insert_feature(placed.classifier, "rpm");
    let mut area = opened(&t.store, Tool::Edit);
    let hit = SubelementId::new(
        SubelementKind::Label,
        FullRef::new(feature, placed.classifier),
        t.root,
    );
    let layout = ScriptedLayout::new()
        .element(Rect::new(0, 0, 40, 40), hit)
        .order(Rect::new(80, 80, 300, 300), LayoutOrder::List(-4096));

    drag(&mut area, &mut t.store, &layout, (10, 10), (100, 100));

    assert_eq!(
        t.store.mutations(),
        &[Mutation::UpdateFeatureListOrder {
            feature,
            list_order: -4096,
            undo: UndoMode::StartNew,
        }]
    );
}

#[test]
fn test_drop_without_order_changes_nothing() {
    let mut t = tree();
    let placed = t.store.insert_classifier(t.root, "Engine");
    let mut area = opened(&t.store, Tool::Edit);
    let layout = ScriptedLayout::new().element(
        Rect::new(0, 0, 40, 40),
        placed_label(placed.element, placed.classifier, t.root),
    );

    let effects = drag(&mut area, &mut t.store, &layout, (10, 10), (100, 100));

    assert!(t.store.mutations().is_empty());
    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::PreviewOrder { .. })));
}

#[test]
fn test_click_on_nothing_clears_focus() {
    let mut t = tree();
    let placed = t.store.insert_classifier(t.root, "Engine");
    let mut area = opened(&t.store, Tool::Edit);
    let layout = ScriptedLayout::new().element(
        Rect::new(0, 0, 40, 40),
        placed_label(placed.element, placed.classifier, t.root),
    );

    click(&mut area, &mut t.store, &layout, 10, 10);
    click(&mut area, &mut t.store, &layout, 400, 400);

    assert!(!area.marking().focused().is_valid());
    assert_eq!(area.marking().focused_diagram(), t.root);
    assert_eq!(area.marking().selected().len(), 1);
}
