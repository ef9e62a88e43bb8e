use crate::common::{click, diagram_space, opened, tree, Rect, ScriptedLayout};
use umlsketch_area::{DiagramResolver, SketchArea, Tool, ToolRequest};
use umlsketch_core::{ChangeNotification, EntityRef, MemoryStore, StoreReader};
use umlsketch_settings::SketchSettings;

/// Navigates into the grandchild and selects an unrelated object.
fn focus_grandchild(store: &mut MemoryStore, grandchild: EntityRef) -> SketchArea {
    let mut area = opened(store, Tool::Navigate);
    let layout = ScriptedLayout::new().element(Rect::new(0, 0, 20, 20), diagram_space(grandchild));
    click(&mut area, store, &layout, 10, 10);
    assert_eq!(area.request().focused_diagram(), grandchild);
    area.marking_mut().toggle_selected(EntityRef::classifier(77));
    area
}

#[test]
fn test_resolving_twice_is_idempotent() {
    let t = tree();
    let resolver = DiagramResolver::new(16);
    let request = ToolRequest::new();
    let first = resolver.resolve(&t.store, &request, t.child).expect("resolve");
    let second = resolver.resolve(&t.store, &request, t.child).expect("resolve");
    assert_eq!(first, second);
    assert_eq!(first.parent, t.root);
    assert_eq!(first.children, vec![t.grandchild]);
}

#[test]
fn test_deleted_diagram_falls_back_to_parent() {
    let mut t = tree();
    let mut area = focus_grandchild(&mut t.store, t.grandchild);
    assert_eq!(area.request().parent_diagram(), t.child);

    t.store.delete_diagram(t.grandchild).expect("delete");
    area.on_data_changed(ChangeNotification::modified(t.grandchild, t.child), &t.store);

    assert_eq!(area.request().focused_diagram(), t.child);
    assert_eq!(area.visible().focused, t.child);
    assert_eq!(area.visible().parent, t.root);
    assert!(area.marking().selected().is_empty());
}

#[test]
fn test_deleted_parent_falls_back_to_root() {
    let mut t = tree();
    let mut area = focus_grandchild(&mut t.store, t.grandchild);

    t.store.delete_diagram(t.grandchild).expect("delete");
    t.store.delete_diagram(t.child).expect("delete");
    area.on_data_changed(ChangeNotification::modified(t.child, t.root), &t.store);

    assert_eq!(area.visible().focused, t.root);
    assert!(area.visible().children.is_empty());
    assert!(area.marking().selected().is_empty());
}

#[test]
fn test_deleted_tree_leaves_nothing_visible() {
    let mut t = tree();
    let mut area = focus_grandchild(&mut t.store, t.grandchild);

    for diagram in [t.grandchild, t.child, t.root] {
        t.store.delete_diagram(diagram).expect("delete");
    }
    area.on_data_changed(ChangeNotification::modified(t.root, EntityRef::VOID), &t.store);

    assert!(area.visible().is_empty());
    assert!(!area.request().focused_diagram().is_valid());
    assert!(area.marking().selected().is_empty());
}

#[test]
fn test_first_of_several_roots_is_shown() {
    let mut store = MemoryStore::new();
    let first = store.insert_diagram(EntityRef::VOID, "first");
    store.insert_diagram(EntityRef::VOID, "second");
    let area = opened(&store, Tool::Navigate);
    assert_eq!(area.visible().focused, first);
}

#[test]
fn test_children_limited_by_settings() {
    let mut store = MemoryStore::new();
    let root = store.insert_diagram(EntityRef::VOID, "root");
    for i in 0..4 {
        store.insert_diagram(root, &format!("child {}", i));
    }
    let settings = SketchSettings {
        max_cards: 2,
        ..SketchSettings::default()
    };
    let mut area = SketchArea::new(settings);
    area.on_data_changed(ChangeNotification::db_opened(), &store);
    assert_eq!(area.visible().children.len(), 2);
    assert_eq!(area.visible().stats.dropped_children, 2);
}

#[test]
fn test_duplicate_search_hits_counted() {
    let t = tree();
    let mut area = opened(&t.store, Tool::Navigate);
    area.show_search_results([t.child, t.grandchild, t.child], &t.store);

    assert_eq!(area.tool(), Tool::Search);
    assert_eq!(area.visible().search_results, vec![t.child, t.grandchild]);
    assert_eq!(area.visible().stats.dropped_duplicates, 1);
}

#[test]
fn test_closed_database_resolves_empty() {
    let mut t = tree();
    let mut area = opened(&t.store, Tool::Navigate);
    t.store.close();
    area.on_data_changed(ChangeNotification::db_closed(), &t.store);
    assert!(!t.store.is_open());
    assert!(area.visible().is_empty());
}
