//! Scripted layout engine and store fixtures shared by the sketch area tests.

#![allow(dead_code)]

use umlsketch_area::{
    ActionButton, Context, Effect, FeatureOrder, HitFilter, LayoutOrder, LayoutQuery, NavGap,
    OrderTarget, SketchArea, SketchEvent, SubelementId, SubelementKind, Tool,
};
use umlsketch_core::{ChangeNotification, EntityRef, FullRef, MemoryStore};

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}

/// Layout answering from scripted rectangles; earlier entries are on top.
#[derive(Debug, Default)]
pub struct ScriptedLayout {
    elements: Vec<(Rect, SubelementId)>,
    actions: Vec<(Rect, ActionButton)>,
    orders: Vec<(Rect, LayoutOrder)>,
    relationship_orders: Vec<(Rect, LayoutOrder)>,
    gaps: Vec<(Rect, NavGap)>,
    feature_order: FeatureOrder,
    last_relationship: Option<i32>,
}

impl ScriptedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(mut self, rect: Rect, hit: SubelementId) -> Self {
        self.elements.push((rect, hit));
        self
    }

    pub fn action(mut self, rect: Rect, button: ActionButton) -> Self {
        self.actions.push((rect, button));
        self
    }

    pub fn order(mut self, rect: Rect, order: LayoutOrder) -> Self {
        self.orders.push((rect, order));
        self
    }

    pub fn relationship_order(mut self, rect: Rect, order: LayoutOrder) -> Self {
        self.relationship_orders.push((rect, order));
        self
    }

    pub fn gap(mut self, rect: Rect, gap: NavGap) -> Self {
        self.gaps.push((rect, gap));
        self
    }

    pub fn feature_order(mut self, order: FeatureOrder) -> Self {
        self.feature_order = order;
        self
    }

    pub fn last_relationship(mut self, order: i32) -> Self {
        self.last_relationship = Some(order);
        self
    }
}

fn first_at<T: Copy>(entries: &[(Rect, T)], x: i32, y: i32) -> Option<T> {
    entries
        .iter()
        .find(|(rect, _)| rect.contains(x, y))
        .map(|(_, value)| *value)
}

impl LayoutQuery for ScriptedLayout {
    fn element_at(&self, x: i32, y: i32, _filter: HitFilter) -> SubelementId {
        first_at(&self.elements, x, y).unwrap_or(SubelementId::VOID)
    }

    fn action_at(&self, x: i32, y: i32) -> Option<ActionButton> {
        first_at(&self.actions, x, y)
    }

    fn order_at(&self, x: i32, y: i32, target: OrderTarget) -> LayoutOrder {
        let entries = match target {
            OrderTarget::NewRelationship => &self.relationship_orders,
            _ => &self.orders,
        };
        first_at(entries, x, y).unwrap_or(LayoutOrder::None)
    }

    fn new_feature_order_at(&self, _x: i32, _y: i32, _classifier: EntityRef) -> FeatureOrder {
        self.feature_order
    }

    fn gap_at(&self, x: i32, y: i32) -> Option<NavGap> {
        first_at(&self.gaps, x, y)
    }

    fn last_relationship_order(&self) -> Option<i32> {
        self.last_relationship
    }

    fn is_on_grid(&self, x: i32, y: i32) -> (bool, bool) {
        (x % 10 == 0, y % 10 == 0)
    }
}

/// Hit on the inner space of a diagram card
pub fn diagram_space(diagram: EntityRef) -> SubelementId {
    SubelementId::new(SubelementKind::Space, FullRef::from_primary(diagram), diagram)
}

/// Hit on the label of a placed classifier
pub fn placed_label(element: EntityRef, classifier: EntityRef, diagram: EntityRef) -> SubelementId {
    SubelementId::new(
        SubelementKind::Label,
        FullRef::new(element, classifier),
        diagram,
    )
}

/// Store with a root diagram `A`, its child `B` and grandchild `C`.
pub struct Tree {
    pub store: MemoryStore,
    pub root: EntityRef,
    pub child: EntityRef,
    pub grandchild: EntityRef,
}

pub fn tree() -> Tree {
    let mut store = MemoryStore::new();
    let root = store.insert_diagram(EntityRef::VOID, "A");
    let child = store.insert_diagram(root, "B");
    let grandchild = store.insert_diagram(child, "C");
    Tree {
        store,
        root,
        child,
        grandchild,
    }
}

/// Sends a single event.
pub fn send(
    area: &mut SketchArea,
    store: &mut MemoryStore,
    layout: &ScriptedLayout,
    event: SketchEvent,
) -> Vec<Effect> {
    let mut ctx = Context::new(store, layout);
    area.handle(event, &mut ctx)
}

/// Press and release at the same pixel.
pub fn click(
    area: &mut SketchArea,
    store: &mut MemoryStore,
    layout: &ScriptedLayout,
    x: i32,
    y: i32,
) -> Vec<Effect> {
    let mut effects = send(area, store, layout, SketchEvent::ButtonPress { x, y });
    effects.extend(send(area, store, layout, SketchEvent::ButtonRelease { x, y }));
    effects
}

/// Press at `from`, move to `to` and release there.
pub fn drag(
    area: &mut SketchArea,
    store: &mut MemoryStore,
    layout: &ScriptedLayout,
    from: (i32, i32),
    to: (i32, i32),
) -> Vec<Effect> {
    let (x, y) = from;
    let mut effects = send(area, store, layout, SketchEvent::ButtonPress { x, y });
    let (x, y) = to;
    effects.extend(send(area, store, layout, SketchEvent::Motion { x, y }));
    effects.extend(send(area, store, layout, SketchEvent::ButtonRelease { x, y }));
    effects
}

/// Sketch area showing the root of `store` with `tool` active.
pub fn opened(store: &MemoryStore, tool: Tool) -> SketchArea {
    let mut area = SketchArea::default();
    area.on_data_changed(ChangeNotification::db_opened(), store);
    area.on_tool_changed(tool, store);
    area
}
