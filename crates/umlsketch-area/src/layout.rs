//! Layout and hit-test collaborator.
//!
//! The layout engine owns all geometry. The sketch area only asks it what
//! lies under a pixel and which list or x/y order a pixel corresponds to.

use serde::{Deserialize, Serialize};
use umlsketch_core::{EntityRef, FullRef};

/// Which visual facet of an element was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubelementKind {
    #[default]
    Void,
    Outline,
    Label,
    /// The inner space of a classifier or diagram
    Space,
}

/// Result of a hit test: the element, the facet, and the diagram it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubelementId {
    pub kind: SubelementKind,
    pub object: FullRef,
    pub diagram: EntityRef,
}

impl SubelementId {
    pub const VOID: SubelementId = SubelementId {
        kind: SubelementKind::Void,
        object: FullRef::VOID,
        diagram: EntityRef::VOID,
    };

    pub fn new(kind: SubelementKind, object: FullRef, diagram: EntityRef) -> Self {
        Self {
            kind,
            object,
            diagram,
        }
    }

    /// A hit on nothing at all
    pub fn is_void(&self) -> bool {
        !self.object.is_valid()
    }
}

/// Hit-test filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitFilter {
    /// Report exactly what is drawn
    #[default]
    None,
    /// Report a lifeline feature as its owning classifier
    Lifeline,
}

/// Navigation buttons drawn next to the diagram tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActionId {
    #[default]
    None,
    NewRootDiagram,
    NewChildDiagram,
    NewSiblingDiagram,
}

/// A navigation button under the pointer, with the list order a new diagram would get
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub id: ActionId,
    pub list_order: i32,
}

/// Ordering an element would get if dropped at a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutOrder {
    /// No order can be determined at this position
    #[default]
    None,
    /// Position in a list (features, relationships, list-layout classifiers)
    List(i32),
    /// Position on the diagram plane
    XY { x: i32, y: i32 },
}

/// What an order is being computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTarget {
    /// An existing element being moved
    Object(FullRef),
    /// A classifier about to be created
    NewClassifier,
    /// A relationship about to be created
    NewRelationship,
}

/// Orders proposed for a feature about to be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureOrder {
    pub list_order: i32,
    /// Outline position, set only when the new feature would be a port
    pub position: Option<(i32, i32)>,
}

/// Drop slot in the navigation tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGap {
    /// Diagram that would become the parent, void for the root slot
    pub parent: EntityRef,
    pub list_order: i32,
}

/// Geometry queries answered by the layout engine
pub trait LayoutQuery {
    /// Returns the topmost element at a pixel, or [`SubelementId::VOID`].
    fn element_at(&self, x: i32, y: i32, filter: HitFilter) -> SubelementId;

    /// Returns the navigation button at a pixel, if any.
    fn action_at(&self, x: i32, y: i32) -> Option<ActionButton>;

    /// Returns the order `target` would get at a pixel.
    fn order_at(&self, x: i32, y: i32, target: OrderTarget) -> LayoutOrder;

    /// Proposes orders for a new feature of `classifier` at a pixel.
    fn new_feature_order_at(&self, x: i32, y: i32, classifier: EntityRef) -> FeatureOrder;

    /// Returns the navigation tree slot at a pixel, if any.
    fn gap_at(&self, x: i32, y: i32) -> Option<NavGap>;

    /// Highest list order among the relationships currently laid out.
    fn last_relationship_order(&self) -> Option<i32>;

    /// Whether a pixel lies on a vertical / horizontal grid line.
    fn is_on_grid(&self, x: i32, y: i32) -> (bool, bool);
}
