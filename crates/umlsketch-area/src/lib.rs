//! # UmlSketch Sketch Area
//!
//! Interaction controller for the diagram canvas. It keeps track of what
//! is focused, highlighted and selected, runs the press / move / release
//! state machine, interprets pointer events per tool and decides which
//! diagrams are on display.
//!
//! ## Modules
//!
//! - [`model`]: marking model, drag state and tool request
//! - [`resolver`]: visible diagram resolution with parent / root fallback
//! - [`controller`]: the [`SketchArea`] event dispatcher
//! - [`layout`]: the hit-test collaborator interface
//! - [`effect`]: effects returned to the host

pub mod controller;
pub mod effect;
pub mod event;
pub mod layout;
pub mod model;
pub mod naming;
pub mod resolver;

pub use controller::{Context, SketchArea};
pub use effect::{Effect, UserMessage};
pub use event::{Key, KeyPress, SketchEvent};
pub use layout::{
    ActionButton, ActionId, FeatureOrder, HitFilter, LayoutOrder, LayoutQuery, NavGap,
    OrderTarget, SubelementId, SubelementKind,
};
pub use model::{
    DragPhase, DragState, FocusListeners, MarkingModel, SearchStats, SubscriptionId, Tool,
    ToolRequest,
};
pub use naming::ObjectNamer;
pub use resolver::{DiagramResolver, ResolveStats, VisibleSet};
