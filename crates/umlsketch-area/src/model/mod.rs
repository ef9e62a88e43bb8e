//! Interaction state owned by the sketch area
//!
//! - [`marking`]: focus, highlight and the bounded selection
//! - [`drag`]: the press / move / release state machine
//! - [`request`]: the active tool and the diagrams it asks to show

pub mod drag;
pub mod listeners;
pub mod marking;
pub mod request;

pub use drag::{DragPhase, DragState};
pub use listeners::{FocusListeners, SubscriptionId};
pub use marking::MarkingModel;
pub use request::{SearchStats, Tool, ToolRequest};
