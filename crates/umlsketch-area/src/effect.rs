//! Outbound effects of the sketch area.
//!
//! Every handler returns the effects it produced instead of calling the
//! host directly. The host redraws, forwards clipboard work and shows
//! messages.

use crate::layout::LayoutOrder;
use crate::model::Tool;
use umlsketch_core::{EntityRef, FullRef, SelectionSet};

/// Message shown to the user in the status area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMessage {
    /// A created object clashes with an existing name
    NameNotUnique(String),
    /// A diagram cannot be moved below itself or one of its descendants
    AncestorIsNotDescendant,
    /// A clipboard or delete command found an empty selection
    NothingSelected,
    /// A command needs an open database
    NoDatabase,
}

impl std::fmt::Display for UserMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserMessage::NameNotUnique(name) => write!(f, "Name '{}' is not unique", name),
            UserMessage::AncestorIsNotDescendant => {
                write!(f, "A diagram cannot become a child of its own descendant")
            }
            UserMessage::NothingSelected => write!(f, "Nothing selected"),
            UserMessage::NoDatabase => write!(f, "No database is open"),
        }
    }
}

/// Side effect requested from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    /// The sketch area switched tools on its own
    ToolChanged(Tool),
    UserMessage(UserMessage),
    /// Draw `object` as if it were at `order` while it is dragged
    PreviewOrder { object: FullRef, order: LayoutOrder },
    Cut(SelectionSet),
    Copy(SelectionSet),
    /// Paste the clipboard into `diagram`
    Paste { diagram: EntityRef },
    Delete(SelectionSet),
}

impl Effect {
    pub fn message(message: UserMessage) -> Self {
        Effect::UserMessage(message)
    }
}
