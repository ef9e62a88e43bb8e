//! Table discriminator for stored entities.

use serde::{Deserialize, Serialize};

/// The table an [`EntityRef`](super::EntityRef) points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// No table; a ref with this table is always invalid.
    #[default]
    Void,
    Classifier,
    Feature,
    Relationship,
    DiagramElement,
    Diagram,
}

impl Table {
    /// Single-letter prefix used when printing ids, e.g. `C12` or `D3`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Table::Void => "",
            Table::Classifier => "C",
            Table::Feature => "F",
            Table::Relationship => "R",
            Table::DiagramElement => "E",
            Table::Diagram => "D",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::Void => write!(f, "void"),
            Table::Classifier => write!(f, "classifier"),
            Table::Feature => write!(f, "feature"),
            Table::Relationship => write!(f, "relationship"),
            Table::DiagramElement => write!(f, "diagramelement"),
            Table::Diagram => write!(f, "diagram"),
        }
    }
}
