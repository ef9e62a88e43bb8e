//! Two-level identifier: the drawn element plus the classifier behind it.

use super::{EntityRef, Table};
use serde::{Deserialize, Serialize};

/// A visible element together with the "real" classifier it stands for.
///
/// The secondary ref is only filled when the primary is a diagram element or a
/// feature: the same classifier can be placed several times in one diagram, so
/// the placement and the classifier are distinct identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FullRef {
    primary: EntityRef,
    secondary: EntityRef,
}

impl FullRef {
    pub const VOID: FullRef = FullRef {
        primary: EntityRef::VOID,
        secondary: EntityRef::VOID,
    };

    pub fn new(primary: EntityRef, secondary: EntityRef) -> Self {
        let full = Self { primary, secondary };
        debug_assert!(
            full.is_legal_combination(),
            "illegal full ref combination ({}, {})",
            primary.table(),
            secondary.table()
        );
        full
    }

    /// A full ref without a secondary part.
    pub fn from_primary(primary: EntityRef) -> Self {
        Self::new(primary, EntityRef::VOID)
    }

    pub fn primary(&self) -> EntityRef {
        self.primary
    }

    pub fn secondary(&self) -> EntityRef {
        self.secondary
    }

    pub fn is_valid(&self) -> bool {
        self.primary.is_valid()
    }

    /// The entity property editors operate on: the classifier for a diagram
    /// element, the primary for everything else.
    pub fn real_object(&self) -> EntityRef {
        if self.primary.table() == Table::DiagramElement {
            self.secondary
        } else {
            self.primary
        }
    }

    /// Checks the (primary, secondary) table pairing.
    pub fn is_legal_combination(&self) -> bool {
        matches!(
            (self.primary.table(), self.secondary.table()),
            (Table::Void, Table::Void)
                | (Table::DiagramElement, Table::Classifier)
                | (Table::Feature, Table::Classifier)
                | (Table::Relationship, Table::Void)
                | (Table::Diagram, Table::Void)
                | (Table::Classifier, Table::Void)
        )
    }
}

impl From<EntityRef> for FullRef {
    fn from(primary: EntityRef) -> Self {
        Self::from_primary(primary)
    }
}

impl std::fmt::Display for FullRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.secondary.is_valid() {
            write!(f, "{}/{}", self.primary, self.secondary)
        } else {
            write!(f, "{}", self.primary)
        }
    }
}
