//! Data change notifications
//!
//! The store announces every modification with a [`ChangeNotification`].
//! The sketch area listens for them to reset on database close and to
//! reload its visible diagrams after external edits or undo/redo.

use crate::ids::EntityRef;
use serde::{Deserialize, Serialize};

/// What happened to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// A database was opened
    DbOpened,
    /// The database was closed
    DbClosed,
    /// Any other modification (create, update, delete, undo, redo)
    Other,
}

/// Inbound change notification from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    pub kind: ChangeKind,
    /// The modified entity, void if unknown.
    pub modified: EntityRef,
    /// The parent of the modified entity, void if unknown.
    pub parent: EntityRef,
}

impl ChangeNotification {
    pub fn db_opened() -> Self {
        Self {
            kind: ChangeKind::DbOpened,
            modified: EntityRef::VOID,
            parent: EntityRef::VOID,
        }
    }

    pub fn db_closed() -> Self {
        Self {
            kind: ChangeKind::DbClosed,
            modified: EntityRef::VOID,
            parent: EntityRef::VOID,
        }
    }

    pub fn modified(modified: EntityRef, parent: EntityRef) -> Self {
        Self {
            kind: ChangeKind::Other,
            modified,
            parent,
        }
    }
}

impl std::fmt::Display for ChangeNotification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ChangeKind::DbOpened => write!(f, "Database opened"),
            ChangeKind::DbClosed => write!(f, "Database closed"),
            ChangeKind::Other => write!(f, "Modified {} (parent {})", self.modified, self.parent),
        }
    }
}
