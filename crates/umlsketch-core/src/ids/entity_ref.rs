//! Discriminated (table, row) identifier.

use super::Table;
use serde::{Deserialize, Serialize};

/// Row value meaning "no row".
pub const VOID_ROW: i64 = -1;

/// Identifies one stored entity, or nothing at all.
///
/// A ref whose table is [`Table::Void`] is always invalid, whatever the row.
/// The constructor normalizes such refs to `(Void, VOID_ROW)`, so plain
/// structural equality treats every void ref as equal to every other void ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    table: Table,
    row: i64,
}

impl EntityRef {
    /// The void sentinel.
    pub const VOID: EntityRef = EntityRef {
        table: Table::Void,
        row: VOID_ROW,
    };

    /// Creates a ref; a void table forces the row to [`VOID_ROW`].
    pub fn new(table: Table, row: i64) -> Self {
        if table == Table::Void {
            Self::VOID
        } else {
            Self { table, row }
        }
    }

    pub fn classifier(row: i64) -> Self {
        Self::new(Table::Classifier, row)
    }

    pub fn feature(row: i64) -> Self {
        Self::new(Table::Feature, row)
    }

    pub fn relationship(row: i64) -> Self {
        Self::new(Table::Relationship, row)
    }

    pub fn diagram_element(row: i64) -> Self {
        Self::new(Table::DiagramElement, row)
    }

    pub fn diagram(row: i64) -> Self {
        Self::new(Table::Diagram, row)
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn row(&self) -> i64 {
        self.row
    }

    /// A ref is valid when it names a table and a row.
    pub fn is_valid(&self) -> bool {
        self.table != Table::Void && self.row != VOID_ROW
    }

    pub fn is_void(&self) -> bool {
        !self.is_valid()
    }

    /// Returns true if this ref is a valid ref into `table`.
    pub fn is_in(&self, table: Table) -> bool {
        self.table == table && self.is_valid()
    }

    /// Change-detection comparison: two invalid refs count as the same,
    /// otherwise structural equality applies.
    pub fn same_as(&self, other: &EntityRef) -> bool {
        if self.is_void() && other.is_void() {
            true
        } else {
            self == other
        }
    }
}

impl Default for EntityRef {
    fn default() -> Self {
        Self::VOID
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.table == Table::Void {
            write!(f, "void")
        } else {
            write!(f, "{}{:04}", self.table.prefix(), self.row)
        }
    }
}
