//! Store collaborator interfaces
//!
//! The sketch area never owns the entity store. It reads diagram structure
//! through [`StoreReader`] and issues every structural change through
//! [`StoreWriter`]. Multi-step changes are bracketed with [`UndoMode`]
//! markers so the undo log replays them as one user action.

mod memory;

pub use memory::{MemoryStore, Mutation};

use crate::error::StoreError;
use crate::ids::EntityRef;
use serde::{Deserialize, Serialize};

/// Gap between neighbouring list orders when appending.
pub const LIST_ORDER_STEP: i32 = 32768;

/// Proposes a list order that sorts after `last`.
pub fn list_order_after(last: i32) -> i32 {
    last.saturating_add(LIST_ORDER_STEP)
}

/// Undo boundary marker passed with every mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoMode {
    /// This mutation starts a new user-visible action
    StartNew,
    /// This mutation belongs to the action started before it
    AppendToPrevious,
}

/// Request to create a diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiagram {
    /// Parent diagram, void for a root diagram.
    pub parent: EntityRef,
    pub name: String,
    pub list_order: i32,
}

/// Request to create a classifier and place it in a diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassifier {
    pub diagram: EntityRef,
    /// Enclosing classifier when the new one is nested, void otherwise.
    pub parent_classifier: EntityRef,
    pub name: String,
    pub x_order: i32,
    pub y_order: i32,
}

/// Identities produced by [`StoreWriter::create_classifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedClassifier {
    pub classifier: EntityRef,
    pub element: EntityRef,
}

/// Request to create a feature of a classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeature {
    pub classifier: EntityRef,
    pub name: String,
    pub list_order: i32,
    /// Position of a port on the classifier outline, if the feature is one.
    pub position: Option<(i32, i32)>,
}

/// Request to create a relationship between two classifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRelationship {
    pub from_classifier: EntityRef,
    /// Feature the relationship starts at, void to anchor at the classifier.
    pub from_feature: EntityRef,
    pub to_classifier: EntityRef,
    /// Feature the relationship ends at, void to anchor at the classifier.
    pub to_feature: EntityRef,
    pub name: String,
    pub list_order: i32,
}

/// Read access to the entity store
pub trait StoreReader {
    /// Returns true while a database is open.
    fn is_open(&self) -> bool;

    /// Lists the diagrams whose parent is `parent`; a void parent lists root diagrams.
    fn diagram_ids_by_parent(&self, parent: EntityRef) -> Result<Vec<EntityRef>, StoreError>;

    /// Returns the stored parent pointer of `diagram` (void for a root).
    ///
    /// Fails with [`StoreError::NotFound`] if the diagram does not exist.
    fn diagram_parent(&self, diagram: EntityRef) -> Result<EntityRef, StoreError>;

    /// Returns true if `candidate` lies in the subtree below `ancestor`.
    fn is_descendant(&self, candidate: EntityRef, ancestor: EntityRef) -> Result<bool, StoreError>;
}

/// Mutation access to the entity store
pub trait StoreWriter {
    fn create_diagram(&mut self, new: NewDiagram, undo: UndoMode) -> Result<EntityRef, StoreError>;

    fn create_classifier(
        &mut self,
        new: NewClassifier,
        undo: UndoMode,
    ) -> Result<CreatedClassifier, StoreError>;

    fn create_feature(&mut self, new: NewFeature, undo: UndoMode) -> Result<EntityRef, StoreError>;

    fn create_relationship(
        &mut self,
        new: NewRelationship,
        undo: UndoMode,
    ) -> Result<EntityRef, StoreError>;

    fn update_classifier_list_order(
        &mut self,
        classifier: EntityRef,
        list_order: i32,
        undo: UndoMode,
    ) -> Result<(), StoreError>;

    fn update_classifier_x_y_order(
        &mut self,
        classifier: EntityRef,
        x_order: i32,
        y_order: i32,
        undo: UndoMode,
    ) -> Result<(), StoreError>;

    fn update_feature_list_order(
        &mut self,
        feature: EntityRef,
        list_order: i32,
        undo: UndoMode,
    ) -> Result<(), StoreError>;

    fn update_relationship_list_order(
        &mut self,
        relationship: EntityRef,
        list_order: i32,
        undo: UndoMode,
    ) -> Result<(), StoreError>;

    fn update_diagram_list_order(
        &mut self,
        diagram: EntityRef,
        list_order: i32,
        undo: UndoMode,
    ) -> Result<(), StoreError>;

    fn update_diagram_parent(
        &mut self,
        diagram: EntityRef,
        new_parent: EntityRef,
        undo: UndoMode,
    ) -> Result<(), StoreError>;
}

/// Convenience bound for collaborators that provide both halves.
pub trait Store: StoreReader + StoreWriter {}

impl<T: StoreReader + StoreWriter> Store for T {}
