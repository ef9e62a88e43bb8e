//! # UmlSketch Core
//!
//! Core types, traits, and utilities for UmlSketch.
//! Provides the identity types every layer shares, the bounded selection
//! set, the store collaborator traits, and change notifications.

pub mod error;
pub mod event;
pub mod ids;
pub mod selection_set;
pub mod store;
pub mod types;

pub use error::{Error, Result, SelectionError, StoreError};

pub use event::{ChangeKind, ChangeNotification};

pub use ids::{EntityRef, FullRef, Table, VOID_ROW};

pub use selection_set::{BoundedSet, SelectionSet, SELECTION_CAPACITY};

pub use store::{
    list_order_after, CreatedClassifier, MemoryStore, Mutation, NewClassifier, NewDiagram,
    NewFeature, NewRelationship, Store, StoreReader, StoreWriter, UndoMode, LIST_ORDER_STEP,
};

// Re-export type aliases for convenience
pub use types::{shared, Shared, SharedVec, UiDataCallback};
