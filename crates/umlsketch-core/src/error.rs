//! Error handling for UmlSketch
//!
//! Provides the error types of the sketch-area core:
//! - Selection errors (bounded set capacity and duplicates)
//! - Store errors (database reader and mutation controller outcomes)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::ids::EntityRef;
use thiserror::Error;

/// Selection set error type
///
/// Returned by the bounded selection set. None of these are fatal; callers
/// usually count them and move on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The entity is already a member of the set
    #[error("{0} is already in the set")]
    Duplicate(EntityRef),

    /// The set has reached its capacity
    #[error("Set is full ({capacity} entries)")]
    Full {
        /// The fixed capacity of the set.
        capacity: usize,
    },

    /// The entity is not a member of the set
    #[error("{0} is not in the set")]
    NotFound(EntityRef),
}

/// Store error type
///
/// Represents the outcomes of the database reader and the mutation
/// controller that are not a success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No database is currently open
    #[error("No database open")]
    NoDatabase,

    /// The referenced entity does not exist
    #[error("Entity {0} not found")]
    NotFound(EntityRef),

    /// An entity with the same name already exists
    #[error("Name is not unique: {0}")]
    DuplicateName(String),

    /// The request was malformed or referenced missing data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The query itself failed
    #[error("Query failed: {0}")]
    Query(String),

    /// Generic store error
    #[error("Store error: {0}")]
    Other(String),
}

impl StoreError {
    /// Check if this error means the database is closed
    pub fn is_no_database(&self) -> bool {
        matches!(self, StoreError::NoDatabase)
    }

    /// Check if this error means the entity vanished
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Main error type for UmlSketch
#[derive(Error, Debug)]
pub enum Error {
    /// Selection error
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
