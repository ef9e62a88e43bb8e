//! Fixed-capacity, insertion-ordered set of entity refs.

use crate::error::SelectionError;
use crate::ids::EntityRef;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Capacity of the selection set and of the search result list.
pub const SELECTION_CAPACITY: usize = 128;

/// A set of unique [`EntityRef`]s holding at most `N` entries.
///
/// Insertion order is preserved. Adding to a full set or adding a duplicate
/// fails without touching the contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedSet<const N: usize> {
    refs: SmallVec<[EntityRef; N]>,
}

/// The selection set used by the marking model and the search result list.
pub type SelectionSet = BoundedSet<SELECTION_CAPACITY>;

impl<const N: usize> BoundedSet<N> {
    pub fn new() -> Self {
        Self {
            refs: SmallVec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.refs.len() >= N
    }

    pub fn contains(&self, obj: &EntityRef) -> bool {
        self.refs.contains(obj)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityRef> {
        self.refs.iter()
    }

    pub fn as_slice(&self) -> &[EntityRef] {
        &self.refs
    }

    /// Appends `obj`.
    ///
    /// # Errors
    ///
    /// [`SelectionError::Duplicate`] if already present,
    /// [`SelectionError::Full`] if the set holds `N` entries.
    pub fn add(&mut self, obj: EntityRef) -> Result<(), SelectionError> {
        if self.contains(&obj) {
            return Err(SelectionError::Duplicate(obj));
        }
        if self.is_full() {
            return Err(SelectionError::Full { capacity: N });
        }
        self.refs.push(obj);
        Ok(())
    }

    /// Removes `obj`, keeping the order of the remaining entries.
    pub fn delete(&mut self, obj: &EntityRef) -> Result<(), SelectionError> {
        match self.refs.iter().position(|r| r == obj) {
            Some(index) => {
                self.refs.remove(index);
                Ok(())
            }
            None => Err(SelectionError::NotFound(*obj)),
        }
    }

    /// Removes `obj` if present, inserts it otherwise.
    ///
    /// Only the insert can fail, and only with [`SelectionError::Full`].
    pub fn toggle(&mut self, obj: EntityRef) -> Result<(), SelectionError> {
        if self.contains(&obj) {
            self.delete(&obj)
        } else {
            self.add(obj)
        }
    }

    pub fn clear(&mut self) {
        self.refs.clear();
    }
}

impl<const N: usize> Default for BoundedSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a BoundedSet<N> {
    type Item = &'a EntityRef;
    type IntoIter = std::slice::Iter<'a, EntityRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter()
    }
}
