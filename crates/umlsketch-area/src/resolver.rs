//! Visible diagram resolution
//!
//! Turns a [`ToolRequest`] into the set of diagram cards to lay out: the
//! focused diagram with its parent, plus children in navigate mode or the
//! search hits in search mode. Failures come back as errors so the caller
//! can fall back to the parent and then to the root.

use crate::model::{Tool, ToolRequest};
use umlsketch_core::{EntityRef, StoreError, StoreReader};

/// Counters for content left out of a [`VisibleSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveStats {
    /// Children beyond the card limit
    pub dropped_children: usize,
    /// Duplicate search hits
    pub dropped_duplicates: usize,
    /// Search hits beyond the result capacity
    pub dropped_overflow: usize,
}

/// Diagrams currently on display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleSet {
    pub focused: EntityRef,
    pub parent: EntityRef,
    /// Children of the focused diagram, navigate mode only
    pub children: Vec<EntityRef>,
    /// Search hits, search mode only
    pub search_results: Vec<EntityRef>,
    pub stats: ResolveStats,
}

impl VisibleSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !self.focused.is_valid() && self.search_results.is_empty()
    }
}

/// Resolves requested diagrams against the store
#[derive(Debug, Clone)]
pub struct DiagramResolver {
    max_cards: usize,
}

impl DiagramResolver {
    pub fn new(max_cards: usize) -> Self {
        Self { max_cards }
    }

    /// Resolves `requested` for the tool in `request`.
    ///
    /// A void request means the root diagram, except in search mode where
    /// no focused diagram is needed. A closed database resolves to an
    /// empty set.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if `requested` no longer exists, or any
    /// other store failure.
    pub fn resolve<S: StoreReader + ?Sized>(
        &self,
        store: &S,
        request: &ToolRequest,
        requested: EntityRef,
    ) -> Result<VisibleSet, StoreError> {
        match self.resolve_inner(store, request, requested) {
            Err(err) if err.is_no_database() => Ok(VisibleSet::empty()),
            other => other,
        }
    }

    fn resolve_inner<S: StoreReader + ?Sized>(
        &self,
        store: &S,
        request: &ToolRequest,
        requested: EntityRef,
    ) -> Result<VisibleSet, StoreError> {
        if !store.is_open() {
            return Ok(VisibleSet::empty());
        }
        let tool = request.tool();
        let focused = if requested.is_valid() || tool == Tool::Search {
            requested
        } else {
            self.find_root(store)?
        };

        let mut visible = VisibleSet {
            focused,
            ..VisibleSet::default()
        };
        if focused.is_valid() {
            match store.diagram_parent(focused) {
                Ok(parent) => visible.parent = parent,
                // the search view does not need its focused diagram
                Err(err) if err.is_not_found() && tool == Tool::Search => {
                    visible.focused = EntityRef::VOID;
                }
                Err(err) => return Err(err),
            }
        }

        match tool {
            Tool::Navigate if visible.focused.is_valid() => {
                let mut children = store.diagram_ids_by_parent(visible.focused)?;
                if children.len() > self.max_cards {
                    visible.stats.dropped_children = children.len() - self.max_cards;
                    tracing::warn!(
                        "Diagram {} has {} children; {} not shown",
                        visible.focused,
                        children.len(),
                        visible.stats.dropped_children
                    );
                    children.truncate(self.max_cards);
                }
                visible.children = children;
            }
            Tool::Search => {
                visible.search_results = request.search_results().iter().copied().collect();
                let stats = request.search_stats();
                visible.stats.dropped_duplicates = stats.duplicates;
                visible.stats.dropped_overflow = stats.overflow;
            }
            _ => {}
        }
        Ok(visible)
    }

    fn find_root<S: StoreReader + ?Sized>(&self, store: &S) -> Result<EntityRef, StoreError> {
        let roots = store.diagram_ids_by_parent(EntityRef::VOID)?;
        if roots.len() > 1 {
            tracing::warn!(
                "Database has {} root diagrams; showing {}",
                roots.len(),
                roots[0]
            );
        }
        Ok(roots.first().copied().unwrap_or(EntityRef::VOID))
    }
}
