//! Active tool and the diagrams it asks to display.

use serde::{Deserialize, Serialize};
use umlsketch_core::{EntityRef, SelectionError, SelectionSet};

/// Interaction tool of the sketch area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Navigate,
    Edit,
    Create,
    Search,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tool::Navigate => "navigate",
            Tool::Edit => "edit",
            Tool::Create => "create",
            Tool::Search => "search",
        };
        f.write_str(name)
    }
}

/// Counters from the last [`ToolRequest::set_search_results`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub accepted: usize,
    pub duplicates: usize,
    pub overflow: usize,
}

/// What the user asked to see: tool, focused diagram and search hits
#[derive(Debug, Clone, Default)]
pub struct ToolRequest {
    tool: Tool,
    focused_diagram: EntityRef,
    parent_diagram: EntityRef,
    search_results: SelectionSet,
    search_stats: SearchStats,
}

impl ToolRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn focused_diagram(&self) -> EntityRef {
        self.focused_diagram
    }

    /// Parent of the focused diagram as of the last reload.
    pub fn parent_diagram(&self) -> EntityRef {
        self.parent_diagram
    }

    /// Requests a diagram; its parent is unknown until the next reload.
    pub fn request_diagram(&mut self, diagram: EntityRef) {
        if diagram != self.focused_diagram {
            self.focused_diagram = diagram;
            self.parent_diagram = EntityRef::VOID;
        }
    }

    /// Stores a resolved diagram together with its parent.
    pub fn set_focused_diagram(&mut self, diagram: EntityRef, parent: EntityRef) {
        self.focused_diagram = diagram;
        self.parent_diagram = parent;
    }

    pub fn search_results(&self) -> &SelectionSet {
        &self.search_results
    }

    pub fn search_stats(&self) -> SearchStats {
        self.search_stats
    }

    /// Replaces the search results, dropping duplicates and overflow.
    pub fn set_search_results<I>(&mut self, results: I) -> SearchStats
    where
        I: IntoIterator<Item = EntityRef>,
    {
        self.search_results.clear();
        let mut stats = SearchStats::default();
        for obj in results {
            match self.search_results.add(obj) {
                Ok(()) => stats.accepted += 1,
                Err(SelectionError::Duplicate(_)) => stats.duplicates += 1,
                Err(_) => stats.overflow += 1,
            }
        }
        if stats.duplicates > 0 || stats.overflow > 0 {
            tracing::debug!(
                "Search results: {} duplicates, {} over capacity dropped",
                stats.duplicates,
                stats.overflow
            );
        }
        self.search_stats = stats;
        stats
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
