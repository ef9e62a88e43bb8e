//! Marking model: focus, highlight and selection.

use super::listeners::{FocusListeners, SubscriptionId};
use crate::layout::{ActionId, SubelementId, SubelementKind};
use umlsketch_core::{EntityRef, FullRef, SelectionError, SelectionSet};

/// Which elements are focused, highlighted and selected.
///
/// The focused object always carries the diagram it was focused in; a
/// focused object without a focused diagram is never produced by the
/// operations below. At most one of a highlighted object or a highlighted
/// navigation button is set at any time.
#[derive(Debug, Default)]
pub struct MarkingModel {
    focused: FullRef,
    focused_diagram: EntityRef,
    highlighted: EntityRef,
    highlighted_kind: SubelementKind,
    highlighted_diagram: EntityRef,
    highlighted_button: ActionId,
    selected: SelectionSet,
    dropped_selections: usize,
    listeners: FocusListeners,
}

impl MarkingModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> FullRef {
        self.focused
    }

    pub fn focused_diagram(&self) -> EntityRef {
        self.focused_diagram
    }

    pub fn highlighted(&self) -> EntityRef {
        self.highlighted
    }

    pub fn highlighted_kind(&self) -> SubelementKind {
        self.highlighted_kind
    }

    pub fn highlighted_diagram(&self) -> EntityRef {
        self.highlighted_diagram
    }

    pub fn highlighted_button(&self) -> ActionId {
        self.highlighted_button
    }

    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    /// Number of selection toggles dropped because the set was full.
    pub fn dropped_selections(&self) -> usize {
        self.dropped_selections
    }

    pub fn set_focused(&mut self, obj: FullRef, diagram: EntityRef) {
        if obj.is_valid() && !diagram.is_valid() {
            tracing::warn!("Focusing {} without a diagram; focus cleared", obj);
            self.focused = FullRef::VOID;
        } else {
            self.focused = obj;
        }
        self.focused_diagram = diagram;
    }

    /// Moves the focused diagram. Clears the focused object if the diagram becomes void.
    pub fn set_focused_diagram(&mut self, diagram: EntityRef) {
        self.focused_diagram = diagram;
        if !diagram.is_valid() {
            self.focused = FullRef::VOID;
        }
    }

    /// Adds or removes `obj` from the selection.
    ///
    /// Returns false when the set was full and the object was not added.
    pub fn toggle_selected(&mut self, obj: EntityRef) -> bool {
        match self.selected.toggle(obj) {
            Ok(()) => true,
            Err(SelectionError::Full { capacity }) => {
                self.dropped_selections += 1;
                tracing::warn!(
                    "Selection holds {} objects; {} not selected",
                    capacity,
                    obj
                );
                false
            }
            Err(err) => {
                tracing::error!("Selection toggle of {} failed: {}", obj, err);
                false
            }
        }
    }

    /// Click semantics of the edit tool.
    ///
    /// Clicking the focused object again drops focus and the whole
    /// selection. Clicking anything else focuses it and toggles its
    /// primary id in the selection.
    pub fn toggle_focus_and_select(&mut self, obj: FullRef, diagram: EntityRef) {
        if obj == self.focused {
            self.focused = FullRef::VOID;
            self.selected.clear();
        } else {
            self.set_focused(obj, diagram);
            if obj.is_valid() {
                self.toggle_selected(obj.primary());
            }
        }
    }

    pub fn set_highlighted(&mut self, obj: EntityRef, diagram: EntityRef) {
        self.highlighted = obj;
        self.highlighted_kind = SubelementKind::Void;
        self.highlighted_diagram = diagram;
        self.highlighted_button = ActionId::None;
    }

    pub fn set_highlighted_subelement(&mut self, subelement: &SubelementId, diagram: EntityRef) {
        self.highlighted = subelement.object.primary();
        self.highlighted_kind = subelement.kind;
        self.highlighted_diagram = diagram;
        self.highlighted_button = ActionId::None;
    }

    pub fn set_highlighted_button(&mut self, button: ActionId) {
        self.highlighted = EntityRef::VOID;
        self.highlighted_kind = SubelementKind::Void;
        self.highlighted_diagram = EntityRef::VOID;
        self.highlighted_button = button;
    }

    /// Returns true if anything was highlighted before.
    pub fn clear_highlighted(&mut self) -> bool {
        let had = self.highlighted.is_valid() || self.highlighted_button != ActionId::None;
        self.set_highlighted(EntityRef::VOID, EntityRef::VOID);
        had
    }

    /// Clears the focused object; the focused diagram stays.
    pub fn clear_focused(&mut self) {
        self.focused = FullRef::VOID;
    }

    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    /// Clears all marks; listeners stay subscribed.
    pub fn reset(&mut self) {
        self.focused = FullRef::VOID;
        self.focused_diagram = EntityRef::VOID;
        self.clear_highlighted();
        self.selected.clear();
        self.dropped_selections = 0;
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(EntityRef) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Tells listeners which real object is focused now.
    pub fn notify_listeners(&self) {
        self.listeners.notify(self.focused.real_object());
    }
}
