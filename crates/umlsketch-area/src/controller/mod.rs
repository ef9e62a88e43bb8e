//! Sketch area controller
//!
//! [`SketchArea`] owns the interaction state (marking, drag, tool request
//! and visible diagrams) and turns pointer and key events into store
//! mutations and [`Effect`]s. The store and layout engine are borrowed per
//! event through [`Context`]; the controller never keeps them.
//!
//! Pointer events are interpreted by the [`ToolHandler`] of the active
//! tool. Keys, pointer leave and the inbound notifications are handled
//! here for all tools alike.

mod create;
mod edit;
mod keys;
mod navigate;
mod search;

use crate::effect::{Effect, UserMessage};
use crate::event::SketchEvent;
use crate::layout::{HitFilter, LayoutQuery};
use crate::model::{DragState, MarkingModel, SubscriptionId, Tool, ToolRequest};
use crate::naming::ObjectNamer;
use crate::resolver::{DiagramResolver, VisibleSet};
use umlsketch_core::{
    ChangeKind, ChangeNotification, EntityRef, FullRef, Store, StoreError, StoreReader,
};
use umlsketch_settings::SketchSettings;

/// Collaborators borrowed for the duration of one event
pub struct Context<'a> {
    pub store: &'a mut dyn Store,
    pub layout: &'a dyn LayoutQuery,
}

impl<'a> Context<'a> {
    pub fn new(store: &'a mut dyn Store, layout: &'a dyn LayoutQuery) -> Self {
        Self { store, layout }
    }
}

/// Per-tool interpretation of pointer events.
///
/// Handlers push their effects into `out`; the controller collapses
/// repeated redraw requests afterwards.
pub(crate) trait ToolHandler {
    /// Filter used for hover hit tests.
    fn hit_filter(&self) -> HitFilter {
        HitFilter::None
    }

    fn press(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    );

    /// Pointer motion while a button is held.
    fn drag_motion(
        &self,
        area: &mut SketchArea,
        _ctx: &mut Context<'_>,
        _x: i32,
        _y: i32,
        out: &mut Vec<Effect>,
    ) {
        if area.drag.is_dragging() {
            out.push(Effect::Redraw);
        }
    }

    /// Pointer motion with no button held.
    fn hover(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        area.highlight_element_at(ctx.layout, x, y, self.hit_filter(), out);
    }

    fn release(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    );
}

fn handler_for(tool: Tool) -> &'static dyn ToolHandler {
    match tool {
        Tool::Navigate => &navigate::NavigateTool,
        Tool::Edit => &edit::EditTool,
        Tool::Create => &create::CreateTool,
        Tool::Search => &search::SearchTool,
    }
}

/// Interaction controller of the diagram canvas
#[derive(Debug)]
pub struct SketchArea {
    pub(crate) settings: SketchSettings,
    pub(crate) marking: MarkingModel,
    pub(crate) drag: DragState,
    pub(crate) request: ToolRequest,
    pub(crate) resolver: DiagramResolver,
    pub(crate) visible: VisibleSet,
    pub(crate) namer: ObjectNamer,
}

impl SketchArea {
    pub fn new(settings: SketchSettings) -> Self {
        let resolver = DiagramResolver::new(settings.max_cards);
        Self {
            settings,
            marking: MarkingModel::new(),
            drag: DragState::new(),
            request: ToolRequest::new(),
            resolver,
            visible: VisibleSet::empty(),
            namer: ObjectNamer::new(),
        }
    }

    pub fn settings(&self) -> &SketchSettings {
        &self.settings
    }

    pub fn marking(&self) -> &MarkingModel {
        &self.marking
    }

    /// Direct access for views that change focus or selection themselves.
    pub fn marking_mut(&mut self) -> &mut MarkingModel {
        &mut self.marking
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn request(&self) -> &ToolRequest {
        &self.request
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn tool(&self) -> Tool {
        self.request.tool()
    }

    /// Registers a listener for the focused real object.
    pub fn subscribe_focus<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(EntityRef) + 'static,
    {
        self.marking.subscribe(listener)
    }

    pub fn unsubscribe_focus(&mut self, id: SubscriptionId) -> bool {
        self.marking.unsubscribe(id)
    }

    /// Whether a pixel lies on the vertical / horizontal layout grid.
    pub fn grid_at(&self, layout: &dyn LayoutQuery, x: i32, y: i32) -> (bool, bool) {
        layout.is_on_grid(x, y)
    }

    /// Dispatches one pointer or key event.
    pub fn handle(&mut self, event: SketchEvent, ctx: &mut Context<'_>) -> Vec<Effect> {
        let mut out = Vec::new();
        let handler = handler_for(self.request.tool());
        match event {
            SketchEvent::ButtonPress { x, y } => handler.press(self, ctx, x, y, &mut out),
            SketchEvent::Motion { x, y } => {
                if self.drag.is_idle() {
                    handler.hover(self, ctx, x, y, &mut out);
                } else {
                    let threshold = self.settings.drag_threshold_px;
                    self.drag.move_to(x, y, threshold);
                    handler.drag_motion(self, ctx, x, y, &mut out);
                }
            }
            SketchEvent::ButtonRelease { x, y } => {
                if !self.drag.is_idle() {
                    self.drag.move_to(x, y, self.settings.drag_threshold_px);
                    handler.release(self, ctx, x, y, &mut out);
                }
                self.drag.stop();
            }
            SketchEvent::Leave => {
                if self.marking.clear_highlighted() {
                    out.push(Effect::Redraw);
                }
                if !self.drag.is_idle() {
                    tracing::debug!("Pointer left the sketch area; drag abandoned");
                    self.drag.stop();
                    out.push(Effect::Redraw);
                }
            }
            SketchEvent::Key(key) => keys::handle_key(self, &*ctx.store, key, &mut out),
        }
        collapse_redraws(out)
    }

    /// Reacts to a change notification from the store.
    pub fn on_data_changed<S: StoreReader + ?Sized>(
        &mut self,
        note: ChangeNotification,
        store: &S,
    ) -> Vec<Effect> {
        tracing::debug!("Data changed: {}", note);
        let mut out = Vec::new();
        let previous = self.request.tool();
        match note.kind {
            ChangeKind::DbClosed => {
                self.drag.stop();
                self.request.reset();
                self.marking.reset();
                self.marking.notify_listeners();
            }
            ChangeKind::DbOpened => {
                self.drag.stop();
                self.request.reset();
            }
            ChangeKind::Other => {}
        }
        // a reset falls back to navigate; the host toolbar must follow
        if previous != self.request.tool() {
            out.push(Effect::ToolChanged(self.request.tool()));
        }
        self.refocus_and_reload(store);
        out.push(Effect::Redraw);
        out
    }

    /// Switches tool on request of the host.
    ///
    /// Repeated notifications for the active tool are ignored.
    pub fn on_tool_changed<S: StoreReader + ?Sized>(
        &mut self,
        tool: Tool,
        store: &S,
    ) -> Vec<Effect> {
        if tool == self.request.tool() {
            return Vec::new();
        }
        tracing::info!("Tool changed from {} to {}", self.request.tool(), tool);
        self.drag.stop();
        self.request.set_tool(tool);
        self.refocus_and_reload(store);
        vec![Effect::Redraw]
    }

    /// Shows search hits, switching to the search tool if needed.
    pub fn show_search_results<S, I>(&mut self, results: I, store: &S) -> Vec<Effect>
    where
        S: StoreReader + ?Sized,
        I: IntoIterator<Item = EntityRef>,
    {
        let mut out = Vec::new();
        let stats = self.request.set_search_results(results);
        tracing::debug!("{} search results accepted", stats.accepted);
        if self.request.tool() != Tool::Search {
            self.drag.stop();
            self.request.set_tool(Tool::Search);
            out.push(Effect::ToolChanged(Tool::Search));
        }
        self.refocus_and_reload(store);
        out.push(Effect::Redraw);
        out
    }

    /// Re-resolves the visible diagrams, falling back from the requested
    /// diagram to its cached parent and then to the root.
    pub fn refocus_and_reload<S: StoreReader + ?Sized>(&mut self, store: &S) {
        let requested = self.request.focused_diagram();
        let fallback = self.request.parent_diagram();

        let visible = match self.resolver.resolve(store, &self.request, requested) {
            Ok(visible) => visible,
            Err(err) => {
                tracing::warn!(
                    "Diagram {} not shown ({}); trying parent {}",
                    requested,
                    err,
                    fallback
                );
                self.marking.clear_selected();
                match self.resolver.resolve(store, &self.request, fallback) {
                    Ok(visible) => visible,
                    Err(err) => {
                        tracing::warn!("Parent {} not shown ({}); trying root", fallback, err);
                        self.marking.clear_selected();
                        self.resolver
                            .resolve(store, &self.request, EntityRef::VOID)
                            .unwrap_or_else(|err| {
                                tracing::error!("Root diagram not shown: {}", err);
                                VisibleSet::empty()
                            })
                    }
                }
            }
        };
        self.apply_visible(visible);
    }

    fn apply_visible(&mut self, visible: VisibleSet) {
        self.request.set_focused_diagram(visible.focused, visible.parent);
        if self.request.tool() != Tool::Search && self.marking.focused_diagram() != visible.focused {
            let had_focus = self.marking.focused().is_valid();
            self.marking.set_focused_diagram(visible.focused);
            if had_focus && !self.marking.focused().is_valid() {
                self.marking.notify_listeners();
            }
        }
        self.visible = visible;
    }

    /// Focuses `obj` in `diagram` and notifies listeners if the real object changed.
    pub(crate) fn focus(&mut self, obj: FullRef, diagram: EntityRef) {
        let before = self.marking.focused().real_object();
        self.marking.set_focused(obj, diagram);
        if before != self.marking.focused().real_object() {
            self.marking.notify_listeners();
        }
    }

    pub(crate) fn clear_focus(&mut self) {
        let had_focus = self.marking.focused().is_valid();
        self.marking.clear_focused();
        if had_focus {
            self.marking.notify_listeners();
        }
    }

    /// Shows `diagram`, focuses it and clears the selection.
    pub(crate) fn navigate_to<S: StoreReader + ?Sized>(&mut self, store: &S, diagram: EntityRef) {
        tracing::debug!("Navigating to {}", diagram);
        self.request.request_diagram(diagram);
        self.refocus_and_reload(store);
        let shown = self.request.focused_diagram();
        self.marking.clear_selected();
        self.focus(FullRef::from_primary(shown), shown);
    }

    /// Switches tool from inside the sketch area and tells the host.
    pub(crate) fn switch_tool<S: StoreReader + ?Sized>(
        &mut self,
        store: &S,
        tool: Tool,
        out: &mut Vec<Effect>,
    ) {
        if tool == self.request.tool() {
            return;
        }
        self.request.set_tool(tool);
        self.refocus_and_reload(store);
        out.push(Effect::ToolChanged(tool));
    }

    /// Highlights the element under the pointer; redraws only on change.
    pub(crate) fn highlight_element_at(
        &mut self,
        layout: &dyn LayoutQuery,
        x: i32,
        y: i32,
        filter: HitFilter,
        out: &mut Vec<Effect>,
    ) {
        let hit = layout.element_at(x, y, filter);
        let unchanged = self.marking.highlighted() == hit.object.primary()
            && self.marking.highlighted_kind() == hit.kind
            && self.marking.highlighted_diagram() == hit.diagram;
        if !unchanged {
            self.marking.set_highlighted_subelement(&hit, hit.diagram);
            out.push(Effect::Redraw);
        }
    }

    /// Converts a failed store call into a user message or a log entry.
    pub(crate) fn report_store_error(
        &self,
        operation: &str,
        err: StoreError,
        out: &mut Vec<Effect>,
    ) {
        match err {
            StoreError::DuplicateName(name) => {
                tracing::info!("{} rejected: name '{}' exists", operation, name);
                out.push(Effect::message(UserMessage::NameNotUnique(name)));
            }
            StoreError::NoDatabase => {
                tracing::warn!("{} needs an open database", operation);
            }
            StoreError::InvalidRequest(reason) => {
                tracing::error!("{} rejected as invalid: {}", operation, reason);
            }
            other => {
                tracing::error!("{} failed: {}", operation, other);
            }
        }
    }
}

impl Default for SketchArea {
    fn default() -> Self {
        Self::new(SketchSettings::default())
    }
}

/// Keeps at most one redraw request, as the last effect.
fn collapse_redraws(effects: Vec<Effect>) -> Vec<Effect> {
    let redraw = effects.contains(&Effect::Redraw);
    let mut out: Vec<Effect> = effects
        .into_iter()
        .filter(|e| *e != Effect::Redraw)
        .collect();
    if redraw {
        out.push(Effect::Redraw);
    }
    out
}
