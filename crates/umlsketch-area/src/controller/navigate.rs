//! Navigate tool: browse the diagram tree, create and move diagrams.

use super::{Context, SketchArea, ToolHandler};
use crate::effect::{Effect, UserMessage};
use crate::layout::{ActionButton, ActionId, HitFilter, NavGap};
use crate::model::Tool;
use umlsketch_core::{EntityRef, FullRef, NewDiagram, StoreError, UndoMode};

pub(crate) struct NavigateTool;

impl ToolHandler for NavigateTool {
    fn press(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        if let Some(button) = ctx.layout.action_at(x, y) {
            create_diagram(area, ctx, button, out);
            out.push(Effect::Redraw);
            return;
        }

        let hit = ctx.layout.element_at(x, y, HitFilter::None);
        if hit.diagram.is_valid() {
            area.drag.start(x, y, FullRef::from_primary(hit.diagram));
        } else {
            area.clear_focus();
        }
        out.push(Effect::Redraw);
    }

    fn hover(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        match ctx.layout.action_at(x, y) {
            Some(button) => {
                if area.marking.highlighted_button() != button.id {
                    area.marking.set_highlighted_button(button.id);
                    out.push(Effect::Redraw);
                }
            }
            None => {
                let hit = ctx.layout.element_at(x, y, HitFilter::None);
                let obj = hit.object.primary();
                let unchanged = area.marking.highlighted_button() == ActionId::None
                    && area.marking.highlighted() == obj
                    && area.marking.highlighted_diagram() == hit.diagram;
                if !unchanged {
                    area.marking.set_highlighted(obj, hit.diagram);
                    out.push(Effect::Redraw);
                }
            }
        }
    }

    fn release(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        let Some(dragged) = area.drag.dragged_object() else {
            return;
        };
        let dragged = dragged.primary();

        if area.drag.is_dragging() {
            if let Some(gap) = ctx.layout.gap_at(x, y) {
                move_diagram(area, ctx, dragged, gap, out);
            }
        } else if dragged == area.request.focused_diagram() {
            area.switch_tool(&*ctx.store, Tool::Edit, out);
        } else {
            area.navigate_to(&*ctx.store, dragged);
        }
        out.push(Effect::Redraw);
    }
}

fn create_diagram(
    area: &mut SketchArea,
    ctx: &mut Context<'_>,
    button: ActionButton,
    out: &mut Vec<Effect>,
) {
    let parent = match button.id {
        ActionId::NewRootDiagram => EntityRef::VOID,
        ActionId::NewChildDiagram => area.request.focused_diagram(),
        ActionId::NewSiblingDiagram => area.request.parent_diagram(),
        ActionId::None => return,
    };
    let name = area.namer.next_name(&area.settings.new_diagram_name);
    let new = NewDiagram {
        parent,
        name,
        list_order: button.list_order,
    };
    match ctx.store.create_diagram(new, UndoMode::StartNew) {
        Ok(diagram) => {
            tracing::info!("Created diagram {} below {}", diagram, parent);
            area.navigate_to(&*ctx.store, diagram);
        }
        Err(err) => area.report_store_error("Diagram creation", err, out),
    }
}

/// Moves `dragged` into the tree slot `gap`, refusing to create a cycle.
fn move_diagram(
    area: &mut SketchArea,
    ctx: &mut Context<'_>,
    dragged: EntityRef,
    gap: NavGap,
    out: &mut Vec<Effect>,
) {
    if gap.parent == dragged {
        out.push(Effect::message(UserMessage::AncestorIsNotDescendant));
        return;
    }
    if gap.parent.is_valid() {
        match ctx.store.is_descendant(gap.parent, dragged) {
            Ok(false) => {}
            Ok(true) => {
                tracing::info!("{} cannot move below its descendant {}", dragged, gap.parent);
                out.push(Effect::message(UserMessage::AncestorIsNotDescendant));
                return;
            }
            Err(err) => {
                area.report_store_error("Descendant check", err, out);
                return;
            }
        }
    }

    let result = if gap.parent.is_valid() {
        ctx.store
            .update_diagram_list_order(dragged, gap.list_order, UndoMode::StartNew)
            .and_then(|()| {
                ctx.store
                    .update_diagram_parent(dragged, gap.parent, UndoMode::AppendToPrevious)
            })
    } else {
        ctx.store
            .update_diagram_parent(dragged, EntityRef::VOID, UndoMode::StartNew)
            .and_then(|()| {
                ctx.store
                    .update_diagram_list_order(dragged, gap.list_order, UndoMode::AppendToPrevious)
            })
    };
    match result {
        Ok(()) => {}
        Err(StoreError::NotFound(missing)) => {
            tracing::warn!("Diagram {} vanished during the move", missing);
        }
        Err(err) => area.report_store_error("Diagram move", err, out),
    }
    // the first write may have landed even if the second failed
    area.refocus_and_reload(&*ctx.store);
}
