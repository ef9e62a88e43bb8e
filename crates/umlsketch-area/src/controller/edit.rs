//! Edit tool: focus, select and reorder elements of the focused diagram.

use super::{Context, SketchArea, ToolHandler};
use crate::effect::Effect;
use crate::layout::{HitFilter, LayoutOrder, OrderTarget};
use umlsketch_core::{FullRef, StoreError, Table, UndoMode};

pub(crate) struct EditTool;

impl ToolHandler for EditTool {
    fn hit_filter(&self) -> HitFilter {
        HitFilter::Lifeline
    }

    fn press(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        let hit = ctx.layout.element_at(x, y, HitFilter::Lifeline);
        if hit.is_void() {
            area.clear_focus();
            out.push(Effect::Redraw);
            return;
        }

        area.drag.start(x, y, hit.object);
        let before = area.marking.focused().real_object();
        area.marking.toggle_focus_and_select(hit.object, hit.diagram);
        if before != area.marking.focused().real_object() {
            area.marking.notify_listeners();
        }
        out.push(Effect::Redraw);
    }

    fn drag_motion(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        if !area.drag.is_dragging() {
            return;
        }
        let Some(dragged) = area.drag.dragged_object() else {
            return;
        };
        area.highlight_element_at(ctx.layout, x, y, HitFilter::Lifeline, out);
        let order = ctx.layout.order_at(x, y, OrderTarget::Object(dragged));
        if order != LayoutOrder::None {
            out.push(Effect::PreviewOrder {
                object: dragged,
                order,
            });
        }
        out.push(Effect::Redraw);
    }

    fn release(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        if !area.drag.is_dragging() {
            return;
        }
        let Some(dragged) = area.drag.dragged_object() else {
            return;
        };
        let order = ctx.layout.order_at(x, y, OrderTarget::Object(dragged));
        match commit_order(ctx, dragged, order) {
            Ok(true) => tracing::debug!("Moved {} to {:?}", dragged, order),
            Ok(false) => tracing::debug!("No order for {} at ({}, {})", dragged, x, y),
            Err(err) => area.report_store_error("Element move", err, out),
        }
        out.push(Effect::Redraw);
    }
}

/// Writes the dropped order of `dragged`. Returns false if nothing applies.
fn commit_order(
    ctx: &mut Context<'_>,
    dragged: FullRef,
    order: LayoutOrder,
) -> Result<bool, StoreError> {
    let primary = dragged.primary();
    let undo = UndoMode::StartNew;
    match (primary.table(), order) {
        (_, LayoutOrder::None) => Ok(false),
        (Table::DiagramElement, LayoutOrder::List(list_order)) => {
            let classifier = dragged.real_object();
            ctx.store
                .update_classifier_list_order(classifier, list_order, undo)?;
            Ok(true)
        }
        (Table::DiagramElement, LayoutOrder::XY { x, y }) => {
            let classifier = dragged.real_object();
            ctx.store
                .update_classifier_x_y_order(classifier, x, y, undo)?;
            Ok(true)
        }
        (Table::Feature, LayoutOrder::List(list_order)) => {
            ctx.store.update_feature_list_order(primary, list_order, undo)?;
            Ok(true)
        }
        (Table::Relationship, LayoutOrder::List(list_order)) => {
            ctx.store
                .update_relationship_list_order(primary, list_order, undo)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
