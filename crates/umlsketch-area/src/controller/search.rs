//! Search tool: pick a hit from the result cards and jump into its diagram.

use super::{Context, SketchArea, ToolHandler};
use crate::effect::Effect;
use crate::layout::HitFilter;
use crate::model::Tool;
use umlsketch_core::{FullRef, Table};

pub(crate) struct SearchTool;

impl ToolHandler for SearchTool {
    fn press(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        let hit = ctx.layout.element_at(x, y, HitFilter::None);
        if hit.diagram.is_valid() {
            area.drag.start(x, y, FullRef::from_primary(hit.diagram));
        }
        if hit.is_void() {
            area.clear_focus();
            out.push(Effect::Redraw);
            return;
        }

        // placements are focused through the classifier they show
        let target = if hit.object.primary().is_in(Table::DiagramElement) {
            FullRef::from_primary(hit.object.secondary())
        } else {
            hit.object
        };
        if target != area.marking.focused() {
            area.focus(target, hit.diagram);
        }
        out.push(Effect::Redraw);
    }

    fn release(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        _x: i32,
        _y: i32,
        out: &mut Vec<Effect>,
    ) {
        if !area.drag.is_waiting_for_move() {
            return;
        }
        let Some(dragged) = area.drag.dragged_object() else {
            return;
        };
        let diagram = dragged.primary();
        tracing::debug!("Opening search hit diagram {}", diagram);
        area.request.request_diagram(diagram);
        area.marking.clear_selected();
        area.switch_tool(&*ctx.store, Tool::Edit, out);
        out.push(Effect::Redraw);
    }
}
