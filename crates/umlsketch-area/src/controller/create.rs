//! Create tool: classifiers by click, relationships by drag, features by click on a classifier.

use super::{Context, SketchArea, ToolHandler};
use crate::effect::Effect;
use crate::layout::{HitFilter, LayoutOrder, OrderTarget, SubelementId, SubelementKind};
use umlsketch_core::{
    list_order_after, EntityRef, FullRef, NewClassifier, NewFeature, NewRelationship, Table,
    UndoMode,
};

pub(crate) struct CreateTool;

impl ToolHandler for CreateTool {
    fn press(
        &self,
        area: &mut SketchArea,
        ctx: &mut Context<'_>,
        x: i32,
        y: i32,
        out: &mut Vec<Effect>,
    ) {
        let hit = ctx.layout.element_at(x, y, HitFilter::None);
        let primary = hit.object.primary();
        match (hit.kind, primary.table()) {
            (SubelementKind::Space, Table::DiagramElement) => {
                create_classifier(area, ctx, x, y, &hit, hit.object.secondary(), out);
            }
            (SubelementKind::Space, Table::Diagram) => {
                create_classifier(area, ctx, x, y, &hit, EntityRef::VOID, out);
            }
            (_, Table::DiagramElement) | (_, Table::Feature) => {
                area.drag.start(x, y, hit.object);
                area.focus(hit.object, hit.diagram);
            }
            (_, Table::Void) => area.clear_focus(),
            _ => area.focus(hit.object, hit.diagram),
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
        if area.drag.is_dragging() {
            area.highlight_element_at(ctx.layout, x, y, HitFilter::None, out);
            out.push(Effect::Redraw);
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
        if area.drag.is_dragging() {
            let target = ctx.layout.element_at(x, y, HitFilter::None);
            create_relationship(area, ctx, x, y, dragged, &target, out);
        } else if dragged.primary().is_in(Table::DiagramElement) {
            create_feature(area, ctx, x, y, dragged.real_object(), out);
        }
        out.push(Effect::Redraw);
    }
}

/// Classifier and feature a relationship end attaches to.
fn relationship_end(obj: &FullRef) -> Option<(EntityRef, EntityRef)> {
    match obj.primary().table() {
        Table::DiagramElement => Some((obj.secondary(), EntityRef::VOID)),
        Table::Feature => Some((obj.secondary(), obj.primary())),
        Table::Classifier => Some((obj.primary(), EntityRef::VOID)),
        _ => None,
    }
}

fn create_classifier(
    area: &mut SketchArea,
    ctx: &mut Context<'_>,
    x: i32,
    y: i32,
    hit: &SubelementId,
    parent_classifier: EntityRef,
    out: &mut Vec<Effect>,
) {
    let (x_order, y_order, list_order) = match ctx.layout.order_at(x, y, OrderTarget::NewClassifier)
    {
        LayoutOrder::XY { x, y } => (x, y, None),
        LayoutOrder::List(order) => (0, 0, Some(order)),
        LayoutOrder::None => {
            tracing::debug!("No classifier order at ({}, {})", x, y);
            return;
        }
    };
    let new = NewClassifier {
        diagram: hit.diagram,
        parent_classifier,
        name: area.namer.next_name(&area.settings.new_classifier_name),
        x_order,
        y_order,
    };
    let created = match ctx.store.create_classifier(new, UndoMode::StartNew) {
        Ok(created) => created,
        Err(err) => {
            area.report_store_error("Classifier creation", err, out);
            return;
        }
    };
    if let Some(list_order) = list_order {
        if let Err(err) = ctx.store.update_classifier_list_order(
            created.classifier,
            list_order,
            UndoMode::AppendToPrevious,
        ) {
            area.report_store_error("Classifier ordering", err, out);
        }
    }
    tracing::info!("Created classifier {} in {}", created.classifier, hit.diagram);
    area.marking.clear_selected();
    area.focus(FullRef::new(created.element, created.classifier), hit.diagram);
}

fn create_relationship(
    area: &mut SketchArea,
    ctx: &mut Context<'_>,
    x: i32,
    y: i32,
    from: FullRef,
    target: &SubelementId,
    out: &mut Vec<Effect>,
) {
    let (Some((from_classifier, from_feature)), Some((to_classifier, to_feature))) =
        (relationship_end(&from), relationship_end(&target.object))
    else {
        tracing::debug!("Relationship needs classifiers at both ends");
        return;
    };
    let list_order = match ctx.layout.order_at(x, y, OrderTarget::NewRelationship) {
        LayoutOrder::List(order) => order,
        _ => list_order_after(ctx.layout.last_relationship_order().unwrap_or(0)),
    };
    let new = NewRelationship {
        from_classifier,
        from_feature,
        to_classifier,
        to_feature,
        name: area.namer.next_name(&area.settings.new_relationship_name),
        list_order,
    };
    match ctx.store.create_relationship(new, UndoMode::StartNew) {
        Ok(relationship) => {
            tracing::info!(
                "Created relationship {} from {} to {}",
                relationship,
                from_classifier,
                to_classifier
            );
            area.marking.clear_selected();
            area.focus(FullRef::from_primary(relationship), target.diagram);
        }
        Err(err) => area.report_store_error("Relationship creation", err, out),
    }
}

fn create_feature(
    area: &mut SketchArea,
    ctx: &mut Context<'_>,
    x: i32,
    y: i32,
    classifier: EntityRef,
    out: &mut Vec<Effect>,
) {
    let order = ctx.layout.new_feature_order_at(x, y, classifier);
    let new = NewFeature {
        classifier,
        name: area.namer.next_name(&area.settings.new_feature_name),
        list_order: order.list_order,
        position: order.position,
    };
    match ctx.store.create_feature(new, UndoMode::StartNew) {
        Ok(feature) => {
            tracing::info!("Created feature {} of {}", feature, classifier);
            let diagram = area.marking.focused_diagram();
            area.marking.clear_selected();
            area.focus(FullRef::new(feature, classifier), diagram);
        }
        Err(err) => area.report_store_error("Feature creation", err, out),
    }
}
