//! Mouse-interaction handlers for the sample charts.
//!
//! The collaborating chart is always an explicit parameter — handlers
//! never capture the scene they mutate.

use tracing::info;
use vizjoin_scene::{Point, Scene, Shape, ShapeKind};

use crate::model::SampleRow;

const HIGHLIGHT: &str = "red";

/// Hovering bar `index` in one chart paints bar `index` of the other
/// chart the highlight color.
pub fn highlight_bar(other: &mut Scene, index: usize) {
    if let Some(el) = other.root.elements_mut(ShapeKind::Rect).nth(index) {
        el.set_fill(HIGHLIGHT);
    }
}

/// Mouse-out clears the fill override on every bar of the other chart,
/// reverting to the stylesheet default.
pub fn clear_bar_highlight(other: &mut Scene) {
    for el in other.root.elements_mut(ShapeKind::Rect) {
        el.clear_fill();
    }
}

/// Hovering a scatter point appends a text label at the pointer's local
/// coordinates and logs them.
///
/// Labels accumulate — nothing removes them on mouse-out. A quirk of the
/// source exercise, reproduced rather than silently fixed.
pub fn show_tooltip(scatter: &mut Scene, pointer: Point) {
    info!(x = pointer.x, y = pointer.y, "tooltip");
    scatter.root.children.push(vizjoin_scene::Node::Element(
        vizjoin_scene::Element::new(Shape::Text {
            x: pointer.x,
            y: pointer.y,
            content: "I'm a label".to_string(),
        }),
    ));
}

/// Clicking a point emits the bound record to the diagnostic channel.
/// No state change.
pub fn log_point(row: &SampleRow) {
    info!(a = row.a, b = row.b, "point clicked");
}
