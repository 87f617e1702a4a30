use std::fmt::Write as _;

use vizjoin_scene::{Scene, Shape, ShapeKind};

use super::bars::SIZE;
use crate::model::SampleRow;
use crate::scale::LinearScale;

/// Render a line chart: one polyline through `(index, value)` per chart,
/// bound as a single-datum join so the enter/update/exit closure holds.
pub fn render_line_chart(
    scene: &mut Scene,
    rows: &[SampleRow],
    value: impl Fn(&SampleRow) -> f64,
    value_scale: &LinearScale,
    index_scale: &LinearScale,
) {
    let d = polyline(rows, &value, value_scale, index_scale);
    scene.root.join(ShapeKind::Path, &[d], |d, _, el| {
        el.shape = Shape::Path { d: d.clone() };
    });
}

pub(super) fn polyline(
    rows: &[SampleRow],
    value: impl Fn(&SampleRow) -> f64,
    value_scale: &LinearScale,
    index_scale: &LinearScale,
) -> String {
    let mut d = String::new();
    for (i, row) in rows.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(
            d,
            "{command}{},{}",
            index_scale.scale(i as f64),
            SIZE - value_scale.scale(value(row))
        );
    }
    d
}
