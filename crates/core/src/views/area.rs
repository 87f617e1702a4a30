use std::fmt::Write as _;

use vizjoin_scene::{Scene, Shape, ShapeKind};

use super::bars::SIZE;
use crate::model::SampleRow;
use crate::scale::LinearScale;

/// Render an area chart: the line chart's top edge, then the baseline
/// walked back, closed into one filled path.
///
/// The `b` chart is rendered with the `a` chart's scale in the app layer —
/// a defect carried over from the source exercise, reproduced rather than
/// silently fixed.
pub fn render_area_chart(
    scene: &mut Scene,
    rows: &[SampleRow],
    value: impl Fn(&SampleRow) -> f64,
    value_scale: &LinearScale,
    index_scale: &LinearScale,
) {
    let mut d = super::line::polyline(rows, &value, value_scale, index_scale);
    if !rows.is_empty() {
        // Baseline from the last x back to the first.
        let last = index_scale.scale((rows.len() - 1) as f64);
        let first = index_scale.scale(0.0);
        let _ = write!(d, "L{last},{SIZE}L{first},{SIZE}Z");
    }
    scene.root.join(ShapeKind::Path, &[d], |d, _, el| {
        el.shape = Shape::Path { d: d.clone() };
    });
}
