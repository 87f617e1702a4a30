use vizjoin_scene::{JoinStats, Scene, Shape, ShapeKind};

use super::bars::SIZE;
use crate::model::SampleRow;
use crate::scale::SampleScales;

const POINT_RADIUS: f64 = 5.0;

/// Render the scatterplot: a circle per row at `(a, b)`.
pub fn render_scatterplot(
    scene: &mut Scene,
    rows: &[SampleRow],
    scales: &SampleScales,
) -> JoinStats {
    scene.root.join(ShapeKind::Circle, rows, |row, _, el| {
        el.shape = Shape::Circle {
            cx: scales.a.scale(row.a),
            cy: SIZE - scales.b.scale(row.b),
            r: POINT_RADIUS,
        };
    })
}
