use vizjoin_scene::{JoinStats, Scene, Shape, ShapeKind};

use crate::model::SampleRow;
use crate::scale::LinearScale;

/// The 200x200 drawing area shared by all sample charts.
pub const SIZE: f64 = 200.0;

/// Render one of the a/b bar charts: a rect per row, one pixel of gap
/// between bars, anchored to the bottom edge.
pub fn render_bar_chart(
    scene: &mut Scene,
    rows: &[SampleRow],
    value: impl Fn(&SampleRow) -> f64,
    value_scale: &LinearScale,
    index_scale: &LinearScale,
) -> JoinStats {
    let bar_width = index_scale.scale(1.0) - 1.0;
    scene.root.join(ShapeKind::Rect, rows, |row, i, el| {
        let height = value_scale.scale(value(row));
        el.shape = Shape::Rect {
            x: index_scale.scale(i as f64),
            y: SIZE - height,
            width: bar_width,
            height,
        };
    })
}
