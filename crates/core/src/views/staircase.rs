use vizjoin_scene::{Node, Scene, Shape, ShapeKind};

use super::bars::SIZE;

const BAR_WIDTH: f64 = 20.0;
const STEPS: usize = 10;

/// Rewrite the currently bound bars into a fixed increasing staircase:
/// the first ten rects become 20px bars of height `(i + 1) * 20` anchored
/// to the bottom edge; any further rects are removed.
///
/// A static, non-data-driven exercise — it edits whatever the bar chart
/// last rendered instead of binding data.
pub fn staircase(scene: &mut Scene) {
    let mut step = 0;
    scene.root.children.retain_mut(|node| {
        let Node::Element(el) = node else {
            return true;
        };
        if el.shape.kind() != ShapeKind::Rect {
            return true;
        }
        if step >= STEPS {
            return false;
        }
        let height = (step + 1) as f64 * BAR_WIDTH;
        el.shape = Shape::Rect {
            x: step as f64 * BAR_WIDTH,
            y: SIZE - height,
            width: BAR_WIDTH,
            height,
        };
        step += 1;
        true
    });
}
