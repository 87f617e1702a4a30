use vizjoin_scene::{Scene, Shape, ShapeKind};

use crate::scale::MetricScales;

const TICK_LENGTH: f64 = 6.0;
const LABEL_OFFSET: f64 = 9.0;
const Y_TICK_COUNT: usize = 10;

/// Render both axes into their `xAxis`/`yAxis` groups.
///
/// The bottom axis puts one tick at each band's center with the year
/// label rotated 270 degrees at the tick; the left axis draws ~10 nice
/// ticks from the linear scale.
pub fn render_axes(scene: &mut Scene, scales: &MetricScales, chart_height: f64) {
    render_bottom_axis(scene, scales);
    render_left_axis(scene, scales, chart_height);
}

fn render_bottom_axis(scene: &mut Scene, scales: &MetricScales) {
    let centers: Vec<(i32, f64)> = scales
        .x
        .keys()
        .iter()
        .filter_map(|&year| {
            scales
                .x
                .position(year)
                .map(|x| (year, x + scales.x.bandwidth() / 2.0))
        })
        .collect();

    let Some(axis) = scene.group_mut("xAxis") else {
        return;
    };
    axis.join(ShapeKind::Line, &centers, |&(_, x), _, el| {
        el.shape = Shape::Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: TICK_LENGTH,
        };
        el.add_class("tick");
    });
    axis.join(ShapeKind::Text, &centers, |&(year, x), _, el| {
        el.shape = Shape::Text {
            x,
            y: LABEL_OFFSET,
            content: year.to_string(),
        };
        el.rotate = Some(270.0);
        el.add_class("tick-label");
    });
}

fn render_left_axis(scene: &mut Scene, scales: &MetricScales, chart_height: f64) {
    let ticks: Vec<(f64, f64)> = scales
        .y
        .ticks(Y_TICK_COUNT)
        .into_iter()
        .map(|value| (value, scales.y.scale(value)))
        .collect();

    let Some(axis) = scene.group_mut("yAxis") else {
        return;
    };
    // Domain line plus one tick line per value.
    let mut lines: Vec<Shape> = vec![Shape::Line {
        x1: 0.0,
        y1: chart_height,
        x2: 0.0,
        y2: 0.0,
    }];
    lines.extend(ticks.iter().map(|&(_, y)| Shape::Line {
        x1: -TICK_LENGTH,
        y1: y,
        x2: 0.0,
        y2: y,
    }));
    axis.join(ShapeKind::Line, &lines, |shape, i, el| {
        el.shape = shape.clone();
        el.add_class(if i == 0 { "domain" } else { "tick" });
    });
    axis.join(ShapeKind::Text, &ticks, |&(value, y), _, el| {
        el.shape = Shape::Text {
            x: -LABEL_OFFSET,
            y,
            content: format_tick(value),
        };
        el.add_class("tick-label");
    });
}

fn format_tick(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
