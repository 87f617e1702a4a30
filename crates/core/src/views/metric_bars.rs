use vizjoin_scene::{Group, Node, Scene, Shape, ShapeKind, Transition};

use crate::model::MetricRow;
use crate::scale::MetricScales;

pub const SVG_WIDTH: f64 = 500.0;
pub const SVG_HEIGHT: f64 = 400.0;

/// Chart padding inside the SVG bounds.
pub const PADDING_TOP: f64 = 20.0;
pub const PADDING_RIGHT: f64 = 20.0;
pub const PADDING_BOTTOM: f64 = 100.0;
pub const PADDING_LEFT: f64 = 70.0;

pub const BAR_SPACING: f64 = 2.0;

pub const CHART_WIDTH: f64 = SVG_WIDTH - PADDING_LEFT - PADDING_RIGHT;
pub const CHART_HEIGHT: f64 = SVG_HEIGHT - PADDING_TOP - PADDING_BOTTOM;

const SELECTED_FILL: &str = "#FF0000";

/// The bar chart scene: axis groups plus the bars group, positioned by
/// the padding.
pub fn chart_scene() -> Scene {
    let mut scene = Scene::new(SVG_WIDTH, SVG_HEIGHT);

    let mut x_axis = Group::with_id("xAxis");
    x_axis.transform = Some((PADDING_LEFT, PADDING_TOP + CHART_HEIGHT));
    let mut y_axis = Group::with_id("yAxis");
    y_axis.transform = Some((PADDING_LEFT, PADDING_TOP));
    let mut bars = Group::with_id("bars");
    bars.transform = Some((PADDING_LEFT, PADDING_TOP));

    scene.root.children.push(Node::Group(x_axis));
    scene.root.children.push(Node::Group(y_axis));
    scene.root.children.push(Node::Group(bars));
    scene
}

/// Render the year-keyed bars for the selected metric. Every bar carries
/// class `bar`, its year as id, and a fill proportional to its value.
pub fn render_metric_bars(
    scene: &mut Scene,
    rows: &[MetricRow],
    scales: &MetricScales,
    transition: Transition,
) {
    let Some(bars) = scene.group_mut("bars") else {
        return;
    };
    bars.transition = Some(transition);
    bars.join(ShapeKind::Rect, rows, |row, _, el| {
        let x = scales.x.position(row.year).unwrap_or(0.0);
        let y = scales.y.scale(row.datum);
        el.shape = Shape::Rect {
            x,
            y,
            width: scales.x.bandwidth() - BAR_SPACING,
            height: CHART_HEIGHT - y,
        };
        el.id = Some(row.year.to_string());
        el.add_class("bar");
        el.set_fill(scales.fill(row.datum));
    });
}

/// Repaint after a click: every bar gets its scale-derived fill back, then
/// the clicked year turns red.
pub fn paint_selection(scene: &mut Scene, rows: &[MetricRow], scales: &MetricScales, year: i32) {
    let Some(bars) = scene.group_mut("bars") else {
        return;
    };
    for (el, row) in bars.elements_mut(ShapeKind::Rect).zip(rows) {
        el.set_fill(scales.fill(row.datum));
    }
    if let Some(el) = bars.element_by_id_mut(&year.to_string()) {
        el.set_fill(SELECTED_FILL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metric, metric_rows, worldcup::fixtures};

    fn setup() -> (Scene, Vec<MetricRow>, MetricScales) {
        let data = vec![
            fixtures::cup(2010, "ZAF", &["ESP", "NLD"]),
            fixtures::cup(2014, "BRA", &["DEU", "ARG"]),
            fixtures::cup(2018, "RUS", &["FRA", "HRV"]),
        ];
        let rows = metric_rows(&data, Metric::Matches);
        let scales = MetricScales::fit(&rows, CHART_WIDTH, CHART_HEIGHT);
        (chart_scene(), rows, scales)
    }

    #[test]
    fn one_bar_per_edition_keyed_by_year() {
        let (mut scene, rows, scales) = setup();
        render_metric_bars(&mut scene, &rows, &scales, Transition::quad(500));

        let bars = match scene.group_mut("bars") {
            Some(g) => g,
            None => panic!("no bars group"),
        };
        assert_eq!(bars.count(ShapeKind::Rect), 3);
        assert!(bars.element_by_id_mut("2014").is_some());
        assert!(bars.elements(ShapeKind::Rect).all(|el| el.has_class("bar")));
    }

    #[test]
    fn click_paints_one_red_bar_and_restores_the_rest() {
        let (mut scene, rows, scales) = setup();
        render_metric_bars(&mut scene, &rows, &scales, Transition::quad(500));

        paint_selection(&mut scene, &rows, &scales, 2014);
        paint_selection(&mut scene, &rows, &scales, 2018);

        let bars = match scene.group_mut("bars") {
            Some(g) => g,
            None => panic!("no bars group"),
        };
        let red: Vec<&str> = bars
            .elements(ShapeKind::Rect)
            .filter(|el| el.fill.as_deref() == Some("#FF0000"))
            .filter_map(|el| el.id.as_deref())
            .collect();
        assert_eq!(red, vec!["2018"]);
    }

    #[test]
    fn bars_rest_on_the_chart_baseline() {
        let (mut scene, rows, scales) = setup();
        render_metric_bars(&mut scene, &rows, &scales, Transition::quad(500));
        let bars = match scene.group_mut("bars") {
            Some(g) => g,
            None => panic!("no bars group"),
        };
        for el in bars.elements(ShapeKind::Rect) {
            let Shape::Rect { y, height, .. } = el.shape else {
                continue;
            };
            assert_eq!(y + height, CHART_HEIGHT);
        }
    }
}
