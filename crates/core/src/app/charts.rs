use vizjoin_scene::{Point, Scene};

use crate::model::SampleRow;
use crate::scale::SampleScales;
use crate::views::bars::{SIZE, render_bar_chart};
use crate::views::{area, interact, line, scatter, staircase};

/// Which of the two bar charts an interaction originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarChart {
    A,
    B,
}

/// The seven sample charts. Each owns its scene; `render` rebuilds the
/// scales from the current data and re-renders all of them.
#[derive(Debug, Clone)]
pub struct SampleCharts {
    pub bar_a: Scene,
    pub bar_b: Scene,
    pub line_a: Scene,
    pub line_b: Scene,
    pub area_a: Scene,
    pub area_b: Scene,
    pub scatter: Scene,
}

impl Default for SampleCharts {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleCharts {
    pub fn new() -> Self {
        Self {
            bar_a: Scene::new(SIZE, SIZE),
            bar_b: Scene::new(SIZE, SIZE),
            line_a: Scene::new(SIZE, SIZE),
            line_b: Scene::new(SIZE, SIZE),
            area_a: Scene::new(SIZE, SIZE),
            area_b: Scene::new(SIZE, SIZE),
            scatter: Scene::new(SIZE, SIZE),
        }
    }

    /// The full render pipeline: fresh scales from the data extent, then
    /// every chart re-bound through its join.
    pub fn render(&mut self, rows: &[SampleRow]) {
        let scales = SampleScales::fit(rows, SIZE);

        render_bar_chart(&mut self.bar_a, rows, |r| r.a, &scales.a, &scales.index);
        render_bar_chart(&mut self.bar_b, rows, |r| r.b, &scales.b, &scales.index);

        line::render_line_chart(&mut self.line_a, rows, |r| r.a, &scales.a, &scales.index);
        line::render_line_chart(&mut self.line_b, rows, |r| r.b, &scales.b, &scales.index);

        area::render_area_chart(&mut self.area_a, rows, |r| r.a, &scales.a, &scales.index);
        // Quirk carried from the source exercise: the b area chart maps
        // its values through the a scale. Flagged, not fixed.
        area::render_area_chart(&mut self.area_b, rows, |r| r.b, &scales.a, &scales.index);

        scatter::render_scatterplot(&mut self.scatter, rows, &scales);
    }

    /// Hovering a bar cross-highlights the matching bar in the other
    /// chart.
    pub fn hover_bar(&mut self, chart: BarChart, index: usize) {
        match chart {
            BarChart::A => interact::highlight_bar(&mut self.bar_b, index),
            BarChart::B => interact::highlight_bar(&mut self.bar_a, index),
        }
    }

    /// Mouse-out clears the other chart's highlight.
    pub fn leave_bar(&mut self, chart: BarChart) {
        match chart {
            BarChart::A => interact::clear_bar_highlight(&mut self.bar_b),
            BarChart::B => interact::clear_bar_highlight(&mut self.bar_a),
        }
    }

    /// Hovering a scatter point drops a tooltip label at the pointer.
    pub fn hover_point(&mut self, pointer: Point) {
        interact::show_tooltip(&mut self.scatter, pointer);
    }

    pub fn click_point(&self, row: &SampleRow) {
        interact::log_point(row);
    }

    /// The static staircase rewrite of the `a` bar chart.
    pub fn staircase(&mut self) {
        staircase::staircase(&mut self.bar_a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizjoin_scene::ShapeKind;

    fn rows(n: usize) -> Vec<SampleRow> {
        (0..n)
            .map(|i| SampleRow {
                a: (i + 1) as f64,
                b: (i + 1) as f64 * 0.5,
            })
            .collect()
    }

    #[test]
    fn render_closes_over_every_chart() {
        let mut charts = SampleCharts::new();
        charts.render(&rows(6));
        assert_eq!(charts.bar_a.root.count(ShapeKind::Rect), 6);
        assert_eq!(charts.bar_b.root.count(ShapeKind::Rect), 6);
        assert_eq!(charts.line_a.root.count(ShapeKind::Path), 1);
        assert_eq!(charts.area_b.root.count(ShapeKind::Path), 1);
        assert_eq!(charts.scatter.root.count(ShapeKind::Circle), 6);

        charts.render(&rows(2));
        assert_eq!(charts.bar_a.root.count(ShapeKind::Rect), 2);
        assert_eq!(charts.scatter.root.count(ShapeKind::Circle), 2);
    }

    #[test]
    fn hover_crosses_to_the_other_chart() {
        let mut charts = SampleCharts::new();
        charts.render(&rows(4));

        charts.hover_bar(BarChart::A, 1);
        let b_fills: Vec<Option<String>> = charts
            .bar_b
            .root
            .elements(ShapeKind::Rect)
            .map(|el| el.fill.clone())
            .collect();
        assert_eq!(b_fills[1].as_deref(), Some("red"));
        assert!(charts
            .bar_a
            .root
            .elements(ShapeKind::Rect)
            .all(|el| el.fill.is_none()));

        charts.leave_bar(BarChart::A);
        assert!(charts
            .bar_b
            .root
            .elements(ShapeKind::Rect)
            .all(|el| el.fill.is_none()));
    }
}
