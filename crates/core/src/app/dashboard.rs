use tracing::{info, warn};
use vizjoin_scene::{Scene, Transition};

use crate::model::{Metric, MetricRow, WorldCup, metric_rows};
use crate::scale::MetricScales;
use crate::views::axis;
use crate::views::info_panel::InfoPanel;
use crate::views::map::{self, Highlight};
use crate::views::metric_bars::{self, CHART_HEIGHT, CHART_WIDTH, chart_scene};
use crate::views::popup::{Popup, country_popup};
use crate::worker::{GeometryError, GeometryTask};

/// The map's lifecycle. It moves `Uninitialized -> Loading -> Ready` once
/// and then cycles `Ready <-> Selected` on each edition pick; it never
/// returns to `Loading`. A worker failure lands in `Failed`, which is
/// terminal — the task fires once, so there is nothing left to wait for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    Uninitialized,
    Loading,
    Ready,
    Selected,
    Failed,
}

/// The world map: a scene, the one-shot geometry task, and the currently
/// applied highlight set.
pub struct MapSubsystem {
    pub scene: Scene,
    state: MapState,
    task: Option<GeometryTask>,
    last: Option<Highlight>,
}

impl Default for MapSubsystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSubsystem {
    pub fn new() -> Self {
        Self {
            scene: map::map_scene(),
            state: MapState::Uninitialized,
            task: None,
            last: None,
        }
    }

    pub fn state(&self) -> MapState {
        self.state
    }

    /// Dispatch the geometry worker. Meaningful only from
    /// `Uninitialized`; later calls are ignored.
    pub fn dispatch(&mut self, task: GeometryTask) {
        if self.state != MapState::Uninitialized {
            warn!("map geometry already dispatched; ignoring");
            return;
        }
        self.task = Some(task);
        self.state = MapState::Loading;
    }

    /// Non-blocking poll for the worker's message. Returns `true` once
    /// the geometry is installed. The error is delivered exactly once;
    /// after that the subsystem sits in `Failed` and polls stay `false`.
    pub fn poll(&mut self) -> Result<bool, GeometryError> {
        let Some(task) = self.task.as_mut() else {
            return Ok(matches!(self.state, MapState::Ready | MapState::Selected));
        };
        match task.try_wait() {
            None => Ok(false),
            Some(result) => {
                self.task = None;
                match result {
                    Ok(geometry) => {
                        self.install(geometry);
                        Ok(true)
                    }
                    Err(e) => {
                        self.state = MapState::Failed;
                        Err(e)
                    }
                }
            }
        }
    }

    /// Block until the geometry arrives (no timeout, no retry).
    pub fn wait(&mut self) -> Result<(), GeometryError> {
        if let Some(task) = self.task.take() {
            match task.wait() {
                Ok(geometry) => self.install(geometry),
                Err(e) => {
                    self.state = MapState::Failed;
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    fn install(&mut self, geometry: crate::model::MapGeometry) {
        map::install_geometry(&mut self.scene, &geometry);
        info!(
            countries = geometry.countries.len(),
            graticule = geometry.graticule.len(),
            "map geometry installed"
        );
        self.state = MapState::Ready;
        // A selection made while loading was applied to an empty map, as
        // markers only; it is not replayed.
        if self.last.is_some() {
            self.state = MapState::Selected;
        }
    }

    /// Highlight one edition: clear the previous selection wholesale,
    /// then mark the new teams, host, and finalist positions.
    pub fn select(&mut self, cup: &WorldCup) {
        if let Some(last) = self.last.take() {
            map::clear_highlight(&mut self.scene, &last);
        }
        self.last = Some(map::apply_highlight(&mut self.scene, cup));
        if self.state == MapState::Ready || self.state == MapState::Selected {
            self.state = MapState::Selected;
        }
    }
}

/// The World Cup dashboard: the full dataset plus the three views that
/// derive from it. There is exactly one source of truth per render — the
/// selected record.
pub struct Dashboard {
    data: Vec<WorldCup>,
    metric: Metric,
    selected_year: Option<i32>,
    pub bar_chart: Scene,
    pub info: InfoPanel,
    pub map: MapSubsystem,
}

impl Dashboard {
    /// The metric shown on first render.
    pub const STARTUP_METRIC: Metric = Metric::Attendance;

    /// The shared 500 ms ease-quad transition.
    pub fn transition() -> Transition {
        Transition::quad(500)
    }

    /// Build the dashboard and draw the initial bar chart. The geometry
    /// task is handed to the map subsystem, which owns it from here.
    pub fn new(data: Vec<WorldCup>, map_task: GeometryTask) -> Self {
        let mut dashboard = Self {
            data,
            metric: Self::STARTUP_METRIC,
            selected_year: None,
            bar_chart: chart_scene(),
            info: InfoPanel::new(),
            map: MapSubsystem::new(),
        };
        dashboard.map.dispatch(map_task);
        dashboard.render_bars();
        dashboard
    }

    pub fn data(&self) -> &[WorldCup] {
        &self.data
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.selected_year
    }

    fn rows(&self) -> Vec<MetricRow> {
        metric_rows(&self.data, self.metric)
    }

    fn render_bars(&mut self) {
        let rows = self.rows();
        let scales = MetricScales::fit(&rows, CHART_WIDTH, CHART_HEIGHT);
        axis::render_axes(&mut self.bar_chart, &scales, CHART_HEIGHT);
        metric_bars::render_metric_bars(&mut self.bar_chart, &rows, &scales, Self::transition());
        if let Some(year) = self.selected_year {
            metric_bars::paint_selection(&mut self.bar_chart, &rows, &scales, year);
        }
    }

    /// Switch the bar chart to another metric. The selection, if any,
    /// stays painted.
    pub fn choose_metric(&mut self, metric: Metric) {
        self.metric = metric;
        self.render_bars();
    }

    /// Click a bar: highlight it and update the info panel and map from
    /// the full record for that year. Re-clicking the same year is
    /// idempotent. An unknown year is logged and ignored.
    pub fn click_bar(&mut self, year: i32) {
        let Some(cup) = self.data.iter().find(|cup| cup.year == year).cloned() else {
            warn!(year, "clicked year not in dataset");
            return;
        };
        self.selected_year = Some(year);

        let rows = self.rows();
        let scales = MetricScales::fit(&rows, CHART_WIDTH, CHART_HEIGHT);
        metric_bars::paint_selection(&mut self.bar_chart, &rows, &scales, year);

        self.info.update(&cup);
        self.map.select(&cup);
    }

    /// Click a country on the map: its participation history as a popup.
    pub fn click_country(&self, iso: &str) -> Popup {
        country_popup(iso, &self.data)
    }

    /// Non-blocking map progress check.
    pub fn poll_map(&mut self) -> Result<bool, GeometryError> {
        self.map.poll()
    }

    /// Block until the map geometry is installed.
    pub fn wait_for_map(&mut self) -> Result<(), GeometryError> {
        self.map.wait()
    }
}
