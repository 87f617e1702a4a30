pub mod coerce;
pub mod geometry;
pub mod samples;
pub mod worldcup;

pub use geometry::{CountryPath, MapGeometry};
pub use samples::SampleRow;
pub use worldcup::{Metric, MetricRow, WorldCup, metric_rows};
