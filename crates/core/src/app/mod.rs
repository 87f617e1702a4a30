pub mod charts;
pub mod dashboard;

pub use charts::{BarChart, SampleCharts};
pub use dashboard::{Dashboard, MapState, MapSubsystem};
