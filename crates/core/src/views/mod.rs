pub mod area;
pub mod axis;
pub mod bars;
pub mod info_panel;
pub mod interact;
pub mod line;
pub mod map;
pub mod metric_bars;
pub mod popup;
pub mod scatter;
pub mod staircase;
