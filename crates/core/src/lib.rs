pub mod app;
pub mod geo;
pub mod model;
pub mod parsers;
pub mod scale;
pub mod svg;
pub mod views;
pub mod worker;
