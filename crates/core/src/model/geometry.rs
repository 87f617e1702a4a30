use serde::{Deserialize, Serialize};

/// One country's boundary, projected to an SVG path string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPath {
    pub id: String,
    pub path: String,
}

/// The geometry worker's output: every country path plus the graticule,
/// all under the same projection.
///
/// Computed once at startup and treated as immutable after installation —
/// the map never re-renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapGeometry {
    pub countries: Vec<CountryPath>,
    pub graticule: Vec<String>,
}
