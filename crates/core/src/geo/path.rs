use std::fmt::Write as _;

use super::projection::ConicConformal;

/// Project a country's rings and emit one `M ... L ... Z` subpath per
/// ring. Vertices are projected as-is; there is no adaptive resampling or
/// antimeridian clipping.
pub fn path_for_rings(projection: &ConicConformal, rings: &[Vec<(f64, f64)>]) -> String {
    let mut d = String::new();
    for ring in rings {
        append_points(&mut d, projection, ring);
        if !ring.is_empty() {
            d.push('Z');
        }
    }
    d
}

/// Project an open polyline (a graticule line) to an `M ... L ...` path.
pub fn path_for_line(projection: &ConicConformal, line: &[(f64, f64)]) -> String {
    let mut d = String::new();
    append_points(&mut d, projection, line);
    d
}

fn append_points(d: &mut String, projection: &ConicConformal, points: &[(f64, f64)]) {
    for (i, &(lon, lat)) in points.iter().enumerate() {
        let p = projection.project(lon, lat);
        let command = if i == 0 { 'M' } else { 'L' };
        // Write never fails on a String.
        let _ = write!(d, "{command}{:.2},{:.2}", p.x, p.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::WORLD_VIEW;

    #[test]
    fn ring_paths_close_with_z() {
        let rings = vec![vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]];
        let d = path_for_rings(&WORLD_VIEW, &rings);
        assert!(d.starts_with("M400.00,350.00"));
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches('L').count(), 3);
    }

    #[test]
    fn multipolygon_concatenates_subpaths() {
        let rings = vec![
            vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
            vec![(5.0, 5.0), (6.0, 5.0), (5.0, 6.0)],
        ];
        let d = path_for_rings(&WORLD_VIEW, &rings);
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('Z').count(), 2);
    }

    #[test]
    fn line_paths_stay_open() {
        let d = path_for_line(&WORLD_VIEW, &[(0.0, -10.0), (0.0, 0.0), (0.0, 10.0)]);
        assert!(d.starts_with('M'));
        assert!(!d.contains('Z'));
    }

    #[test]
    fn empty_input_yields_empty_path() {
        assert_eq!(path_for_rings(&WORLD_VIEW, &[]), "");
        assert_eq!(path_for_line(&WORLD_VIEW, &[]), "");
    }
}
