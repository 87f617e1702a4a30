/// The latitude/longitude reference grid: 10-degree meridians sampled
/// within +/-80 degrees latitude, and 10-degree parallels across the full
/// longitude span, both sampled every 2.5 degrees.
pub fn graticule_lines() -> Vec<Vec<(f64, f64)>> {
    let mut lines = Vec::new();

    let mut lon = -180.0;
    while lon <= 180.0 {
        let mut meridian = Vec::new();
        let mut lat = -80.0;
        while lat <= 80.0 {
            meridian.push((lon, lat));
            lat += 2.5;
        }
        lines.push(meridian);
        lon += 10.0;
    }

    let mut lat = -80.0;
    while lat <= 80.0 {
        let mut parallel = Vec::new();
        let mut lon = -180.0;
        while lon <= 180.0 {
            parallel.push((lon, lat));
            lon += 2.5;
        }
        lines.push(parallel);
        lat += 10.0;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_meridians_and_parallels() {
        let lines = graticule_lines();
        // 37 meridians (-180..=180 by 10) + 17 parallels (-80..=80 by 10).
        assert_eq!(lines.len(), 37 + 17);

        let meridian = &lines[0];
        assert!(meridian.iter().all(|&(lon, _)| lon == -180.0));
        assert_eq!(meridian.first(), Some(&(-180.0, -80.0)));
        assert_eq!(meridian.last(), Some(&(-180.0, 80.0)));

        let parallel = &lines[37];
        assert!(parallel.iter().all(|&(_, lat)| lat == -80.0));
    }
}
