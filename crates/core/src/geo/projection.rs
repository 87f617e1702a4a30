use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use vizjoin_scene::Point;

/// Spherical conic conformal projection.
///
/// With standard parallels at phi1 = phi2 the cone constant is
/// `n = sin(phi1)`; a parallel projects to the radius
/// `rho = F / tan^n(pi/4 + phi/2)` and a meridian to the angle
/// `n * lambda`. Screen coordinates scale the raw projection by `scale`
/// and flip y about `translate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicConformal {
    n: f64,
    f: f64,
    pub scale: f64,
    pub translate: (f64, f64),
}

/// The one projection both the geometry worker and the marker placement
/// use: parallels 30/30, scale 150, translate (400, 350).
pub const WORLD_VIEW: ConicConformal = {
    // sin/cos of 30 degrees and tan(pi/4 + 15 degrees), precomputed since
    // const fn trigonometry is not available.
    let n = 0.5;
    let f = 0.866_025_403_784_438_7 * 1.316_074_012_952_492_4 / 0.5;
    ConicConformal {
        n,
        f,
        scale: 150.0,
        translate: (400.0, 350.0),
    }
};

impl ConicConformal {
    pub fn new(parallel_deg: f64, scale: f64, translate: (f64, f64)) -> Self {
        let phi = parallel_deg.to_radians();
        let n = phi.sin();
        let f = phi.cos() * tan_half(phi).powf(n) / n;
        Self {
            n,
            f,
            scale,
            translate,
        }
    }

    /// Project a lon/lat pair (degrees) to screen coordinates.
    pub fn project(&self, lon: f64, lat: f64) -> Point {
        let lambda = lon.to_radians();
        // Nudge latitudes off the poles, where the radius diverges.
        let epsilon = 1e-6;
        let phi = lat
            .to_radians()
            .clamp(-FRAC_PI_2 + epsilon, FRAC_PI_2 - epsilon);

        let rho = self.f / tan_half(phi).powf(self.n);
        let x = rho * (self.n * lambda).sin();
        let y = self.f - rho * (self.n * lambda).cos();

        Point::new(
            self.translate.0 + self.scale * x,
            self.translate.1 - self.scale * y,
        )
    }
}

fn tan_half(phi: f64) -> f64 {
    (FRAC_PI_4 + phi / 2.0).tan()
}
