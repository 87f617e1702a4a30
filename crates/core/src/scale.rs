//! Scales: pure numeric-domain-to-pixel-range mappings.
//!
//! Scales are rebuilt from the current data extent on every render; no
//! scale state persists between renders.

use crate::model::{MetricRow, SampleRow};

/// Linear mapping from a numeric domain to a pixel range. Values outside
/// the domain extrapolate linearly; there is no clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
    round: bool,
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            round: false,
        }
    }

    /// Like [`LinearScale::new`], but outputs round to whole pixels.
    pub fn rounded(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            round: true,
        }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d1 == d0 {
            return r0;
        }
        let out = r0 + (value - d0) / (d1 - d0) * (r1 - r0);
        if self.round { out.round() } else { out }
    }

    /// Roughly `count` nicely rounded tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = (self.domain[0].min(self.domain[1]), self.domain[0].max(self.domain[1]));
        let span = hi - lo;
        if span <= 0.0 || count == 0 || !span.is_finite() {
            return vec![lo];
        }
        let step = tick_step(span, count);
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        (first as i64..=last as i64)
            .map(|i| i as f64 * step)
            .collect()
    }
}

/// A "nice" tick step: a power of ten times 1, 2, or 5.
fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let err = raw / base;
    if err >= 5.0 {
        base * 10.0
    } else if err >= 2.0 {
        base * 5.0
    } else if err >= 1.0 {
        base * 2.0
    } else {
        base
    }
}

/// Ordinal bands over a key sequence, rounded to whole pixels.
///
/// Bands split the range into `n` equal steps; leftover pixels from
/// rounding are shared between the two outer margins.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: Vec<i32>,
    start: f64,
    step: f64,
}

impl BandScale {
    pub fn new(keys: Vec<i32>, range: [f64; 2]) -> Self {
        let n = keys.len().max(1) as f64;
        let step = ((range[1] - range[0]) / n).floor();
        let start = (range[0] + (range[1] - range[0] - step * n) / 2.0).round();
        Self { keys, start, step }
    }

    pub fn position(&self, key: i32) -> Option<f64> {
        self.keys
            .iter()
            .position(|&k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn keys(&self) -> &[i32] {
        &self.keys
    }
}

/// Max over a field, skipping NaN. Empty or all-NaN input is 0.
fn nan_max(values: impl Iterator<Item = f64>) -> f64 {
    values.filter(|v| !v.is_nan()).fold(0.0, f64::max)
}

/// The three scales of the sample charts: `a` and `b` to pixels with a
/// fixed margin, row index across the full width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleScales {
    pub a: LinearScale,
    pub b: LinearScale,
    pub index: LinearScale,
}

impl SampleScales {
    pub const MARGIN: f64 = 5.0;

    pub fn fit(rows: &[SampleRow], size: f64) -> Self {
        let margin = [Self::MARGIN, size - Self::MARGIN];
        Self {
            a: LinearScale::new([0.0, nan_max(rows.iter().map(|r| r.a))], margin),
            b: LinearScale::new([0.0, nan_max(rows.iter().map(|r| r.b))], margin),
            index: LinearScale::new([0.0, rows.len() as f64], [0.0, size]),
        }
    }
}

/// The metric bar chart's scales: x bands over years, inverted y, and a
/// value-proportional blue channel.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricScales {
    pub x: BandScale,
    pub y: LinearScale,
    pub color: LinearScale,
}

impl MetricScales {
    pub fn fit(rows: &[MetricRow], width: f64, height: f64) -> Self {
        let max = nan_max(rows.iter().map(|r| r.datum));
        Self {
            x: BandScale::new(rows.iter().map(|r| r.year).collect(), [0.0, width]),
            y: LinearScale::rounded([0.0, max], [height, 0.0]),
            color: LinearScale::rounded([0.0, max], [200.0, 50.0]),
        }
    }

    /// The fill for a bar: darker blue for larger values.
    pub fn fill(&self, datum: f64) -> String {
        format!("rgb(0, 0, {})", self.color.scale(datum))
    }
}
