use rand::Rng;
use serde::{Deserialize, Serialize};

/// One row of the synthetic chart datasets. Order is CSV row order; a row
/// has no identity beyond its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub a: f64,
    pub b: f64,
}

/// Keep each row independently with probability 0.5, preserving order.
///
/// The result is always an order-preserving subsequence of `rows` with
/// expected size N/2.
pub fn random_subset(rows: &[SampleRow], rng: &mut impl Rng) -> Vec<SampleRow> {
    rows.iter()
        .copied()
        .filter(|_| rng.r#gen::<f64>() > 0.5)
        .collect()
}
