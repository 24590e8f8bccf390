use crate::model::metrics::{Estimate, Interval};
use crate::stats::clip01;

/// Proportion `k / n` with its Wilson score interval at critical value `z`.
///
/// An empty denominator yields 0.0 with interval [0, 0].
pub fn wilson_estimate(k: u128, n: u128, z: f64) -> Estimate {
    if n == 0 {
        return Estimate::ZERO;
    }
    let p = k as f64 / n as f64;
    Estimate {
        value: p,
        ci: wilson_interval(p, n as f64, z),
    }
}

pub fn wilson_interval(p: f64, n: f64, z: f64) -> Interval {
    let z2 = z * z;
    let denom = 1.0 + z2 / n;
    let center = (p + z2 / (2.0 * n)) / denom;
    let half = z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt() / denom;

    // rounding can leave p = 0 or p = 1 one ulp outside the bounds
    let lower = clip01(center - half).min(p);
    let upper = clip01(center + half).max(p);
    Interval::new(lower, upper)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/wilson.rs"]
mod tests;
