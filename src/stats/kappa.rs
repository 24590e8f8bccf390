use crate::model::matrix::Counts;
use crate::model::metrics::Interval;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KappaEstimate {
    pub kappa: f64,
    pub se: f64,
    pub observed_agreement: f64,
    pub expected_agreement: f64,
    /// Chance agreement is total (p_e = 1); kappa is pinned to 0.
    pub degenerate: bool,
}

/// Cohen's kappa between the technique's calls and the reference.
///
/// Evaluated as `2(TP*TN - FP*FN) / (PP*RN + PN*RP)` where PP/PN are the
/// predicted margins and RP/RN the reference margins. The denominator is
/// `N^2 (1 - p_e)`, so it vanishes exactly when `p_e == 1`.
///
/// The standard error is the large-sample approximation
/// `sqrt(p_o (1 - p_o) / (N (1 - p_e)^2))`.
pub fn cohen_kappa(counts: &Counts) -> KappaEstimate {
    let n = counts.total() as f64;
    let pp = counts.predicted_positive();
    let pn = counts.predicted_negative();
    let rp = counts.condition_positive();
    let rn = counts.condition_negative();

    let observed_agreement = (counts.tp as f64 + counts.tn as f64) / n;
    let expected_agreement = (pp as f64 / n) * (rp as f64 / n) + (pn as f64 / n) * (rn as f64 / n);

    let degenerate = (pp == 0 || rn == 0) && (pn == 0 || rp == 0);
    if degenerate {
        return KappaEstimate {
            kappa: 0.0,
            se: 0.0,
            observed_agreement,
            expected_agreement: 1.0,
            degenerate,
        };
    }

    let concordant = counts.tp as u128 * counts.tn as u128;
    let discordant = counts.fp as u128 * counts.fn_ as u128;
    let numerator = if concordant >= discordant {
        2.0 * (concordant - discordant) as f64
    } else {
        -2.0 * (discordant - concordant) as f64
    };
    let denominator = (pp * rn) as f64 + (pn * rp) as f64;
    let kappa = (numerator / denominator).clamp(-1.0, 1.0);

    let one_minus_pe = denominator / (n * n);
    let se = (observed_agreement * (1.0 - observed_agreement) / (n * one_minus_pe * one_minus_pe))
        .max(0.0)
        .sqrt();

    KappaEstimate {
        kappa,
        se,
        observed_agreement,
        expected_agreement,
        degenerate,
    }
}

pub fn kappa_interval(estimate: &KappaEstimate, z: f64) -> Interval {
    if estimate.degenerate {
        return Interval::ZERO;
    }
    let lower = (estimate.kappa - z * estimate.se).clamp(-1.0, 1.0);
    let upper = (estimate.kappa + z * estimate.se).clamp(-1.0, 1.0);
    Interval::new(lower, upper)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/kappa.rs"]
mod tests;
