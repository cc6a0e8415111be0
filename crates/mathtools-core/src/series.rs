// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Taylor Series
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Taylor-series sine and cosine on range-reduced arguments.
//!
//!   sin(x) = sum (-1)^n x^(2n+1) / (2n+1)!
//!   cos(x) = sum (-1)^n x^(2n)   / (2n)!
//!
//! Each term is generated from the previous one. Summation stops once the
//! last generated term is smaller than eps in magnitude. That is a test on
//! the last term, not a bound on the true remainder; for reduced arguments
//! in [0, pi/2] the two agree to within a few ulps.

use mathtools_types::config::ApproxConfig;
use mathtools_types::error::{MathError, MathResult};
use tracing::warn;

use crate::reduction::{reduce_cos, reduce_sin};

/// Outcome of a series summation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSum {
    pub value: f64,
    /// Number of terms accumulated, including the first.
    pub terms: usize,
    /// False when `max_iterations` terms were summed without the last one
    /// dropping below eps.
    pub converged: bool,
}

/// Sum a series from its first term.
///
/// `next_term(k, term)` derives term k (1-based) from term k-1. Summation
/// stops once |term| < eps or after `max_iterations` terms.
pub fn sum_series<F>(first: f64, cfg: &ApproxConfig, mut next_term: F) -> SeriesSum
where
    F: FnMut(usize, f64) -> f64,
{
    let mut term = first;
    let mut value = first;
    let mut terms = 1usize;
    while term.abs() >= cfg.eps {
        if terms >= cfg.max_iterations {
            return SeriesSum {
                value,
                terms,
                converged: false,
            };
        }
        term = next_term(terms, term);
        value += term;
        terms += 1;
    }
    SeriesSum {
        value,
        terms,
        converged: true,
    }
}

/// Maclaurin series of sin on an already reduced argument.
pub fn sin_series(x: f64, cfg: &ApproxConfig) -> SeriesSum {
    let x_sq = x * x;
    sum_series(x, cfg, |k, term| {
        let i = (2 * k - 1) as f64;
        term * (-x_sq / ((i + 1.0) * (i + 2.0)))
    })
}

/// Maclaurin series of cos on an already reduced argument.
pub fn cos_series(x: f64, cfg: &ApproxConfig) -> SeriesSum {
    let x_sq = x * x;
    sum_series(1.0, cfg, |k, term| {
        let i = (2 * k - 1) as f64;
        term * (-x_sq / (i * (i + 1.0)))
    })
}

/// Turn a series outcome into a result, applying the reduction sign.
pub(crate) fn finish(function: &'static str, sum: SeriesSum, sign: f64) -> MathResult<f64> {
    if !sum.converged {
        warn!(function, terms = sum.terms, "series cap exhausted before convergence");
        return Err(MathError::NonConvergence {
            function,
            iterations: sum.terms,
            last: sum.value * sign,
        });
    }
    Ok(sum.value * sign)
}

/// Rounding in the partial sums can push sin(pi/2) one ulp above 1.
fn unit_bounded(v: f64) -> f64 {
    v.clamp(-1.0, 1.0)
}

/// Sine with an explicit tolerance policy.
pub fn sin_with(x: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    let r = reduce_sin(x);
    finish("sin", sin_series(r.arg, cfg), r.sign).map(unit_bounded)
}

/// Cosine with an explicit tolerance policy.
pub fn cos_with(x: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    let r = reduce_cos(x);
    finish("cos", cos_series(r.arg, cfg), r.sign).map(unit_bounded)
}

/// Sine of `x` radians. NaN for non-finite input.
///
/// Under the default policy the series on [0, pi/2] converges within a
/// dozen terms, far below the iteration cap.
pub fn sin(x: f64) -> f64 {
    let r = reduce_sin(x);
    unit_bounded(sin_series(r.arg, &ApproxConfig::DEFAULT).value * r.sign)
}

/// Cosine of `x` radians. NaN for non-finite input.
pub fn cos(x: f64) -> f64 {
    let r = reduce_cos(x);
    unit_bounded(cos_series(r.arg, &ApproxConfig::DEFAULT).value * r.sign)
}
