// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Tangent / Cotangent
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! tan = sin / cos and cot = cos / sin.
//!
//! In f64 the series denominator never lands exactly on zero at a pole
//! (cos(pi/2) evaluates to ~6e-17), so a denominator below eps in
//! magnitude is reported as a pole instead of returning a ~1e16 ratio.

use mathtools_types::config::ApproxConfig;
use mathtools_types::error::{MathError, MathResult};
use tracing::debug;

use crate::series::{cos_with, sin_with};

fn ratio(
    function: &'static str,
    x: f64,
    numerator: f64,
    denominator: f64,
    cfg: &ApproxConfig,
) -> MathResult<f64> {
    if denominator.abs() < cfg.eps {
        debug!(function, arg = x, denominator, "pole");
        return Err(MathError::Pole { function, arg: x });
    }
    Ok(numerator / denominator)
}

/// sin(x) / cos(x); `Pole` when |cos(x)| < `cfg.eps`.
pub fn tan_with(x: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    let s = sin_with(x, cfg)?;
    let c = cos_with(x, cfg)?;
    ratio("tan", x, s, c, cfg)
}

/// cos(x) / sin(x); `Pole` when |sin(x)| < `cfg.eps`.
pub fn cot_with(x: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    let s = sin_with(x, cfg)?;
    let c = cos_with(x, cfg)?;
    ratio("cot", x, c, s, cfg)
}

/// Tangent of `x` radians; `Pole` at odd multiples of pi/2.
pub fn tan(x: f64) -> MathResult<f64> {
    tan_with(x, &ApproxConfig::DEFAULT)
}

/// Cotangent of `x` radians; `Pole` at multiples of pi.
pub fn cot(x: f64) -> MathResult<f64> {
    cot_with(x, &ApproxConfig::DEFAULT)
}
