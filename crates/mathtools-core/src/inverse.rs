// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Inverse Trigonometric Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! arcsin, arccos, arctan, arccot by Newton-Raphson on sin/cos.
//!
//! arcsin solves sin(y) = a:
//!   y_{k+1} = y_k - tan(y_k) + a / cos(y_k)
//! arctan solves tan(y) = a:
//!   y_{k+1} = y_k - cos^2(y_k) (tan(y_k) - a)
//! Both start from y_0 = a. arccos and arccot are pi/2 minus the above.

use mathtools_types::config::ApproxConfig;
use mathtools_types::constants::FRAC_PI_2;
use mathtools_types::error::{MathError, MathResult};
use tracing::debug;

use crate::iterate::newton;
use crate::series::{cos_with, sin_with};

/// [`arcsin`] under an explicit tolerance configuration.
pub fn arcsin_with(a: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    if !(-1.0..=1.0).contains(&a) {
        debug!(arg = a, "arcsin argument outside [-1, 1]");
        return Err(MathError::Domain {
            function: "arcsin",
            arg: a,
        });
    }
    // cos vanishes at the root, Newton would only crawl towards it.
    if a.abs() == 1.0 {
        return Ok(FRAC_PI_2.copysign(a));
    }

    let it = newton("arcsin", a, cfg, |y| {
        let s = sin_with(y, cfg)?;
        let c = cos_with(y, cfg)?;
        // y - tan(y) + a/cos(y), with tan(y) = sin(y)/cos(y) folded in.
        // Kept on the principal branch when rounding noise overshoots.
        Ok((y - (s - a) / c).clamp(-FRAC_PI_2, FRAC_PI_2))
    })?;
    Ok(it.value)
}

/// [`arccos`] under an explicit tolerance configuration.
pub fn arccos_with(a: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    arcsin_with(a, cfg)
        .map(|y| FRAC_PI_2 - y)
        .map_err(|e| rename_domain(e, "arccos"))
}

/// Newton on tan(y) = a for |a| <= 1, where the root lies in [-pi/4, pi/4].
fn arctan_principal(a: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    let it = newton("arctan", a, cfg, |y| {
        let s = sin_with(y, cfg)?;
        let c = cos_with(y, cfg)?;
        // cos^2(y) (tan(y) - a) = cos(y) (sin(y) - a cos(y))
        Ok(y - c * (s - a * c))
    })?;
    Ok(it.value)
}

/// [`arctan`] under an explicit tolerance configuration; NaN is `Domain`.
pub fn arctan_with(a: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    if a.is_nan() {
        debug!("arctan of NaN");
        return Err(MathError::Domain {
            function: "arctan",
            arg: a,
        });
    }
    if a.abs() > 1.0 {
        // arctan(a) = sign(a) pi/2 - arctan(1/a) keeps the iteration on the
        // principal branch; 1/inf = 0 covers the infinite limits.
        return Ok(FRAC_PI_2.copysign(a) - arctan_principal(1.0 / a, cfg)?);
    }
    arctan_principal(a, cfg)
}

/// [`arccot`] under an explicit tolerance configuration.
pub fn arccot_with(a: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    arctan_with(a, cfg)
        .map(|y| FRAC_PI_2 - y)
        .map_err(|e| rename_domain(e, "arccot"))
}

fn rename_domain(err: MathError, function: &'static str) -> MathError {
    match err {
        MathError::Domain { arg, .. } => MathError::Domain { function, arg },
        other => other,
    }
}

/// Arcsine in [-pi/2, pi/2]; `Domain` outside [-1, 1].
pub fn arcsin(a: f64) -> MathResult<f64> {
    arcsin_with(a, &ApproxConfig::DEFAULT)
}

/// Arccosine in [0, pi]; `Domain` outside [-1, 1].
pub fn arccos(a: f64) -> MathResult<f64> {
    arccos_with(a, &ApproxConfig::DEFAULT)
}

/// Arctangent in [-pi/2, pi/2].
pub fn arctan(a: f64) -> MathResult<f64> {
    arctan_with(a, &ApproxConfig::DEFAULT)
}

/// Arccotangent in (0, pi).
pub fn arccot(a: f64) -> MathResult<f64> {
    arccot_with(a, &ApproxConfig::DEFAULT)
}
