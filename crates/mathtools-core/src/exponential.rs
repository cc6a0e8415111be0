// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Exponential, Logarithm, Power
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! exp, ln and real exponentiation from Taylor series.
//!
//! exp: x = k ln2 + r with |r| <= ln2/2, e^r from its Maclaurin series,
//! then scaled by 2^k.
//!
//! ln: x = m 2^e with m in [sqrt(2)/2, sqrt(2)], then
//!   ln(m) = 2 atanh(s) = 2 (s + s^3/3 + s^5/5 + ...),  s = (m-1)/(m+1)
//! which keeps full relative accuracy for m near 1.
//!
//! power(n, p) = exp(p ln n), with small integral exponents done by
//! repeated squaring instead.

use std::f64::consts::SQRT_2;

use mathtools_types::config::ApproxConfig;
use mathtools_types::error::{MathError, MathResult};
use tracing::debug;

use crate::series::{finish, sum_series};

/// ln2 split so that k * LN_2_HI is exact for |k| < 2^11 (fdlibm constants).
const LN_2_HI: f64 = 6.931_471_803_691_238_164_90e-1;
const LN_2_LO: f64 = 1.908_214_929_270_587_700_02e-10;
const INV_LN_2: f64 = 1.442_695_040_888_963_387_00;

/// ln(f64::MAX); larger arguments overflow to +inf.
const EXP_OVERFLOW: f64 = 709.782_712_893_384;
/// ln of the smallest subnormal; smaller arguments underflow to 0.
const EXP_UNDERFLOW: f64 = -745.133_219_101_941_1;

/// 2^54, used to lift subnormals into the normal range.
const TWO_POW_54: f64 = 18_014_398_509_481_984.0;

/// Integral exponents up to this magnitude use repeated squaring.
const MAX_SQUARING_EXPONENT: f64 = 64.0;

const EXPONENT_MASK: u64 = 0x7ff;
const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
const EXPONENT_BIAS: i32 = 1023;

/// 2^k for k in the normal exponent range [-1022, 1023].
fn pow2(k: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&k), "pow2 exponent {k} out of range");
    f64::from_bits(((k + EXPONENT_BIAS) as u64) << 52)
}

/// v * 2^k, applied in two halves so intermediate factors stay normal.
fn scale_pow2(v: f64, k: i32) -> f64 {
    let half = k / 2;
    v * pow2(half) * pow2(k - half)
}

/// Split a positive finite x into (m, e) with x = m 2^e and m in
/// [sqrt(2)/2, sqrt(2)].
fn split_mantissa(x: f64) -> (f64, i32) {
    let (x, bias) = if x < f64::MIN_POSITIVE {
        (x * TWO_POW_54, -54)
    } else {
        (x, 0)
    };
    let bits = x.to_bits();
    let e = ((bits >> 52) & EXPONENT_MASK) as i32 - EXPONENT_BIAS + bias;
    let m = f64::from_bits((bits & MANTISSA_MASK) | ((EXPONENT_BIAS as u64) << 52));
    if m > SQRT_2 {
        (m * 0.5, e + 1)
    } else {
        (m, e)
    }
}

/// e^x with the reduced-argument series summed under `cfg`; NaN is `Domain`.
pub fn exp_with(x: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    if x.is_nan() {
        return Err(MathError::Domain {
            function: "exp",
            arg: x,
        });
    }
    if x > EXP_OVERFLOW {
        return Ok(f64::INFINITY);
    }
    if x < EXP_UNDERFLOW {
        return Ok(0.0);
    }

    let k = (x * INV_LN_2).round();
    let r = (x - k * LN_2_HI) - k * LN_2_LO;
    let sum = sum_series(1.0, cfg, |i, term| term * r / i as f64);
    let e_r = finish("exp", sum, 1.0)?;
    Ok(scale_pow2(e_r, k as i32))
}

/// Natural logarithm from the exponent bits plus an atanh series on the mantissa.
pub fn ln_with(x: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    if x.is_nan() || x <= 0.0 {
        debug!(arg = x, "ln argument not positive");
        return Err(MathError::Domain {
            function: "ln",
            arg: x,
        });
    }
    if x.is_infinite() {
        return Ok(f64::INFINITY);
    }

    let (m, e) = split_mantissa(x);
    let s = (m - 1.0) / (m + 1.0);
    let s_sq = s * s;
    // term k = s^(2k+1) / (2k+1)
    let sum = sum_series(s, cfg, |k, term| {
        let odd = (2 * k + 1) as f64;
        term * s_sq * (odd - 2.0) / odd
    });
    let ln_m = 2.0 * finish("ln", sum, 1.0)?;
    let e = e as f64;
    Ok(e * LN_2_HI + (e * LN_2_LO + ln_m))
}

/// base^exp for a non-negative integral exponent.
pub(crate) fn powi_squaring(base: f64, mut exponent: u64) -> f64 {
    let mut result = 1.0;
    let mut factor = base;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result *= factor;
        }
        factor *= factor;
        exponent >>= 1;
    }
    result
}

/// [`power`] under an explicit tolerance configuration.
pub fn power_with(n: f64, p: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    if n.is_nan() || p.is_nan() {
        return Err(MathError::Domain {
            function: "power",
            arg: n,
        });
    }
    if p == 0.0 || n == 1.0 {
        return Ok(1.0);
    }

    let integral = p.fract() == 0.0;
    if n == 0.0 {
        if p < 0.0 {
            debug!(exponent = p, "power of zero with negative exponent");
            return Err(MathError::Pole {
                function: "power",
                arg: n,
            });
        }
        return Ok(0.0);
    }
    if integral && p.abs() <= MAX_SQUARING_EXPONENT {
        let magnitude = powi_squaring(n, p.abs() as u64);
        return Ok(if p < 0.0 { 1.0 / magnitude } else { magnitude });
    }
    if n > 0.0 {
        return exp_with(p * ln_with(n, cfg)?, cfg);
    }

    if !integral {
        debug!(base = n, exponent = p, "negative base with non-integral exponent");
        return Err(MathError::Domain {
            function: "power",
            arg: n,
        });
    }
    let magnitude = exp_with(p * ln_with(-n, cfg)?, cfg)?;
    let odd = (p % 2.0) != 0.0;
    Ok(if odd { -magnitude } else { magnitude })
}

/// e^x. Overflows to +inf, underflows to 0.
pub fn exp(x: f64) -> MathResult<f64> {
    exp_with(x, &ApproxConfig::DEFAULT)
}

/// Natural logarithm; `Domain` for x <= 0.
pub fn ln(x: f64) -> MathResult<f64> {
    ln_with(x, &ApproxConfig::DEFAULT)
}

/// n^p for real n and p.
pub fn power(n: f64, p: f64) -> MathResult<f64> {
    power_with(n, p, &ApproxConfig::DEFAULT)
}
