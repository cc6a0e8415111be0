// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Roots
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Square root and integer-indexed roots by Newton-Raphson.
//!
//! sqrt solves f(x) = x^2 - n:
//!   x_{k+1} = x_k - f(x_k) / f'(x_k) = 0.5 (x_k + n / x_k),  x_0 = n / 2
//!
//! root(base, k) = power(base, 1/k), polished by one Newton step on
//! y^k = base.

use mathtools_types::config::ApproxConfig;
use mathtools_types::error::{MathError, MathResult};
use tracing::debug;

use crate::exponential::{power_with, powi_squaring};
use crate::iterate::newton;

/// 2^52; subnormal inputs are scaled by its square before iterating.
const SUBNORMAL_SCALE: f64 = 4_503_599_627_370_496.0;

/// Newton square root from n/2 under `cfg`.
pub fn sqrt_with(n: f64, cfg: &ApproxConfig) -> MathResult<f64> {
    if n.is_nan() || n < 0.0 {
        debug!(arg = n, "sqrt of negative number");
        return Err(MathError::Domain {
            function: "sqrt",
            arg: n,
        });
    }
    if n == 0.0 || n.is_infinite() {
        return Ok(n);
    }
    // n / 2 would underflow to zero for the smallest subnormals.
    if n < f64::MIN_POSITIVE {
        let lifted = sqrt_with(n * SUBNORMAL_SCALE * SUBNORMAL_SCALE, cfg)?;
        return Ok(lifted / SUBNORMAL_SCALE);
    }

    let it = newton("sqrt", n / 2.0, cfg, |x| Ok(0.5 * (x + n / x)))?;
    Ok(it.value)
}

/// [`root`] under an explicit tolerance configuration.
pub fn root_with(base: f64, k: i32, cfg: &ApproxConfig) -> MathResult<f64> {
    if k == 0 || base.is_nan() {
        return Err(MathError::Domain {
            function: "root",
            arg: base,
        });
    }
    if base < 0.0 {
        if k % 2 == 0 {
            debug!(base, index = k, "even root of negative number");
            return Err(MathError::Domain {
                function: "root",
                arg: base,
            });
        }
        return root_with(-base, k, cfg).map(|y| -y);
    }
    if base == 0.0 {
        if k < 0 {
            return Err(MathError::Pole {
                function: "root",
                arg: base,
            });
        }
        return Ok(0.0);
    }

    let index = k.unsigned_abs();
    let y = if base.is_infinite() {
        base
    } else {
        polish_root(power_with(base, 1.0 / index as f64, cfg)?, base, index)
    };
    Ok(if k < 0 { 1.0 / y } else { y })
}

/// One Newton step on y^m = base: y - (y^m - base) / (m y^(m-1)).
fn polish_root(y: f64, base: f64, m: u32) -> f64 {
    let y_pow = powi_squaring(y, u64::from(m - 1));
    if y_pow == 0.0 || !y_pow.is_finite() {
        return y;
    }
    y - (y * y_pow - base) / (f64::from(m) * y_pow)
}

/// Square root; `Domain` for n < 0.
pub fn sqrt(n: f64) -> MathResult<f64> {
    sqrt_with(n, &ApproxConfig::DEFAULT)
}

/// k-th root of `base`; negative k gives the reciprocal root.
pub fn root(base: f64, k: i32) -> MathResult<f64> {
    root_with(base, k, &ApproxConfig::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_two() {
        let got = sqrt(2.0).unwrap();
        assert!((got - 1.41421356237).abs() < 1e-11);
        assert!((got - std::f64::consts::SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn test_sqrt_zero_and_perfect_squares() {
        assert_eq!(sqrt(0.0).unwrap(), 0.0);
        for i in 1..50 {
            let n = (i * i) as f64;
            assert!((sqrt(n).unwrap() - i as f64).abs() < 1e-13, "sqrt({n})");
        }
    }

    #[test]
    fn test_sqrt_full_range() {
        for &n in &[5e-324, 1e-310, 1e-300, 1e-20, 0.25, 3.0, 1e20, 1e300, f64::MAX] {
            let got = sqrt(n).unwrap();
            let expected = n.sqrt();
            assert!(
                ((got - expected) / expected).abs() < 1e-15,
                "sqrt({n}) = {got}, std = {expected}"
            );
        }
        assert_eq!(sqrt(f64::INFINITY).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_sqrt_negative_is_domain_error() {
        for &n in &[-1.0, -1e-300, f64::NAN] {
            match sqrt(n) {
                Err(MathError::Domain { function, .. }) => assert_eq!(function, "sqrt"),
                other => panic!("Expected Domain for sqrt({n}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_root_reference_values() {
        assert!((root(27.0, 3).unwrap() - 3.0).abs() < 1e-14);
        assert!((root(-8.0, 3).unwrap() + 2.0).abs() < 1e-14);
        assert!((root(1024.0, 10).unwrap() - 2.0).abs() < 1e-14);
        assert!((root(16.0, -2).unwrap() - 0.25).abs() < 1e-15);
        assert!((root(10.0, 3).unwrap() - 2.154434690031884).abs() < 1e-14);
        assert_eq!(root(5.0, 1).unwrap(), 5.0);
        assert_eq!(root(0.0, 4).unwrap(), 0.0);
    }

    #[test]
    fn test_root_errors() {
        assert!(matches!(root(-16.0, 4), Err(MathError::Domain { .. })));
        assert!(matches!(root(2.0, 0), Err(MathError::Domain { .. })));
        assert!(matches!(root(0.0, -3), Err(MathError::Pole { .. })));
    }
}
