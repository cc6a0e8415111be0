// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Range Reduction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Range reduction of angles into [0, pi/2].
//!
//! Negative angles are first mirrored onto their magnitude (sine is odd,
//! cosine is even), so x and -x share one reduction path. The magnitude is
//! wrapped modulo 2pi into [0, 2pi), classified by quadrant and folded into
//! the first quadrant by symmetry. Sine and cosine fold the same way but
//! carry independent sign tables:
//!
//! | Quadrant | Range            | Fold          | sin sign | cos sign |
//! |----------|------------------|---------------|----------|----------|
//! | 1        | [0, pi/2]        | x             | +        | +        |
//! | 2        | (pi/2, pi]       | pi - x        | +        | -        |
//! | 3        | (pi, 3pi/2]      | x - pi        | -        | -        |
//! | 4        | (3pi/2, 2pi)     | 2pi - x       | -        | +        |

use mathtools_types::constants::{FRAC_PI_2, PI, THREE_FRAC_PI_2, TWO_PI};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// Classify an angle already wrapped into [0, 2pi).
    pub fn of(wrapped: f64) -> Self {
        if wrapped > THREE_FRAC_PI_2 {
            Quadrant::Fourth
        } else if wrapped > PI {
            Quadrant::Third
        } else if wrapped > FRAC_PI_2 {
            Quadrant::Second
        } else {
            Quadrant::First
        }
    }

    fn sin_sign(self) -> f64 {
        match self {
            Quadrant::First | Quadrant::Second => 1.0,
            Quadrant::Third | Quadrant::Fourth => -1.0,
        }
    }

    fn cos_sign(self) -> f64 {
        match self {
            Quadrant::First | Quadrant::Fourth => 1.0,
            Quadrant::Second | Quadrant::Third => -1.0,
        }
    }

    /// Map a wrapped angle in this quadrant onto [0, pi/2].
    fn fold(self, wrapped: f64) -> f64 {
        let folded = match self {
            Quadrant::First => wrapped,
            Quadrant::Second => PI - wrapped,
            Quadrant::Third => {
                let shifted = wrapped - PI;
                if shifted > FRAC_PI_2 {
                    PI - shifted
                } else {
                    shifted
                }
            }
            Quadrant::Fourth => TWO_PI - wrapped,
        };
        // Last-ulp rounding of the reflections can step just outside.
        folded.clamp(0.0, FRAC_PI_2)
    }
}

/// Reduced angle in [0, pi/2] and the sign to apply to the series result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduced {
    pub arg: f64,
    pub sign: f64,
}

/// Wrap an angle into [0, 2pi).
///
/// `%` on f64 is an exact remainder, so large arguments lose no more than
/// the representation error of 2pi itself.
pub fn wrap_two_pi(arg: f64) -> f64 {
    let wrapped = arg % TWO_PI;
    if wrapped < 0.0 {
        wrapped + TWO_PI
    } else {
        wrapped
    }
}

/// Reduce a non-negative magnitude. Adding 2pi to a tiny negative angle
/// would round away its low bits, so callers mirror the sign first.
fn reduce_magnitude(magnitude: f64, sign_of: fn(Quadrant) -> f64) -> Reduced {
    if !magnitude.is_finite() {
        return Reduced {
            arg: f64::NAN,
            sign: 1.0,
        };
    }
    let wrapped = wrap_two_pi(magnitude);
    let quadrant = Quadrant::of(wrapped);
    Reduced {
        arg: quadrant.fold(wrapped),
        sign: sign_of(quadrant),
    }
}

/// Reduce an angle for sine evaluation: sin(arg) = sign * sin(reduced.arg).
pub fn reduce_sin(arg: f64) -> Reduced {
    let r = reduce_magnitude(arg.abs(), Quadrant::sin_sign);
    if arg.is_sign_negative() {
        Reduced { sign: -r.sign, ..r }
    } else {
        r
    }
}

/// Reduce an angle for cosine evaluation: cos(arg) = sign * cos(reduced.arg).
pub fn reduce_cos(arg: f64) -> Reduced {
    reduce_magnitude(arg.abs(), Quadrant::cos_sign)
}
