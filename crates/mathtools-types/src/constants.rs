// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Convergence threshold for series termination and Newton-Raphson steps.
pub const EPS: f64 = 1e-15;

/// Pi (extended-precision literal, rounded to f64).
#[allow(clippy::excessive_precision)]
pub const PI: f64 = 3.141592653589793238462643383279502884;

/// 2*pi, the period of sin and cos.
pub const TWO_PI: f64 = 2.0 * PI;

/// pi/2, upper bound of the reduced angle and the arcsin/arctan asymptote.
pub const FRAC_PI_2: f64 = PI / 2.0;

/// 3*pi/2, boundary between quadrants 3 and 4.
pub const THREE_FRAC_PI_2: f64 = 3.0 * PI / 2.0;

/// ln(2), used to split exp/ln arguments into a power of two and a remainder.
#[allow(clippy::excessive_precision)]
pub const LN_2: f64 = 0.693147180559945309417232121458176568;

/// Relative Newton step below which a step that stopped shrinking is
/// accepted as the rounding floor of the iteration.
pub const DEFAULT_STALL_TOLERANCE: f64 = 1e-7;

/// Iteration cap shared by series summation and Newton-Raphson loops.
///
/// sqrt starts from n/2 and roughly halves per step until it reaches the
/// root, so covering the full f64 range needs a little over 512 steps.
pub const DEFAULT_MAX_ITERATIONS: usize = 2048;
