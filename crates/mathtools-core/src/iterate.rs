// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Newton-Raphson Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bounded Newton-Raphson / fixed-point iteration.
//!
//!   x_{k+1} = step(x_k)
//!
//! The loop ends when |x_{k+1} - x_k| <= eps * |x_{k+1}|. The step is
//! measured relative to the iterate because f64 cannot resolve an absolute
//! 1e-15 once |x| exceeds a few units. A step that has stopped shrinking
//! while already below `stall_tolerance * |x|` is rounding noise and is also
//! accepted. Anything else runs until `max_iterations`.

use mathtools_types::config::ApproxConfig;
use mathtools_types::error::{MathError, MathResult};
use tracing::{trace, warn};

/// Converged iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate {
    pub value: f64,
    pub iterations: usize,
}

/// Iterate `step` from `x0` until the step size meets the tolerance policy.
///
/// Errors from `step` propagate unchanged. A non-finite iterate or an
/// exhausted cap yields `NonConvergence` carrying the last finite iterate.
pub fn newton<F>(
    function: &'static str,
    x0: f64,
    cfg: &ApproxConfig,
    mut step: F,
) -> MathResult<Iterate>
where
    F: FnMut(f64) -> MathResult<f64>,
{
    let mut x = x0;
    let mut prev_delta = f64::INFINITY;

    for iteration in 1..=cfg.max_iterations {
        let next = step(x)?;
        if !next.is_finite() {
            warn!(function, iteration, last = x, "iterate left the finite range");
            return Err(MathError::NonConvergence {
                function,
                iterations: iteration,
                last: x,
            });
        }

        let delta = (next - x).abs();
        let scale = next.abs();
        if delta <= cfg.eps * scale {
            trace!(function, iterations = iteration, value = next, "converged");
            return Ok(Iterate {
                value: next,
                iterations: iteration,
            });
        }
        if delta >= prev_delta && delta <= cfg.stall_tolerance * scale {
            trace!(
                function,
                iterations = iteration,
                value = next,
                delta,
                "stalled at rounding floor"
            );
            return Ok(Iterate {
                value: next,
                iterations: iteration,
            });
        }

        prev_delta = delta;
        x = next;
    }

    warn!(function, iterations = cfg.max_iterations, last = x, "iteration cap exhausted");
    Err(MathError::NonConvergence {
        function,
        iterations: cfg.max_iterations,
        last: x,
    })
}
