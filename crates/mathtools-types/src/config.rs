// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_STALL_TOLERANCE, EPS};
use crate::error::{MathError, MathResult};

/// Tolerance policy shared by every series and Newton-Raphson loop.
/// Maps 1:1 to config/approx_default.json; missing keys take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproxConfig {
    /// Series terms and Newton steps below this magnitude end the loop.
    #[serde(default = "default_eps")]
    pub eps: f64,
    /// Hard cap on loop iterations; exhaustion is a NonConvergence error.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Relative step size under which a Newton step that no longer shrinks
    /// ends the loop; steps that small are rounding noise.
    #[serde(default = "default_stall_tolerance")]
    pub stall_tolerance: f64,
}

fn default_eps() -> f64 {
    EPS
}
fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}
fn default_stall_tolerance() -> f64 {
    DEFAULT_STALL_TOLERANCE
}

impl Default for ApproxConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ApproxConfig {
    pub const DEFAULT: Self = Self {
        eps: EPS,
        max_iterations: DEFAULT_MAX_ITERATIONS,
        stall_tolerance: DEFAULT_STALL_TOLERANCE,
    };

    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> MathResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json_str(json: &str) -> MathResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(MathError::ConfigError(format!(
                "eps must be finite and > 0, got {}",
                self.eps
            )));
        }
        if !self.stall_tolerance.is_finite() || self.stall_tolerance < self.eps {
            return Err(MathError::ConfigError(format!(
                "stall_tolerance must be finite and >= eps, got {}",
                self.stall_tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::ConfigError(
                "max_iterations must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
