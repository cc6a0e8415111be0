// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("{function}: argument {arg} is outside the function domain")]
    Domain { function: &'static str, arg: f64 },

    #[error("{function}: argument {arg} is a pole")]
    Pole { function: &'static str, arg: f64 },

    #[error("{function}: no convergence after {iterations} iterations (last = {last})")]
    NonConvergence {
        function: &'static str,
        iterations: usize,
        last: f64,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MathError {
    /// True for errors caused by the argument rather than the configuration.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, MathError::Domain { .. } | MathError::Pole { .. })
    }
}

pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_function_and_arg() {
        let err = MathError::Domain {
            function: "arcsin",
            arg: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "arcsin: argument 1.5 is outside the function domain"
        );
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_non_convergence_is_not_argument_error() {
        let err = MathError::NonConvergence {
            function: "sqrt",
            iterations: 4,
            last: 2.0,
        };
        assert!(!err.is_argument_error());
        assert!(err.to_string().contains("after 4 iterations"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<u32, serde_json::Error> = serde_json::from_str("not json");
        let err: MathError = parse.unwrap_err().into();
        assert!(matches!(err, MathError::Json(_)));
    }
}
