// ─────────────────────────────────────────────────────────────────────
// SCPN Math Tools — Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Elementary transcendental functions from first principles.
//!
//! Layering: range reduction -> Taylor series (sin, cos) -> ratios
//! (tan, cot) -> Newton-Raphson (arcsin, arctan, sqrt) -> exponential
//! series (exp, ln, power) -> roots.

pub mod exponential;
pub mod inverse;
pub mod iterate;
pub mod ratio;
pub mod reduction;
pub mod roots;
pub mod series;

pub use exponential::{exp, ln, power};
pub use inverse::{arccos, arccot, arcsin, arctan};
pub use ratio::{cot, tan};
pub use roots::{root, sqrt};
pub use series::{cos, sin};
