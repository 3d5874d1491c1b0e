//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; the few that callers may want to vary are mirrored as
//!   fields of `SearchCfg` with these values as defaults.

/// Two LP objectives closer than this are a tie, not an improvement.
pub const IMPROVE_EPS: f64 = 1e-9;
/// Slack for checking `A x <= b` on solver output.
pub const FEAS_EPS: f64 = 1e-7;
/// A decimal is reported as `p / q` when `|q·x − round(q·x)| < FRAC_TOL`.
pub const FRAC_TOL: f64 = 1e-4;
/// Denominators tried by the rational approximation are `1..FRAC_MAX_DEN`.
pub const FRAC_MAX_DEN: u32 = 100;
