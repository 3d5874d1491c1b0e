//! Schedule enumeration with LP scoring and an improvement log.
//!
//! Purpose
//! - Find the loading schedule of minimum LP cost, either over every
//!   admissible schedule (`search_full`) or over vertices-then-edges schedules
//!   only (`search_restricted`, `n!·m!` leaves, for larger graphs).
//!
//! Why this design
//! - The improvement log (`BestTracker`) is a value owned by one run and
//!   returned in the outcome; nothing is kept in module state.
//! - A schedule that fails to build or has no optimum is counted and skipped;
//!   only a run without any solved schedule is an error.
//! - Runs are sequential. `SearchCfg::{time_limit, max_leaves}` cut a run short
//!   and the outcome is then marked partial.

mod full;
mod restricted;
mod score;
mod types;

pub use full::search_full;
pub use restricted::{restricted_schedules, search_restricted};
pub use score::{evaluate, Evaluation};
pub use types::{
    BestTracker, SearchCfg, SearchError, SearchOutcome, SearchStats, StopReason,
};

#[cfg(test)]
mod tests;
