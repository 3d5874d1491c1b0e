//! Loading schedules: tagged steps, text form, admissibility, random draws.
//!
//! A schedule is admissible when every edge step comes after both of its
//! endpoints' vertex steps, and complete when it loads every vertex and edge
//! exactly once. Only complete admissible schedules are turned into LPs.

mod check;
pub mod rand;
mod types;

pub use check::ScheduleError;
pub use types::{ParseScheduleError, Schedule, Step};
