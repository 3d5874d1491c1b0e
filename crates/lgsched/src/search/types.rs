//! Search configuration, improvement log, outcome and errors.

use std::fmt;
use std::time::Duration;

use crate::cfg::IMPROVE_EPS;
use crate::lp::{BuildCfg, LpError};
use crate::schedule::{Schedule, ScheduleError};

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    pub build: BuildCfg,
    /// A candidate improves only if it is below the last best by more than this.
    pub improve_eps: f64,
    /// Stop after this much wall time and return the best found so far.
    pub time_limit: Option<Duration>,
    /// Stop after scoring this many complete schedules.
    pub max_leaves: Option<u64>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            build: BuildCfg::default(),
            improve_eps: IMPROVE_EPS,
            time_limit: None,
            max_leaves: None,
        }
    }
}

/// Append-only record of strictly improving `(cost, schedule)` pairs.
///
/// Invariants: `best` is strictly decreasing and `best.len() == sbest.len()`.
#[derive(Clone, Debug)]
pub struct BestTracker {
    best: Vec<f64>,
    sbest: Vec<Schedule>,
    eps: f64,
}

impl Default for BestTracker {
    fn default() -> Self {
        Self::with_margin(IMPROVE_EPS)
    }
}

impl BestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker treating values within `eps` of the current best as ties.
    pub fn with_margin(eps: f64) -> Self {
        Self {
            best: Vec::new(),
            sbest: Vec::new(),
            eps: eps.max(0.0),
        }
    }

    /// Record `(value, schedule)` iff the log is empty or `value` is strictly
    /// below the last entry. Returns whether it was recorded.
    pub fn offer(&mut self, value: f64, schedule: &Schedule) -> bool {
        if !value.is_finite() {
            return false;
        }
        let improves = match self.best.last() {
            None => true,
            Some(&last) => value < last - self.eps,
        };
        if improves {
            self.best.push(value);
            self.sbest.push(schedule.clone());
        }
        improves
    }

    pub fn current_best(&self) -> Option<(f64, &Schedule)> {
        self.best.last().copied().zip(self.sbest.last())
    }

    /// Improvement trace of objective values, in discovery order.
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// Schedules aligned with [`BestTracker::best`].
    pub fn sbest(&self) -> &[Schedule] {
        &self.sbest
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<Schedule>) {
        (self.best, self.sbest)
    }
}

/// Why a search ended before exhausting its space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    TimeLimit,
    LeafLimit,
}

/// Counters for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Complete schedules handed to the scorer.
    pub leaves: u64,
    /// Leaves whose LP was solved to optimality.
    pub solved: u64,
    pub infeasible: u64,
    pub unbounded: u64,
    /// Construction failures and solver internal errors.
    pub failed: u64,
    pub elapsed: Duration,
}

/// Result of a search with at least one solved schedule.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub cost: f64,
    pub schedule: Schedule,
    pub tracker: BestTracker,
    pub stats: SearchStats,
    /// `Some` if the run was cut short; the best is then only the best seen.
    pub stopped: Option<StopReason>,
}

impl SearchOutcome {
    #[inline]
    pub fn is_partial(&self) -> bool {
        self.stopped.is_some()
    }
}

/// Errors surfaced by searches and single-schedule evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    /// Graph without vertices or edges; nothing to enumerate.
    EmptyGraph,
    /// No schedule produced an optimum.
    NoFeasibleSchedule {
        explored: u64,
        stopped: Option<StopReason>,
    },
    Schedule(ScheduleError),
    Lp(LpError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyGraph => write!(f, "graph has no vertices or no edges"),
            SearchError::NoFeasibleSchedule { explored, stopped } => {
                write!(f, "no feasible schedule among {explored} explored")?;
                match stopped {
                    Some(StopReason::TimeLimit) => write!(f, " (time limit reached)"),
                    Some(StopReason::LeafLimit) => write!(f, " (leaf limit reached)"),
                    None => Ok(()),
                }
            }
            SearchError::Schedule(e) => write!(f, "invalid schedule: {e}"),
            SearchError::Lp(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Schedule(e) => Some(e),
            SearchError::Lp(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScheduleError> for SearchError {
    fn from(e: ScheduleError) -> Self {
        SearchError::Schedule(e)
    }
}

impl From<LpError> for SearchError {
    fn from(e: LpError) -> Self {
        SearchError::Lp(e)
    }
}
