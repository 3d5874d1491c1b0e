//! Leaf scoring shared by both enumerators, and single-schedule evaluation.

use std::time::Instant;

use crate::graph::Graph;
use crate::lp::{BuildCfg, ConstraintBuilder, LpError, LpSolver, VarLayout};
use crate::schedule::Schedule;

use super::types::{BestTracker, SearchCfg, SearchError, SearchOutcome, SearchStats, StopReason};

/// Solved LP for one schedule.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub cost: f64,
    /// One value per LP column (see `VarLayout`).
    pub values: Vec<f64>,
}

/// Build and solve the LP of one schedule.
pub fn evaluate<S: LpSolver>(
    graph: &Graph,
    schedule: &Schedule,
    solver: &S,
    cfg: BuildCfg,
) -> Result<Evaluation, SearchError> {
    let system = ConstraintBuilder::with_cfg(graph, cfg).build(schedule)?;
    let values = solver.minimize(&system, VarLayout::COST)?;
    let cost = solution_cost(&values)?;
    Ok(Evaluation { cost, values })
}

fn solution_cost(values: &[f64]) -> Result<f64, LpError> {
    values
        .get(VarLayout::COST)
        .copied()
        .ok_or_else(|| LpError::Internal("solver returned no values".into()))
}

/// State of one search run: scorer, improvement log, counters, stop flags.
pub(super) struct SearchRun<'a, S: LpSolver> {
    builder: ConstraintBuilder<'a>,
    solver: &'a S,
    cfg: SearchCfg,
    tracker: BestTracker,
    stats: SearchStats,
    started: Instant,
    stopped: Option<StopReason>,
}

impl<'a, S: LpSolver> SearchRun<'a, S> {
    pub(super) fn new(graph: &'a Graph, solver: &'a S, cfg: SearchCfg) -> Result<Self, SearchError> {
        if graph.num_vertices() == 0 || graph.num_edges() == 0 {
            return Err(SearchError::EmptyGraph);
        }
        Ok(Self {
            builder: ConstraintBuilder::with_cfg(graph, cfg.build),
            solver,
            cfg,
            tracker: BestTracker::with_margin(cfg.improve_eps),
            stats: SearchStats::default(),
            started: Instant::now(),
            stopped: None,
        })
    }

    #[inline]
    pub(super) fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }

    /// Score one complete schedule and offer it to the tracker.
    ///
    /// Failures only skip this schedule. Returns `false` once the run must stop.
    pub(super) fn score_leaf(&mut self, schedule: &Schedule) -> bool {
        if self.check_limits() {
            return false;
        }
        self.stats.leaves += 1;
        let system = match self.builder.build(schedule) {
            Ok(system) => system,
            Err(e) => {
                self.stats.failed += 1;
                tracing::warn!(%schedule, error = %e, "skipping schedule");
                return true;
            }
        };
        match self
            .solver
            .minimize(&system, VarLayout::COST)
            .and_then(|values| solution_cost(&values))
        {
            Ok(cost) => {
                self.stats.solved += 1;
                if self.tracker.offer(cost, schedule) {
                    tracing::debug!(cost, %schedule, "new best");
                }
            }
            Err(LpError::Infeasible) => {
                self.stats.infeasible += 1;
                tracing::debug!(%schedule, "infeasible");
            }
            Err(LpError::Unbounded) => {
                self.stats.unbounded += 1;
                tracing::debug!(%schedule, "unbounded");
            }
            Err(e) => {
                self.stats.failed += 1;
                tracing::warn!(%schedule, error = %e, "solver failed");
            }
        }
        true
    }

    fn check_limits(&mut self) -> bool {
        if self.stopped.is_some() {
            return true;
        }
        if self
            .cfg
            .max_leaves
            .is_some_and(|max| self.stats.leaves >= max)
        {
            self.stopped = Some(StopReason::LeafLimit);
        } else if self
            .cfg
            .time_limit
            .is_some_and(|limit| self.started.elapsed() >= limit)
        {
            self.stopped = Some(StopReason::TimeLimit);
        }
        if let Some(reason) = self.stopped {
            tracing::info!(?reason, leaves = self.stats.leaves, "search stopped early");
        }
        self.stopped.is_some()
    }

    pub(super) fn finish(mut self, strategy: &str) -> Result<SearchOutcome, SearchError> {
        self.stats.elapsed = self.started.elapsed();
        let stats = self.stats;
        let Some((cost, schedule)) = self
            .tracker
            .current_best()
            .map(|(c, s)| (c, s.clone()))
        else {
            tracing::warn!(strategy, leaves = stats.leaves, "no feasible schedule");
            return Err(SearchError::NoFeasibleSchedule {
                explored: stats.leaves,
                stopped: self.stopped,
            });
        };
        tracing::info!(
            strategy,
            cost,
            %schedule,
            leaves = stats.leaves,
            improvements = self.tracker.len(),
            elapsed_ms = stats.elapsed.as_secs_f64() * 1e3,
            "search finished"
        );
        Ok(SearchOutcome {
            cost,
            schedule,
            tracker: self.tracker,
            stats,
            stopped: self.stopped,
        })
    }
}
