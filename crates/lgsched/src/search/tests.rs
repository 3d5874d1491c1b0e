use super::*;
use crate::graph::{samples, Graph};
use crate::lp::{BuildCfg, ConstraintSystem, IncidentEdges, LpError, LpSolver, MicroLp};
use crate::schedule::{Schedule, ScheduleError};
use std::collections::HashSet;
use std::time::Duration;

fn triangle() -> Graph {
    Graph::new(samples::TRIANGLE.iter().copied()).unwrap()
}

fn path() -> Graph {
    "1>2, 2>3".parse().unwrap()
}

fn sched(text: &str) -> Schedule {
    text.parse().unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn assert_trace(tracker: &BestTracker, expect: &[f64]) {
    assert_eq!(tracker.len(), expect.len(), "trace {:?}", tracker.best());
    for (got, want) in tracker.best().iter().zip(expect) {
        assert!(approx(*got, *want), "trace {:?} vs {:?}", tracker.best(), expect);
    }
}

struct AlwaysInfeasible;

impl LpSolver for AlwaysInfeasible {
    fn minimize(&self, _: &ConstraintSystem, _: usize) -> Result<Vec<f64>, LpError> {
        Err(LpError::Infeasible)
    }
}

#[test]
fn tracker_keeps_strict_improvements_only() {
    let s = Schedule::default();
    let mut t = BestTracker::new();
    assert!(t.is_empty());
    assert!(t.offer(3.0, &s));
    assert!(t.offer(2.0, &s));
    assert!(!t.offer(2.0, &s));
    assert!(!t.offer(2.5, &s));
    assert!(t.offer(1.0, &s));
    assert!(!t.offer(f64::NAN, &s));
    assert_eq!(t.best(), &[3.0, 2.0, 1.0]);
    assert_eq!(t.sbest().len(), 3);
}

#[test]
fn tracker_margin_treats_round_off_as_tie() {
    let a = sched("1, 2, 1>2");
    let b = sched("2, 1, 1>2");
    let mut t = BestTracker::with_margin(1e-6);
    assert!(t.offer(1.0, &a));
    assert!(!t.offer(1.0 - 1e-9, &b));
    let (cost, best) = t.current_best().unwrap();
    assert_eq!(cost, 1.0);
    assert_eq!(best, &a);
}

#[test]
fn evaluate_sample_schedule() {
    let g = triangle();
    let eval = evaluate(&g, &sched(samples::TRI_SCHEDULE), &MicroLp, BuildCfg::default()).unwrap();
    assert!(approx(eval.cost, 9.0 / 7.0), "cost {}", eval.cost);
    assert_eq!(eval.values.len(), 10);
}

#[test]
fn evaluate_rejects_inadmissible() {
    let g = triangle();
    let err = evaluate(&g, &sched("1, 2, 2>3, 3, 1>2, 1>3"), &MicroLp, BuildCfg::default())
        .unwrap_err();
    assert!(matches!(
        err,
        SearchError::Schedule(ScheduleError::Inadmissible { position: 2, .. })
    ));
}

#[test]
fn full_search_triangle() {
    let g = triangle();
    let out = search_full(&g, &MicroLp, &SearchCfg::default()).unwrap();
    assert_eq!(out.stats.leaves, 48);
    assert_eq!(out.stats.solved, 48);
    assert!(!out.is_partial());
    assert!(approx(out.cost, 9.0 / 7.0), "cost {}", out.cost);
    assert_eq!(out.schedule, sched("1, 2, 3, 1>2, 1>3, 2>3"));
    assert_eq!(out.schedule.to_string(), "[1, 2, 3, (1,2), (1,3), (2,3)]");
    out.schedule.validate(&g).unwrap();
}

#[test]
fn restricted_schedules_triangle() {
    let g = triangle();
    let all: Vec<Schedule> = restricted_schedules(&g).collect();
    assert_eq!(all.len(), 36);
    let distinct: HashSet<&Schedule> = all.iter().collect();
    assert_eq!(distinct.len(), 36);
    for s in &all {
        assert!(s.is_restricted());
        s.validate(&g).unwrap();
    }
    assert_eq!(all[0], sched("1, 2, 3, 1>2, 1>3, 2>3"));
}

#[test]
fn restricted_search_triangle() {
    let g = triangle();
    let out = search_restricted(&g, &MicroLp, &SearchCfg::default()).unwrap();
    assert_eq!(out.stats.leaves, 36);
    assert!(approx(out.cost, 9.0 / 7.0), "cost {}", out.cost);
    assert!(out.schedule.is_restricted());
}

#[test]
fn path_improvement_trace() {
    let g = path();
    let full = search_full(&g, &MicroLp, &SearchCfg::default()).unwrap();
    assert_eq!(full.stats.leaves, 16);
    assert_trace(&full.tracker, &[13.0 / 11.0, 15.0 / 13.0]);
    assert_eq!(full.tracker.sbest()[0], sched("1, 2, 3, 1>2, 2>3"));
    assert_eq!(full.tracker.sbest()[1], sched("1, 2, 3, 2>3, 1>2"));

    let restricted = search_restricted(&g, &MicroLp, &SearchCfg::default()).unwrap();
    assert_eq!(restricted.stats.leaves, 12);
    assert_trace(&restricted.tracker, &[13.0 / 11.0, 15.0 / 13.0]);
}

#[test]
fn path_all_incident_edges() {
    let g = path();
    let cfg = SearchCfg {
        build: BuildCfg {
            incident: IncidentEdges::All,
        },
        ..SearchCfg::default()
    };
    let out = search_full(&g, &MicroLp, &cfg).unwrap();
    assert!(approx(out.cost, 7.0 / 6.0), "cost {}", out.cost);
}

#[test]
fn trace_is_strictly_decreasing() {
    let g = Graph::new(samples::ASSOC.iter().copied()).unwrap();
    let out = search_restricted(&g, &MicroLp, &SearchCfg::default()).unwrap();
    let best = out.tracker.best();
    assert_eq!(best.len(), out.tracker.sbest().len());
    assert!(best.windows(2).all(|w| w[1] < w[0]));
    assert_eq!(best.last().copied(), Some(out.cost));
    assert_eq!(out.tracker.sbest().last(), Some(&out.schedule));
}

#[test]
fn no_feasible_schedule() {
    let g = triangle();
    let err = search_full(&g, &AlwaysInfeasible, &SearchCfg::default()).unwrap_err();
    assert_eq!(
        err,
        SearchError::NoFeasibleSchedule {
            explored: 48,
            stopped: None
        }
    );
}

#[test]
fn leaf_limit_returns_partial_best() {
    let g = triangle();
    let cfg = SearchCfg {
        max_leaves: Some(5),
        ..SearchCfg::default()
    };
    let out = search_full(&g, &MicroLp, &cfg).unwrap();
    assert_eq!(out.stats.leaves, 5);
    assert_eq!(out.stopped, Some(StopReason::LeafLimit));
    assert!(out.is_partial());
    assert!(!out.tracker.is_empty());
}

#[test]
fn zero_time_limit_explores_nothing() {
    let g = triangle();
    let cfg = SearchCfg {
        time_limit: Some(Duration::ZERO),
        ..SearchCfg::default()
    };
    let err = search_restricted(&g, &MicroLp, &cfg).unwrap_err();
    assert_eq!(
        err,
        SearchError::NoFeasibleSchedule {
            explored: 0,
            stopped: Some(StopReason::TimeLimit)
        }
    );
}
