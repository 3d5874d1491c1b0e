//! Search restricted to vertices-then-edges schedules.
//!
//! Assumption (unproven): some optimal schedule loads every vertex before any
//! edge. It holds for every graph this search has been run on, not in general;
//! `search_full` is the reference when it matters.

use itertools::Itertools;

use crate::graph::{Edge, Graph};
use crate::lp::LpSolver;
use crate::schedule::{Schedule, Step};

use super::score::SearchRun;
use super::types::{SearchCfg, SearchError, SearchOutcome};

/// All `n!·m!` restricted schedules.
///
/// Order: vertex permutations (lexicographic in ascending ids) outermost, edge
/// index permutations (lexicographic) inside; edges are mapped back from their
/// index. Every yielded schedule is admissible by construction.
pub fn restricted_schedules(graph: &Graph) -> impl Iterator<Item = Schedule> + '_ {
    let n = graph.num_vertices();
    let m = graph.num_edges();
    // inverse of the edge → index map
    let by_index: Vec<Edge> = graph.edges().map(|(_, e)| e).collect();
    graph
        .vertices()
        .iter()
        .copied()
        .permutations(n)
        .flat_map(move |vperm| {
            let by_index = by_index.clone();
            (0..m).permutations(m).map(move |eperm| {
                let steps: Vec<Step> = vperm
                    .iter()
                    .map(|&v| Step::Vertex(v))
                    .chain(eperm.iter().map(|&i| Step::Edge(by_index[i])))
                    .collect();
                Schedule::from_steps(steps)
            })
        })
}

/// Score every restricted schedule of `graph`.
pub fn search_restricted<S: LpSolver>(
    graph: &Graph,
    solver: &S,
    cfg: &SearchCfg,
) -> Result<SearchOutcome, SearchError> {
    let mut run = SearchRun::new(graph, solver, *cfg)?;
    for schedule in restricted_schedules(graph) {
        if !run.score_leaf(&schedule) {
            break;
        }
    }
    run.finish("restricted")
}
