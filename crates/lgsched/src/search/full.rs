//! Exhaustive backtracking over all admissible schedules.

use crate::graph::{Graph, VertexId};
use crate::lp::LpSolver;
use crate::schedule::{Schedule, Step};

use super::score::SearchRun;
use super::types::{SearchCfg, SearchError, SearchOutcome};

/// Score every admissible schedule of `graph`.
///
/// Branch order: the remaining steps in their original order, vertices by
/// ascending id first, then edges by ascending index. Worst case `(n+m)!`
/// leaves, pruned only by endpoint precedence.
pub fn search_full<S: LpSolver>(
    graph: &Graph,
    solver: &S,
    cfg: &SearchCfg,
) -> Result<SearchOutcome, SearchError> {
    let run = SearchRun::new(graph, solver, *cfg)?;
    let mut runner = FullRunner {
        graph,
        run,
        loaded: vec![false; graph.num_vertices() + 1],
        partial: Vec::with_capacity(graph.num_vertices() + graph.num_edges()),
    };
    let mut to_load: Vec<Step> = graph
        .vertices()
        .iter()
        .map(|&v| Step::Vertex(v))
        .chain(graph.edges().map(|(_, e)| Step::Edge(e)))
        .collect();
    runner.recur(&mut to_load);
    runner.run.finish("full")
}

/// Backtracking state: the schedule prefix and which vertices it loads.
struct FullRunner<'a, S: LpSolver> {
    graph: &'a Graph,
    run: SearchRun<'a, S>,
    loaded: Vec<bool>,
    partial: Vec<Step>,
}

impl<'a, S: LpSolver> FullRunner<'a, S> {
    fn recur(&mut self, remaining: &mut Vec<Step>) {
        if remaining.is_empty() {
            let schedule = Schedule::from_steps(self.partial.clone());
            self.run.score_leaf(&schedule);
            return;
        }
        for idx in 0..remaining.len() {
            if self.run.is_stopped() {
                return;
            }
            let step = remaining[idx];
            if !self.eligible(step) {
                continue;
            }
            remaining.remove(idx);
            self.push(step);
            self.recur(remaining);
            self.pop();
            remaining.insert(idx, step);
        }
    }

    fn eligible(&self, step: Step) -> bool {
        match step {
            Step::Vertex(_) => true,
            Step::Edge(e) => self.is_loaded(e.from) && self.is_loaded(e.to),
        }
    }

    fn is_loaded(&self, v: VertexId) -> bool {
        self.graph.slot(v).is_some_and(|s| self.loaded[s])
    }

    fn push(&mut self, step: Step) {
        if let Step::Vertex(v) = step {
            if let Some(s) = self.graph.slot(v) {
                self.loaded[s] = true;
            }
        }
        self.partial.push(step);
    }

    fn pop(&mut self) {
        if let Some(Step::Vertex(v)) = self.partial.pop() {
            if let Some(s) = self.graph.slot(v) {
                self.loaded[s] = false;
            }
        }
    }
}
