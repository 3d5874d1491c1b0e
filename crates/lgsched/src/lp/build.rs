//! Schedule → LP constraints for the LMS learning-graph cost.
//!
//! The schedule is walked as a fold over its prefixes. Before every step the
//! vertex-ratio row of the loaded set is recomputed; each step then emits rows
//! as that base row plus a few sparse deltas.
//!
//! Setup rows (independent of the order):
//! - `r_j <= 1` per vertex slot `j` (normalized log size). The bound has also
//!   been written as `r_j <= n`; the numeric `1` is kept, see DESIGN.md.
//! - per edge `k = (i,j)`: `deg_k - r_j <= 0` (degree into set `j` cannot
//!   exceed its size) and `r_i + deg_k - cost <= 0` (setup cost).
//!
//! Only admissibility-derived constraints are encoded; whether the optimum is
//! admissible in the full LMS sense must be checked on the parameters.

use crate::graph::{Edge, Graph, VertexId};
use crate::schedule::{Schedule, ScheduleError, Step};

use super::system::{ConstraintSystem, VarLayout};
use nalgebra::{DMatrix, DVector};

/// Which incident edges produce a row when a vertex is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IncidentEdges {
    /// Edges whose other endpoint is already loaded.
    #[default]
    Loaded,
    /// Every incident edge, loaded neighbour or not (as in the published LMS programs).
    All,
}

/// Construction options.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildCfg {
    pub incident: IncidentEdges,
}

/// Builds `(A, b)` for schedules over one graph.
#[derive(Clone, Debug)]
pub struct ConstraintBuilder<'g> {
    graph: &'g Graph,
    layout: VarLayout,
    cfg: BuildCfg,
}

/// Convenience: validate and build with default options.
pub fn build_constraints(
    graph: &Graph,
    schedule: &Schedule,
) -> Result<ConstraintSystem, ScheduleError> {
    ConstraintBuilder::new(graph).build(schedule)
}

impl<'g> ConstraintBuilder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_cfg(graph, BuildCfg::default())
    }

    pub fn with_cfg(graph: &'g Graph, cfg: BuildCfg) -> Self {
        Self {
            graph,
            layout: VarLayout::for_graph(graph),
            cfg,
        }
    }

    #[inline]
    pub fn layout(&self) -> VarLayout {
        self.layout
    }

    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Validate `schedule` and build its constraint system.
    ///
    /// Deterministic: equal inputs give bit-identical `(A, b)`.
    pub fn build(&self, schedule: &Schedule) -> Result<ConstraintSystem, ScheduleError> {
        schedule.validate(self.graph)?;
        let mut rows = RowSink::new(self.layout.num_vars());
        self.setup(&mut rows);

        let mut state = LoadState::new(self.graph);
        let Some((&last, prefix)) = schedule.steps().split_last() else {
            return Err(ScheduleError::Empty);
        };
        for &step in prefix {
            let base = self.vertex_ratio(&state);
            match step {
                Step::Vertex(a) => {
                    let a = self.slot(a);
                    self.load_vertex(&mut rows, &base, a, &state);
                    state.load_vertex(a);
                }
                Step::Edge(e) => {
                    let (i, j) = self.ends(e);
                    rows.push(&base, &[(i, 1.0)], base.rhs);
                    rows.push(&base, &[(j, 1.0)], base.rhs);
                    state.load_edge(self.index(e), j);
                }
            }
        }
        let Step::Edge(e) = last else {
            unreachable!("every vertex has an edge, so a complete admissible schedule ends on one");
        };
        let base = self.vertex_ratio(&state);
        let (i, j) = self.ends(e);
        rows.push(&base, &[(i, 0.5), (j, 0.5)], base.rhs);

        Ok(rows.finish(self.layout))
    }

    fn setup(&self, rows: &mut RowSink) {
        let lay = self.layout;
        let zero = RowTemplate::zero(lay.num_vars());
        for slot in 1..=lay.n() {
            rows.push(&zero, &[(lay.set_size(slot), 1.0)], 1.0);
        }
        for (k, e) in self.graph.edges() {
            let (i, j) = self.ends(e);
            let deg = [(lay.deg_pos(k), 1.0), (lay.deg_neg(k), -1.0)];
            rows.push(&zero, &[deg[0], deg[1], (j, -1.0)], 0.0);
            rows.push(&zero, &[(VarLayout::COST, -1.0), (i, 1.0), deg[0], deg[1]], 0.0);
        }
    }

    /// Base row of the loaded set: `-cost - ½Σ r_v + ½Σ_e (r_target(e) - deg_e)`
    /// with right-hand side `-½·#vertices`.
    fn vertex_ratio(&self, state: &LoadState) -> RowTemplate {
        let lay = self.layout;
        let mut row = RowTemplate::zero(lay.num_vars());
        row.coeffs[VarLayout::COST] = -1.0;
        for &v in &state.vertices {
            row.coeffs[lay.set_size(v)] -= 0.5;
        }
        for &(k, target) in &state.edges {
            row.coeffs[lay.deg_pos(k)] -= 0.5;
            row.coeffs[lay.deg_neg(k)] += 0.5;
            row.coeffs[lay.set_size(target)] += 0.5;
        }
        row.rhs = -(state.vertices.len() as f64) / 2.0;
        row
    }

    /// One row per edge between `a` and a neighbour, neighbours by ascending slot.
    fn load_vertex(&self, rows: &mut RowSink, base: &RowTemplate, a: usize, state: &LoadState) {
        let lay = self.layout;
        let rhs = base.rhs - 0.5;
        let a_id = self.graph.vertices()[a - 1];
        for (v_idx, &v_id) in self.graph.vertices().iter().enumerate() {
            let v = v_idx + 1;
            if self.cfg.incident == IncidentEdges::Loaded && !state.is_loaded(v) {
                continue;
            }
            let out = Edge {
                from: a_id,
                to: v_id,
            };
            if let Some(k) = self.graph.edge_index(out) {
                rows.push(base, &[(lay.deg_pos(k), 1.0), (lay.deg_neg(k), -1.0)], rhs);
            }
            if let Some(k) = self.graph.edge_index(out.reversed()) {
                rows.push(
                    base,
                    &[
                        (lay.deg_pos(k), 1.0),
                        (lay.deg_neg(k), -1.0),
                        (lay.set_size(v), 1.0),
                        (lay.set_size(a), -1.0),
                    ],
                    rhs,
                );
            }
        }
    }

    // Lookups below cannot fail once the schedule has been validated.

    fn slot(&self, v: VertexId) -> usize {
        self.graph
            .slot(v)
            .unwrap_or_else(|| unreachable!("validated vertex {v} has a slot"))
    }

    fn index(&self, e: Edge) -> usize {
        self.graph
            .edge_index(e)
            .unwrap_or_else(|| unreachable!("validated edge {e} has an index"))
    }

    fn ends(&self, e: Edge) -> (usize, usize) {
        (
            self.layout.set_size(self.slot(e.from)),
            self.layout.set_size(self.slot(e.to)),
        )
    }
}

/// Loaded vertices (slots, in load order) and edges (index, target slot).
#[derive(Clone, Debug)]
struct LoadState {
    vertices: Vec<usize>,
    edges: Vec<(usize, usize)>,
    loaded: Vec<bool>,
}

impl LoadState {
    fn new(graph: &Graph) -> Self {
        Self {
            vertices: Vec::with_capacity(graph.num_vertices()),
            edges: Vec::with_capacity(graph.num_edges()),
            loaded: vec![false; graph.num_vertices() + 1],
        }
    }
    fn load_vertex(&mut self, slot: usize) {
        self.vertices.push(slot);
        self.loaded[slot] = true;
    }
    fn load_edge(&mut self, k: usize, target_slot: usize) {
        self.edges.push((k, target_slot));
    }
    fn is_loaded(&self, slot: usize) -> bool {
        self.loaded[slot]
    }
}

/// Immutable base row; emitted rows are copies plus sparse deltas.
#[derive(Clone, Debug)]
struct RowTemplate {
    coeffs: Vec<f64>,
    rhs: f64,
}

impl RowTemplate {
    fn zero(num_vars: usize) -> Self {
        Self {
            coeffs: vec![0.0; num_vars],
            rhs: 0.0,
        }
    }
}

/// Row-major accumulation buffer for `A` and `b`.
struct RowSink {
    cols: usize,
    data: Vec<f64>,
    rhs: Vec<f64>,
}

impl RowSink {
    fn new(cols: usize) -> Self {
        Self {
            cols,
            data: Vec::new(),
            rhs: Vec::new(),
        }
    }

    fn push(&mut self, base: &RowTemplate, deltas: &[(usize, f64)], rhs: f64) {
        debug_assert_eq!(base.coeffs.len(), self.cols);
        let start = self.data.len();
        self.data.extend_from_slice(&base.coeffs);
        for &(col, d) in deltas {
            self.data[start + col] += d;
        }
        self.rhs.push(rhs);
    }

    fn finish(self, layout: VarLayout) -> ConstraintSystem {
        let nrows = self.rhs.len();
        ConstraintSystem {
            a: DMatrix::from_row_slice(nrows, self.cols, &self.data),
            b: DVector::from_vec(self.rhs),
            layout,
        }
    }
}
