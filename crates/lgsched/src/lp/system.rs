//! LP variable layout and the assembled constraint system `A x <= b`, `x >= 0`.

use nalgebra::{DMatrix, DVector};

use crate::graph::Graph;

/// Column layout of the LP for a fixed `(graph, n)`.
///
/// - `0`: objective `cost`;
/// - `1..=n`: set-size parameters `r_j` by vertex slot;
/// - per edge index `k`: `deg_pos_k` at `n + 2k - 1`, `deg_neg_k` at `n + 2k`.
///
/// The signed degree of edge `k` is `deg_pos_k - deg_neg_k`; the pair exists
/// because every LP variable is non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarLayout {
    n: usize,
    m: usize,
}

impl VarLayout {
    pub const COST: usize = 0;

    pub fn new(n: usize, m: usize) -> Self {
        Self { n, m }
    }
    pub fn for_graph(graph: &Graph) -> Self {
        Self::new(graph.num_vertices(), graph.num_edges())
    }
    #[inline]
    pub fn num_vars(&self) -> usize {
        1 + self.n + 2 * self.m
    }
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }
    /// Column of `r_j` for vertex slot `slot` (1-based).
    #[inline]
    pub fn set_size(&self, slot: usize) -> usize {
        debug_assert!((1..=self.n).contains(&slot));
        slot
    }
    /// Column of `deg_pos_k` for edge index `k` (1-based).
    #[inline]
    pub fn deg_pos(&self, k: usize) -> usize {
        debug_assert!((1..=self.m).contains(&k));
        self.n + 2 * k - 1
    }
    /// Column of `deg_neg_k` for edge index `k` (1-based).
    #[inline]
    pub fn deg_neg(&self, k: usize) -> usize {
        debug_assert!((1..=self.m).contains(&k));
        self.n + 2 * k
    }
}

/// Constraint system `A x <= b` with its variable layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintSystem {
    pub a: DMatrix<f64>,
    pub b: DVector<f64>,
    pub layout: VarLayout,
}

impl ConstraintSystem {
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.a.nrows()
    }
    #[inline]
    pub fn num_vars(&self) -> usize {
        self.a.ncols()
    }
    /// Row `i` as `(coefficients, rhs)`.
    pub fn row(&self, i: usize) -> (Vec<f64>, f64) {
        (self.a.row(i).iter().copied().collect(), self.b[i])
    }
    /// Whether `x >= -eps` and `A x <= b + eps` componentwise.
    pub fn is_satisfied_by(&self, x: &[f64], eps: f64) -> bool {
        if x.len() != self.num_vars() || x.iter().any(|&v| v < -eps) {
            return false;
        }
        let lhs = &self.a * DVector::from_column_slice(x);
        lhs.iter().zip(self.b.iter()).all(|(l, r)| *l <= *r + eps)
    }
}
