//! Human-readable view of a solved LP: objective, set sizes, signed degrees.
//!
//! Values print with four decimals and, when one is found, a small fraction
//! (`1.2857 = 9 / 7`), since the optima of these programs are rationals with
//! small denominators.

use std::fmt;

use crate::cfg::{FRAC_MAX_DEN, FRAC_TOL};
use crate::graph::{Edge, Graph, VertexId};
use crate::lp::{LpError, VarLayout};

/// Smallest denominator `q < FRAC_MAX_DEN` with `|q·x − round(q·x)| < tol`.
///
/// Returns `(p, q)` with `x ≈ p / q`; `None` for non-finite `x` or when no
/// denominator in range fits.
pub fn approx_fraction(x: f64, tol: f64) -> Option<(i64, u32)> {
    if !x.is_finite() {
        return None;
    }
    (1..FRAC_MAX_DEN).find_map(|q| {
        let scaled = x * q as f64;
        let p = scaled.round();
        ((scaled - p).abs() < tol).then_some((p as i64, q))
    })
}

/// Parameters of one LP optimum, keyed by vertex and edge.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterReport {
    pub cost: f64,
    /// `r_j` per vertex, ascending id.
    pub set_sizes: Vec<(VertexId, f64)>,
    /// `deg_pos_k - deg_neg_k` per edge, ascending index.
    pub degrees: Vec<(Edge, f64)>,
}

impl ParameterReport {
    /// Read the parameters out of a solution vector laid out as `VarLayout`.
    pub fn from_solution(graph: &Graph, values: &[f64]) -> Result<Self, LpError> {
        let lay = VarLayout::for_graph(graph);
        if values.len() != lay.num_vars() {
            return Err(LpError::Internal(format!(
                "solution has {} values, layout needs {}",
                values.len(),
                lay.num_vars()
            )));
        }
        let set_sizes = graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, values[lay.set_size(i + 1)]))
            .collect();
        let degrees = graph
            .edges()
            .map(|(k, e)| (e, values[lay.deg_pos(k)] - values[lay.deg_neg(k)]))
            .collect();
        Ok(Self {
            cost: values[VarLayout::COST],
            set_sizes,
            degrees,
        })
    }

    /// Fractional form of the objective, if a small one exists.
    pub fn cost_fraction(&self) -> Option<(i64, u32)> {
        approx_fraction(self.cost, FRAC_TOL)
    }
}

/// `0.2857 = 2 / 7`, or just `0.2857`.
struct Value(f64);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)?;
        if let Some((p, q)) = approx_fraction(self.0, FRAC_TOL) {
            write!(f, " = {p} / {q}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ParameterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The objective value is {}", Value(self.cost))?;
        writeln!(f)?;
        writeln!(f, "Set size parameters are")?;
        for (v, r) in &self.set_sizes {
            writeln!(f, "set {v} = {}", Value(*r))?;
        }
        writeln!(f)?;
        writeln!(f, "Degree parameters are")?;
        for (e, d) in &self.degrees {
            writeln!(f, "degree from {} to {} = {}", e.from, e.to, Value(*d))?;
        }
        Ok(())
    }
}
