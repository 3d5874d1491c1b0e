//! LP solver boundary and the `microlp` adapter.

use std::fmt;

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

use super::system::ConstraintSystem;

/// Solver outcome other than an optimum. Never folded into a cost value.
#[derive(Clone, Debug, PartialEq)]
pub enum LpError {
    Infeasible,
    Unbounded,
    Internal(String),
}

impl fmt::Display for LpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LpError::Infeasible => write!(f, "LP is infeasible"),
            LpError::Unbounded => write!(f, "LP objective is unbounded"),
            LpError::Internal(msg) => write!(f, "LP solver error: {msg}"),
        }
    }
}

impl std::error::Error for LpError {}

/// Minimizes one variable subject to `A x <= b`, `x >= 0`.
pub trait LpSolver {
    /// Returns one value per LP column.
    fn minimize(&self, system: &ConstraintSystem, objective: usize) -> Result<Vec<f64>, LpError>;
}

impl<S: LpSolver + ?Sized> LpSolver for &S {
    fn minimize(&self, system: &ConstraintSystem, objective: usize) -> Result<Vec<f64>, LpError> {
        (**self).minimize(system, objective)
    }
}

/// Dense simplex from the `microlp` crate (pure Rust).
#[derive(Clone, Copy, Debug, Default)]
pub struct MicroLp;

impl LpSolver for MicroLp {
    fn minimize(&self, system: &ConstraintSystem, objective: usize) -> Result<Vec<f64>, LpError> {
        let cols = system.num_vars();
        if objective >= cols {
            return Err(LpError::Internal(format!(
                "objective column {objective} out of range ({cols} columns)"
            )));
        }
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<Variable> = (0..cols)
            .map(|j| {
                let c = if j == objective { 1.0 } else { 0.0 };
                problem.add_var(c, (0.0, f64::INFINITY))
            })
            .collect();
        for (i, row) in system.a.row_iter().enumerate() {
            let terms: Vec<(Variable, f64)> = row
                .iter()
                .zip(&vars)
                .filter(|(c, _)| **c != 0.0)
                .map(|(c, v)| (*v, *c))
                .collect();
            problem.add_constraint(terms, ComparisonOp::Le, system.b[i]);
        }
        let solution = problem.solve().map_err(|e| match e {
            microlp::Error::Infeasible => LpError::Infeasible,
            microlp::Error::Unbounded => LpError::Unbounded,
            other => LpError::Internal(other.to_string()),
        })?;
        Ok(vars.iter().map(|&v| solution[v]).collect())
    }
}
