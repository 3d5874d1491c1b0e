//! Learning-graph LP: variable layout, constraint construction, solver boundary.
//!
//! Purpose
//! - Translate one loading schedule into `A x <= b`, `x >= 0` whose minimum of
//!   `x[0]` is the schedule's query-complexity exponent, and solve it.
//!
//! Why this design
//! - Construction is a pure function of `(graph, schedule)`; the solver sits
//!   behind the `LpSolver` trait so search code does not care which simplex
//!   runs underneath (tests can also stub it).
//! - Rows are emitted from an immutable base row plus sparse deltas; no row
//!   buffer is shared between two constraints.
//!
//! References
//! - Lee, Magniez, Santha: "Improved quantum query algorithms for triangle
//!   finding and associativity testing" (learning-graph cost and admissible
//!   parameters).

mod build;
mod solver;
mod system;

pub use build::{build_constraints, BuildCfg, ConstraintBuilder, IncidentEdges};
pub use solver::{LpError, LpSolver, MicroLp};
pub use system::{ConstraintSystem, VarLayout};
