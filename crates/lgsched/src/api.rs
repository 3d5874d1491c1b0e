//! Curated internal API (unstable).
//!
//! - Not a public API; names move when the modules do.
//! - Prefer these re-exports in the CLI and benches.

// Graphs and schedules
pub use crate::graph::{samples, Edge, Graph, GraphError, VertexId};
pub use crate::schedule::rand::{draw_admissible, draw_restricted, ReplayToken};
pub use crate::schedule::{ParseScheduleError, Schedule, ScheduleError, Step};
// LP construction and solving
pub use crate::lp::{
    build_constraints, BuildCfg, ConstraintBuilder, ConstraintSystem, IncidentEdges, LpError,
    LpSolver, MicroLp, VarLayout,
};
// Search
pub use crate::search::{
    evaluate, restricted_schedules, search_full, search_restricted, BestTracker, Evaluation,
    SearchCfg, SearchError, SearchOutcome, SearchStats, StopReason,
};
// Reporting
pub use crate::report::{approx_fraction, ParameterReport};
