//! Loading-schedule search for LMS learning-graph algorithms.
//!
//! A target graph `G` is matched by loading its vertices and edges one step at
//! a time. Each admissible order (a schedule) yields a linear program whose
//! optimum is the running-time exponent of that order; the searches look for
//! the schedule with the smallest exponent.
//!
//! Layout
//! - `graph`: target graphs, text form, named samples.
//! - `schedule`: steps, admissibility check, seeded random schedules.
//! - `lp`: constraint construction (`A x <= b`) and the solver seam.
//! - `search`: full and restricted enumeration, improvement log.
//! - `report`: readable view of a solved LP.
//!
//! API Policy
//! - The crate is used by the `lgsched` CLI and its own benches; there is no
//!   stable public API. `api` collects the names callers usually need.

pub mod api;
pub mod cfg;
pub mod graph;
pub mod lp;
pub mod report;
pub mod schedule;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{Edge, Graph, VertexId};
pub use schedule::{Schedule, Step};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::{samples, Edge, Graph, GraphError, VertexId};
    pub use crate::lp::{BuildCfg, IncidentEdges, LpSolver, MicroLp};
    pub use crate::report::ParameterReport;
    pub use crate::schedule::{Schedule, ScheduleError, Step};
    pub use crate::search::{search_full, search_restricted, SearchCfg, SearchOutcome};
}
