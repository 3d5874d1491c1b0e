//! Admissibility check: every edge is loaded after both of its endpoints.

use std::fmt;

use crate::graph::{Edge, Graph, VertexId};

use super::types::{Schedule, Step};

/// Why a schedule cannot be turned into an LP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    Empty,
    /// Vertex step naming a vertex the graph does not have.
    UnknownVertex { vertex: VertexId, position: usize },
    /// Edge step naming an edge the graph does not have (direction matters).
    UnknownEdge { edge: Edge, position: usize },
    /// The same step occurs twice.
    Duplicate { step: Step, position: usize },
    /// Edge step before one of its endpoints.
    Inadmissible {
        edge: Edge,
        position: usize,
        missing: VertexId,
    },
    /// Not every vertex and edge is loaded.
    Incomplete { expected: usize, found: usize },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::Empty => write!(f, "schedule is empty"),
            ScheduleError::UnknownVertex { vertex, position } => {
                write!(f, "step {position}: vertex {vertex} is not in the graph")
            }
            ScheduleError::UnknownEdge { edge, position } => {
                write!(f, "step {position}: edge {edge} is not in the graph")
            }
            ScheduleError::Duplicate { step, position } => {
                write!(f, "step {position}: {step} is loaded twice")
            }
            ScheduleError::Inadmissible {
                edge,
                position,
                missing,
            } => write!(
                f,
                "step {position}: edge {edge} loaded before its endpoint {missing}"
            ),
            ScheduleError::Incomplete { expected, found } => write!(
                f,
                "schedule has {found} distinct steps, graph needs {expected}"
            ),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl Schedule {
    /// Check that `self` is a complete admissible schedule for `graph`.
    ///
    /// Errors are reported for the first offending position (0-based).
    pub fn validate(&self, graph: &Graph) -> Result<(), ScheduleError> {
        if self.is_empty() {
            return Err(ScheduleError::Empty);
        }
        let mut vertex_seen = vec![false; graph.num_vertices() + 1];
        let mut edge_seen = vec![false; graph.num_edges() + 1];
        for (position, step) in self.iter().enumerate() {
            match step {
                Step::Vertex(vertex) => {
                    let slot = graph
                        .slot(vertex)
                        .ok_or(ScheduleError::UnknownVertex { vertex, position })?;
                    if std::mem::replace(&mut vertex_seen[slot], true) {
                        return Err(ScheduleError::Duplicate { step, position });
                    }
                }
                Step::Edge(edge) => {
                    let k = graph
                        .edge_index(edge)
                        .ok_or(ScheduleError::UnknownEdge { edge, position })?;
                    if std::mem::replace(&mut edge_seen[k], true) {
                        return Err(ScheduleError::Duplicate { step, position });
                    }
                    for end in [edge.from, edge.to] {
                        // Endpoints of a known edge always have a slot.
                        let loaded = graph.slot(end).is_some_and(|s| vertex_seen[s]);
                        if !loaded {
                            return Err(ScheduleError::Inadmissible {
                                edge,
                                position,
                                missing: end,
                            });
                        }
                    }
                }
            }
        }
        let expected = graph.num_vertices() + graph.num_edges();
        if self.len() != expected {
            return Err(ScheduleError::Incomplete {
                expected,
                found: self.len(),
            });
        }
        Ok(())
    }
}
