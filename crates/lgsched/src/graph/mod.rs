//! Target graphs for the learning-graph cost search.
//!
//! A graph maps each directed edge `(i,j)` to a unique index in `1..=m`. The
//! index fixes where the edge's degree variables live in the LP
//! (`lp::VarLayout`), so it is part of the input, not an implementation detail.

pub(crate) mod parse;
pub mod samples;
mod types;

pub use types::{Edge, Graph, GraphError, VertexId};

#[cfg(test)]
mod tests;
