//! Target graph: directed edges labelled by a unique index `1..=m`.
//!
//! Kept small and explicit; `lp::build` and `search` only need lookups by
//! edge, by index, and by vertex slot.

use std::collections::HashMap;
use std::fmt;

/// Positive vertex identifier as written by the user (`1, 2, ...`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed edge `from → to`. `(i,j)` and `(j,i)` are different edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    #[inline]
    pub fn new(from: u32, to: u32) -> Self {
        Self {
            from: VertexId(from),
            to: VertexId(to),
        }
    }
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.from, self.to)
    }
}

/// Errors surfaced while assembling a `Graph`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// No edges given; there is nothing to schedule.
    Empty,
    /// Vertex identifiers must be positive.
    ZeroVertex(Edge),
    SelfLoop(VertexId),
    DuplicateEdge(Edge),
    /// Both `(i,j)` and `(j,i)` are present.
    AntiParallel(Edge),
    /// Edge index outside `1..=m`.
    BadIndex { edge: Edge, index: usize, m: usize },
    DuplicateIndex(usize),
    Parse(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Empty => write!(f, "graph has no edges"),
            GraphError::ZeroVertex(e) => write!(f, "edge {e} uses vertex 0 (ids must be positive)"),
            GraphError::SelfLoop(v) => write!(f, "self-loop on vertex {v}"),
            GraphError::DuplicateEdge(e) => write!(f, "edge {e} listed twice"),
            GraphError::AntiParallel(e) => {
                write!(f, "edges {e} and {} are both present", e.reversed())
            }
            GraphError::BadIndex { edge, index, m } => {
                write!(f, "edge {edge} has index {index}, expected 1..={m}")
            }
            GraphError::DuplicateIndex(k) => write!(f, "edge index {k} used more than once"),
            GraphError::Parse(msg) => write!(f, "cannot parse graph: {msg}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Immutable target graph for one run.
///
/// Invariants:
/// - edge indices form a bijection onto `1..=m`; `edges[k-1]` has index `k`;
/// - vertices are sorted ascending; vertex slot (1-based) is its rank, so
///   contiguous ids `1..n` have slot == id.
#[derive(Clone, Debug)]
pub struct Graph {
    edges: Vec<Edge>,
    vertices: Vec<VertexId>,
    index_of: HashMap<Edge, usize>,
    slot_of: HashMap<VertexId, usize>,
}

impl Graph {
    /// Build from `((from, to), index)` pairs, validating every invariant.
    pub fn new(pairs: impl IntoIterator<Item = ((u32, u32), usize)>) -> Result<Self, GraphError> {
        let pairs: Vec<(Edge, usize)> = pairs
            .into_iter()
            .map(|((i, j), k)| (Edge::new(i, j), k))
            .collect();
        let m = pairs.len();
        if m == 0 {
            return Err(GraphError::Empty);
        }
        let mut slots: Vec<Option<Edge>> = vec![None; m];
        let mut index_of = HashMap::with_capacity(m);
        for &(e, k) in &pairs {
            if e.from.0 == 0 || e.to.0 == 0 {
                return Err(GraphError::ZeroVertex(e));
            }
            if e.from == e.to {
                return Err(GraphError::SelfLoop(e.from));
            }
            if index_of.contains_key(&e) {
                return Err(GraphError::DuplicateEdge(e));
            }
            if index_of.contains_key(&e.reversed()) {
                return Err(GraphError::AntiParallel(e.reversed()));
            }
            if k == 0 || k > m {
                return Err(GraphError::BadIndex { edge: e, index: k, m });
            }
            if slots[k - 1].is_some() {
                return Err(GraphError::DuplicateIndex(k));
            }
            slots[k - 1] = Some(e);
            index_of.insert(e, k);
        }
        // Every slot is filled: m distinct indices in 1..=m.
        let edges: Vec<Edge> = slots.into_iter().flatten().collect();
        let mut vertices: Vec<VertexId> = edges.iter().flat_map(|e| [e.from, e.to]).collect();
        vertices.sort_unstable();
        vertices.dedup();
        let slot_of = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i + 1))
            .collect();
        Ok(Self {
            edges,
            vertices,
            index_of,
            slot_of,
        })
    }

    /// Build from plain edges; the index is the position in the input (`1..=m`).
    pub fn from_edges(edges: impl IntoIterator<Item = (u32, u32)>) -> Result<Self, GraphError> {
        Self::new(edges.into_iter().enumerate().map(|(i, e)| (e, i + 1)))
    }

    /// `n`.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// `m`.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in ascending id order.
    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// `(index, edge)` in ascending index order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Edge)> + '_ {
        self.edges.iter().enumerate().map(|(i, &e)| (i + 1, e))
    }

    /// Edge with index `k` (1-based).
    #[inline]
    pub fn edge(&self, k: usize) -> Option<Edge> {
        k.checked_sub(1).and_then(|i| self.edges.get(i)).copied()
    }

    #[inline]
    pub fn edge_index(&self, e: Edge) -> Option<usize> {
        self.index_of.get(&e).copied()
    }

    /// 1-based slot of vertex `v` (its rank among all vertices).
    #[inline]
    pub fn slot(&self, v: VertexId) -> Option<usize> {
        self.slot_of.get(&v).copied()
    }

    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.slot_of.contains_key(&v)
    }
}
