//! Sample target graphs and loading schedules from the LMS paper experiments.
//!
//! Graphs are `((from, to), index)` literals; build them with
//! `Graph::new(TRIANGLE.iter().copied())` or look them up via [`graph`].
//! Schedules are text (see `schedule::Schedule`'s `FromStr`).

use super::types::{Graph, GraphError};

pub type EdgeList = &'static [((u32, u32), usize)];

/// Triangle with edges oriented away from the smallest vertex.
pub const TRIANGLE: EdgeList = &[((1, 2), 1), ((1, 3), 2), ((2, 3), 3)];
/// Triangle oriented as the restricted search experiments use it.
pub const TRIANGLE_CYCLIC: EdgeList = &[((1, 2), 1), ((3, 2), 2), ((3, 1), 3)];
/// Associativity testing pattern.
pub const ASSOC: EdgeList = &[((2, 1), 1), ((2, 3), 2), ((3, 4), 3), ((5, 4), 4)];
/// Associativity pattern as a directed path.
pub const ASSOC_CHAIN: EdgeList = &[((1, 2), 1), ((2, 3), 2), ((3, 4), 3), ((4, 5), 4)];
pub const DIST: EdgeList = &[((1, 2), 1), ((2, 3), 2), ((1, 3), 3), ((4, 3), 4), ((5, 6), 5)];
pub const FOUR_CLIQUE: EdgeList = &[
    ((1, 2), 1),
    ((1, 3), 2),
    ((1, 4), 3),
    ((2, 3), 4),
    ((2, 4), 5),
    ((3, 4), 6),
];
pub const FIVE_CLIQUE: EdgeList = &[
    ((1, 2), 1),
    ((1, 3), 2),
    ((1, 4), 3),
    ((1, 5), 4),
    ((2, 3), 5),
    ((2, 4), 6),
    ((2, 5), 7),
    ((3, 4), 8),
    ((3, 5), 9),
    ((4, 5), 10),
];

/// For [`TRIANGLE`].
pub const TRI_SCHEDULE: &str = "1, 2, 3, 1>2, 2>3, 1>3";
/// For [`ASSOC`].
pub const ASSOC_SCHEDULE: &str = "1, 2, 4, 3, 2>1, 2>3, 3>4, 5, 5>4";
/// For [`FIVE_CLIQUE`].
pub const FIVE_SCHEDULE: &str =
    "1, 2, 3, 4, 5, 1>2, 1>3, 1>4, 1>5, 2>3, 2>4, 2>5, 3>4, 3>5, 4>5";

/// Names accepted by [`graph`].
pub const GRAPH_NAMES: &[&str] = &[
    "triangle",
    "triangle-cyclic",
    "assoc",
    "assoc-chain",
    "dist",
    "four-clique",
    "five-clique",
];

/// Edge list of a named sample graph.
pub fn edge_list(name: &str) -> Option<EdgeList> {
    Some(match name {
        "triangle" => TRIANGLE,
        "triangle-cyclic" => TRIANGLE_CYCLIC,
        "assoc" => ASSOC,
        "assoc-chain" => ASSOC_CHAIN,
        "dist" => DIST,
        "four-clique" => FOUR_CLIQUE,
        "five-clique" => FIVE_CLIQUE,
        _ => return None,
    })
}

/// Build a named sample graph. `None` if the name is unknown.
pub fn graph(name: &str) -> Option<Result<Graph, GraphError>> {
    edge_list(name).map(|edges| Graph::new(edges.iter().copied()))
}

/// Sample schedule text by name (`tri`, `assoc`, `five`).
pub fn schedule(name: &str) -> Option<&'static str> {
    Some(match name {
        "tri" => TRI_SCHEDULE,
        "assoc" => ASSOC_SCHEDULE,
        "five" => FIVE_SCHEDULE,
        _ => return None,
    })
}
