//! Random admissible schedules with replay tokens.
//!
//! Used by benches and property tests to get arbitrary members of the full
//! and restricted search spaces without enumerating them.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

use super::types::{Schedule, Step};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw an admissible schedule: at every position pick uniformly among the
/// steps that are currently eligible (any unloaded vertex, or an unloaded edge
/// whose endpoints are loaded).
///
/// Not uniform over schedules; every admissible schedule has positive probability.
pub fn draw_admissible(graph: &Graph, tok: ReplayToken) -> Schedule {
    let mut rng = tok.to_std_rng();
    let mut remaining: Vec<Step> = graph
        .vertices()
        .iter()
        .map(|&v| Step::Vertex(v))
        .chain(graph.edges().map(|(_, e)| Step::Edge(e)))
        .collect();
    let mut loaded = vec![false; graph.num_vertices() + 1];
    let mut steps = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let eligible: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, s)| match s {
                Step::Vertex(_) => true,
                Step::Edge(e) => [e.from, e.to]
                    .iter()
                    .all(|&v| graph.slot(v).is_some_and(|k| loaded[k])),
            })
            .map(|(i, _)| i)
            .collect();
        // Some vertex is always eligible while edges wait on it.
        let pick = eligible[rng.gen_range(0..eligible.len())];
        let step = remaining.remove(pick);
        if let Step::Vertex(v) = step {
            if let Some(k) = graph.slot(v) {
                loaded[k] = true;
            }
        }
        steps.push(step);
    }
    Schedule::from_steps(steps)
}

/// Draw a restricted schedule: a shuffled vertex order followed by a shuffled edge order.
pub fn draw_restricted(graph: &Graph, tok: ReplayToken) -> Schedule {
    let mut rng = tok.to_std_rng();
    let mut vertices: Vec<Step> = graph.vertices().iter().map(|&v| Step::Vertex(v)).collect();
    let mut edges: Vec<Step> = graph.edges().map(|(_, e)| Step::Edge(e)).collect();
    vertices.shuffle(&mut rng);
    edges.shuffle(&mut rng);
    vertices.extend(edges);
    Schedule::from_steps(vertices)
}
