//! Loading steps and schedules.

use std::fmt;
use std::str::FromStr;

use crate::graph::parse::{parse_edge_token, split_top_level};
use crate::graph::{Edge, VertexId};

/// One loading step: a vertex or an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Vertex(VertexId),
    Edge(Edge),
}

impl Step {
    #[inline]
    pub fn vertex(v: u32) -> Self {
        Step::Vertex(VertexId(v))
    }
    #[inline]
    pub fn edge(from: u32, to: u32) -> Self {
        Step::Edge(Edge::new(from, to))
    }
    #[inline]
    pub fn is_vertex(&self) -> bool {
        matches!(self, Step::Vertex(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Vertex(v) => write!(f, "{v}"),
            Step::Edge(e) => write!(f, "{e}"),
        }
    }
}

/// Ordered loading schedule.
///
/// Construction does not check anything against a graph; use
/// [`Schedule::validate`] (or let `lp::ConstraintBuilder` do it).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Schedule {
    steps: Vec<Step>,
}

impl Schedule {
    #[inline]
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    #[inline]
    pub fn last(&self) -> Option<Step> {
        self.steps.last().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = Step> + '_ {
        self.steps.iter().copied()
    }
    /// All vertex steps precede all edge steps.
    pub fn is_restricted(&self) -> bool {
        let first_edge = self
            .steps
            .iter()
            .position(|s| !s.is_vertex())
            .unwrap_or(self.steps.len());
        self.steps[first_edge..].iter().all(|s| !s.is_vertex())
    }
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl From<Vec<Step>> for Schedule {
    fn from(steps: Vec<Step>) -> Self {
        Self::from_steps(steps)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, s) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{s}")?;
        }
        write!(f, "]")
    }
}

/// Syntax error in schedule text (unknown vertices/edges are reported by validation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseScheduleError(pub String);

impl fmt::Display for ParseScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse schedule: {}", self.0)
    }
}

impl std::error::Error for ParseScheduleError {}

impl FromStr for Schedule {
    type Err = ParseScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .unwrap_or(s);
        split_top_level(s)
            .into_iter()
            .map(|tok| {
                if let Ok(v) = tok.parse::<u32>() {
                    Ok(Step::vertex(v))
                } else if let Some((i, j)) = parse_edge_token(tok) {
                    Ok(Step::edge(i, j))
                } else {
                    Err(ParseScheduleError(format!("bad step `{tok}`")))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Schedule::from_steps)
    }
}
