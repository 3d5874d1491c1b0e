//! Text forms for graphs and schedules.
//!
//! - Edge token: `i>j`, `i->j` or `(i,j)`.
//! - Graph: comma-separated edge tokens, each optionally suffixed `:k` with its
//!   index, e.g. `1>2:1, 1>3:2, 2>3:3`. Either every edge carries an index or
//!   none does (then indices follow input order).
//! - Schedule (see `schedule::Schedule`'s `FromStr`): comma-separated vertex
//!   ids and edge tokens, e.g. `1, 2, 3, 1>2, 2>3, 1>3`.

use std::str::FromStr;

use super::types::{Graph, GraphError};

/// Split on `,`, `;` and newlines that are not inside parentheses.
pub(crate) fn split_top_level(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' | ';' | '\n' if depth == 0 => {
                out.push(s[start..i].trim());
                start = i + ch.len_utf8();
            }
            _ => {}
        }
    }
    out.push(s[start..].trim());
    out.retain(|t| !t.is_empty());
    out
}

/// Parse a single edge token into `(from, to)`.
pub(crate) fn parse_edge_token(tok: &str) -> Option<(u32, u32)> {
    let tok = tok.trim();
    let (a, b) = if let Some(inner) = tok.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        inner.split_once(',')?
    } else if let Some(pair) = tok.split_once("->") {
        pair
    } else {
        tok.split_once('>')?
    };
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut indexed = Vec::new();
        let mut plain = Vec::new();
        for tok in split_top_level(s) {
            match tok.rsplit_once(':') {
                Some((edge, k)) => {
                    let e = parse_edge_token(edge)
                        .ok_or_else(|| GraphError::Parse(format!("bad edge `{edge}`")))?;
                    let k: usize = k
                        .trim()
                        .parse()
                        .map_err(|_| GraphError::Parse(format!("bad edge index `{k}`")))?;
                    indexed.push((e, k));
                }
                None => {
                    let e = parse_edge_token(tok)
                        .ok_or_else(|| GraphError::Parse(format!("bad edge `{tok}`")))?;
                    plain.push(e);
                }
            }
        }
        match (indexed.is_empty(), plain.is_empty()) {
            (true, _) => Graph::from_edges(plain),
            (false, true) => Graph::new(indexed),
            (false, false) => Err(GraphError::Parse(
                "either every edge has an index or none does".into(),
            )),
        }
    }
}
