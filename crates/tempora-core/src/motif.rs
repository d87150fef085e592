//! Bounded-delay chain motif search

use crate::edge::{EdgeId, NodeId, TemporalEdge};
use crate::error::Result;
use crate::limits::{validate_delay, validate_limit, validate_motif_length, ValidationError};
use crate::time::{TimeWindow, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chain motif query builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifQuery {
    /// Number of nodes in the chain
    #[serde(default = "default_length")]
    pub length: usize,

    /// Maximum delay between consecutive edges (None = unconstrained)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within: Option<f64>,

    /// Edges considered by the search
    #[serde(default)]
    pub window: TimeWindow,

    /// Stop after this many motifs (None = exhaustive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

fn default_length() -> usize {
    3
}

impl Default for MotifQuery {
    fn default() -> Self {
        Self {
            length: default_length(),
            within: None,
            window: TimeWindow::All,
            limit: None,
        }
    }
}

impl MotifQuery {
    /// Create a query for chains of `length` nodes
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Bound the delay between consecutive edges
    pub fn within(mut self, max_delay: f64) -> Self {
        self.within = Some(max_delay);
        self
    }

    /// Restrict the search to a time window
    pub fn in_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    /// Stop after `limit` motifs
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_motif_length(self.length)?;
        if let Some(within) = self.within {
            validate_delay(within)?;
        }
        if let Some(limit) = self.limit {
            validate_limit(limit)?;
        }
        Ok(())
    }
}

/// A chain `nodes[0] -> nodes[1] -> ... -> nodes[length - 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainMotif<N> {
    pub nodes: Vec<N>,

    /// Occurrence time of each edge, non-decreasing
    ///
    /// One entry per edge, so `length - 1` entries; the first edge's time is
    /// not repeated as a start time for `nodes[0]`.
    pub times: Vec<Timestamp>,

    /// Log position of each edge
    pub edges: Vec<EdgeId>,
}

/// Partial chain in the search arena
#[derive(Debug, Clone, Copy)]
struct Frame {
    parent: Option<usize>,
    /// Index into the time-sorted edge list
    edge: usize,
    /// Nodes on the chain so far
    nodes: usize,
}

/// Search statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotifStats {
    pub edges_considered: usize,
    pub frames_expanded: usize,
    pub motifs_found: usize,

    /// The search stopped at the query's `limit`. Set even when the limit
    /// happens to equal the number of motifs that exist.
    pub limit_reached: bool,
}

/// Depth-bounded chain motif search
///
/// Edges are stable-sorted by time and every sorted edge roots a search. A
/// chain ending in sorted edge `i` may only be extended by a sorted edge
/// `j > i` leaving the chain's last node, so an edge passed over in the
/// sorted order is never reused later in the same chain. Frames live in an
/// arena and are explored from an explicit stack; children are pushed in
/// reverse so results come out in depth-first, ascending-index order.
pub struct MotifSearch;

impl MotifSearch {
    /// Run a motif query over the given edges
    pub fn run<'a, N, I>(query: &MotifQuery, edges: I) -> Result<(Vec<ChainMotif<N>>, MotifStats)>
    where
        N: NodeId + 'a,
        I: IntoIterator<Item = &'a TemporalEdge<N>>,
    {
        query.validate()?;

        let mut sorted: Vec<&TemporalEdge<N>> = edges.into_iter().collect();
        sorted.sort_by_key(|e| e.time);

        let mut by_source: HashMap<&N, Vec<usize>> = HashMap::new();
        for (idx, edge) in sorted.iter().enumerate() {
            by_source.entry(&edge.source).or_default().push(idx);
        }

        let mut stats = MotifStats {
            edges_considered: sorted.len(),
            ..Default::default()
        };
        let mut results = Vec::new();
        let mut arena: Vec<Frame> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut children: Vec<usize> = Vec::new();

        'roots: for root in 0..sorted.len() {
            arena.clear();
            arena.push(Frame {
                parent: None,
                edge: root,
                nodes: 2,
            });
            stack.push(0);

            while let Some(slot) = stack.pop() {
                let frame = arena[slot];
                stats.frames_expanded += 1;

                if frame.nodes == query.length {
                    results.push(Self::build_motif(&sorted, &arena, slot));
                    if query.limit.is_some_and(|limit| results.len() >= limit) {
                        stats.limit_reached = true;
                        stack.clear();
                        break 'roots;
                    }
                    continue;
                }

                let last = sorted[frame.edge];
                let Some(candidates) = by_source.get(&last.target) else {
                    continue;
                };
                let first = candidates.partition_point(|&j| j <= frame.edge);

                children.clear();
                for &j in &candidates[first..] {
                    if let Some(max_delay) = query.within {
                        let delay = sorted[j].time.delay_since(last.time);
                        if delay > max_delay {
                            break;
                        }
                        if delay.is_nan() {
                            continue;
                        }
                    }
                    children.push(j);
                }

                for &j in children.iter().rev() {
                    arena.push(Frame {
                        parent: Some(slot),
                        edge: j,
                        nodes: frame.nodes + 1,
                    });
                    stack.push(arena.len() - 1);
                }
            }
        }

        stats.motifs_found = results.len();
        tracing::debug!(
            "Motif search (length={}, within={:?}) over {} edges: {} frames, {} motifs{}",
            query.length,
            query.within,
            stats.edges_considered,
            stats.frames_expanded,
            stats.motifs_found,
            if stats.limit_reached { " (limit reached)" } else { "" }
        );

        Ok((results, stats))
    }

    fn build_motif<N: NodeId>(
        sorted: &[&TemporalEdge<N>],
        arena: &[Frame],
        slot: usize,
    ) -> ChainMotif<N> {
        let mut chain = Vec::new();
        let mut cursor = Some(slot);
        while let Some(idx) = cursor {
            chain.push(sorted[arena[idx].edge]);
            cursor = arena[idx].parent;
        }
        chain.reverse();

        let mut nodes = Vec::with_capacity(chain.len() + 1);
        if let Some(first) = chain.first() {
            nodes.push(first.source.clone());
        }
        nodes.extend(chain.iter().map(|e| e.target.clone()));

        ChainMotif {
            nodes,
            times: chain.iter().map(|e| e.time).collect(),
            edges: chain.iter().map(|e| e.id).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Attributes;
    use crate::error::Error;

    fn edges(raw: &[(&'static str, &'static str, i32)]) -> Vec<TemporalEdge<&'static str>> {
        raw.iter()
            .enumerate()
            .map(|(i, &(source, target, t))| TemporalEdge {
                id: EdgeId(i),
                time: Timestamp::from(t),
                source,
                target,
                attributes: Attributes::new(),
            })
            .collect()
    }

    fn chains(motifs: &[ChainMotif<&'static str>]) -> Vec<Vec<&'static str>> {
        motifs.iter().map(|m| m.nodes.clone()).collect()
    }

    #[test]
    fn test_simple_chain() {
        let log = edges(&[("A", "B", 1), ("B", "C", 2), ("C", "D", 3)]);
        let (motifs, stats) = MotifSearch::run(&MotifQuery::new(3).within(2.0), &log).unwrap();

        assert_eq!(chains(&motifs), vec![vec!["A", "B", "C"], vec!["B", "C", "D"]]);
        assert_eq!(motifs[0].times, vec![Timestamp::from(1), Timestamp::from(2)]);
        assert_eq!(motifs[0].edges, vec![EdgeId(0), EdgeId(1)]);
        assert_eq!(stats.motifs_found, 2);
        assert!(!stats.limit_reached);
    }

    #[test]
    fn test_delay_bound() {
        let log = edges(&[("A", "B", 1), ("B", "C", 5)]);

        let (motifs, _) = MotifSearch::run(&MotifQuery::new(3).within(3.0), &log).unwrap();
        assert!(motifs.is_empty());

        let (motifs, _) = MotifSearch::run(&MotifQuery::new(3).within(4.0), &log).unwrap();
        assert_eq!(chains(&motifs), vec![vec!["A", "B", "C"]]);

        let (motifs, _) = MotifSearch::run(&MotifQuery::new(3), &log).unwrap();
        assert_eq!(motifs.len(), 1);
    }

    #[test]
    fn test_earlier_edges_are_never_reused() {
        // B -> C happens before A -> B, so no forward-in-time chain exists.
        let log = edges(&[("B", "C", 1), ("A", "B", 2)]);
        let (motifs, _) = MotifSearch::run(&MotifQuery::new(3), &log).unwrap();
        assert!(motifs.is_empty());
    }

    #[test]
    fn test_equal_timestamps_follow_insertion_order() {
        let forward = edges(&[("A", "B", 1), ("B", "C", 1)]);
        let (motifs, _) = MotifSearch::run(&MotifQuery::new(3).within(0.0), &forward).unwrap();
        assert_eq!(chains(&motifs), vec![vec!["A", "B", "C"]]);

        let backward = edges(&[("B", "C", 1), ("A", "B", 1)]);
        let (motifs, _) = MotifSearch::run(&MotifQuery::new(3), &backward).unwrap();
        assert!(motifs.is_empty());
    }

    #[test]
    fn test_branching_order_matches_depth_first() {
        let log = edges(&[
            ("A", "B", 1),
            ("B", "C", 2),
            ("B", "D", 3),
            ("C", "E", 4),
            ("D", "E", 5),
        ]);
        let (motifs, _) = MotifSearch::run(&MotifQuery::new(4), &log).unwrap();
        assert_eq!(
            chains(&motifs),
            vec![vec!["A", "B", "C", "E"], vec!["A", "B", "D", "E"]]
        );
    }

    #[test]
    fn test_length_two_lists_every_edge() {
        let log = edges(&[("A", "B", 2), ("C", "D", 1)]);
        let (motifs, _) = MotifSearch::run(&MotifQuery::new(2), &log).unwrap();
        assert_eq!(chains(&motifs), vec![vec!["C", "D"], vec!["A", "B"]]);
    }

    #[test]
    fn test_limit_truncates() {
        let log = edges(&[("A", "B", 1), ("B", "C", 2), ("C", "D", 3), ("D", "E", 4)]);
        let (motifs, stats) =
            MotifSearch::run(&MotifQuery::new(2).with_limit(2), &log).unwrap();
        assert_eq!(motifs.len(), 2);
        assert!(stats.limit_reached);
    }

    #[test]
    fn test_limit_equal_to_total_is_reported() {
        let log = edges(&[("A", "B", 1), ("B", "C", 2)]);

        let (motifs, stats) =
            MotifSearch::run(&MotifQuery::new(2).with_limit(2), &log).unwrap();
        assert_eq!(motifs.len(), 2);
        assert!(stats.limit_reached);

        let (motifs, stats) =
            MotifSearch::run(&MotifQuery::new(2).with_limit(3), &log).unwrap();
        assert_eq!(motifs.len(), 2);
        assert!(!stats.limit_reached);
    }

    #[test]
    fn test_times_hold_one_entry_per_edge() {
        let log = edges(&[("A", "B", 4), ("B", "C", 6)]);
        let (motifs, _) = MotifSearch::run(&MotifQuery::new(3), &log).unwrap();
        assert_eq!(motifs[0].nodes.len(), 3);
        assert_eq!(motifs[0].times, vec![Timestamp::from(4), Timestamp::from(6)]);
    }

    #[test]
    fn test_invalid_queries() {
        let log = edges(&[("A", "B", 1)]);
        assert!(matches!(
            MotifSearch::run(&MotifQuery::new(1), &log),
            Err(Error::Validation(ValidationError::MotifTooShort { .. }))
        ));
        assert!(matches!(
            MotifSearch::run(&MotifQuery::new(3).within(-1.0), &log),
            Err(Error::Validation(ValidationError::InvalidDelay(_)))
        ));
        assert!(MotifSearch::run(&MotifQuery::new(3).with_limit(0), &log).is_err());
    }
}
