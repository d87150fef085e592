//! Breadth-first traversal over snapshots

use crate::edge::{EdgeId, NodeId};
use crate::snapshot::Snapshot;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// A shortest path through a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalPath<N> {
    /// Ordered list of nodes, source first
    pub nodes: Vec<N>,

    /// Edges connecting the nodes
    pub edges: Vec<PathEdge<N>>,

    /// Path length (number of edges)
    pub length: usize,
}

impl<N> TemporalPath<N> {
    /// Recorded occurrence time of each hop, one per edge
    pub fn times(&self) -> Vec<Timestamp> {
        self.edges.iter().map(|e| e.time).collect()
    }
}

/// Edge in a path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEdge<N> {
    pub from: N,
    pub to: N,
    pub time: Timestamp,
    pub edge_id: EdgeId,
}

/// Traversal statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub edges_traversed: usize,
    pub max_depth_reached: usize,
    pub path_found: bool,
}

/// Result of a breadth-first search towards a target
#[derive(Debug, Clone)]
pub struct TraversalResult<N> {
    pub path: Option<TemporalPath<N>>,
    pub stats: TraversalStats,
}

/// Snapshot traversal engine
pub struct TraversalEngine;

impl TraversalEngine {
    /// Whether a path `source -> ... -> target` exists
    ///
    /// Unknown endpoints are unreachable; a known node always reaches itself.
    pub fn reachable<N: NodeId>(snapshot: &Snapshot<N>, source: &N, target: &N) -> bool {
        Self::bfs_path(snapshot, source, target).stats.path_found
    }

    /// Unweighted shortest path by hop count
    ///
    /// Ties go to whichever neighbor was connected first in the snapshot.
    pub fn shortest_path<N: NodeId>(
        snapshot: &Snapshot<N>,
        source: &N,
        target: &N,
    ) -> Option<TemporalPath<N>> {
        Self::bfs_path(snapshot, source, target).path
    }

    /// BFS for unweighted shortest path
    pub fn bfs_path<N: NodeId>(
        snapshot: &Snapshot<N>,
        source: &N,
        target: &N,
    ) -> TraversalResult<N> {
        let mut stats = TraversalStats::default();

        let (Some(start), Some(goal)) = (snapshot.index_of(source), snapshot.index_of(target))
        else {
            tracing::debug!("BFS skipped: endpoint not in snapshot");
            return TraversalResult { path: None, stats };
        };

        let mut parent: HashMap<usize, usize> = HashMap::new();
        let mut visited = vec![false; snapshot.node_count()];
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

        queue.push_back((start, 0));
        visited[start] = true;

        while let Some((current, depth)) = queue.pop_front() {
            stats.nodes_visited += 1;
            stats.max_depth_reached = stats.max_depth_reached.max(depth);

            if current == goal {
                stats.path_found = true;
                tracing::debug!("BFS found path at depth {}", depth);
                break;
            }

            for &next in snapshot.neighbors_of(current) {
                stats.edges_traversed += 1;
                if !visited[next] {
                    visited[next] = true;
                    parent.insert(next, current);
                    queue.push_back((next, depth + 1));
                }
            }
        }

        tracing::debug!(
            "BFS visited {} nodes, traversed {} edges",
            stats.nodes_visited,
            stats.edges_traversed
        );

        let path = if stats.path_found {
            Some(Self::reconstruct_path(snapshot, start, goal, &parent))
        } else {
            None
        };

        TraversalResult { path, stats }
    }

    /// Reconstruct path from parent map
    fn reconstruct_path<N: NodeId>(
        snapshot: &Snapshot<N>,
        start: usize,
        end: usize,
        parent: &HashMap<usize, usize>,
    ) -> TemporalPath<N> {
        let mut hops = vec![end];
        let mut current = end;

        while current != start {
            match parent.get(&current) {
                Some(&prev) => {
                    hops.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        hops.reverse();

        let edges: Vec<PathEdge<N>> = hops
            .windows(2)
            .filter_map(|pair| {
                let data = snapshot.edge_between(pair[0], pair[1])?;
                Some(PathEdge {
                    from: snapshot.node_at(pair[0]).clone(),
                    to: snapshot.node_at(pair[1]).clone(),
                    time: data.time,
                    edge_id: data.edge_id,
                })
            })
            .collect();

        TemporalPath {
            nodes: hops.iter().map(|&idx| snapshot.node_at(idx).clone()).collect(),
            length: edges.len(),
            edges,
        }
    }
}
