//! Static graph views materialized from a time window

use crate::edge::{Attributes, EdgeId, NodeId, TemporalEdge};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Data carried by a structural edge of a [`Snapshot`]
///
/// A snapshot is a simple graph: repeated temporal edges between the same
/// pair collapse into one structural edge. The last edge processed wins for
/// `time` and `edge_id`, attribute maps are merged with later keys taking
/// precedence, and `multiplicity` counts how many temporal edges collapsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub time: Timestamp,
    pub edge_id: EdgeId,
    #[serde(default)]
    pub attributes: Attributes,
    pub multiplicity: usize,
}

/// Static directed or undirected graph of the edges inside a window
///
/// Nodes are interned in first-seen order and adjacency lists keep the order
/// in which neighbors were first connected, so traversals are deterministic.
#[derive(Debug, Clone)]
pub struct Snapshot<N> {
    directed: bool,
    nodes: Vec<N>,
    lookup: HashMap<N, usize>,
    /// Out-neighbors when directed, all neighbors otherwise
    successors: Vec<Vec<usize>>,
    /// In-neighbors; only populated when directed
    predecessors: Vec<Vec<usize>>,
    edges: HashMap<(usize, usize), SnapshotEdge>,
    edge_order: Vec<(usize, usize)>,
}

impl<N: NodeId> Snapshot<N> {
    /// Empty snapshot
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            lookup: HashMap::new(),
            successors: Vec::new(),
            predecessors: Vec::new(),
            edges: HashMap::new(),
            edge_order: Vec::new(),
        }
    }

    /// Build a snapshot from already filtered temporal edges
    pub fn from_edges<'a, I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = &'a TemporalEdge<N>>,
        N: 'a,
    {
        let mut snapshot = Self::new(directed);
        for edge in edges {
            snapshot.insert(edge);
        }
        tracing::debug!(
            "Built {} snapshot with {} nodes and {} edges",
            if directed { "directed" } else { "undirected" },
            snapshot.node_count(),
            snapshot.edge_count()
        );
        snapshot
    }

    fn intern(&mut self, node: &N) -> usize {
        if let Some(&idx) = self.lookup.get(node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(node.clone());
        self.lookup.insert(node.clone(), idx);
        self.successors.push(Vec::new());
        if self.directed {
            self.predecessors.push(Vec::new());
        }
        idx
    }

    fn key(&self, u: usize, v: usize) -> (usize, usize) {
        if self.directed {
            (u, v)
        } else {
            (u.min(v), u.max(v))
        }
    }

    fn insert(&mut self, edge: &TemporalEdge<N>) {
        let u = self.intern(&edge.source);
        let v = self.intern(&edge.target);
        let key = self.key(u, v);

        match self.edges.entry(key) {
            Entry::Occupied(mut slot) => {
                let data = slot.get_mut();
                data.time = edge.time;
                data.edge_id = edge.id;
                data.multiplicity += 1;
                data.attributes.extend(
                    edge.attributes
                        .iter()
                        .map(|(k, val)| (k.clone(), val.clone())),
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(SnapshotEdge {
                    time: edge.time,
                    edge_id: edge.id,
                    attributes: edge.attributes.clone(),
                    multiplicity: 1,
                });
                self.edge_order.push((u, v));
                self.successors[u].push(v);
                if self.directed {
                    self.predecessors[v].push(u);
                } else if u != v {
                    self.successors[v].push(u);
                }
            }
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of structural (collapsed) edges
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.lookup.contains_key(node)
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Structural edges in first-inserted order
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &SnapshotEdge)> {
        self.edge_order.iter().filter_map(move |&(u, v)| {
            let data = self.edges.get(&self.key(u, v))?;
            Some((&self.nodes[u], &self.nodes[v], data))
        })
    }

    /// Edge data between two nodes (either orientation when undirected)
    pub fn edge(&self, source: &N, target: &N) -> Option<&SnapshotEdge> {
        let u = self.index_of(source)?;
        let v = self.index_of(target)?;
        self.edge_between(u, v)
    }

    /// Out-neighbors (all neighbors when undirected)
    pub fn successors(&self, node: &N) -> impl Iterator<Item = &N> {
        let neighbors = self
            .index_of(node)
            .map(|idx| self.successors[idx].as_slice())
            .unwrap_or(&[]);
        neighbors.iter().map(move |&idx| &self.nodes[idx])
    }

    /// Total degree; in + out when directed. A self loop counts twice.
    pub fn degree(&self, node: &N) -> usize {
        let Some(idx) = self.index_of(node) else {
            return 0;
        };
        if self.directed {
            self.successors[idx].len() + self.predecessors[idx].len()
        } else {
            let self_loop = usize::from(self.edges.contains_key(&(idx, idx)));
            self.successors[idx].len() + self_loop
        }
    }

    pub fn out_degree(&self, node: &N) -> usize {
        if !self.directed {
            return self.degree(node);
        }
        self.index_of(node)
            .map_or(0, |idx| self.successors[idx].len())
    }

    pub fn in_degree(&self, node: &N) -> usize {
        if !self.directed {
            return self.degree(node);
        }
        self.index_of(node)
            .map_or(0, |idx| self.predecessors[idx].len())
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.lookup.get(node).copied()
    }

    pub(crate) fn node_at(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub(crate) fn neighbors_of(&self, idx: usize) -> &[usize] {
        &self.successors[idx]
    }

    pub(crate) fn edge_between(&self, u: usize, v: usize) -> Option<&SnapshotEdge> {
        self.edges.get(&self.key(u, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn edge(id: usize, t: i32, source: &'static str, target: &'static str) -> TemporalEdge<&'static str> {
        TemporalEdge {
            id: EdgeId(id),
            time: Timestamp::from(t),
            source,
            target,
            attributes: Attributes::new(),
        }
    }

    #[test]
    fn test_directed_snapshot() {
        let edges = vec![edge(0, 1, "A", "B"), edge(1, 2, "B", "C"), edge(2, 3, "C", "A")];
        let snapshot = Snapshot::from_edges(true, &edges);

        assert!(snapshot.is_directed());
        assert_eq!(snapshot.node_count(), 3);
        assert_eq!(snapshot.edge_count(), 3);
        assert_eq!(snapshot.nodes().copied().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(snapshot.successors(&"A").copied().collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(snapshot.degree(&"A"), 2);
        assert_eq!(snapshot.out_degree(&"A"), 1);
        assert_eq!(snapshot.in_degree(&"A"), 1);
        assert!(snapshot.edge(&"B", &"A").is_none());
        assert_eq!(snapshot.edge(&"A", &"B").unwrap().time, Timestamp::from(1));
    }

    #[test]
    fn test_repeated_pair_collapses_last_write_wins() {
        let mut first = edge(0, 1, "A", "B");
        first.attributes.insert("kind".to_string(), json!("call"));
        first.attributes.insert("weight".to_string(), json!(1));
        let mut second = edge(1, 4, "A", "B");
        second.attributes.insert("weight".to_string(), json!(7));

        let edges = vec![first, second];
        let snapshot = Snapshot::from_edges(true, &edges);

        assert_eq!(snapshot.edge_count(), 1);
        assert_eq!(snapshot.degree(&"A"), 1);
        let data = snapshot.edge(&"A", &"B").unwrap();
        assert_eq!(data.time, Timestamp::from(4));
        assert_eq!(data.edge_id, EdgeId(1));
        assert_eq!(data.multiplicity, 2);
        assert_eq!(data.attributes.get("kind"), Some(&json!("call")));
        assert_eq!(data.attributes.get("weight"), Some(&json!(7)));
    }

    #[test]
    fn test_undirected_snapshot_merges_orientations() {
        let edges = vec![edge(0, 1, "A", "B"), edge(1, 2, "B", "A"), edge(2, 3, "B", "C")];
        let snapshot = Snapshot::from_edges(false, &edges);

        assert_eq!(snapshot.edge_count(), 2);
        assert_eq!(snapshot.edge(&"A", &"B").unwrap().time, Timestamp::from(2));
        assert_eq!(snapshot.edge(&"B", &"A").unwrap().multiplicity, 2);
        assert_eq!(snapshot.degree(&"B"), 2);
        assert_eq!(
            snapshot.successors(&"B").copied().collect::<Vec<_>>(),
            vec!["A", "C"]
        );
    }

    #[test]
    fn test_self_loop_degree() {
        let edges = vec![edge(0, 1, "A", "A")];

        let directed = Snapshot::from_edges(true, &edges);
        assert_eq!(directed.degree(&"A"), 2);

        let undirected = Snapshot::from_edges(false, &edges);
        assert_eq!(undirected.degree(&"A"), 2);
    }

    #[test]
    fn test_unknown_node() {
        let snapshot: Snapshot<&str> = Snapshot::new(true);
        assert_eq!(snapshot.degree(&"X"), 0);
        assert!(!snapshot.contains_node(&"X"));
        assert_eq!(snapshot.successors(&"X").count(), 0);
    }
}
