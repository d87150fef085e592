//! Edge file loading and shared time-window arguments

use std::path::Path;

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::AppContext;
use tempora_core::{Attributes, TemporalGraph, TimeWindow};

/// One edge in an edge file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub time: f64,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// Edge file: a document with optional directedness, or a bare edge list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EdgeFile {
    Document {
        #[serde(default)]
        directed: Option<bool>,
        edges: Vec<EdgeRecord>,
    },
    Bare(Vec<EdgeRecord>),
}

impl EdgeFile {
    pub fn directed(&self) -> Option<bool> {
        match self {
            Self::Document { directed, .. } => *directed,
            Self::Bare(_) => None,
        }
    }

    pub fn into_edges(self) -> Vec<EdgeRecord> {
        match self {
            Self::Document { edges, .. } | Self::Bare(edges) => edges,
        }
    }
}

/// Read an edge file and replay it into a graph, in file order
pub fn load_graph(path: &Path, ctx: &AppContext) -> anyhow::Result<TemporalGraph<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge file {}", path.display()))?;
    let file: EdgeFile = serde_json::from_str(&content)
        .with_context(|| format!("Invalid edge file {}", path.display()))?;

    let directed = ctx.directed(file.directed());
    let mut graph = TemporalGraph::with_directed(directed);

    for (i, record) in file.into_edges().into_iter().enumerate() {
        graph
            .add_edge(record.source, record.target, record.time, record.attributes)
            .with_context(|| format!("Edge {} in {}", i, path.display()))?;
    }

    tracing::info!(
        "Loaded {} edges over {} nodes from {:?} (directed: {})",
        graph.edge_count(),
        graph.node_count(),
        path,
        directed
    );
    Ok(graph)
}

/// `--at T` or `--window START END`; neither means the whole history
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// Use every edge with time <= T
    #[arg(long, value_name = "T", allow_negative_numbers = true, conflicts_with = "window")]
    pub at: Option<f64>,

    /// Use every edge with START <= time <= END
    #[arg(long, num_args = 2, value_names = ["START", "END"], allow_negative_numbers = true)]
    pub window: Option<Vec<f64>>,
}

impl WindowArgs {
    pub fn time_window(&self) -> TimeWindow {
        match (self.at, self.window.as_deref()) {
            (Some(t), _) => TimeWindow::at(t),
            (None, Some([start, end])) => TimeWindow::between(*start, *end),
            _ => TimeWindow::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_and_bare_list() {
        let doc: EdgeFile = serde_json::from_str(
            r#"{"directed": false, "edges": [{"source": "A", "target": "B", "time": 1}]}"#,
        )
        .unwrap();
        assert_eq!(doc.directed(), Some(false));
        assert_eq!(doc.into_edges().len(), 1);

        let bare: EdgeFile = serde_json::from_str(
            r#"[{"source": "A", "target": "B", "time": 1.5, "attributes": {"w": 2}}]"#,
        )
        .unwrap();
        assert_eq!(bare.directed(), None);
        let edges = bare.into_edges();
        assert_eq!(edges[0].time, 1.5);
        assert_eq!(edges[0].attributes["w"], serde_json::json!(2));
    }

    #[test]
    fn test_window_args() {
        let at = WindowArgs {
            at: Some(7.0),
            window: None,
        };
        assert_eq!(at.time_window(), TimeWindow::at(7.0));

        let between = WindowArgs {
            at: None,
            window: Some(vec![2.0, 4.0]),
        };
        assert_eq!(between.time_window(), TimeWindow::between(2.0, 4.0));

        assert_eq!(WindowArgs::default().time_window(), TimeWindow::All);
    }
}
