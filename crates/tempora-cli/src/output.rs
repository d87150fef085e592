//! Output formatting utilities

use serde::Serialize;
use tempora_core::{ChainMotif, TemporalEdge, TemporalPath, Timestamp};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Pretty JSON for a serializable result
pub fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Format edges as `id  time  source -> target  attributes`
pub fn format_edges(edges: &[&TemporalEdge<String>]) -> String {
    if edges.is_empty() {
        return "No edges found".to_string();
    }

    let mut lines = Vec::with_capacity(edges.len() + 1);
    lines.push(format!("{:<6} {:>10}  {}", "ID", "TIME", "EDGE"));
    for edge in edges {
        let mut line = format!(
            "{:<6} {:>10}  {} -> {}",
            edge.id.to_string(),
            edge.time.to_string(),
            edge.source,
            edge.target
        );
        if !edge.attributes.is_empty() {
            let mut keys: Vec<_> = edge.attributes.keys().collect();
            keys.sort();
            let attrs: Vec<String> = keys
                .into_iter()
                .map(|k| format!("{}={}", k, edge.attributes[k]))
                .collect();
            line.push_str(&format!("  {}", attrs.join(" ")));
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn format_times(times: &[Timestamp]) -> String {
    let parts: Vec<String> = times.iter().map(|t| t.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

pub fn format_path(path: &TemporalPath<String>) -> String {
    format!(
        "Path: {}\nEdge times: {}",
        path.nodes.join(" -> "),
        format_times(&path.times())
    )
}

pub fn format_motifs(motifs: &[ChainMotif<String>]) -> String {
    if motifs.is_empty() {
        return "No motifs found".to_string();
    }

    motifs
        .iter()
        .map(|m| format!("{}  {}", m.nodes.join(" -> "), format_times(&m.times)))
        .collect::<Vec<_>>()
        .join("\n")
}
