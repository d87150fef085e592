//! Streaming ingestion session

use crate::edge::{Attributes, EdgeId, NodeId, TemporalEdge};
use crate::error::Result;
use crate::graph::TemporalGraph;
use serde::{Deserialize, Serialize};

/// Error type a notification callback may return
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Return type of a notification callback
pub type CallbackResult = std::result::Result<(), CallbackError>;

type Callback<'g, N> = Box<dyn FnMut(&TemporalEdge<N>) -> CallbackResult + 'g>;

/// A callback that failed for one ingested edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackFailure {
    pub edge_id: EdgeId,
    pub message: String,
}

/// Outcome of an ingestion session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Edges appended to the graph
    pub ingested: usize,

    /// Successful callback invocations
    pub notified: usize,

    /// Callback failures, in ingestion order
    pub failures: Vec<CallbackFailure>,
}

impl IngestReport {
    /// True when every callback invocation succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Forwards edges into a graph and notifies an optional callback
///
/// Ingestion never depends on the callback: a failing callback is logged and
/// recorded in the [`IngestReport`], and the edge stays in the graph. The
/// report is returned by [`IngestSession::finish`]; a session dropped without
/// finishing still logs its summary.
pub struct IngestSession<'g, N> {
    graph: &'g mut TemporalGraph<N>,
    on_update: Option<Callback<'g, N>>,
    report: IngestReport,
    finished: bool,
}

impl<'g, N: NodeId> IngestSession<'g, N> {
    /// Session without a callback
    pub fn new(graph: &'g mut TemporalGraph<N>) -> Self {
        Self {
            graph,
            on_update: None,
            report: IngestReport::default(),
            finished: false,
        }
    }

    /// Session that calls `on_update` after every ingested edge
    pub fn with_callback<F>(graph: &'g mut TemporalGraph<N>, on_update: F) -> Self
    where
        F: FnMut(&TemporalEdge<N>) -> CallbackResult + 'g,
    {
        Self {
            graph,
            on_update: Some(Box::new(on_update)),
            report: IngestReport::default(),
            finished: false,
        }
    }

    /// Append an edge, then notify the callback
    ///
    /// Only an invalid timestamp fails; callback errors never propagate.
    pub fn ingest(&mut self, source: N, target: N, t: f64, attributes: Attributes) -> Result<EdgeId> {
        let id = self.graph.add_edge(source, target, t, attributes)?;
        self.report.ingested += 1;

        if let (Some(callback), Some(edge)) = (self.on_update.as_mut(), self.graph.edge(id)) {
            match callback(edge) {
                Ok(()) => self.report.notified += 1,
                Err(e) => {
                    tracing::warn!("Ingest callback failed for edge {}: {}", id, e);
                    self.report.failures.push(CallbackFailure {
                        edge_id: id,
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(id)
    }

    /// Append an edge without attributes
    pub fn ingest_at(&mut self, source: N, target: N, t: f64) -> Result<EdgeId> {
        self.ingest(source, target, t, Attributes::new())
    }

    pub fn report(&self) -> &IngestReport {
        &self.report
    }

    pub fn graph(&self) -> &TemporalGraph<N> {
        self.graph
    }

    /// Close the session and hand back its report
    pub fn finish(mut self) -> IngestReport {
        self.finished = true;
        log_summary(&self.report);
        std::mem::take(&mut self.report)
    }
}

impl<'g, N> Drop for IngestSession<'g, N> {
    fn drop(&mut self) {
        if !self.finished {
            log_summary(&self.report);
        }
    }
}

fn log_summary(report: &IngestReport) {
    tracing::info!(
        "Ingest session closed: {} edges, {} notified, {} callback failures",
        report.ingested,
        report.notified,
        report.failures.len()
    );
}
