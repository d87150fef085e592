//! Tempora Core - Temporal graph engine
//!
//! This crate provides an append-only store of time-stamped edges and the
//! queries built on it: windowed snapshots, reachability, shortest paths,
//! degrees and bounded-delay chain motifs.

pub mod edge;
pub mod error;
pub mod graph;
pub mod index;
pub mod limits;
pub mod logic;
pub mod motif;
pub mod query;
pub mod snapshot;
pub mod store;
pub mod stream;
pub mod time;
pub mod traversal;

pub use edge::{Attributes, EdgeId, NodeId, TemporalEdge};
pub use error::{Error, Result};
pub use graph::TemporalGraph;
pub use index::TimeIndex;
pub use limits::ValidationError;
pub use motif::{ChainMotif, MotifQuery, MotifSearch, MotifStats};
pub use query::TemporalQueries;
pub use snapshot::{Snapshot, SnapshotEdge};
pub use store::{EdgeRange, EdgeStore};
pub use stream::{CallbackError, CallbackFailure, CallbackResult, IngestReport, IngestSession};
pub use time::{TimeWindow, Timestamp};
pub use traversal::{PathEdge, TemporalPath, TraversalEngine, TraversalResult, TraversalStats};
