//! CLI command implementations

pub mod completions;
pub mod config;
pub mod edges;
pub mod example;
pub mod io;
pub mod motifs;
pub mod query;
