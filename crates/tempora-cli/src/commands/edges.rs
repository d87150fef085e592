//! Edge listing command

use std::path::PathBuf;

use clap::Args;

use super::io::load_graph;
use crate::output::{format_edges, to_json, OutputFormat};
use crate::AppContext;

#[derive(Args)]
pub struct EdgesArgs {
    /// Edge file (JSON)
    pub file: PathBuf,

    /// Lower time bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Upper time bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f64>,
}

pub fn run(args: &EdgesArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let graph = load_graph(&args.file, ctx)?;

    // Unbounded on both sides keeps insertion order; otherwise time order
    let edges: Vec<_> = graph.edges_in_range(args.start, args.end).collect();
    tracing::info!("Selected {} of {} edges", edges.len(), graph.edge_count());

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&edges)?),
        OutputFormat::Table => println!("{}", format_edges(&edges)),
    }
    Ok(())
}
