//! Chain motif command

use std::path::PathBuf;

use clap::Args;

use super::io::{load_graph, WindowArgs};
use crate::output::{format_motifs, to_json, OutputFormat};
use crate::AppContext;
use tempora_core::MotifQuery;

#[derive(Args)]
pub struct MotifsArgs {
    /// Edge file (JSON)
    pub file: PathBuf,

    /// Nodes per chain (default from config)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Maximum delay between consecutive edges
    #[arg(long)]
    pub within: Option<f64>,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Stop after this many motifs (default from config)
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(args: &MotifsArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let graph = load_graph(&args.file, ctx)?;

    let length = args.length.unwrap_or(ctx.config.motif_length);
    let mut query = MotifQuery::new(length).in_window(args.window.time_window());
    if let Some(within) = args.within {
        query = query.within(within);
    }
    if let Some(limit) = args.limit.or(ctx.config.motif_limit) {
        query = query.with_limit(limit);
    }

    let motifs = graph.find_chain_motifs(&query)?;
    tracing::info!("Found {} chain motifs of length {}", motifs.len(), length);

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&motifs)?),
        OutputFormat::Table => println!("{}", format_motifs(&motifs)),
    }
    Ok(())
}
