//! Reachability, path and degree commands

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use super::io::{load_graph, WindowArgs};
use crate::output::{format_path, to_json, OutputFormat};
use crate::AppContext;

#[derive(Args)]
pub struct PairArgs {
    /// Edge file (JSON)
    pub file: PathBuf,
    /// Source node
    pub source: String,
    /// Target node
    pub target: String,
    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Args)]
pub struct DegreeArgs {
    /// Edge file (JSON)
    pub file: PathBuf,
    /// Node to measure
    pub node: String,
    #[command(flatten)]
    pub window: WindowArgs,
}

pub fn run_reachable(args: &PairArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let graph = load_graph(&args.file, ctx)?;
    let window = args.window.time_window();
    let reachable = graph.reachable(&args.source, &args.target, window);

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            to_json(&json!({
                "source": args.source,
                "target": args.target,
                "window": window,
                "reachable": reachable,
            }))?
        ),
        OutputFormat::Table => println!(
            "Reachable {} -> {} ({}): {}",
            args.source, args.target, window, reachable
        ),
    }
    Ok(())
}

pub fn run_path(args: &PairArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let graph = load_graph(&args.file, ctx)?;
    let window = args.window.time_window();
    let path = graph.shortest_path(&args.source, &args.target, window);

    match (ctx.format, &path) {
        (OutputFormat::Json, _) => println!("{}", to_json(&path)?),
        (OutputFormat::Table, Some(path)) => {
            println!("Shortest path {} -> {} ({}):", args.source, args.target, window);
            println!("{}", format_path(path));
        }
        (OutputFormat::Table, None) => {
            println!("No path from '{}' to '{}' ({})", args.source, args.target, window)
        }
    }
    Ok(())
}

pub fn run_degree(args: &DegreeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let graph = load_graph(&args.file, ctx)?;
    let window = args.window.time_window();
    let degree = graph.degree(&args.node, window);

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            to_json(&json!({
                "node": args.node,
                "window": window,
                "degree": degree,
            }))?
        ),
        OutputFormat::Table => println!("Degree of {} ({}): {}", args.node, window, degree),
    }
    Ok(())
}
