//! Tempora CLI - Command line interface for the temporal graph engine

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, edges, example, motifs, query};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "tempora")]
#[command(author, version, about = "Query time-stamped edge streams")]
pub struct Cli {
    /// Config file (default: <config dir>/tempora/config.toml)
    #[arg(long, env = "TEMPORA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Treat edges as undirected
    #[arg(long, global = true)]
    pub undirected: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file path, explicit or default
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in example scenario
    Example,
    /// List edges from an edge file
    Edges(edges::EdgesArgs),
    /// Check whether a target is reachable from a source
    Reachable(query::PairArgs),
    /// Find a shortest path between two nodes
    Path(query::PairArgs),
    /// Degree of a node
    Degree(query::DegreeArgs),
    /// Find chain motifs
    Motifs(motifs::MotifsArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

/// Settings resolved from the config file and global flags
pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
    /// Forced by `--undirected`; otherwise the edge file or config decides
    pub undirected: bool,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let path = cli.config_path();
        let config = Config::load_from(&path)?;
        tracing::debug!("Using config from: {:?}", path);

        let format: OutputFormat = cli
            .format
            .as_deref()
            .unwrap_or(config.format.as_str())
            .into();

        Ok(Self {
            config,
            format,
            undirected: cli.undirected,
        })
    }

    /// Directedness for a graph, given what the edge file declares
    pub fn directed(&self, declared: Option<bool>) -> bool {
        if self.undirected {
            return false;
        }
        declared.unwrap_or(self.config.directed)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting tempora CLI");

    // Only graph commands load the config up front, so a broken file can
    // still be replaced with `config init --force`
    let ctx = || AppContext::new(&cli);

    match &cli.command {
        Commands::Example => example::run(&ctx()?)?,
        Commands::Edges(args) => edges::run(args, &ctx()?)?,
        Commands::Reachable(args) => query::run_reachable(args, &ctx()?)?,
        Commands::Path(args) => query::run_path(args, &ctx()?)?,
        Commands::Degree(args) => query::run_degree(args, &ctx()?)?,
        Commands::Motifs(args) => motifs::run(args, &ctx()?)?,
        Commands::Completions(args) => completions::run(args)?,
        Commands::Config(args) => commands::config::run(args, &cli)?,
    }

    Ok(())
}
