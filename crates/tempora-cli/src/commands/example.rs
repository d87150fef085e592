//! Built-in example: a small message log queried and then extended

use serde_json::json;

use crate::output::{format_edges, format_motifs, format_path, to_json, OutputFormat};
use crate::AppContext;
use tempora_core::{IngestSession, TemporalEdge, TemporalGraph, TimeWindow};

const HISTORY: &[(&str, &str, f64)] = &[
    ("Alice", "Bob", 1.0),
    ("Bob", "Carol", 5.0),
    ("Alice", "Carol", 10.0),
    ("Carol", "Dave", 12.0),
    ("Eve", "Alice", 15.0),
];

const STREAMED: &[(&str, &str, f64)] = &[("Dave", "Eve", 16.0), ("Eve", "Frank", 18.0)];

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let mut graph: TemporalGraph<String> = TemporalGraph::with_directed(ctx.directed(None));
    for &(u, v, t) in HISTORY {
        graph.add_edge_at(u.to_string(), v.to_string(), t)?;
    }

    let alice = "Alice".to_string();
    let queries = graph.queries();
    let reachable_carol = queries.reachable_at(&alice, &"Carol".to_string(), 7.0);
    let path_dave = queries.shortest_path_at(&alice, &"Dave".to_string(), 12.0);
    let degree_bob = queries.degree_at(&"Bob".to_string(), 6.0);
    let motifs = queries.chain_motifs(3, Some(6.0), TimeWindow::All)?;
    let history: Vec<TemporalEdge<String>> = graph.list_edges().to_vec();

    let mut streamed: Vec<TemporalEdge<String>> = Vec::new();
    let report = {
        let mut session = IngestSession::with_callback(&mut graph, |edge| {
            streamed.push(edge.clone());
            Ok(())
        });
        for &(u, v, t) in STREAMED {
            session.ingest_at(u.to_string(), v.to_string(), t)?;
        }
        session.finish()
    };
    let reachable_frank = graph
        .queries()
        .reachable_at(&alice, &"Frank".to_string(), 20.0);

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            to_json(&json!({
                "edges": history,
                "reachable_alice_carol_at_7": reachable_carol,
                "shortest_path_alice_dave_at_12": path_dave,
                "degree_bob_at_6": degree_bob,
                "chain_motifs_length_3_within_6": motifs,
                "streamed": streamed,
                "ingest": report,
                "reachable_alice_frank_at_20": reachable_frank,
            }))?
        ),
        OutputFormat::Table => {
            let refs: Vec<&TemporalEdge<String>> = history.iter().collect();
            println!("Edges:\n{}", format_edges(&refs));

            println!("\nReachable Alice -> Carol at t=7?\n{}", reachable_carol);

            println!("\nShortest path Alice -> Dave at t=12");
            match &path_dave {
                Some(path) => println!("{}", format_path(path)),
                None => println!("No path"),
            }

            println!("\nDegree of Bob at t=6:\n{}", degree_bob);

            println!("\nChain motifs length=3 within 6 time units:");
            println!("{}", format_motifs(&motifs));

            println!("\nStreaming new edges...");
            for edge in &streamed {
                println!("Stream added {}->{} at t={}", edge.source, edge.target, edge.time);
            }

            println!("\nReachable Alice -> Frank at t=20?\n{}", reachable_frank);
        }
    }

    if !report.is_clean() {
        anyhow::bail!("{} stream callbacks failed", report.failures.len());
    }
    Ok(())
}
