//! End-to-end scenarios for the temporal graph.

use serde_json::json;
use tempora_core::{
    Attributes, IngestSession, MotifQuery, TemporalGraph, TimeWindow, Timestamp,
};

#[test]
fn test_reachability_scenario() {
    let mut graph = TemporalGraph::new();
    graph.add_edge_at("A", "B", 1.0).unwrap();
    graph.add_edge_at("B", "C", 2.0).unwrap();

    assert!(graph.reachable(&"A", &"C", TimeWindow::at(2.0)));
    assert!(!graph.reachable(&"C", &"A", TimeWindow::at(2.0)));
}

#[test]
fn test_shortest_path_scenario() {
    let mut graph = TemporalGraph::new();
    graph.add_edge_at("X", "Y", 1.0).unwrap();
    graph.add_edge_at("Y", "Z", 5.0).unwrap();

    let path = graph.shortest_path(&"X", &"Z", TimeWindow::at(6.0)).unwrap();
    assert_eq!(path.nodes, vec!["X", "Y", "Z"]);
    assert_eq!(path.times(), vec![Timestamp::from(1), Timestamp::from(5)]);
    assert!(graph.degree(&"Y", TimeWindow::at(6.0)) >= 1);
}

#[test]
fn test_chain_motif_scenario() {
    let mut graph = TemporalGraph::new();
    graph.add_edge_at("A", "B", 1.0).unwrap();
    graph.add_edge_at("B", "C", 2.0).unwrap();
    graph.add_edge_at("C", "D", 3.0).unwrap();

    let motifs = graph
        .find_chain_motifs(&MotifQuery::new(3).within(2.0))
        .unwrap();
    assert!(motifs.iter().any(|m| m.nodes == vec!["A", "B", "C"]));
}

#[test]
fn test_streaming_ingest_scenario() {
    let mut graph: TemporalGraph<&str> = TemporalGraph::new();
    let mut events = Vec::new();

    let report = {
        let mut stream = IngestSession::with_callback(&mut graph, |edge| {
            events.push((edge.source, edge.target, edge.time.value()));
            Ok(())
        });
        stream.ingest_at("X", "Y", 10.0).unwrap();
        stream.ingest_at("Y", "Z", 12.0).unwrap();
        stream.finish()
    };

    assert_eq!(events, vec![("X", "Y", 10.0), ("Y", "Z", 12.0)]);
    assert!(report.is_clean());
    assert!(graph.reachable(&"X", &"Z", TimeWindow::at(12.0)));
}

#[test]
fn test_attributes_survive_into_snapshot() {
    let mut graph = TemporalGraph::new();
    let mut attributes = Attributes::new();
    attributes.insert("channel".to_string(), json!("email"));
    graph
        .add_edge("Alice".to_string(), "Bob".to_string(), 3.0, attributes)
        .unwrap();

    let snapshot = graph.snapshot(TimeWindow::All);
    let data = snapshot
        .edge(&"Alice".to_string(), &"Bob".to_string())
        .unwrap();
    assert_eq!(data.time, Timestamp::from(3));
    assert_eq!(data.attributes.get("channel"), Some(&json!("email")));
}

#[test]
fn test_out_of_order_ingestion() {
    let mut graph = TemporalGraph::new();
    graph.add_edge_at(3, 4, 30.0).unwrap();
    graph.add_edge_at(1, 2, 10.0).unwrap();
    graph.add_edge_at(2, 3, 20.0).unwrap();

    let log: Vec<(i32, i32)> = graph.list_edges().iter().map(|e| (e.source, e.target)).collect();
    assert_eq!(log, vec![(3, 4), (1, 2), (2, 3)]);

    let ordered: Vec<(i32, i32)> = graph
        .edges_in_range(Some(0.0), None)
        .map(|e| (e.source, e.target))
        .collect();
    assert_eq!(ordered, vec![(1, 2), (2, 3), (3, 4)]);

    let path = graph.shortest_path(&1, &4, TimeWindow::All).unwrap();
    assert_eq!(path.nodes, vec![1, 2, 3, 4]);
    assert_eq!(
        path.times(),
        vec![Timestamp::from(10), Timestamp::from(20), Timestamp::from(30)]
    );

    let motifs = graph.find_chain_motifs(&MotifQuery::new(4)).unwrap();
    assert_eq!(motifs.len(), 1);
    assert_eq!(motifs[0].nodes, vec![1, 2, 3, 4]);
}

#[test]
fn test_snapshot_serializes() {
    let mut graph = TemporalGraph::new();
    graph.add_edge_at("A", "B", 1.5).unwrap();

    let path = graph.shortest_path(&"A", &"B", TimeWindow::All).unwrap();
    let value = serde_json::to_value(&path).unwrap();
    assert_eq!(value["nodes"], json!(["A", "B"]));
    assert_eq!(value["edges"][0]["time"], json!(1.5));
}

#[test]
fn test_repeated_pair_collapse_follows_window_order() {
    let mut graph = TemporalGraph::new();
    graph.add_edge_at("A", "B", 5.0).unwrap();
    graph.add_edge_at("A", "B", 1.0).unwrap();

    // Unbounded: the log is replayed in insertion order, so t=1 is written last
    let all = graph.shortest_path(&"A", &"B", TimeWindow::All).unwrap();
    assert_eq!(all.times(), vec![Timestamp::from(1)]);

    // Bounded: edges come out by time, so t=5 is written last
    let bounded = graph.shortest_path(&"A", &"B", TimeWindow::at(10.0)).unwrap();
    assert_eq!(bounded.times(), vec![Timestamp::from(5)]);

    let snapshot = graph.snapshot(TimeWindow::All);
    let data = snapshot.edge(&"A", &"B").unwrap();
    assert_eq!(data.multiplicity, 2);
    assert_eq!(data.time, Timestamp::from(1));
}
