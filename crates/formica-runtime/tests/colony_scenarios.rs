//! Colony behavior end to end: deposits, deaths, convergence, and how ant
//! paths relate to the Dijkstra baseline.

use formica_runtime::prelude::*;
use std::io::Write;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn chain(len: usize) -> (Graph, Vec<NodeId>) {
    let mut builder = GraphBuilder::new();
    let nodes = builder.add_nodes(len);
    for pair in nodes.windows(2) {
        builder.add_edge(pair[0], pair[1]).unwrap();
    }
    (builder.build().unwrap(), nodes)
}

/// 0 -> {1, 2} -> 3: two equally short routes.
fn diamond() -> (Graph, Vec<NodeId>) {
    let mut builder = GraphBuilder::new();
    let n = builder.add_nodes(4);
    builder.add_edge(n[0], n[1]).unwrap();
    builder.add_edge(n[0], n[2]).unwrap();
    builder.add_edge(n[1], n[3]).unwrap();
    builder.add_edge(n[2], n[3]).unwrap();
    (builder.build().unwrap(), n)
}

/// Triangle 0-1-2 with the end node 3 cut off.
fn dead_end() -> Graph {
    let mut builder = GraphBuilder::new();
    let n = builder.add_nodes(4);
    builder.add_edge(n[0], n[1]).unwrap();
    builder.add_edge(n[1], n[2]).unwrap();
    builder.add_edge(n[0], n[2]).unwrap();
    builder.build().unwrap()
}

fn seeded_colony(seed: u64) -> Colony {
    ColonyBuilder::new().seed(seed).build().unwrap()
}

#[test]
fn deposit_adds_reward_over_length_to_each_edge() {
    init_tracing();
    let (mut graph, nodes) = chain(3);
    let mut colony = seeded_colony(1);

    let path = colony.swarm(&mut graph, 1).unwrap();
    assert_eq!(path.len(), 2);
    for key in &path {
        assert_eq!(graph.edge(key).unwrap().pheromone(), 1.0 + 10.0 / 2.0);
    }

    colony.swarm(&mut graph, 1).unwrap();
    let first = EdgeKey::new(nodes[0], nodes[1]);
    assert_eq!(graph.edge(&first).unwrap().pheromone(), 11.0);
}

#[test]
fn swarm_returns_the_last_path_even_when_it_died() {
    init_tracing();
    let mut graph = dead_end();
    let mut colony = seeded_colony(2);

    let path = colony.swarm(&mut graph, 3).unwrap();
    assert_eq!(path.len(), graph.node_count());
    assert_eq!(colony.num_dead(), 3);
    assert_eq!(colony.num_passed(), 0);
    assert!(colony
        .history()
        .iter()
        .all(|r| r.status == WalkStatus::Dead && r.path.len() == 4));
}

#[test]
fn dead_end_graph_has_no_dijkstra_path() {
    let mut graph = dead_end();
    assert!(matches!(
        graph.dijkstra(),
        Err(FormicaError::Unreachable { .. })
    ));
}

#[test]
fn triangle_ant_and_dijkstra_agree() {
    let mut builder = GraphBuilder::new();
    let n = builder.add_nodes(3);
    builder.add_edge(n[0], n[1]).unwrap();
    builder.add_edge(n[0], n[2]).unwrap();
    builder.add_edge(n[1], n[2]).unwrap();
    let mut graph = builder.build().unwrap();

    let mut colony = seeded_colony(3);
    let ant_path = colony.swarm(&mut graph, 10).unwrap();
    let optimal = graph.dijkstra().unwrap();
    assert_eq!(optimal, Path::from(vec![EdgeKey::new(n[0], n[2])]));
    assert_eq!(ant_path, optimal);
}

#[test]
fn ant_paths_are_never_shorter_than_dijkstra() {
    init_tracing();
    let mut graph = Graph::random_seeded(20, 35, 3).unwrap();
    let node_count = graph.node_count();
    let mut colony = seeded_colony(4);
    colony.swarm(&mut graph, 200).unwrap();

    let optimal = graph.dijkstra().unwrap();
    assert_eq!(colony.num_runs(), 200);
    for record in colony.history() {
        match record.status {
            WalkStatus::Arrived => {
                assert!(graph.reaches_end(&record.path));
                assert!(record.path.len() >= optimal.len());
            }
            WalkStatus::Dead => assert_eq!(record.path.len(), node_count),
            WalkStatus::Walking => panic!("walk did not finish"),
        }
    }
}

#[test]
fn single_route_converges_after_one_walk() {
    init_tracing();
    let (mut graph, _) = chain(6);
    let mut colony = seeded_colony(5);

    let path = colony.swarm_until_static(&mut graph, 1).unwrap();
    assert_eq!(colony.num_runs(), 1);
    assert_eq!(path, graph.clone().dijkstra().unwrap());
}

#[test]
fn convergence_needs_threshold_identical_walks() {
    let (mut graph, _) = chain(4);
    let mut colony = seeded_colony(6);
    colony.swarm_until_static(&mut graph, 7).unwrap();
    assert_eq!(colony.num_passed(), 7);
    assert_eq!(colony.num_dead(), 0);
}

#[test]
fn diamond_settles_on_one_branch() {
    init_tracing();
    let (mut graph, n) = diamond();
    let mut colony = ColonyBuilder::new()
        .seed(7)
        .max_walks(10_000)
        .build()
        .unwrap();

    let path = colony.swarm_until_static(&mut graph, 5).unwrap();
    assert_eq!(path.len(), 2);
    assert!(graph.reaches_end(&path));

    let via_one: Path = vec![EdgeKey::new(n[0], n[1]), EdgeKey::new(n[1], n[3])].into();
    let via_two: Path = vec![EdgeKey::new(n[0], n[2]), EdgeKey::new(n[2], n[3])].into();
    assert!(path == via_one || path == via_two);
    assert!(colony.num_passed() >= 5);

    // Replaying the same seed one walk short must stop with the streak at
    // threshold - 1: the final five walks were identical and the four
    // before convergence never reached five.
    let walks = colony.num_runs();
    let (mut replay, _) = diamond();
    let mut short = ColonyBuilder::new()
        .seed(7)
        .max_walks(walks - 1)
        .build()
        .unwrap();
    assert_eq!(
        short.swarm_until_static(&mut replay, 5).unwrap_err(),
        FormicaError::NotConverged {
            walks: walks - 1,
            streak: 4
        }
    );
}

#[test]
fn random_graph_convergence_is_optimal_or_reported() {
    let mut graph = Graph::random_seeded(10, 16, 8).unwrap();
    let mut colony = ColonyBuilder::new()
        .seed(8)
        .max_walks(20_000)
        .build()
        .unwrap();

    match colony.swarm_until_static(&mut graph, 4) {
        Ok(path) => {
            let comparison = compare_to_optimal(&mut graph, &path).unwrap();
            assert!(comparison.heuristic_hops >= comparison.optimal_hops);
            assert!(comparison.ratio >= 1.0);
        }
        Err(FormicaError::NotConverged { walks, .. }) => assert_eq!(walks, 20_000),
        Err(other) => panic!("unexpected error: {}", other),
    }
}

#[test]
fn dead_ants_reset_the_streak() {
    let mut graph = dead_end();
    let mut colony = ColonyBuilder::new().seed(9).max_walks(25).build().unwrap();

    let err = colony.swarm_until_static(&mut graph, 1).unwrap_err();
    assert_eq!(err, FormicaError::NotConverged { walks: 25, streak: 0 });
    assert_eq!(colony.num_dead(), 25);
}

#[test]
fn evaporation_between_walks_keeps_the_floor() {
    let (mut graph, _) = diamond();
    let mut colony = ColonyBuilder::new().seed(10).max_walks(500).build().unwrap();
    let _ = colony.swarm_until_static(&mut graph, 3);
    assert!(graph.edges().all(|e| e.pheromone() >= PHEROMONE_FLOOR));

    let highest = graph.edges().map(Edge::pheromone).fold(PHEROMONE_FLOOR, f64::max);
    let sweeps = ((highest - PHEROMONE_FLOOR) / EVAPORATION_STEP).ceil() as usize + 1;
    for _ in 0..sweeps {
        graph.evaporate();
    }
    assert!(graph.edges().all(|e| e.pheromone() == PHEROMONE_FLOOR));
}

#[test]
fn counters_accumulate_across_calls() {
    let (mut graph, _) = chain(3);
    let mut colony = seeded_colony(11);
    colony.swarm(&mut graph, 4).unwrap();
    colony.swarm_until_static(&mut graph, 2).unwrap();

    let stats = colony.stats();
    assert_eq!(stats.passed, 6);
    assert_eq!(stats.runs, 6);
    assert_eq!(stats.success_rate, 1.0);
    // Convergence runs are not kept in the per-ant history.
    assert_eq!(colony.history().len(), 4);
}

#[test]
fn stranded_start_aborts_the_swarm() {
    let mut builder = GraphBuilder::new();
    let n = builder.add_nodes(3);
    builder.add_edge(n[1], n[2]).unwrap();
    let mut graph = builder.build().unwrap();

    let mut colony = seeded_colony(12);
    assert_eq!(
        colony.swarm(&mut graph, 2).unwrap_err(),
        FormicaError::Stranded(n[0])
    );
    assert_eq!(colony.num_runs(), 0);
}

#[test]
fn stats_serialize_to_json() {
    let (mut graph, _) = chain(3);
    let mut colony = seeded_colony(13);
    colony.swarm(&mut graph, 2).unwrap();

    let json = serde_json::to_value(colony.stats()).unwrap();
    assert_eq!(json["passed"], 2);
    assert_eq!(json["dead"], 0);
    assert_eq!(json["runs"], 2);

    let record = serde_json::to_value(&colony.history()[0]).unwrap();
    assert_eq!(record["status"], "Arrived");
}

#[test]
fn colony_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "deposit_reward = 4.0").unwrap();
    writeln!(file, "seed = 21").unwrap();

    let config = ColonyConfig::load(file.path()).unwrap();
    let mut colony = ColonyBuilder::new().with_config(config).build().unwrap();
    assert_eq!(colony.config().deposit_reward, 4.0);

    let (mut graph, nodes) = chain(2);
    colony.swarm(&mut graph, 1).unwrap();
    let key = EdgeKey::new(nodes[0], nodes[1]);
    assert_eq!(graph.edge(&key).unwrap().pheromone(), 5.0);
}

#[test]
fn same_seed_same_history() {
    let run = |seed| {
        let mut graph = Graph::random_seeded(12, 20, 99).unwrap();
        let mut colony = seeded_colony(seed);
        colony.swarm(&mut graph, 30).unwrap();
        colony.history().to_vec()
    };
    assert_eq!(run(14), run(14));
}
