//! Property checks for graph generation, edge identity, evaporation, and the
//! Dijkstra baseline.

use formica_core::prelude::{
    Edge, EdgeKey, FormicaError, Graph, IdAllocator, Node, NodeId, PHEROMONE_FLOOR,
};
use petgraph::graph::NodeIndex;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn feasible_shape() -> impl Strategy<Value = (usize, usize, u64)> {
    (1usize..24).prop_flat_map(|size| {
        let max = size * (size - 1) / 2;
        (Just(size), (size - 1)..=max, any::<u64>())
    })
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn generated_graphs_are_connected((size, sparseness, seed) in feasible_shape()) {
        let mut graph = Graph::random_seeded(size, sparseness, seed).unwrap();
        prop_assert_eq!(graph.node_count(), size);
        prop_assert_eq!(graph.edge_count(), sparseness);
        prop_assert!(graph.is_connected());

        graph.dijkstra().unwrap();
        let ids: Vec<NodeId> = graph.nodes().map(Node::id).collect();
        for id in ids {
            prop_assert!(graph.distance(id).is_some(), "node {} unreached", id);
        }
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive((size, sparseness, seed) in feasible_shape()) {
        let graph = Graph::random_seeded(size, sparseness, seed).unwrap();
        for node in graph.nodes() {
            for neighbor in node.neighbors() {
                prop_assert_ne!(neighbor, node.id());
                prop_assert!(graph.node(neighbor).unwrap().is_adjacent(node.id()));
                prop_assert!(graph.edge(&EdgeKey::new(node.id(), neighbor)).is_some());
            }
        }
    }

    #[test]
    fn dijkstra_matches_petgraph((size, sparseness, seed) in feasible_shape()) {
        let mut graph = Graph::random_seeded(size, sparseness, seed).unwrap();
        let path = graph.dijkstra().unwrap();
        prop_assert!(graph.reaches_end(&path));

        let exported = graph.to_petgraph();
        let start = NodeIndex::new(0);
        let end = NodeIndex::new(size - 1);
        let costs = petgraph::algo::dijkstra(&exported, start, Some(end), |_| 1u32);
        prop_assert_eq!(costs.get(&end).copied(), Some(path.len() as u32));
    }

    #[test]
    fn edges_are_equal_in_either_orientation(a in 0u32..1000, b in 0u32..1000) {
        prop_assume!(a != b);
        let mut ids = IdAllocator::new();
        let ab = Edge::new(NodeId(a), NodeId(b), &mut ids).unwrap();
        let ba = Edge::new(NodeId(b), NodeId(a), &mut ids).unwrap();
        prop_assert_eq!(&ab, &ba);
        prop_assert_eq!(hash_of(&ab), hash_of(&ba));
        prop_assert!(ab.from() < ab.to());
    }

    #[test]
    fn evaporation_never_breaches_the_floor(
        deposits in prop::collection::vec(0.0f64..20.0, 0..8),
        sweeps in 0usize..400,
    ) {
        let mut ids = IdAllocator::new();
        let mut edge = Edge::new(NodeId(0), NodeId(1), &mut ids).unwrap();
        for amount in deposits {
            edge.raise_pheromone(amount);
            for _ in 0..sweeps / 8 {
                prop_assert!(edge.lower_pheromone() >= PHEROMONE_FLOOR);
            }
        }
        for _ in 0..sweeps {
            edge.lower_pheromone();
        }
        prop_assert!(edge.pheromone() >= PHEROMONE_FLOOR);
    }
}

#[test]
fn self_loops_are_rejected() {
    let mut ids = IdAllocator::new();
    let a = ids.next_node();
    let err = Edge::new(a, a, &mut ids).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn sparseness_below_a_spanning_tree_is_rejected() {
    let err = Graph::random_seeded(5, 3, 0).unwrap_err();
    assert!(matches!(err, FormicaError::InvalidSparseness { min: 4, .. }));
}

#[test]
fn two_graphs_number_their_nodes_independently() {
    let a = Graph::random_seeded(4, 3, 1).unwrap();
    let b = Graph::random_seeded(4, 3, 2).unwrap();
    let ids_a: Vec<NodeId> = a.nodes().map(Node::id).collect();
    let ids_b: Vec<NodeId> = b.nodes().map(Node::id).collect();
    assert_eq!(ids_a, ids_b);
    assert_eq!(ids_a[0], NodeId(0));
}
