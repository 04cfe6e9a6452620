//! # Formica
//!
//! Ant colony optimization on undirected graphs, with Dijkstra as the
//! exact yardstick.
//!
//! Ants walk from a graph's start node toward its end, choosing edges with
//! probability proportional to pheromone. Ants that arrive reinforce their
//! path, shorter paths more strongly; pheromone evaporates between walks.
//! The colony stops once the same path wins several walks in a row.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica::prelude::*;
//!
//! // A connected random graph: 12 nodes, 20 edges.
//! let mut graph = Graph::random_seeded(12, 20, 42).unwrap();
//!
//! // Send ants until one path wins three times running.
//! let mut colony = ColonyBuilder::new()
//!     .seed(7)
//!     .max_walks(50_000)
//!     .build()
//!     .unwrap();
//!
//! if let Ok(path) = colony.swarm_until_static(&mut graph, 3) {
//!     let comparison = compare_to_optimal(&mut graph, &path).unwrap();
//!     assert!(comparison.heuristic_hops >= comparison.optimal_hops);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`formica_core`] - Node, Edge, Graph, Dijkstra, errors
//! - [`formica_runtime`] - Ant walks, Colony, configuration, path metrics
//!
//! ## Key Concepts
//!
//! | Concept | What It Does |
//! |---------|--------------|
//! | Pheromone | Per-edge weight, starts at 1.0, never decays below 1.0 |
//! | Deposit | An arriving ant adds 10.0 / path length to each path edge |
//! | Evaporation | Every edge loses 0.1 per sweep, floored at 1.0 |
//! | Death | An ant whose path reaches the node count gives up |
//! | Convergence | The same successful path `threshold` times in a row |

pub use formica_core;
pub use formica_runtime;

pub mod prelude {
    //! Everything needed to build graphs and run colonies.
    pub use formica_runtime::prelude::*;
}
