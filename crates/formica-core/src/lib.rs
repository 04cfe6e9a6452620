//! # Formica Core
//!
//! Graph primitives for ant colony optimization over undirected graphs.
//!
//! This crate owns everything an ant walks on:
//!
//! - **Node** - an identity-bearing vertex with a symmetric adjacency set
//! - **Edge** - a canonically ordered connection carrying pheromone
//! - **Graph** - explicit or randomly generated connected graphs, global
//!   evaporation, and an exact Dijkstra baseline
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! let mut builder = GraphBuilder::new();
//! let [a, b, c] = [builder.add_node(), builder.add_node(), builder.add_node()];
//! builder.add_edge(a, b).unwrap();
//! builder.add_edge(b, c).unwrap();
//! let mut graph = builder.build().unwrap();
//!
//! let path = graph.dijkstra().unwrap();
//! assert_eq!(path.len(), 2);
//! ```

pub mod types;
pub mod node;
pub mod edge;
pub mod graph;
pub mod dijkstra;
pub mod error;
pub mod prelude;
