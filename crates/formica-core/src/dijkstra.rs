//! Exact hop-count shortest path, the baseline ant paths are judged against.
//!
//! Every edge has unit weight. The frontier is a binary min-heap of
//! `(distance, node)` entries; relaxing a node pushes a fresh entry rather
//! than reordering the old one, and entries whose distance no longer matches
//! the node's current distance are skipped when popped.

use crate::error::{FormicaError, Result};
use crate::graph::Graph;
use crate::node::INFINITE_DISTANCE;
use crate::types::{EdgeKey, NodeId, Path};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

impl Graph {
    /// Shortest path from start to end by edge count.
    ///
    /// Leaves each node's distance from start in its transient distance
    /// field (see [`Graph::distance`]). Returns an empty path when start and
    /// end coincide, and [`FormicaError::Unreachable`] when no path exists.
    pub fn dijkstra(&mut self) -> Result<Path> {
        let (start, end) = (self.start(), self.end());

        for node in &mut self.nodes {
            node.distance = if node.id() == start {
                0
            } else {
                INFINITE_DISTANCE
            };
        }

        let mut parents: HashMap<NodeId, EdgeKey> = HashMap::new();
        let mut queue: BinaryHeap<Reverse<(u32, NodeId)>> = self
            .nodes
            .iter()
            .map(|node| Reverse((node.distance, node.id())))
            .collect();

        while let Some(Reverse((distance, current))) = queue.pop() {
            let Some(&slot) = self.index.get(&current) else {
                continue;
            };
            if distance != self.nodes[slot].distance {
                continue;
            }
            if distance == INFINITE_DISTANCE {
                // Everything left in the queue is unreachable from start.
                break;
            }

            let candidate = distance.saturating_add(1);
            let incident: Vec<EdgeKey> = self
                .edges_connected_to(current)
                .into_iter()
                .map(|edge| edge.key())
                .collect();

            for key in incident {
                let Some(neighbor) = key.other(current) else {
                    continue;
                };
                let Some(&neighbor_slot) = self.index.get(&neighbor) else {
                    continue;
                };
                if candidate < self.nodes[neighbor_slot].distance {
                    self.nodes[neighbor_slot].distance = candidate;
                    queue.push(Reverse((candidate, neighbor)));
                    parents.insert(neighbor, key);
                }
            }
        }

        let mut edges = Vec::new();
        let mut cursor = end;
        while cursor != start {
            let key = *parents
                .get(&cursor)
                .ok_or(FormicaError::Unreachable { start, end })?;
            edges.push(key);
            cursor = key
                .other(cursor)
                .ok_or_else(|| FormicaError::not_an_endpoint(key, cursor))?;
        }
        edges.reverse();

        debug!("Dijkstra: {} hops from {} to {}", edges.len(), start, end);
        Ok(Path::from(edges))
    }
}
