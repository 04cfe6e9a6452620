//! Node: a vertex with a symmetric adjacency set.

use crate::error::{FormicaError, Result};
use crate::types::{IdAllocator, NodeId};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sentinel for "not yet reached" during shortest-path computation.
pub const INFINITE_DISTANCE: u32 = u32::MAX;

/// A vertex of an undirected graph.
///
/// Adjacency is stored as neighbor identifiers rather than references, so
/// nodes own nothing but their own data.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    neighbors: BTreeSet<NodeId>,
    /// Scratch value written by Dijkstra; meaningless otherwise.
    pub(crate) distance: u32,
}

impl Node {
    /// Create a node with the allocator's next identifier.
    pub fn new(ids: &mut IdAllocator) -> Self {
        Self::with_id(ids.next_node())
    }

    pub(crate) fn with_id(id: NodeId) -> Self {
        Self {
            id,
            neighbors: BTreeSet::new(),
            distance: INFINITE_DISTANCE,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Make `self` and `other` neighbors of each other.
    ///
    /// Idempotent: returns `false` if they were already adjacent.
    pub fn connect(&mut self, other: &mut Node) -> Result<bool> {
        if self.id == other.id {
            return Err(FormicaError::SelfLoop(self.id));
        }
        let added = self.link(other.id);
        other.link(self.id);
        Ok(added)
    }

    /// One-sided insert; the graph calls it for both endpoints.
    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        self.neighbors.insert(other)
    }

    pub(crate) fn unlink(&mut self, other: NodeId) -> bool {
        self.neighbors.remove(&other)
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }

    /// True if `other` is a neighbor, or is this node itself.
    ///
    /// The self case lets random generation reject self-picks with the same
    /// check it uses for duplicate edges.
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        other == self.id || self.neighbors.contains(&other)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbor identifiers in ascending order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.iter().copied()
    }

    /// Distance from the last Dijkstra run, `None` if unreached.
    pub fn distance(&self) -> Option<u32> {
        (self.distance != INFINITE_DISTANCE).then_some(self.distance)
    }

    /// Three-way comparison on the transient Dijkstra distance.
    pub fn compare_distances(&self, other: &Node) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}
