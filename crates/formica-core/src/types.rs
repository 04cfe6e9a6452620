//! Shared types used across the graph and the colony.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node within one graph-building context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0)
    }
}

/// Unique identifier for an edge, used for stable tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

/// Monotonic identifier source owned by whoever is building a graph.
///
/// Identifiers are never reused within one allocator. Two allocators are
/// fully independent, so graphs built side by side in the same process
/// each get their own sequence starting at zero.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next_node: u32,
    next_edge: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next node identifier.
    pub fn next_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    /// Issue the next edge identifier.
    pub fn next_edge(&mut self) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        id
    }

    /// Number of node identifiers issued so far.
    pub fn nodes_issued(&self) -> u32 {
        self.next_node
    }

    /// Number of edge identifiers issued so far.
    pub fn edges_issued(&self) -> u32 {
        self.next_edge
    }
}

/// Canonical endpoint pair of an undirected edge.
///
/// The smaller identifier is always `from`. Equality, hashing and the
/// `(from, to)` lexicographic order all follow from that, so the pair
/// built in either orientation is the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub from: NodeId,
    pub to: NodeId,
}

impl EdgeKey {
    /// Canonicalize an endpoint pair. Does not reject `a == b`;
    /// [`Edge::new`](crate::edge::Edge::new) does.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// Whether `node` is one of the two endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint that is not `node`, if `node` is an endpoint at all.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.from.0, self.to.0)
    }
}

/// An ordered walk from a graph's start toward its end, as edge keys.
///
/// Equality is order-sensitive: two paths are the same only if they list
/// the same edges in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(Vec<EdgeKey>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, key: EdgeKey) {
        self.0.push(key);
    }

    pub fn contains(&self, key: &EdgeKey) -> bool {
        self.0.contains(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EdgeKey> {
        self.0.iter()
    }

    pub fn edges(&self) -> &[EdgeKey] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<EdgeKey> {
        self.0
    }
}

impl From<Vec<EdgeKey>> for Path {
    fn from(edges: Vec<EdgeKey>) -> Self {
        Self(edges)
    }
}

impl FromIterator<EdgeKey> for Path {
    fn from_iter<I: IntoIterator<Item = EdgeKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a EdgeKey;
    type IntoIter = std::slice::Iter<'a, EdgeKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
