//! Edge: an undirected connection carrying pheromone.
//!
//! Successful ants raise pheromone on the edges of their path; the colony
//! lowers it on every edge between walks (evaporation). The level never
//! drops below [`PHEROMONE_FLOOR`], so no edge ever becomes unselectable.

use crate::error::{FormicaError, Result};
use crate::types::{EdgeId, EdgeKey, IdAllocator, NodeId};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Pheromone level of a fresh edge, and the lower bound after decay.
pub const PHEROMONE_FLOOR: f64 = 1.0;

/// Amount removed from every edge by one evaporation sweep.
pub const EVAPORATION_STEP: f64 = 0.1;

/// An undirected edge between two distinct nodes.
///
/// Identity is the canonical [`EdgeKey`]: equality, ordering and hashing
/// ignore the edge id and the pheromone level.
#[derive(Debug, Clone)]
pub struct Edge {
    key: EdgeKey,
    id: EdgeId,
    pheromone: f64,
}

impl Edge {
    /// Create an edge between `a` and `b` in either orientation.
    pub fn new(a: NodeId, b: NodeId, ids: &mut IdAllocator) -> Result<Self> {
        if a == b {
            return Err(FormicaError::SelfLoop(a));
        }
        Ok(Self {
            key: EdgeKey::new(a, b),
            id: ids.next_edge(),
            pheromone: PHEROMONE_FLOOR,
        })
    }

    pub fn key(&self) -> EdgeKey {
        self.key
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpoint with the smaller identifier.
    pub fn from(&self) -> NodeId {
        self.key.from
    }

    /// Endpoint with the larger identifier.
    pub fn to(&self) -> NodeId {
        self.key.to
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.key.touches(node)
    }

    /// The endpoint of this edge that is not `node`.
    pub fn opposite_end(&self, node: NodeId) -> Result<NodeId> {
        self.key
            .other(node)
            .ok_or_else(|| FormicaError::not_an_endpoint(self.key, node))
    }

    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }

    /// Add `amount` of pheromone. Returns the new level.
    pub fn raise_pheromone(&mut self, amount: f64) -> f64 {
        self.pheromone += amount;
        self.pheromone
    }

    /// Evaporate one step, clamped at the floor. Returns the new level.
    pub fn lower_pheromone(&mut self) -> f64 {
        self.pheromone = (self.pheromone - EVAPORATION_STEP).max(PHEROMONE_FLOOR);
        self.pheromone
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
