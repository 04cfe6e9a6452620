//! Ant: a single stochastic walk from the graph's start toward its end.
//!
//! Each step the ant looks at the edges around it. If one of them leads
//! straight to the destination it takes it. Otherwise it prefers edges it
//! has not walked yet (falling back to any edge when boxed in) and picks
//! among them with probability proportional to pheromone. An ant whose path
//! grows as long as the graph has nodes dies. An ant that arrives rewards
//! its path, shorter paths getting more pheromone per edge.

use formica_core::error::{FormicaError, Result};
use formica_core::graph::Graph;
use formica_core::types::{EdgeKey, NodeId, Path};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// Total pheromone an arriving ant spreads over its path.
pub const PHEROMONE_REWARD: f64 = 10.0;

/// Where an ant is in its walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalkStatus {
    /// Still moving.
    Walking,
    /// Reached the destination and deposited pheromone.
    Arrived,
    /// Path reached the death threshold before arriving.
    Dead,
}

impl WalkStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WalkStatus::Walking)
    }
}

/// One ant, borrowing the graph for the length of its walk.
#[derive(Debug)]
pub struct Ant<'g> {
    graph: &'g mut Graph,
    destination: NodeId,
    position: NodeId,
    traversed: HashSet<EdgeKey>,
    path: Path,
    max_distance: usize,
    reward: f64,
    status: WalkStatus,
}

impl<'g> Ant<'g> {
    /// Place a new ant on the graph's start, headed for its end.
    ///
    /// If start and end are the same node the ant has already arrived.
    pub fn new(graph: &'g mut Graph) -> Self {
        let destination = graph.end();
        let position = graph.start();
        let max_distance = graph.node_count();
        let status = if position == destination {
            WalkStatus::Arrived
        } else {
            WalkStatus::Walking
        };
        Self {
            graph,
            destination,
            position,
            traversed: HashSet::new(),
            path: Path::new(),
            max_distance,
            reward: PHEROMONE_REWARD,
            status,
        }
    }

    /// Override the total pheromone deposited on arrival.
    ///
    /// The reward must be finite and non-negative.
    pub fn with_reward(mut self, reward: f64) -> Result<Self> {
        if !reward.is_finite() || reward < 0.0 {
            return Err(FormicaError::invalid_config(format!(
                "deposit reward must be a finite non-negative number, got {}",
                reward
            )));
        }
        self.reward = reward;
        Ok(self)
    }

    pub fn status(&self) -> WalkStatus {
        self.status
    }

    pub fn position(&self) -> NodeId {
        self.position
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    /// Path length at which the ant dies: the graph's node count.
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Walk until the ant arrives or dies.
    pub fn walk<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<WalkStatus> {
        while self.status == WalkStatus::Walking {
            self.step(rng)?;
        }
        Ok(self.status)
    }

    /// Move across one edge. A finished ant stays finished.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<WalkStatus> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let incident: Vec<(EdgeKey, f64)> = self
            .graph
            .edges_connected_to(self.position)
            .into_iter()
            .map(|edge| (edge.key(), edge.pheromone()))
            .collect();
        if incident.is_empty() {
            return Err(FormicaError::Stranded(self.position));
        }

        let (position, destination) = (self.position, self.destination);
        let shortcut = incident
            .iter()
            .map(|&(key, _)| key)
            .find(|key| key.other(position) == Some(destination));
        if let Some(key) = shortcut {
            self.traverse(key)?;
            self.status = WalkStatus::Arrived;
            self.deposit();
            trace!("Ant arrived at {} after {} hops", self.destination, self.path.len());
            return Ok(self.status);
        }

        let unvisited: Vec<(EdgeKey, f64)> = incident
            .iter()
            .filter(|(key, _)| !self.traversed.contains(key))
            .copied()
            .collect();
        let candidates = if unvisited.is_empty() {
            &incident
        } else {
            &unvisited
        };

        let next =
            select_by_pheromone(candidates, rng).ok_or(FormicaError::Stranded(self.position))?;
        self.traverse(next)?;
        trace!("Ant took {} to {}", next, self.position);

        if self.path.len() >= self.max_distance {
            self.status = WalkStatus::Dead;
            trace!("Ant died at {} after {} hops", self.position, self.path.len());
        }
        Ok(self.status)
    }

    fn traverse(&mut self, key: EdgeKey) -> Result<()> {
        let from = self.position;
        self.position = key
            .other(from)
            .ok_or_else(|| FormicaError::not_an_endpoint(key, from))?;
        self.traversed.insert(key);
        self.path.push(key);
        Ok(())
    }

    /// Spread the reward evenly over every edge walked, repeats included.
    fn deposit(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let share = self.reward / self.path.len() as f64;
        for key in self.path.iter() {
            if let Some(edge) = self.graph.edge_mut(key) {
                edge.raise_pheromone(share);
            }
        }
    }
}

/// Roulette-wheel selection over `(edge, pheromone)` candidates.
///
/// Draws a point in `[0, total)` and returns the first candidate whose
/// running pheromone sum passes it, in the order given. Returns `None` only
/// for an empty candidate list.
pub fn select_by_pheromone<R: Rng + ?Sized>(
    candidates: &[(EdgeKey, f64)],
    rng: &mut R,
) -> Option<EdgeKey> {
    let total: f64 = candidates.iter().map(|(_, pheromone)| pheromone).sum();
    let target = rng.gen::<f64>() * total;
    let mut running = 0.0;
    for &(key, pheromone) in candidates {
        running += pheromone;
        if running > target {
            return Some(key);
        }
    }
    // Rounding can leave the target at the very top of the wheel.
    candidates.last().map(|&(key, _)| key)
}
