//! Colony: runs ants over a graph and decides when the trail has settled.
//!
//! Ants walk one at a time; each fully finishes before the next is born, so
//! pheromone writes never overlap. Two modes:
//!
//! - [`Colony::swarm`] runs a fixed number of ants with no evaporation.
//! - [`Colony::swarm_until_static`] keeps sending ants, evaporating once
//!   after every walk, until the same successful path comes back
//!   `threshold` times in a row.
//!
//! Pass/death counters accumulate across every call on the same colony.

use crate::ant::{Ant, WalkStatus};
use crate::config::ColonyConfig;
use formica_core::error::{FormicaError, Result};
use formica_core::graph::Graph;
use formica_core::types::Path;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Outcome of one ant's walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkRecord {
    pub status: WalkStatus,
    pub path: Path,
}

/// Statistics about the colony.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColonyStats {
    pub passed: u64,
    pub dead: u64,
    pub runs: u64,
    /// passed / runs, 0.0 before any walk.
    pub success_rate: f64,
}

/// The colony. Owns the RNG and the running tallies.
#[derive(Debug)]
pub struct Colony {
    config: ColonyConfig,
    /// One record per ant sent by `swarm`.
    history: Vec<WalkRecord>,
    num_passed: u64,
    num_dead: u64,
    rng: StdRng,
}

impl Default for Colony {
    fn default() -> Self {
        Self::new()
    }
}

impl Colony {
    /// Create a new colony with default configuration.
    pub fn new() -> Self {
        Self::assemble(ColonyConfig::default())
    }

    /// Create a new colony with the specified configuration.
    ///
    /// Fails with [`FormicaError::Config`] if the configuration does not
    /// validate.
    pub fn from_config(config: ColonyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config))
    }

    fn assemble(config: ColonyConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            history: Vec::new(),
            num_passed: 0,
            num_dead: 0,
            rng,
        }
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    fn run_ant(&mut self, graph: &mut Graph) -> Result<(WalkStatus, Path)> {
        let mut ant = Ant::new(graph).with_reward(self.config.deposit_reward)?;
        let status = ant.walk(&mut self.rng)?;
        if status == WalkStatus::Dead {
            self.num_dead += 1;
        } else {
            self.num_passed += 1;
        }
        let path = ant.into_path();
        debug!("Ant {:?} after {} hops", status, path.len());
        Ok((status, path))
    }

    /// Send `num_ants` ants through the graph, one after another.
    ///
    /// Returns the last ant's path whether it arrived or died; check
    /// [`num_dead`](Self::num_dead) or [`history`](Self::history) to tell.
    /// Zero ants yields an empty path.
    pub fn swarm(&mut self, graph: &mut Graph, num_ants: usize) -> Result<Path> {
        let mut last = Path::new();
        for _ in 0..num_ants {
            let (status, path) = self.run_ant(graph)?;
            self.history.push(WalkRecord {
                status,
                path: path.clone(),
            });
            last = path;
        }
        debug!(
            "Swarmed {} ants: {} passed, {} dead so far",
            num_ants, self.num_passed, self.num_dead
        );
        Ok(last)
    }

    /// Send ants until `threshold` consecutive successful walks produce the
    /// same path, and return that path.
    ///
    /// The first successful walk after a death (or at the start) counts as
    /// one. A death resets the streak and forgets the remembered path. The
    /// graph evaporates once after every walk. Without `max_walks` this loops
    /// until convergence; with it, running out of walks is
    /// [`FormicaError::NotConverged`].
    pub fn swarm_until_static(&mut self, graph: &mut Graph, threshold: usize) -> Result<Path> {
        let mut remembered: Option<Path> = None;
        let mut streak = 0usize;
        let mut best_streak = 0usize;
        let mut walks = 0u64;

        while streak < threshold {
            if let Some(limit) = self.config.max_walks {
                if walks >= limit {
                    warn!(
                        "No convergence after {} walks (best streak {} of {})",
                        walks, best_streak, threshold
                    );
                    return Err(FormicaError::NotConverged {
                        walks,
                        streak: best_streak,
                    });
                }
            }

            let (status, path) = self.run_ant(graph)?;
            walks += 1;
            match status {
                WalkStatus::Dead => {
                    streak = 0;
                    remembered = None;
                }
                _ => {
                    streak = if remembered.as_ref() == Some(&path) {
                        streak + 1
                    } else {
                        1
                    };
                    remembered = Some(path);
                }
            }
            best_streak = best_streak.max(streak);
            graph.evaporate();
        }

        let path = remembered.unwrap_or_default();
        info!(
            "Converged after {} walks on a {}-hop path",
            walks,
            path.len()
        );
        Ok(path)
    }

    pub fn num_dead(&self) -> u64 {
        self.num_dead
    }

    pub fn num_passed(&self) -> u64 {
        self.num_passed
    }

    pub fn num_runs(&self) -> u64 {
        self.num_dead + self.num_passed
    }

    /// Records of every ant sent by [`swarm`](Self::swarm), oldest first.
    ///
    /// Records accumulate for the colony's lifetime; long-lived colonies
    /// should call [`clear_history`](Self::clear_history) between batches.
    pub fn history(&self) -> &[WalkRecord] {
        &self.history
    }

    /// Drop the per-ant records. Pass/death counters are kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn stats(&self) -> ColonyStats {
        let runs = self.num_runs();
        ColonyStats {
            passed: self.num_passed,
            dead: self.num_dead,
            runs,
            success_rate: if runs == 0 {
                0.0
            } else {
                self.num_passed as f64 / runs as f64
            },
        }
    }
}

/// Builder for creating colonies from a base config plus overrides.
#[derive(Debug, Clone, Default)]
pub struct ColonyBuilder {
    config: ColonyConfig,
}

impl ColonyBuilder {
    /// Create a new colony builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn with_config(mut self, config: ColonyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn deposit_reward(mut self, reward: f64) -> Self {
        self.config.deposit_reward = reward;
        self
    }

    /// Bound `swarm_until_static` to this many walks.
    pub fn max_walks(mut self, walks: u64) -> Self {
        self.config.max_walks = Some(walks);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the colony.
    pub fn build(self) -> Result<Colony> {
        Colony::from_config(self.config)
    }
}
