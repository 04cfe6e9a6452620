//! # Formica Runtime
//!
//! Ants and the colony that runs them.
//!
//! An [`Ant`](ant::Ant) performs one pheromone-guided walk from the graph's
//! start toward its end. The [`Colony`](colony::Colony) sends ants one after
//! another, keeps the pass/death tallies, evaporates pheromone between walks,
//! and stops once the trail settles on a single path.

pub mod ant;
pub mod colony;
pub mod config;
pub mod metrics;
pub mod prelude;
