//! Formica Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_runtime::prelude::*;
//! ```

// Re-export ants
pub use crate::ant::{select_by_pheromone, Ant, WalkStatus, PHEROMONE_REWARD};

// Re-export colony
pub use crate::colony::{Colony, ColonyBuilder, ColonyStats, WalkRecord};

// Re-export configuration
pub use crate::config::ColonyConfig;

// Re-export metrics
pub use crate::metrics::{compare_to_optimal, PathComparison};

// Re-export from core
pub use formica_core::prelude::*;
