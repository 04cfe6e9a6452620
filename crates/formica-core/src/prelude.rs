//! Formica Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

pub use crate::types::{EdgeId, EdgeKey, IdAllocator, NodeId, Path};

pub use crate::node::{Node, INFINITE_DISTANCE};

pub use crate::edge::{Edge, EVAPORATION_STEP, PHEROMONE_FLOOR};

pub use crate::graph::{Graph, GraphBuilder};

pub use crate::error::{FormicaError, Result};
