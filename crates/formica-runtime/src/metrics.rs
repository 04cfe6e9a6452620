//! Path quality: how an ant path compares with the exact shortest path.

use formica_core::error::{FormicaError, Result};
use formica_core::graph::Graph;
use formica_core::types::Path;
use serde::Serialize;

/// A heuristic path measured against Dijkstra on the same graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathComparison {
    pub heuristic_hops: usize,
    pub optimal_hops: usize,
    /// heuristic_hops - optimal_hops
    pub excess_hops: usize,
    /// heuristic_hops / optimal_hops; 1.0 when both are empty.
    pub ratio: f64,
}

impl PathComparison {
    pub fn is_optimal(&self) -> bool {
        self.excess_hops == 0
    }
}

/// Check `path` is a walk from start to end and compare it with Dijkstra.
///
/// Runs Dijkstra, so the graph's transient node distances are overwritten.
pub fn compare_to_optimal(graph: &mut Graph, path: &Path) -> Result<PathComparison> {
    let visited = graph.trace_path(path)?;
    let reached = visited.last().copied().unwrap_or_else(|| graph.start());
    if reached != graph.end() {
        return Err(FormicaError::IncompletePath {
            reached,
            end: graph.end(),
        });
    }

    let optimal = graph.dijkstra()?;
    let heuristic_hops = path.len();
    let optimal_hops = optimal.len();
    let ratio = if optimal_hops == 0 {
        1.0
    } else {
        heuristic_hops as f64 / optimal_hops as f64
    };

    Ok(PathComparison {
        heuristic_hops,
        optimal_hops,
        excess_hops: heuristic_hops.saturating_sub(optimal_hops),
        ratio,
    })
}
