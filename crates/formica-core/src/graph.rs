//! Graph: the node set, the pheromone-bearing edge collection, and the
//! designated start and end nodes.
//!
//! Nodes live in an arena (`Vec<Node>`) indexed by id; adjacency is a set of
//! neighbor ids per node. Edges are kept in a `BTreeMap` keyed by their
//! canonical `(from, to)` pair, which fixes the iteration order everything
//! else relies on: display, ant candidate order, Dijkstra relaxation order.

use crate::edge::Edge;
use crate::error::{FormicaError, Result};
use crate::node::{Node, INFINITE_DISTANCE};
use crate::types::*;
use petgraph::graph::UnGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// An undirected graph with a start node and a destination.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    /// Map from node id to its slot in `nodes`.
    pub(crate) index: HashMap<NodeId, usize>,
    pub(crate) edges: BTreeMap<EdgeKey, Edge>,
    start: NodeId,
    end: NodeId,
}

impl Graph {
    /// Build a graph from explicitly constructed nodes and edges.
    ///
    /// The edge list is authoritative for adjacency: any neighbor sets the
    /// nodes carried in are replaced by the ones the edges imply.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>, start: NodeId, end: NodeId) -> Result<Self> {
        if nodes.is_empty() {
            return Err(FormicaError::EmptyGraph);
        }

        let mut index = HashMap::with_capacity(nodes.len());
        for (slot, node) in nodes.iter().enumerate() {
            if index.insert(node.id(), slot).is_some() {
                return Err(FormicaError::DuplicateNode(node.id()));
            }
        }
        for id in [start, end] {
            if !index.contains_key(&id) {
                return Err(FormicaError::NodeNotFound(id));
            }
        }

        let mut graph = Self {
            nodes,
            index,
            edges: BTreeMap::new(),
            start,
            end,
        };
        for node in &mut graph.nodes {
            node.clear_neighbors();
            node.distance = INFINITE_DISTANCE;
        }

        for edge in edges {
            let key = edge.key();
            for endpoint in [key.from, key.to] {
                if !graph.index.contains_key(&endpoint) {
                    return Err(FormicaError::EdgeOutsideGraph {
                        edge: key,
                        node: endpoint,
                    });
                }
            }
            if graph.edges.contains_key(&key) {
                return Err(FormicaError::DuplicateEdge(key));
            }
            graph.insert_edge(edge);
        }

        debug!(
            "Built graph: {} nodes, {} edges, start {}, end {}",
            graph.node_count(),
            graph.edge_count(),
            start,
            end
        );
        Ok(graph)
    }

    /// Randomly generate a connected graph with `size` nodes and
    /// `sparseness` edges.
    ///
    /// Node 0 is the start and the last node is the end. Each new node is
    /// attached to a uniformly chosen earlier node, which makes the graph
    /// connected with `size - 1` edges; further edges join uniformly chosen
    /// non-adjacent pairs until the edge count reaches `sparseness`.
    pub fn random<R: Rng + ?Sized>(size: usize, sparseness: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(FormicaError::EmptyGraph);
        }
        let min = size - 1;
        let max = size
            .checked_mul(size - 1)
            .map(|pairs| pairs / 2)
            .unwrap_or(usize::MAX);
        if sparseness < min || sparseness > max {
            return Err(FormicaError::InvalidSparseness {
                size,
                sparseness,
                min,
                max,
            });
        }

        let mut ids = IdAllocator::new();
        let mut nodes: Vec<Node> = Vec::with_capacity(size);
        let mut edges = BTreeMap::new();

        for i in 0..size {
            let mut node = Node::new(&mut ids);
            if i > 0 {
                let previous = &mut nodes[rng.gen_range(0..i)];
                node.connect(previous)?;
                let edge = Edge::new(node.id(), previous.id(), &mut ids)?;
                edges.insert(edge.key(), edge);
            }
            nodes.push(node);
        }

        let mut edge_count = min;
        while edge_count < sparseness {
            let (a, b) = loop {
                let a = rng.gen_range(0..size);
                let b = rng.gen_range(0..size);
                if !nodes[a].is_adjacent(nodes[b].id()) {
                    break (a, b);
                }
            };
            let (a_id, b_id) = (nodes[a].id(), nodes[b].id());
            nodes[a].link(b_id);
            nodes[b].link(a_id);
            let edge = Edge::new(a_id, b_id, &mut ids)?;
            edges.insert(edge.key(), edge);
            edge_count += 1;
        }

        let start = nodes[0].id();
        let end = nodes[size - 1].id();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| (node.id(), slot))
            .collect();

        debug!(
            "Generated random graph: {} nodes, {} edges",
            size, sparseness
        );
        Ok(Self {
            nodes,
            index,
            edges,
            start,
            end,
        })
    }

    /// [`Graph::random`] with a seeded `StdRng`, for reproducible graphs.
    pub fn random_seeded(size: usize, sparseness: usize, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(size, sparseness, &mut rng)
    }

    fn insert_edge(&mut self, edge: Edge) {
        let key = edge.key();
        if let Some(&slot) = self.index.get(&key.from) {
            self.nodes[slot].link(key.to);
        }
        if let Some(&slot) = self.index.get(&key.to) {
            self.nodes[slot].link(key.from);
        }
        self.edges.insert(key, edge);
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    /// Number of nodes (the graph's size).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edges.get(key)
    }

    pub fn edge_mut(&mut self, key: &EdgeKey) -> Option<&mut Edge> {
        self.edges.get_mut(key)
    }

    /// Nodes in construction order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Edges in canonical `(from, to)` order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Edges incident to `node`, in canonical order.
    ///
    /// Looks edges up through the node's neighbor set instead of scanning
    /// the whole collection. Neighbors are visited in ascending id order,
    /// which yields exactly the order a full scan in `(from, to)` order
    /// would: first the edges where `node` is `to`, then where it is `from`.
    pub fn edges_connected_to(&self, node: NodeId) -> Vec<&Edge> {
        let Some(n) = self.node(node) else {
            return Vec::new();
        };
        n.neighbors()
            .filter_map(|neighbor| self.edges.get(&EdgeKey::new(node, neighbor)))
            .collect()
    }

    /// Three-way comparison of two nodes' Dijkstra distances.
    pub fn compare_distances(&self, a: NodeId, b: NodeId) -> Result<Ordering> {
        let a = self.node(a).ok_or(FormicaError::NodeNotFound(a))?;
        let b = self.node(b).ok_or(FormicaError::NodeNotFound(b))?;
        Ok(a.compare_distances(b))
    }

    /// Hop distance from start recorded by the last Dijkstra run.
    pub fn distance(&self, node: NodeId) -> Option<u32> {
        self.node(node).and_then(Node::distance)
    }

    /// Decay every edge's pheromone by one step.
    pub fn evaporate(&mut self) {
        for edge in self.edges.values_mut() {
            edge.lower_pheromone();
        }
    }

    /// Remove an edge and the adjacency it implies.
    pub fn remove_edge(&mut self, key: EdgeKey) -> Result<Edge> {
        let not_adjacent = FormicaError::NotAdjacent(key.from, key.to);
        let from_slot = *self.index.get(&key.from).ok_or(not_adjacent.clone())?;
        let to_slot = *self.index.get(&key.to).ok_or(not_adjacent.clone())?;
        if key.from == key.to || !self.nodes[from_slot].is_adjacent(key.to) {
            return Err(not_adjacent);
        }
        let edge = self.edges.remove(&key).ok_or(not_adjacent)?;
        self.nodes[from_slot].unlink(key.to);
        self.nodes[to_slot].unlink(key.from);
        debug!("Removed edge {}", key);
        Ok(edge)
    }

    /// Follow `path` from the start node and return every node visited.
    ///
    /// Fails if an edge is missing from this graph or does not continue from
    /// where the previous edge left off.
    pub fn trace_path(&self, path: &Path) -> Result<Vec<NodeId>> {
        let mut current = self.start;
        let mut visited = Vec::with_capacity(path.len() + 1);
        visited.push(current);
        for key in path {
            let edge = self
                .edges
                .get(key)
                .ok_or(FormicaError::NotAdjacent(key.from, key.to))?;
            current = edge.opposite_end(current)?;
            visited.push(current);
        }
        Ok(visited)
    }

    /// Whether `path` is a contiguous walk from start that ends at end.
    pub fn reaches_end(&self, path: &Path) -> bool {
        self.trace_path(path)
            .map(|visited| visited.last() == Some(&self.end))
            .unwrap_or(false)
    }

    /// Export to a petgraph undirected graph weighted by pheromone.
    ///
    /// Petgraph node indices follow this graph's construction order.
    pub fn to_petgraph(&self) -> UnGraph<NodeId, f64> {
        let mut out = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: HashMap<NodeId, _> = self
            .nodes
            .iter()
            .map(|node| (node.id(), out.add_node(node.id())))
            .collect();
        for edge in self.edges.values() {
            if let (Some(&a), Some(&b)) = (indices.get(&edge.from()), indices.get(&edge.to())) {
                out.add_edge(a, b, edge.pheromone());
            }
        }
        out
    }

    /// Whether every node is reachable from every other.
    pub fn is_connected(&self) -> bool {
        petgraph::algo::connected_components(&self.to_petgraph()) == 1
    }
}

impl fmt::Display for Graph {
    /// One line per `from` node, edges in canonical order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<NodeId> = None;
        for key in self.edges.keys() {
            match previous {
                Some(from) if from == key.from => write!(f, " ")?,
                Some(_) => writeln!(f)?,
                None => {}
            }
            write!(f, "{}", key)?;
            previous = Some(key.from);
        }
        Ok(())
    }
}

/// Incremental explicit construction with its own id allocator.
///
/// ```rust
/// use formica_core::graph::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let nodes = builder.add_nodes(3);
/// builder.add_edge(nodes[0], nodes[1]).unwrap();
/// builder.add_edge(nodes[1], nodes[2]).unwrap();
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.end(), nodes[2]);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    ids: IdAllocator,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self) -> NodeId {
        let node = Node::new(&mut self.ids);
        let id = node.id();
        self.nodes.push(node);
        id
    }

    pub fn add_nodes(&mut self, count: usize) -> Vec<NodeId> {
        (0..count).map(|_| self.add_node()).collect()
    }

    /// Add an edge. Self-loops fail here; unknown endpoints and duplicates
    /// fail at [`build`](Self::build).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<EdgeKey> {
        let edge = Edge::new(a, b, &mut self.ids)?;
        let key = edge.key();
        self.edges.push(edge);
        Ok(key)
    }

    /// Set the start node (defaults to the first node added).
    pub fn start(&mut self, id: NodeId) -> &mut Self {
        self.start = Some(id);
        self
    }

    /// Set the end node (defaults to the last node added).
    pub fn end(&mut self, id: NodeId) -> &mut Self {
        self.end = Some(id);
        self
    }

    pub fn build(self) -> Result<Graph> {
        let first = self.nodes.first().map(Node::id);
        let last = self.nodes.last().map(Node::id);
        let (Some(start), Some(end)) = (self.start.or(first), self.end.or(last)) else {
            return Err(FormicaError::EmptyGraph);
        };
        Graph::new(self.nodes, self.edges, start, end)
    }
}
