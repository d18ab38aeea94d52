//! Directed graph stored as an adjacency list.
//!
//! Keys keep their insertion order (the order they appeared in the input),
//! and successor lists keep declaration order, duplicates and self-loops
//! included. A successor does not have to be a key itself; such dangling
//! references are tolerated here and only fail once the engine reaches them.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Opaque node identifier.
pub type Node = String;

// ── Built-in graph ───────────────────────────────────────────────────────────

/// The fixed adjacency list used when no user graph is supplied.
const BUILTIN: &[(&str, &[&str])] = &[
    ("Austin", &["Dallas", "Houston"]),
    ("Dallas", &["Denver", "Austin", "Chicago"]),
    ("Houston", &["Atlanta"]),
    ("Chicago", &["Denver"]),
    ("Denver", &["Chicago", "Atlanta"]),
    ("Atlanta", &["Washington", "Houston"]),
    ("Washington", &["Atlanta", "Dallas"]),
];

// ── Graph ────────────────────────────────────────────────────────────────────

/// Adjacency-list graph: node → ordered successors.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Keys in first-insertion order.
    order: Vec<Node>,
    adjacency: HashMap<Node, Vec<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in seven-city graph.
    pub fn builtin() -> Self {
        let mut g = Self::new();
        for (node, succs) in BUILTIN {
            g.insert(*node, succs.iter().map(|s| s.to_string()).collect());
        }
        g
    }

    /// Insert or replace the successor list of `node`.
    ///
    /// Re-inserting an existing key replaces its successors but keeps the
    /// key's original position.
    pub fn insert(&mut self, node: impl Into<Node>, successors: Vec<Node>) {
        let node = node.into();
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.adjacency.insert(node, successors);
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Successor list of `node`, or `None` if `node` is not a key.
    pub fn successors(&self, node: &str) -> Option<&[Node]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Keys in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter()
    }

    /// First key, the default start node.
    pub fn first_node(&self) -> Option<&Node> {
        self.order.first()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// All edges as `(from, to)` pairs in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.order.iter().flat_map(move |from| {
            self.adjacency[from].iter().map(move |to| (from, to))
        })
    }

    /// Every `(node, successor)` pair whose successor has no entry.
    pub fn dangling_references(&self) -> Vec<(&Node, &Node)> {
        self.edges().filter(|(_, to)| !self.contains(to)).collect()
    }

    /// Keys followed by any dangling successors, each listed once.
    ///
    /// This is the node set a renderer has to draw.
    pub fn referenced_nodes(&self) -> Vec<&Node> {
        let mut seen: BTreeSet<&str> = self.order.iter().map(String::as_str).collect();
        let mut out: Vec<&Node> = self.order.iter().collect();
        for (_, to) in self.edges() {
            if seen.insert(to.as_str()) {
                out.push(to);
            }
        }
        out
    }

    /// Static topology as a petgraph `DiGraph`, plus the id → index map.
    ///
    /// Multi-edges are kept so a renderer can draw both directions of a
    /// two-way connection.
    pub fn to_digraph(&self) -> (DiGraph<Node, ()>, HashMap<Node, NodeIndex>) {
        let mut digraph = DiGraph::new();
        let mut index: HashMap<Node, NodeIndex> = HashMap::new();
        for node in self.referenced_nodes() {
            let idx = digraph.add_node(node.clone());
            index.insert(node.clone(), idx);
        }
        for (from, to) in self.edges() {
            digraph.add_edge(index[from], index[to], ());
        }
        (digraph, index)
    }

    /// Nodes reachable from `start` along directed edges, `start` included.
    ///
    /// Dangling successors count as reachable. Empty if `start` is unknown.
    pub fn reachable_from(&self, start: &str) -> BTreeSet<Node> {
        let (digraph, index) = self.to_digraph();
        let Some(&root) = index.get(start) else {
            return BTreeSet::new();
        };
        let mut dfs = Dfs::new(&digraph, root);
        let mut out = BTreeSet::new();
        while let Some(idx) = dfs.next(&digraph) {
            out.insert(digraph[idx].clone());
        }
        out
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.adjacency == other.adjacency
    }
}

impl Eq for Graph {}

/// Serializes as a JSON object whose keys follow insertion order.
impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for node in &self.order {
            map.serialize_entry(node, &self.adjacency[node])?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_graph.rs"]
mod tests;
