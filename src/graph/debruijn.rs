use ahash::AHashMap;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use crate::kmer::kmer::{prefix, suffix, KmerTable};

/// Index of a node label in the graph's label arena
pub type NodeId = usize;

/// Weighted de Bruijn graph over (k-1)-mer nodes.
///
/// Node labels live in an append-only arena so a `NodeId` never dangles;
/// membership in the graph is what decides whether a node is alive. Edge
/// weights are k-mer occurrence counts.
#[derive(Debug, Clone, Default)]
pub struct DeBruijnGraph {
    graph: DiGraphMap<NodeId, u32>,
    labels: Vec<String>,
    index: AHashMap<String, NodeId>,
}

/// Build the de Bruijn graph of a k-mer table.
///
/// Each k-mer becomes one edge from its prefix to its suffix, weighted by its
/// count. Entries are inserted in lexicographic order so node and neighbour
/// iteration is reproducible across runs.
pub fn build_graph(table: &KmerTable) -> DeBruijnGraph {
    let mut entries: Vec<(&String, &u32)> = table.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut graph = DeBruijnGraph::new();
    for (kmer, &count) in entries {
        graph.add_edge(prefix(kmer), suffix(kmer), count);
    }
    graph
}

impl DeBruijnGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        id
    }

    /// Insert (or overwrite) the edge `from -> to`, creating missing endpoints
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u32) {
        let a = self.intern(from);
        let b = self.intern(to);
        self.graph.add_node(a);
        self.graph.add_node(b);
        self.graph.add_edge(a, b, weight);
    }

    /// Remove a node with all its incident edges. Returns false if it was already gone.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        if !self.graph.remove_node(node) {
            return false;
        }
        if let Some(label) = self.labels.get(node) {
            self.index.remove(label);
        }
        true
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Label of a node; removed nodes keep their label
    pub fn label(&self, node: NodeId) -> &str {
        self.labels.get(node).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.node_id(label).is_some_and(|id| self.contains(id))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes()
    }

    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors_directed(node, Direction::Incoming)
    }

    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors_directed(node, Direction::Outgoing)
    }

    pub fn in_degree(&self, node: NodeId) -> usize {
        self.predecessors(node).count()
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.successors(node).count()
    }

    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.graph.edge_weight(from, to).copied()
    }

    /// Node labels along a path
    pub fn path_labels(&self, path: &[NodeId]) -> Vec<&str> {
        path.iter().map(|&n| self.label(n)).collect()
    }

    /// Resolve a path given as labels; `None` if any label is not in the graph
    pub fn path_ids(&self, labels: &[&str]) -> Option<Vec<NodeId>> {
        labels
            .iter()
            .map(|l| self.node_id(l).filter(|&id| self.contains(id)))
            .collect()
    }

    /// Underlying adjacency, for petgraph algorithms
    pub fn inner(&self) -> &DiGraphMap<NodeId, u32> {
        &self.graph
    }
}

/// Find nodes with no incoming edges (contig start points)
pub fn find_start_nodes(graph: &DeBruijnGraph) -> Vec<NodeId> {
    graph.nodes().filter(|&n| graph.in_degree(n) == 0).collect()
}

/// Find nodes with no outgoing edges (contig end points)
pub fn find_end_nodes(graph: &DeBruijnGraph) -> Vec<NodeId> {
    graph.nodes().filter(|&n| graph.out_degree(n) == 0).collect()
}
