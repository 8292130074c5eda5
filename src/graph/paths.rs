use ahash::AHashSet;
use petgraph::algo::all_simple_paths;
use petgraph::visit::{Bfs, Reversed};
use crate::config::PathLimits;
use crate::graph::debruijn::{DeBruijnGraph, NodeId};

/// Nodes reachable from `node`, in breadth-first order, excluding `node` itself.
///
/// The traversal's visited map bounds it on cyclic graphs.
pub fn descendants(graph: &DeBruijnGraph, node: NodeId) -> Vec<NodeId> {
    if !graph.contains(node) {
        return Vec::new();
    }
    let g = graph.inner();
    let mut bfs = Bfs::new(g, node);
    let mut found = Vec::new();
    while let Some(n) = bfs.next(g) {
        if n != node {
            found.push(n);
        }
    }
    found
}

/// Nodes that can reach `node`, in breadth-first order, excluding `node` itself
pub fn ancestors(graph: &DeBruijnGraph, node: NodeId) -> Vec<NodeId> {
    if !graph.contains(node) {
        return Vec::new();
    }
    let g = Reversed(graph.inner());
    let mut bfs = Bfs::new(g, node);
    let mut found = Vec::new();
    while let Some(n) = bfs.next(g) {
        if n != node {
            found.push(n);
        }
    }
    found
}

/// Deepest common ancestor of `a` and `b`.
///
/// Each node counts as its own ancestor. Among the common ancestors, the
/// result is the first (nearest to `a`) that reaches no other common
/// ancestor. On a cycle through the common ancestors every candidate reaches
/// another one and the search gives up with `None`.
pub fn lowest_common_ancestor(graph: &DeBruijnGraph, a: NodeId, b: NodeId) -> Option<NodeId> {
    if !graph.contains(a) || !graph.contains(b) {
        return None;
    }

    let of_b: AHashSet<NodeId> = std::iter::once(b).chain(ancestors(graph, b)).collect();
    let common: Vec<NodeId> = std::iter::once(a)
        .chain(ancestors(graph, a))
        .filter(|n| of_b.contains(n))
        .collect();
    let common_set: AHashSet<NodeId> = common.iter().copied().collect();

    common
        .into_iter()
        .find(|&candidate| descendants(graph, candidate).iter().all(|d| !common_set.contains(d)))
}

/// Every simple path from `from` to `to`, in depth-first discovery order.
///
/// `limits.max_path_nodes` bounds the path length and `limits.max_paths`
/// the number of paths returned. Paths from a node to itself are not
/// enumerated.
pub fn simple_paths(graph: &DeBruijnGraph, from: NodeId, to: NodeId, limits: PathLimits) -> Vec<Vec<NodeId>> {
    if from == to || !graph.contains(from) || !graph.contains(to) {
        return Vec::new();
    }

    let max_intermediate = limits.max_path_nodes.map(|n| n.saturating_sub(2));
    let paths = all_simple_paths::<Vec<NodeId>, _>(graph.inner(), from, to, 0, max_intermediate);

    match limits.max_paths {
        Some(max) => paths.take(max).collect(),
        None => paths.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(edges: &[(&str, &str, u32)]) -> DeBruijnGraph {
        let mut graph = DeBruijnGraph::new();
        for &(a, b, w) in edges {
            graph.add_edge(a, b, w);
        }
        graph
    }

    fn id(graph: &DeBruijnGraph, label: &str) -> NodeId {
        graph.node_id(label).unwrap()
    }

    fn sorted_labels(graph: &DeBruijnGraph, nodes: &[NodeId]) -> Vec<String> {
        let mut labels: Vec<String> = nodes.iter().map(|&n| graph.label(n).to_string()).collect();
        labels.sort();
        labels
    }

    #[test]
    fn test_descendants_and_ancestors() {
        let graph = graph_of(&[("A", "B", 1), ("B", "C", 1), ("B", "D", 1), ("E", "D", 1)]);
        assert_eq!(sorted_labels(&graph, &descendants(&graph, id(&graph, "A"))), vec!["B", "C", "D"]);
        assert_eq!(sorted_labels(&graph, &ancestors(&graph, id(&graph, "D"))), vec!["A", "B", "E"]);
        assert!(descendants(&graph, id(&graph, "C")).is_empty());
        assert!(ancestors(&graph, id(&graph, "A")).is_empty());
    }

    #[test]
    fn test_traversal_terminates_on_cycle() {
        let graph = graph_of(&[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
        assert_eq!(sorted_labels(&graph, &descendants(&graph, id(&graph, "A"))), vec!["B", "C"]);
        assert_eq!(sorted_labels(&graph, &ancestors(&graph, id(&graph, "A"))), vec!["B", "C"]);
    }

    #[test]
    fn test_lca_of_bubble_branches() {
        let graph = graph_of(&[
            ("R", "S", 1),
            ("S", "A", 1),
            ("A", "T", 1),
            ("S", "B1", 1),
            ("B1", "B2", 1),
            ("B2", "T", 1),
        ]);
        let lca = lowest_common_ancestor(&graph, id(&graph, "A"), id(&graph, "B2"));
        assert_eq!(lca, Some(id(&graph, "S")));
    }

    #[test]
    fn test_lca_when_one_node_is_ancestor_of_other() {
        let graph = graph_of(&[("S", "A", 1), ("A", "B", 1), ("B", "T", 1), ("A", "T", 1)]);
        let lca = lowest_common_ancestor(&graph, id(&graph, "A"), id(&graph, "B"));
        assert_eq!(lca, Some(id(&graph, "A")));
    }

    #[test]
    fn test_lca_missing_for_disjoint_branches() {
        let graph = graph_of(&[("X", "T", 1), ("Y", "T", 1)]);
        assert_eq!(lowest_common_ancestor(&graph, id(&graph, "X"), id(&graph, "Y")), None);
    }

    #[test]
    fn test_lca_gives_up_on_cycle() {
        // X and Y reach each other, so neither is deeper than the other
        let graph = graph_of(&[("X", "Y", 1), ("Y", "X", 1), ("X", "T", 1), ("Y", "T", 1)]);
        assert_eq!(lowest_common_ancestor(&graph, id(&graph, "X"), id(&graph, "Y")), None);
    }

    #[test]
    fn test_simple_paths_enumerates_all() {
        let graph = graph_of(&[
            ("S", "A", 1),
            ("A", "T", 1),
            ("S", "B", 1),
            ("B", "C", 1),
            ("C", "T", 1),
        ]);
        let paths = simple_paths(&graph, id(&graph, "S"), id(&graph, "T"), PathLimits::unbounded());
        let mut rendered: Vec<String> = paths.iter().map(|p| graph.path_labels(p).join("-")).collect();
        rendered.sort();
        assert_eq!(rendered, vec!["S-A-T", "S-B-C-T"]);
    }

    #[test]
    fn test_simple_paths_respects_limits() {
        let graph = graph_of(&[
            ("S", "A", 1),
            ("A", "T", 1),
            ("S", "B", 1),
            ("B", "C", 1),
            ("C", "T", 1),
        ]);
        let (s, t) = (id(&graph, "S"), id(&graph, "T"));

        let short_only = PathLimits { max_paths: None, max_path_nodes: Some(3) };
        let paths = simple_paths(&graph, s, t, short_only);
        assert_eq!(paths.len(), 1);
        assert_eq!(graph.path_labels(&paths[0]), vec!["S", "A", "T"]);

        let one = PathLimits { max_paths: Some(1), max_path_nodes: None };
        assert_eq!(simple_paths(&graph, s, t, one).len(), 1);
    }

    #[test]
    fn test_simple_paths_on_cycle_and_self() {
        let graph = graph_of(&[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
        let (a, c) = (id(&graph, "A"), id(&graph, "C"));
        let paths = simple_paths(&graph, a, c, PathLimits::unbounded());
        assert_eq!(paths.len(), 1);
        assert_eq!(graph.path_labels(&paths[0]), vec!["A", "B", "C"]);
        assert!(simple_paths(&graph, a, a, PathLimits::unbounded()).is_empty());
    }
}
