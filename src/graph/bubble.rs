use tracing::{debug, info};
use crate::config::PathLimits;
use crate::error::Result;
use crate::graph::debruijn::{DeBruijnGraph, NodeId};
use crate::graph::metrics::path_metrics;
use crate::graph::paths::{lowest_common_ancestor, simple_paths};
use crate::graph::select::{select_best_path, TieBreaker};

/// Alternative paths diverging at `ancestor` and reconverging at `convergence`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bubble {
    pub ancestor: NodeId,
    pub convergence: NodeId,
}

/// Detect bubbles: every node with two or more predecessors, paired with the
/// lowest common ancestor of its first two predecessors. Nodes whose
/// predecessors share no resolvable ancestor are skipped.
pub fn find_bubbles(graph: &DeBruijnGraph) -> Vec<Bubble> {
    let mut bubbles = Vec::new();

    for node in graph.nodes() {
        let preds: Vec<NodeId> = graph.predecessors(node).collect();
        if preds.len() < 2 {
            continue;
        }
        match lowest_common_ancestor(graph, preds[0], preds[1]) {
            Some(ancestor) if ancestor != node => bubbles.push(Bubble { ancestor, convergence: node }),
            _ => debug!("No common ancestor for predecessors of {}, skipping", graph.label(node)),
        }
    }

    bubbles
}

/// Collapse one bubble to its best path, keeping both boundary nodes.
///
/// Returns the number of nodes removed.
pub fn solve_bubble(
    graph: &mut DeBruijnGraph,
    bubble: Bubble,
    limits: PathLimits,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<usize> {
    if !graph.contains(bubble.ancestor) || !graph.contains(bubble.convergence) {
        return Ok(0);
    }

    let paths = simple_paths(graph, bubble.ancestor, bubble.convergence, limits);
    if paths.len() < 2 {
        return Ok(0);
    }

    let (lengths, weights) = path_metrics(graph, &paths)?;
    let before = graph.node_count();
    select_best_path(graph, &paths, &lengths, &weights, false, false, tie_breaker)?;
    Ok(before - graph.node_count())
}

/// Detect all bubbles once, then resolve them in detection order.
///
/// A bubble whose boundary was removed by an earlier one is skipped; no
/// further passes are made. Returns the number of nodes removed.
pub fn simplify_bubbles(
    graph: &mut DeBruijnGraph,
    limits: PathLimits,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<usize> {
    let bubbles = find_bubbles(graph);
    let mut removed = 0;

    for bubble in &bubbles {
        removed += solve_bubble(graph, *bubble, limits, tie_breaker)?;
    }

    info!("Resolved {} bubbles, removed {} nodes", bubbles.len(), removed);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::select::FixedTieBreaker;

    fn graph_of(edges: &[(&str, &str, u32)]) -> DeBruijnGraph {
        let mut graph = DeBruijnGraph::new();
        for &(a, b, w) in edges {
            graph.add_edge(a, b, w);
        }
        graph
    }

    fn heavy_light_bubble() -> DeBruijnGraph {
        // Heavy branch S-H1-H2-T (mean 5), light branch S-L1-T (mean 2)
        graph_of(&[
            ("IN", "S", 9),
            ("S", "H1", 5),
            ("H1", "H2", 5),
            ("H2", "T", 5),
            ("S", "L1", 2),
            ("L1", "T", 2),
            ("T", "OUT", 9),
        ])
    }

    #[test]
    fn test_find_bubbles() {
        let graph = heavy_light_bubble();
        let bubbles = find_bubbles(&graph);
        assert_eq!(bubbles.len(), 1);
        assert_eq!(graph.label(bubbles[0].ancestor), "S");
        assert_eq!(graph.label(bubbles[0].convergence), "T");
    }

    #[test]
    fn test_heavier_branch_survives() {
        let mut graph = heavy_light_bubble();
        let removed = simplify_bubbles(&mut graph, PathLimits::unbounded(), &mut FixedTieBreaker(0)).unwrap();

        assert_eq!(removed, 1);
        assert!(!graph.contains_label("L1"));
        for label in ["IN", "S", "H1", "H2", "T", "OUT"] {
            assert!(graph.contains_label(label), "{} should remain", label);
        }
    }

    #[test]
    fn test_weight_beats_length() {
        // The longer branch is lighter and must lose
        let mut graph = graph_of(&[
            ("S", "A", 5),
            ("A", "T", 5),
            ("S", "B1", 2),
            ("B1", "B2", 2),
            ("B2", "B3", 2),
            ("B3", "T", 2),
        ]);
        simplify_bubbles(&mut graph, PathLimits::unbounded(), &mut FixedTieBreaker(0)).unwrap();

        assert!(graph.contains_label("A"));
        for label in ["B1", "B2", "B3"] {
            assert!(!graph.contains_label(label));
        }
        assert!(graph.contains_label("S"));
        assert!(graph.contains_label("T"));
    }

    #[test]
    fn test_equal_weight_prefers_longer() {
        let mut graph = graph_of(&[
            ("S", "A", 3),
            ("A", "T", 3),
            ("S", "B1", 3),
            ("B1", "B2", 3),
            ("B2", "T", 3),
        ]);
        simplify_bubbles(&mut graph, PathLimits::unbounded(), &mut FixedTieBreaker(0)).unwrap();
        assert!(!graph.contains_label("A"));
        assert!(graph.contains_label("B1"));
        assert!(graph.contains_label("B2"));
    }

    #[test]
    fn test_no_common_ancestor_is_skipped() {
        let mut graph = graph_of(&[("X", "T", 1), ("Y", "T", 4)]);
        assert!(find_bubbles(&graph).is_empty());
        let removed = simplify_bubbles(&mut graph, PathLimits::unbounded(), &mut FixedTieBreaker(0)).unwrap();
        assert_eq!(removed, 0);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = graph_of(&[("A", "B", 1), ("B", "C", 1), ("C", "A", 1), ("D", "A", 1)]);
        simplify_bubbles(&mut graph, PathLimits::unbounded(), &mut FixedTieBreaker(0)).unwrap();
        assert!(graph.contains_label("A"));
    }

    #[test]
    fn test_removed_boundary_skips_bubble() {
        let mut graph = heavy_light_bubble();
        let bubble = find_bubbles(&graph)[0];
        graph.remove_node(bubble.ancestor);
        let removed = solve_bubble(&mut graph, bubble, PathLimits::unbounded(), &mut FixedTieBreaker(0)).unwrap();
        assert_eq!(removed, 0);
        assert!(graph.contains_label("L1"));
    }
}
