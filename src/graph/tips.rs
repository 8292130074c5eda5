use ahash::AHashSet;
use tracing::{debug, info};
use crate::config::{PathLimits, TipPooling};
use crate::error::Result;
use crate::graph::debruijn::{DeBruijnGraph, NodeId};
use crate::graph::metrics::path_metrics;
use crate::graph::paths::{ancestors, descendants, simple_paths};
use crate::graph::select::{select_best_path, TieBreaker};

/// Which end of the graph a tip dangles from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TipSide {
    Entry,
    Exit,
}

impl TipSide {
    /// A backbone node joins two or more branches on this side
    fn is_backbone(self, graph: &DeBruijnGraph, node: NodeId) -> bool {
        match self {
            TipSide::Entry => graph.in_degree(node) >= 2,
            TipSide::Exit => graph.out_degree(node) >= 2,
        }
    }

    fn delete_flags(self) -> (bool, bool) {
        match self {
            TipSide::Entry => (true, false),
            TipSide::Exit => (false, true),
        }
    }

    /// The backbone node a candidate path joins
    fn junction(self, path: &[NodeId]) -> Option<NodeId> {
        match self {
            TipSide::Entry => path.last().copied(),
            TipSide::Exit => path.first().copied(),
        }
    }
}

/// Candidate paths between a tip node and its backbone nodes.
///
/// A path ends at the first backbone node it meets: paths that would run
/// through another backbone node on the way are dropped.
fn tip_paths(graph: &DeBruijnGraph, tip: NodeId, side: TipSide, limits: PathLimits) -> Vec<Vec<NodeId>> {
    if !graph.contains(tip) {
        return Vec::new();
    }

    let targets = match side {
        TipSide::Entry => descendants(graph, tip),
        TipSide::Exit => ancestors(graph, tip),
    };

    let mut candidates = Vec::new();
    for target in targets.into_iter().filter(|&t| side.is_backbone(graph, t)) {
        let paths = match side {
            TipSide::Entry => simple_paths(graph, tip, target, limits),
            TipSide::Exit => simple_paths(graph, target, tip, limits),
        };
        candidates.extend(paths.into_iter().filter(|path| {
            let interior = &path[1..path.len() - 1];
            !interior.iter().any(|&n| side.is_backbone(graph, n))
        }));
    }
    candidates
}

/// Candidate paths of all live tips, grouped by junction in order of first appearance
fn junction_groups(
    graph: &DeBruijnGraph,
    tips: &[NodeId],
    side: TipSide,
    limits: PathLimits,
) -> Vec<(NodeId, Vec<Vec<NodeId>>)> {
    let mut groups: Vec<(NodeId, Vec<Vec<NodeId>>)> = Vec::new();
    for &tip in tips {
        for path in tip_paths(graph, tip, side, limits) {
            let Some(junction) = side.junction(&path) else { continue };
            match groups.iter_mut().find(|(j, _)| *j == junction) {
                Some((_, paths)) => paths.push(path),
                None => groups.push((junction, vec![path])),
            }
        }
    }
    groups
}

fn select_tip_paths(
    graph: &mut DeBruijnGraph,
    paths: &[Vec<NodeId>],
    side: TipSide,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<()> {
    let (delete_entry, delete_sink) = side.delete_flags();
    let (lengths, weights) = path_metrics(graph, paths)?;
    select_best_path(graph, paths, &lengths, &weights, delete_entry, delete_sink, tie_breaker)?;
    Ok(())
}

/// One selection per junction, over the tip paths that meet there.
///
/// Candidates are re-gathered after every selection: once a junction has
/// lost its competing branches it is no longer a backbone node, so paths
/// that ran through it can reach the next junction downstream.
fn solve_tips_by_junction(
    graph: &mut DeBruijnGraph,
    tips: &[NodeId],
    side: TipSide,
    limits: PathLimits,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<()> {
    let mut resolved = AHashSet::new();
    loop {
        let next = junction_groups(graph, tips, side, limits)
            .into_iter()
            .find(|(junction, paths)| paths.len() >= 2 && !resolved.contains(junction));
        let Some((junction, paths)) = next else { break };

        debug!("{:?} junction {}: {} candidate paths", side, graph.label(junction), paths.len());
        select_tip_paths(graph, &paths, side, tie_breaker)?;
        resolved.insert(junction);
    }
    Ok(())
}

/// One selection per tip node, over the paths to all of its junctions
fn solve_tips_per_node(
    graph: &mut DeBruijnGraph,
    tips: &[NodeId],
    side: TipSide,
    limits: PathLimits,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<()> {
    for &tip in tips {
        // Gathered against the current graph, after earlier tips were pruned
        let paths = tip_paths(graph, tip, side, limits);
        if paths.is_empty() {
            continue;
        }
        debug!("{:?} tip {}: {} candidate paths", side, graph.label(tip), paths.len());
        select_tip_paths(graph, &paths, side, tie_breaker)?;
    }
    Ok(())
}

fn solve_tips(
    graph: &mut DeBruijnGraph,
    tips: &[NodeId],
    side: TipSide,
    pooling: TipPooling,
    limits: PathLimits,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<usize> {
    let before = graph.node_count();
    match pooling {
        TipPooling::Junction => solve_tips_by_junction(graph, tips, side, limits, tie_breaker)?,
        TipPooling::PerNode => solve_tips_per_node(graph, tips, side, limits, tie_breaker)?,
    }
    Ok(before - graph.node_count())
}

/// Clip dangling entry branches: tips are compared on the paths into their
/// convergence descendants and the losing branches are removed together
/// with their entry node. Convergence nodes are never removed.
pub fn solve_entry_tips(
    graph: &mut DeBruijnGraph,
    entry_nodes: &[NodeId],
    pooling: TipPooling,
    limits: PathLimits,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<usize> {
    let removed = solve_tips(graph, entry_nodes, TipSide::Entry, pooling, limits, tie_breaker)?;
    info!("Entry tips: {} candidates, removed {} nodes", entry_nodes.len(), removed);
    Ok(removed)
}

/// Clip dangling exit branches, the mirror of [`solve_entry_tips`]
pub fn solve_out_tips(
    graph: &mut DeBruijnGraph,
    sink_nodes: &[NodeId],
    pooling: TipPooling,
    limits: PathLimits,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<usize> {
    let removed = solve_tips(graph, sink_nodes, TipSide::Exit, pooling, limits, tie_breaker)?;
    info!("Exit tips: {} candidates, removed {} nodes", sink_nodes.len(), removed);
    Ok(removed)
}
