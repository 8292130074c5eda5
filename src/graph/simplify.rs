use tracing::info;
use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::graph::bubble::simplify_bubbles;
use crate::graph::debruijn::{find_end_nodes, find_start_nodes, DeBruijnGraph};
use crate::graph::select::TieBreaker;
use crate::graph::tips::{solve_entry_tips, solve_out_tips};

/// Nodes removed by each simplification stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplifyReport {
    pub bubble_nodes: usize,
    pub entry_tip_nodes: usize,
    pub exit_tip_nodes: usize,
}

impl SimplifyReport {
    pub fn total(&self) -> usize {
        self.bubble_nodes + self.entry_tip_nodes + self.exit_tip_nodes
    }
}

/// Bubbles first, then entry tips, then exit tips; each stage sees the
/// graph left by the previous one.
pub fn simplify_graph(
    graph: &mut DeBruijnGraph,
    config: &AssemblyConfig,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<SimplifyReport> {
    let limits = config.path_limits();

    let bubble_nodes = simplify_bubbles(graph, limits, tie_breaker)?;

    let starts = find_start_nodes(graph);
    let entry_tip_nodes = solve_entry_tips(graph, &starts, config.tip_pooling, limits, tie_breaker)?;

    let ends = find_end_nodes(graph);
    let exit_tip_nodes = solve_out_tips(graph, &ends, config.tip_pooling, limits, tie_breaker)?;

    let report = SimplifyReport { bubble_nodes, entry_tip_nodes, exit_tip_nodes };
    info!(
        "Simplified graph: {} nodes removed, {} nodes and {} edges remain",
        report.total(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(report)
}
