use crate::error::{AssemblyError, Result};
use crate::graph::debruijn::{DeBruijnGraph, NodeId};

/// Number of nodes in a path
pub fn path_length(path: &[NodeId]) -> usize {
    path.len()
}

/// Arithmetic mean of the weights of a path's consecutive edges.
///
/// A path needs at least two nodes to have an edge; shorter paths are a
/// caller error.
pub fn mean_weight(graph: &DeBruijnGraph, path: &[NodeId]) -> Result<f64> {
    if path.len() < 2 {
        return Err(AssemblyError::DegeneratePath { nodes: path.len() });
    }

    let mut total = 0u64;
    for pair in path.windows(2) {
        let weight = graph.edge_weight(pair[0], pair[1]).ok_or_else(|| AssemblyError::MissingEdge {
            from: graph.label(pair[0]).to_string(),
            to: graph.label(pair[1]).to_string(),
        })?;
        total += u64::from(weight);
    }

    Ok(total as f64 / (path.len() - 1) as f64)
}

/// Lengths and mean weights of a candidate set, in input order
pub fn path_metrics(graph: &DeBruijnGraph, paths: &[Vec<NodeId>]) -> Result<(Vec<usize>, Vec<f64>)> {
    let lengths: Vec<usize> = paths.iter().map(|p| path_length(p)).collect();
    let weights = paths
        .iter()
        .map(|p| mean_weight(graph, p))
        .collect::<Result<Vec<_>>>()?;
    Ok((lengths, weights))
}
