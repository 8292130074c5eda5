use ahash::AHashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use crate::error::{AssemblyError, Result};
use crate::graph::debruijn::{DeBruijnGraph, NodeId};

/// Source of the final tie-break between equally heavy, equally long paths
pub trait TieBreaker {
    /// Pick an index in `0..candidates`; `candidates` is at least 2.
    /// Out-of-range picks are clamped to the last candidate.
    fn pick(&mut self, candidates: usize) -> usize;
}

/// Reproducible tie-break driven by a seeded `StdRng`
#[derive(Debug, Clone)]
pub struct SeededTieBreaker {
    rng: StdRng,
}

impl SeededTieBreaker {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl TieBreaker for SeededTieBreaker {
    fn pick(&mut self, candidates: usize) -> usize {
        self.rng.gen_range(0..candidates)
    }
}

/// Always picks the same position (clamped to the candidate count)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTieBreaker(pub usize);

impl TieBreaker for FixedTieBreaker {
    fn pick(&mut self, candidates: usize) -> usize {
        self.0.min(candidates.saturating_sub(1))
    }
}

/// Rank candidates by mean weight, then length, then the tie-breaker.
///
/// Returns the index of the winning path, or `None` for an empty candidate list.
pub fn rank_paths(lengths: &[usize], weights: &[f64], tie_breaker: &mut dyn TieBreaker) -> Option<usize> {
    let max_weight = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let heaviest: Vec<usize> = (0..weights.len()).filter(|&i| weights[i] == max_weight).collect();

    let max_len = heaviest.iter().map(|&i| lengths[i]).max()?;
    let longest: Vec<usize> = heaviest.into_iter().filter(|&i| lengths[i] == max_len).collect();

    match longest.len() {
        1 => Some(longest[0]),
        n => Some(longest[tie_breaker.pick(n).min(n - 1)]),
    }
}

/// Keep the best candidate path and remove the others from the graph.
///
/// Rejected paths always lose their interior nodes; their first node goes
/// only with `delete_entry_node` and their last only with `delete_sink_node`.
/// Nodes of the retained path are never removed. Returns the index of the
/// retained path.
pub fn select_best_path(
    graph: &mut DeBruijnGraph,
    paths: &[Vec<NodeId>],
    lengths: &[usize],
    weights: &[f64],
    delete_entry_node: bool,
    delete_sink_node: bool,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<Option<usize>> {
    if paths.len() != lengths.len() || paths.len() != weights.len() {
        return Err(AssemblyError::CandidateMismatch {
            paths: paths.len(),
            lengths: lengths.len(),
            weights: weights.len(),
        });
    }

    let best = match rank_paths(lengths, weights, tie_breaker) {
        Some(best) => best,
        None => return Ok(None),
    };

    let retained: AHashSet<NodeId> = paths[best].iter().copied().collect();
    let mut scheduled = AHashSet::new();
    let mut doomed = Vec::new();

    for (i, path) in paths.iter().enumerate() {
        if i == best {
            continue;
        }
        let last = path.len().saturating_sub(1);
        for (pos, &node) in path.iter().enumerate() {
            if (pos == 0 && !delete_entry_node) || (pos == last && !delete_sink_node) {
                continue;
            }
            if retained.contains(&node) || !scheduled.insert(node) {
                continue;
            }
            doomed.push(node);
        }
    }

    let removed = doomed.into_iter().filter(|&node| graph.remove_node(node)).count();
    debug!(
        "Kept path {} of {} ({} nodes, mean weight {:.2}), removed {} nodes",
        best,
        paths.len(),
        lengths[best],
        weights[best],
        removed
    );

    Ok(Some(best))
}
