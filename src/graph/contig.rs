use serde::Serialize;
use tracing::info;
use crate::config::PathLimits;
use crate::graph::debruijn::{find_end_nodes, find_start_nodes, DeBruijnGraph};
use crate::graph::paths::simple_paths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contig {
    pub id: usize,
    pub sequence: String,
    pub length: usize,
}

impl Contig {
    pub fn new(id: usize, sequence: String) -> Self {
        let length = sequence.len();
        Self { id, sequence, length }
    }
}

/// Spell out a path of overlapping nodes: the first node in full, then the
/// last character of every following node.
pub fn path_to_sequence<S: AsRef<str>>(nodes: &[S]) -> String {
    let mut iter = nodes.iter();
    let mut sequence = match iter.next() {
        Some(first) => first.as_ref().to_string(),
        None => return String::new(),
    };
    for node in iter {
        if let Some(last) = node.as_ref().chars().last() {
            sequence.push(last);
        }
    }
    sequence
}

/// One contig per (source, sink) pair joined by a path.
///
/// Only the first path found between a pair is spelled out, whatever its
/// length: the enumeration bounds used while simplifying do not apply here.
/// A graph with no source or no sink (a pure cycle) yields no contigs.
pub fn extract_contigs(graph: &DeBruijnGraph) -> Vec<Contig> {
    let starts = find_start_nodes(graph);
    let ends = find_end_nodes(graph);
    let first_only = PathLimits { max_paths: Some(1), max_path_nodes: None };

    let mut contigs = Vec::new();
    for &start in &starts {
        for &end in &ends {
            if let Some(path) = simple_paths(graph, start, end, first_only).into_iter().next() {
                let sequence = path_to_sequence(&graph.path_labels(&path));
                contigs.push(Contig::new(contigs.len(), sequence));
            }
        }
    }

    info!(
        "Extracted {} contigs from {} sources and {} sinks",
        contigs.len(),
        starts.len(),
        ends.len()
    );
    contigs
}
