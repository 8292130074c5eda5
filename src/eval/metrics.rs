use crate::graph::contig::Contig;

#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyStats {
    pub total: usize,
    pub total_length: usize,
    pub longest: usize,
    pub avg_length: f64,
    pub n50: usize,
}

pub fn evaluate(contigs: &[Contig]) -> AssemblyStats {
    let mut lengths: Vec<usize> = contigs.iter().map(|c| c.length).collect();
    lengths.sort_unstable();
    let total_len: usize = lengths.iter().sum();
    let avg = if lengths.is_empty() { 0.0 } else { total_len as f64 / lengths.len() as f64 };

    // Smallest length among the longest contigs covering half the total
    let mut acc = 0;
    let n50 = lengths.iter().rev().find(|&&l| {
        acc += l;
        acc * 2 >= total_len
    }).copied().unwrap_or(0);

    AssemblyStats {
        total: lengths.len(),
        total_length: total_len,
        longest: lengths.last().copied().unwrap_or(0),
        avg_length: avg,
        n50,
    }
}
