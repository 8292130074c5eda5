use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};
use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::eval::metrics::{evaluate, AssemblyStats};
use crate::graph::contig::{extract_contigs, Contig};
use crate::graph::debruijn::build_graph;
use crate::graph::select::{SeededTieBreaker, TieBreaker};
use crate::graph::simplify::simplify_graph;
use crate::io::fasta::save_contigs;
use crate::io::fastq::{open_fastq, stream_sequences};
use crate::io::metadata::write_metadata;
use crate::kmer::kmer::{add_kmers, count_kmers, KmerTable};

/// Graph, simplification and contig extraction over an existing k-mer table
pub fn assemble_table(
    table: &KmerTable,
    config: &AssemblyConfig,
    tie_breaker: &mut dyn TieBreaker,
) -> Result<Vec<Contig>> {
    config.validate()?;

    let mut graph = build_graph(table);
    info!("Built graph with {} nodes and {} edges", graph.node_count(), graph.edge_count());

    simplify_graph(&mut graph, config, tie_breaker)?;

    let mut contigs = extract_contigs(&graph);
    if config.min_contig_len > 0 {
        let before = contigs.len();
        contigs.retain(|c| c.length >= config.min_contig_len);
        for (i, contig) in contigs.iter_mut().enumerate() {
            contig.id = i;
        }
        info!("Filtered {} contigs shorter than {}", before - contigs.len(), config.min_contig_len);
    }
    Ok(contigs)
}

/// Assemble in-memory reads with the configured seed
pub fn assemble_reads<I, S>(reads: I, config: &AssemblyConfig) -> Result<Vec<Contig>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    config.validate()?;
    let table = count_kmers(reads, config.kmer_size);
    info!("Counted {} distinct {}-mers", table.len(), config.kmer_size);
    assemble_table(&table, config, &mut SeededTieBreaker::new(config.seed))
}

/// Full run: FASTQ in, FASTA (and optional JSON metadata) out
pub fn assemble_file(
    input_path: &Path,
    output_path: &Path,
    json_metadata: Option<&Path>,
    config: &AssemblyConfig,
) -> Result<AssemblyStats> {
    config.validate()?;
    let start = Instant::now();
    info!("Starting assembly from: {}", input_path.display());

    let reader = open_fastq(input_path)?;
    let mut table = KmerTable::new();
    let mut read_count = 0usize;
    stream_sequences(reader).try_for_each(|sequence| -> std::io::Result<()> {
        add_kmers(&mut table, &sequence?, config.kmer_size);
        read_count += 1;
        Ok(())
    })?;
    info!("Loaded {} sequences, {} distinct {}-mers", read_count, table.len(), config.kmer_size);
    if read_count == 0 {
        warn!("No reads found in {}", input_path.display());
    }

    let contigs = assemble_table(&table, config, &mut SeededTieBreaker::new(config.seed))?;

    save_contigs(&contigs, output_path, config.line_width)?;
    info!("{} contigs written to {}", contigs.len(), output_path.display());

    if let Some(path) = json_metadata {
        write_metadata(&contigs, path)?;
        info!("Metadata written to {}", path.display());
    }

    let stats = evaluate(&contigs);
    info!(
        "Assembly complete in {:.2}s: {} contigs, total {} bp, longest {} bp, N50 {} bp",
        start.elapsed().as_secs_f32(),
        stats.total,
        stats.total_length,
        stats.longest,
        stats.n50
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::select::FixedTieBreaker;

    #[test]
    fn test_linear_read_reassembles() {
        let config = AssemblyConfig { kmer_size: 3, ..Default::default() };
        let contigs = assemble_reads(["AACCGG"], &config).unwrap();
        assert_eq!(contigs.len(), 1);
        assert_eq!(contigs[0].sequence, "AACCGG");
        assert_eq!(contigs[0].length, 6);
    }

    #[test]
    fn test_cyclic_read_gives_no_contigs() {
        let config = AssemblyConfig { kmer_size: 4, ..Default::default() };
        assert!(assemble_reads(["ACGTACGT"], &config).unwrap().is_empty());
    }

    #[test]
    fn test_empty_input() {
        let config = AssemblyConfig::default();
        let contigs = assemble_reads(Vec::<String>::new(), &config).unwrap();
        assert!(contigs.is_empty());
    }

    #[test]
    fn test_invalid_kmer_size_rejected() {
        let config = AssemblyConfig { kmer_size: 1, ..Default::default() };
        assert!(assemble_reads(["ACGT"], &config).is_err());
    }

    #[test]
    fn test_path_node_bound_does_not_truncate_contigs() {
        // 17 nodes in the only source-to-sink path, well over the enumeration bound
        let read = "GATTACAGGCTTCAAGTCCA";
        let config = AssemblyConfig { kmer_size: 5, max_path_nodes: Some(10), ..Default::default() };
        let contigs = assemble_reads([read], &config).unwrap();
        assert_eq!(contigs.len(), 1);
        assert_eq!(contigs[0].sequence, read);
        assert_eq!(contigs[0].length, 20);
    }

    #[test]
    fn test_min_contig_len_filters_and_renumbers() {
        let table = count_kmers(["AACC", "GGTTAC"], 4);
        let config = AssemblyConfig { kmer_size: 4, min_contig_len: 5, ..Default::default() };

        let contigs = assemble_table(&table, &config, &mut FixedTieBreaker(0)).unwrap();
        assert_eq!(contigs.len(), 1);
        assert_eq!(contigs[0].sequence, "GGTTAC");
        assert_eq!(contigs[0].id, 0);
    }
}
