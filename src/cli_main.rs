use clap::Parser;
use debruijn::{AssemblyConfig, TipPooling};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "debruijn", version, about = "Assemble reads into contigs with a de Bruijn graph", long_about = None)]
pub struct Cli {
    /// Input FASTQ(.gz) file
    #[arg(short, long)]
    pub input: PathBuf,

    /// K-mer size
    #[arg(short, long)]
    pub kmer_size: Option<usize>,

    /// Output FASTA(.gz) file
    #[arg(short, long, default_value = "contigs.fasta")]
    pub output: PathBuf,

    /// Seed for breaking ties between equally good paths
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of paths enumerated between two nodes
    #[arg(long)]
    pub max_paths: Option<usize>,

    /// Maximum path length, in nodes, considered during enumeration
    #[arg(long)]
    pub max_path_nodes: Option<usize>,

    /// FASTA line width
    #[arg(long)]
    pub line_width: Option<usize>,

    /// Drop contigs shorter than this
    #[arg(long)]
    pub min_contig_len: Option<usize>,

    /// How competing tips are grouped before selection
    #[arg(long, value_enum)]
    pub tip_pooling: Option<TipPooling>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Optional path to write contig metadata as JSON
    #[arg(long)]
    pub json_metadata: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer command-line overrides over the file (or default) configuration
    pub fn resolve_config(&self) -> debruijn::Result<AssemblyConfig> {
        let mut config = match &self.config {
            Some(path) => AssemblyConfig::from_json_file(path)?,
            None => AssemblyConfig::default(),
        };

        if let Some(k) = self.kmer_size {
            config.kmer_size = k;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(max) = self.max_paths {
            config.max_paths = Some(max);
        }
        if let Some(max) = self.max_path_nodes {
            config.max_path_nodes = Some(max);
        }
        if let Some(width) = self.line_width {
            config.line_width = width;
        }
        if let Some(len) = self.min_contig_len {
            config.min_contig_len = len;
        }
        if let Some(pooling) = self.tip_pooling {
            config.tip_pooling = pooling;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["debruijn", "-i", "reads.fq"]);
        assert_eq!(cli.output, PathBuf::from("contigs.fasta"));
        let config = cli.resolve_config().unwrap();
        assert_eq!(config, AssemblyConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "debruijn", "-i", "reads.fq", "-k", "15", "--seed", "7", "--max-paths", "100",
            "--tip-pooling", "per-node", "--line-width", "60",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.kmer_size, 15);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_paths, Some(100));
        assert_eq!(config.tip_pooling, TipPooling::PerNode);
        assert_eq!(config.line_width, 60);
    }

    #[test]
    fn test_invalid_kmer_size() {
        let cli = Cli::parse_from(["debruijn", "-i", "reads.fq", "-k", "1"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["debruijn"]).is_err());
    }
}
