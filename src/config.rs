use crate::error::{AssemblyError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// How tip candidates are grouped before best-path selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TipPooling {
    /// One selection per junction, over every tip path that meets there
    #[default]
    Junction,
    /// One selection per tip node, pooling the paths to all of its junctions
    PerNode,
}

/// Bounds on exhaustive simple-path enumeration.
///
/// `None` leaves the corresponding dimension unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathLimits {
    /// Stop after this many paths per (start, end) pair
    pub max_paths: Option<usize>,
    /// Longest path considered, counted in nodes
    pub max_path_nodes: Option<usize>,
}

impl PathLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssemblyConfig {
    pub kmer_size: usize,
    /// Seed of the tie-break generator used by best-path selection
    pub seed: u64,
    pub max_paths: Option<usize>,
    pub max_path_nodes: Option<usize>,
    /// FASTA line width
    pub line_width: usize,
    pub tip_pooling: TipPooling,
    /// Contigs shorter than this are dropped before writing
    pub min_contig_len: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            kmer_size: 21,
            seed: 9001,
            max_paths: None,
            max_path_nodes: None,
            line_width: 80,
            tip_pooling: TipPooling::Junction,
            min_contig_len: 0,
        }
    }
}

impl AssemblyConfig {
    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: AssemblyConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.kmer_size < 2 {
            return Err(AssemblyError::InvalidKmerSize(self.kmer_size));
        }
        if self.line_width == 0 {
            return Err(AssemblyError::InvalidConfig("line_width must be positive".into()));
        }
        if self.max_paths == Some(0) {
            return Err(AssemblyError::InvalidConfig("max_paths must be positive".into()));
        }
        if matches!(self.max_path_nodes, Some(n) if n < 2) {
            return Err(AssemblyError::InvalidConfig(
                "max_path_nodes must allow at least one edge".into(),
            ));
        }
        Ok(())
    }

    pub fn path_limits(&self) -> PathLimits {
        PathLimits {
            max_paths: self.max_paths,
            max_path_nodes: self.max_path_nodes,
        }
    }
}
