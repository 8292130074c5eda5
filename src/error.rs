use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssemblyError>;

#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Mean weight is undefined for a path without edges
    #[error("Mean weight requested for a path of {nodes} node(s); at least 2 are required")]
    DegeneratePath { nodes: usize },

    #[error("No edge between {from} and {to}")]
    MissingEdge { from: String, to: String },

    #[error("Candidate lists disagree: {paths} paths, {lengths} lengths, {weights} weights")]
    CandidateMismatch {
        paths: usize,
        lengths: usize,
        weights: usize,
    },

    #[error("K-mer size must be at least 2, got {0}")]
    InvalidKmerSize(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
