//! De Bruijn graph assembly of short reads into contigs.
//!
//! Reads are cut into k-mers, the k-mer counts become a weighted graph over
//! (k-1)-mers, bubbles and tips are pruned by best-path selection, and the
//! remaining source-to-sink paths are spelled out as contigs.

pub mod config;
pub mod error;
pub mod eval;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;

pub use config::{AssemblyConfig, PathLimits, TipPooling};
pub use error::{AssemblyError, Result};
pub use graph::contig::Contig;
pub use graph::debruijn::{build_graph, DeBruijnGraph, NodeId};
