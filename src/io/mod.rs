//! Read input and contig output formats

pub mod fastq;
pub mod fasta;
pub mod metadata;
