//! K-mer extraction and counting

pub mod kmer;
