//! De Bruijn graph construction, simplification and contig extraction

pub mod debruijn;
pub mod metrics;
pub mod paths;
pub mod select;
pub mod bubble;
pub mod tips;
pub mod simplify;
pub mod contig;
