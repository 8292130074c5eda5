use crate::graph::contig::Contig;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Represents metadata for a contig
#[derive(Serialize, Debug)]
pub struct ContigMetadata {
    pub id: String,
    pub length: usize,
    pub gc_content: f64,
}

/// Generate metadata for a list of contigs, named as in the FASTA output
pub fn generate_metadata(contigs: &[Contig]) -> Vec<ContigMetadata> {
    contigs.iter().enumerate().map(|(i, c)| {
        let gc_count = c.sequence.bytes()
            .filter(|&b| matches!(b, b'G' | b'C' | b'g' | b'c'))
            .count();

        ContigMetadata {
            id: format!("contig_{}", i),
            length: c.length,
            gc_content: if c.length > 0 { gc_count as f64 / c.length as f64 } else { 0.0 },
        }
    }).collect()
}

/// Write contig metadata to a JSON file
pub fn write_metadata<P: AsRef<Path>>(contigs: &[Contig], output: P) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer_pretty(&mut writer, &generate_metadata(contigs))?;
    writer.flush()
}
