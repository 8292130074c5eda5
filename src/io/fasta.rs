// src/io/fasta.rs
use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::graph::contig::Contig;

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

/// Split a sequence into lines of at most `width` characters
pub fn wrap(sequence: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut lines = Vec::with_capacity(sequence.len() / width + 1);
    let mut rest = sequence;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (line, tail) = rest.split_at(cut);
        lines.push(line);
        rest = tail;
    }
    lines
}

impl FastaWriter {
    /// Create the output file; a `.gz` path is gzip-compressed
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        if path.extension().is_some_and(|ext| ext == "gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            FastaWriter::Plain(writer) => writer,
            FastaWriter::Compressed(writer) => writer,
        }
    }

    /// Write `>contig_<index> len=<length>` followed by the wrapped sequence
    pub fn write_contig(&mut self, contig: &Contig, index: usize, width: usize) -> Result<()> {
        let writer = self.writer();
        writeln!(writer, ">contig_{} len={}", index, contig.length)?;
        for line in wrap(&contig.sequence, width) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Flush buffered output and, for compressed output, write the gzip trailer
    pub fn finish(self) -> Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

/// Write contigs in order, numbering them from zero
pub fn save_contigs<P: AsRef<Path>>(contigs: &[Contig], path: P, width: usize) -> Result<()> {
    let mut writer = FastaWriter::new(path)?;
    for (i, contig) in contigs.iter().enumerate() {
        writer.write_contig(contig, i, width)?;
    }
    writer.finish()
}
