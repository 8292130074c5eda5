// src/io/fastq.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use flate2::read::MultiGzDecoder;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub header: String,
    pub sequence: String,
    pub plus: String,
    pub quality: String,
}

/// Open a FASTQ file for reading, handles gzipped files automatically
pub fn open_fastq<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Stream FASTQ records without loading the whole file.
///
/// A trailing partial record is dropped; read errors are passed through.
pub fn stream_fastq_records<R: BufRead>(reader: R) -> FastqStreamParser<io::Lines<R>> {
    FastqStreamParser { lines: reader.lines() }
}

/// Stream only the read sequences, the second line of each record
pub fn stream_sequences<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    stream_fastq_records(reader).map(|record| record.map(|r| r.sequence))
}

/// Iterator adaptor to handle streaming FASTQ parsing
pub struct FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines: I,
}

impl<I> FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self) -> Option<io::Result<String>> {
        self.lines.next()
    }
}

impl<I> Iterator for FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut fields: [String; 4] = Default::default();
        for field in fields.iter_mut() {
            match self.next_line()? {
                Ok(line) => *field = line,
                Err(e) => return Some(Err(e)),
            }
        }
        let [header, sequence, plus, quality] = fields;

        Some(Ok(FastqRecord {
            header,
            sequence: sequence.trim_end().to_string(),
            plus,
            quality,
        }))
    }
}
