use ahash::AHashMap;

pub type Kmer = String;

/// Occurrence count of every distinct k-mer in the read set
pub type KmerTable = AHashMap<Kmer, u32>;

/// Yields every length-`k` window of `seq`, left to right.
///
/// A sequence shorter than `k` yields nothing. Windows that would split a
/// multi-byte character are skipped.
pub fn cut_kmers(seq: &str, k: usize) -> impl Iterator<Item = &str> {
    let bytes = seq.as_bytes();
    let windows = if k == 0 || bytes.len() < k { 0 } else { bytes.len() - k + 1 };
    (0..windows).filter_map(move |i| seq.get(i..i + k))
}

/// Add the k-mers of one read to a running table
pub fn add_kmers(table: &mut KmerTable, read: &str, k: usize) {
    for kmer in cut_kmers(read, k) {
        *table.entry(kmer.to_string()).or_insert(0) += 1;
    }
}

/// Count k-mer occurrences across all reads
pub fn count_kmers<I, S>(reads: I, k: usize) -> KmerTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = KmerTable::new();
    for read in reads {
        add_kmers(&mut table, read.as_ref(), k);
    }
    table
}

/// Prefix node of a k-mer (first k-1 characters)
pub fn prefix(kmer: &str) -> &str {
    match kmer.char_indices().last() {
        Some((i, _)) => &kmer[..i],
        None => kmer,
    }
}

/// Suffix node of a k-mer (last k-1 characters)
pub fn suffix(kmer: &str) -> &str {
    match kmer.chars().next() {
        Some(c) => &kmer[c.len_utf8()..],
        None => kmer,
    }
}
