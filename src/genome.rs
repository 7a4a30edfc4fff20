//! Chromosome reference table.
//!
//! Maps chromosome labels to their lengths and remembers the order they were
//! declared in. The first declared chromosome is where a scan starts.

use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::bed::{BedError, Result};

/// GRCh37/hg19 primary assembly lengths, autosomes then sex chromosomes.
pub const GRCH37_SIZES: [(&str, u64); 24] = [
    ("1", 249_250_621),
    ("2", 243_199_373),
    ("3", 198_022_430),
    ("4", 191_154_276),
    ("5", 180_915_260),
    ("6", 171_115_067),
    ("7", 159_138_663),
    ("8", 146_364_022),
    ("9", 141_213_431),
    ("10", 135_534_747),
    ("11", 135_006_516),
    ("12", 133_851_895),
    ("13", 115_169_878),
    ("14", 107_349_540),
    ("15", 102_531_392),
    ("16", 90_354_753),
    ("17", 81_195_210),
    ("18", 78_077_248),
    ("19", 59_128_983),
    ("20", 63_025_520),
    ("21", 48_129_895),
    ("22", 51_304_566),
    ("X", 155_270_560),
    ("Y", 59_373_566),
];

/// Chromosome sizes, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Genome {
    sizes: FxHashMap<String, u64>,
    order: Vec<String>,
}

impl Genome {
    /// Create an empty genome.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in GRCh37 table.
    pub fn grch37() -> Self {
        GRCH37_SIZES.into_iter().collect()
    }

    /// Load a genome from a `chrom<TAB>size` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a genome from any reader.
    ///
    /// Blank lines and `#` comments are skipped. A repeated chromosome keeps
    /// its first position but takes the last size. An empty table is an
    /// error, since a scan needs somewhere to start.
    pub fn from_reader<R: Read>(input: R) -> Result<Self> {
        let reader = BufReader::new(input);
        let mut genome = Self::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                return Err(BedError::Parse {
                    line: line_num + 1,
                    message: "Genome file requires two columns: chrom and size".to_string(),
                });
            }

            let size: u64 = fields[1].trim().parse().map_err(|_| BedError::Parse {
                line: line_num + 1,
                message: format!("Invalid chromosome size: {}", fields[1]),
            })?;

            genome.insert(fields[0].to_string(), size);
        }

        if genome.is_empty() {
            return Err(BedError::InvalidFormat(
                "genome file declares no chromosomes".to_string(),
            ));
        }

        Ok(genome)
    }

    /// Get the size of a chromosome.
    #[inline]
    pub fn chrom_size(&self, chrom: &str) -> Option<u64> {
        self.sizes.get(chrom).copied()
    }

    /// Check if a chromosome exists.
    #[inline]
    pub fn has_chrom(&self, chrom: &str) -> bool {
        self.sizes.contains_key(chrom)
    }

    /// First declared chromosome, if any.
    pub fn initial_chrom(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// Get all chromosome names in order.
    pub fn chromosomes(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    /// Get number of chromosomes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert a chromosome size (appends to order if new).
    pub fn insert(&mut self, chrom: String, size: u64) {
        if !self.sizes.contains_key(&chrom) {
            self.order.push(chrom.clone());
        }
        self.sizes.insert(chrom, size);
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Genome {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut genome = Self::new();
        for (chrom, size) in iter {
            genome.insert(chrom.into(), size);
        }
        genome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_grch37_table() {
        let genome = Genome::grch37();

        assert_eq!(genome.len(), 24);
        assert_eq!(genome.initial_chrom(), Some("1"));
        assert_eq!(genome.chrom_size("1"), Some(249250621));
        assert_eq!(genome.chrom_size("2"), Some(243199373));
        assert_eq!(genome.chrom_size("X"), Some(155270560));
        assert_eq!(genome.chrom_size("Y"), Some(59373566));
        assert_eq!(genome.chrom_size("MT"), None);
        assert_eq!(genome.chrom_size("chr1"), None);

        let order: Vec<&str> = genome.chromosomes().map(String::as_str).collect();
        assert_eq!(order[21], "22");
        assert_eq!(order[22], "X");
        assert_eq!(order[23], "Y");
    }

    #[test]
    fn test_genome_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chrA\t1000").unwrap();
        writeln!(file, "# comment line").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "chrB\t500\textra").unwrap();

        let genome = Genome::from_file(file.path()).unwrap();

        assert_eq!(genome.chrom_size("chrA"), Some(1000));
        assert_eq!(genome.chrom_size("chrB"), Some(500));
        assert_eq!(genome.initial_chrom(), Some("chrA"));
        assert_eq!(genome.len(), 2);
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let genome = Genome::from_reader("b\t10\na\t20\nb\t30\n".as_bytes()).unwrap();

        assert_eq!(genome.initial_chrom(), Some("b"));
        assert_eq!(genome.chrom_size("b"), Some(30));
        assert_eq!(genome.len(), 2);
    }

    #[test]
    fn test_genome_rejects_bad_lines() {
        let err = Genome::from_reader("chr1 100\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BedError::Parse { line: 1, .. }));

        let err = Genome::from_reader("chr1\t100\nchr2\tbig\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BedError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_empty_genome_rejected() {
        let err = Genome::from_reader("# nothing here\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BedError::InvalidFormat(_)));
    }

    #[test]
    fn test_collect_from_pairs() {
        let genome: Genome = [("c", 5u64), ("a", 7)].into_iter().collect();

        assert!(genome.has_chrom("a"));
        assert!(!genome.has_chrom("b"));
        assert_eq!(genome.initial_chrom(), Some("c"));
    }
}
