//! Complement command implementation.
//!
//! Reports the regions of each chromosome not covered by any input interval.
//! Single-pass O(n) streaming algorithm with O(1) memory; input must already
//! be grouped by chromosome and sorted by start within each group. Unsorted
//! input is not detected and yields wrong gap boundaries.

use crate::bed::{BedError, BedReader, Result};
use crate::genome::Genome;
use crate::interval::Gap;
use crate::streaming::output::BedWriter;
use crate::streaming::scan_state::ScanState;
use std::collections::VecDeque;
use std::fmt;
use std::io::{Read, Write};

/// Counters collected over one complement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GapStats {
    /// Input lines read, including skipped ones.
    pub lines_read: usize,
    /// Records folded into the scan.
    pub records: usize,
    /// Records dropped because their chromosome is not in the genome.
    pub skipped_unknown_chrom: usize,
    /// Gaps emitted.
    pub gaps: usize,
    /// Gaps with start past end, from intervals overrunning their chromosome.
    pub inverted_gaps: usize,
    /// Total length of the non-inverted gaps.
    pub uncovered_bases: u64,
}

impl fmt::Display for GapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines_read={} records={} skipped_unknown_chrom={} gaps={} inverted_gaps={} uncovered_bases={}",
            self.lines_read,
            self.records,
            self.skipped_unknown_chrom,
            self.gaps,
            self.inverted_gaps,
            self.uncovered_bases
        )
    }
}

/// Complement command configuration.
#[derive(Debug, Clone, Default)]
pub struct ComplementCommand {
    /// Drop the closing gap of a chromosome that had no input records.
    pub skip_unobserved_closing: bool,
}

impl ComplementCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set skip_unobserved_closing flag (builder pattern).
    pub fn with_skip_unobserved_closing(mut self, skip: bool) -> Self {
        self.skip_unobserved_closing = skip;
        self
    }

    /// Lazily scan `reader`, yielding gaps as they are found.
    pub fn extract<'g, R: Read>(
        &self,
        reader: BedReader<R>,
        genome: &'g Genome,
    ) -> Result<GapExtractor<'g, R>> {
        let state = ScanState::for_genome(genome)
            .ok_or_else(|| BedError::InvalidFormat("genome has no chromosomes".to_string()))?
            .with_skip_unobserved_closing(self.skip_unobserved_closing);

        Ok(GapExtractor {
            reader,
            genome,
            state,
            pending: VecDeque::with_capacity(2),
            stats: GapStats::default(),
            done: false,
        })
    }

    /// Stream every gap of `input` to `output`.
    ///
    /// Each gap is flushed as soon as it is written, so it reaches `output`
    /// before the scan blocks on more input and before a parse error on a
    /// later line is returned.
    pub fn run<R: Read, W: Write>(
        &self,
        input: R,
        genome: &Genome,
        output: W,
    ) -> Result<GapStats> {
        let reader = BedReader::with_capacity(input, 256 * 1024);
        let mut writer = BedWriter::new(output);
        let mut extractor = self.extract(reader, genome)?;

        for gap in extractor.by_ref() {
            writer.write_gap(&gap?)?;
            writer.flush()?;
        }

        Ok(extractor.stats())
    }
}

/// Pull-based gap scan over an interval stream.
///
/// Each call to `next` reads input only until at least one gap is ready.
/// After the first error the iterator is fused.
pub struct GapExtractor<'g, R: Read> {
    reader: BedReader<R>,
    genome: &'g Genome,
    state: ScanState,
    /// Gaps found but not yet yielded (a record yields at most two).
    pending: VecDeque<Gap>,
    stats: GapStats,
    done: bool,
}

impl<R: Read> GapExtractor<'_, R> {
    /// Counters so far.
    pub fn stats(&self) -> GapStats {
        self.stats
    }

    /// Current scan state.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Read records until a gap is queued or input runs out.
    fn fill(&mut self) -> Result<()> {
        let genome = self.genome;
        let skipped = &mut self.stats.skipped_unknown_chrom;

        while self.pending.is_empty() {
            let next = self.reader.read_interval_where(|chrom| {
                let known = genome.has_chrom(chrom);
                if !known {
                    *skipped += 1;
                }
                known
            })?;

            match next {
                Some(record) => {
                    self.stats.records += 1;
                    self.pending.extend(self.state.fold(&record, genome));
                }
                None => {
                    self.pending.extend(self.state.finish(genome));
                    self.done = true;
                    break;
                }
            }
        }
        Ok(())
    }
}

impl<R: Read> Iterator for GapExtractor<'_, R> {
    type Item = Result<Gap>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() && !self.done {
            let filled = self.fill();
            self.stats.lines_read = self.reader.line_number();
            if let Err(e) = filled {
                self.done = true;
                return Some(Err(e));
            }
        }

        let gap = self.pending.pop_front()?;
        self.stats.gaps += 1;
        if gap.is_inverted() {
            self.stats.inverted_gaps += 1;
        } else {
            self.stats.uncovered_bases += gap.uncovered_len();
        }
        Some(Ok(gap))
    }
}
