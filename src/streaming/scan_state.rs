//! Scan state for the single-pass gap scan.
//!
//! The state is the chromosome currently being scanned and its frontier, the
//! highest interval end seen on it so far. Each recognized record is folded
//! in once, in arrival order, and yields at most two gaps.

use crate::genome::Genome;
use crate::interval::{Gap, Interval};
use std::iter::Chain;
use std::option;

/// Gaps produced by folding one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// Tail of the previous chromosome, emitted on a chromosome change.
    pub closing: Option<Gap>,
    /// Uncovered region between the frontier and this record's start.
    pub leading: Option<Gap>,
}

impl Step {
    pub fn is_empty(&self) -> bool {
        self.closing.is_none() && self.leading.is_none()
    }
}

impl IntoIterator for Step {
    type Item = Gap;
    type IntoIter = Chain<option::IntoIter<Gap>, option::IntoIter<Gap>>;

    fn into_iter(self) -> Self::IntoIter {
        self.closing.into_iter().chain(self.leading)
    }
}

/// Accumulator carried across the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    chrom: String,
    frontier: u64,
    /// Whether any record of `chrom` has been folded.
    observed: bool,
    skip_unobserved_closing: bool,
}

impl ScanState {
    /// Start a scan on `initial` with the frontier at 0.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            chrom: initial.into(),
            frontier: 0,
            observed: false,
            skip_unobserved_closing: false,
        }
    }

    /// Start a scan on the genome's first chromosome.
    pub fn for_genome(genome: &Genome) -> Option<Self> {
        genome.initial_chrom().map(Self::new)
    }

    /// Suppress closing gaps for chromosomes that never had a record.
    ///
    /// Off by default: the first chromosome change then closes out the
    /// initial chromosome even when the input never mentioned it.
    pub fn with_skip_unobserved_closing(mut self, skip: bool) -> Self {
        self.skip_unobserved_closing = skip;
        self
    }

    #[inline]
    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    #[inline]
    pub fn frontier(&self) -> u64 {
        self.frontier
    }

    #[inline]
    pub fn is_observed(&self) -> bool {
        self.observed
    }

    /// Fold one record into the state.
    ///
    /// The record's chromosome must already be known to be in `genome`.
    pub fn fold(&mut self, record: &Interval, genome: &Genome) -> Step {
        let mut step = Step::default();

        if record.chrom != self.chrom {
            step.closing = self.closing_gap(genome);
            self.frontier = 0;
            self.observed = false;
            self.chrom.clear();
            self.chrom.push_str(&record.chrom);
        }

        if self.frontier < record.start {
            step.leading = Some(Gap::new(record.chrom.as_str(), self.frontier, record.start));
        }

        self.frontier = self.frontier.max(record.end);
        self.observed = true;
        step
    }

    /// Trailing gap at end of input, if the frontier stopped short of (or
    /// ran past) the chromosome length.
    pub fn finish(&self, genome: &Genome) -> Option<Gap> {
        let size = genome.chrom_size(&self.chrom)?;
        if self.frontier == size {
            return None;
        }
        self.closing_gap(genome)
    }

    fn closing_gap(&self, genome: &Genome) -> Option<Gap> {
        if self.skip_unobserved_closing && !self.observed {
            return None;
        }
        let size = genome.chrom_size(&self.chrom)?;
        Some(Gap::new(self.chrom.as_str(), self.frontier, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_genome() -> Genome {
        [("a", 100u64), ("b", 50), ("c", 30)].into_iter().collect()
    }

    fn fold_all(state: &mut ScanState, genome: &Genome, records: &[(&str, u64, u64)]) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for &(chrom, start, end) in records {
            gaps.extend(state.fold(&Interval::new(chrom, start, end), genome));
        }
        gaps.extend(state.finish(genome));
        gaps
    }

    #[test]
    fn test_initial_state() {
        let genome = small_genome();
        let state = ScanState::for_genome(&genome).unwrap();

        assert_eq!(state.chrom(), "a");
        assert_eq!(state.frontier(), 0);
        assert!(!state.is_observed());
        assert!(ScanState::for_genome(&Genome::new()).is_none());
    }

    #[test]
    fn test_leading_and_between_gaps() {
        let genome = small_genome();
        let mut state = ScanState::new("a");

        let gaps = fold_all(&mut state, &genome, &[("a", 10, 20), ("a", 40, 60)]);
        assert_eq!(
            gaps,
            vec![Gap::new("a", 0, 10), Gap::new("a", 20, 40), Gap::new("a", 60, 100)]
        );
    }

    #[test]
    fn test_overlap_and_adjacent_emit_nothing() {
        let genome = small_genome();
        let mut state = ScanState::new("a");

        assert!(state.fold(&Interval::new("a", 0, 30), &genome).is_empty());
        assert!(state.fold(&Interval::new("a", 10, 20), &genome).is_empty());
        assert_eq!(state.frontier(), 30);
        assert!(state.fold(&Interval::new("a", 30, 45), &genome).is_empty());
        assert_eq!(state.frontier(), 45);
    }

    #[test]
    fn test_frontier_tracks_max_end() {
        let genome = small_genome();
        let mut state = ScanState::new("a");

        state.fold(&Interval::new("a", 0, 80), &genome);
        state.fold(&Interval::new("a", 5, 10), &genome);
        assert_eq!(state.frontier(), 80);

        let step = state.fold(&Interval::new("a", 90, 95), &genome);
        assert_eq!(step.leading, Some(Gap::new("a", 80, 90)));
    }

    #[test]
    fn test_chromosome_change_closes_previous() {
        let genome = small_genome();
        let mut state = ScanState::new("a");

        state.fold(&Interval::new("a", 0, 70), &genome);
        let step = state.fold(&Interval::new("b", 5, 10), &genome);

        assert_eq!(step.closing, Some(Gap::new("a", 70, 100)));
        assert_eq!(step.leading, Some(Gap::new("b", 0, 5)));
        assert_eq!(state.chrom(), "b");
        assert_eq!(state.frontier(), 10);
    }

    #[test]
    fn test_unobserved_initial_chromosome_closes_by_default() {
        let genome = small_genome();
        let mut state = ScanState::new("a");

        let step = state.fold(&Interval::new("c", 0, 30), &genome);
        assert_eq!(step.closing, Some(Gap::new("a", 0, 100)));
        assert_eq!(step.leading, None);
        assert_eq!(state.finish(&genome), None);
    }

    #[test]
    fn test_skip_unobserved_closing() {
        let genome = small_genome();
        let mut state = ScanState::new("a").with_skip_unobserved_closing(true);

        let step = state.fold(&Interval::new("c", 0, 10), &genome);
        assert_eq!(step.closing, None);

        let step = state.fold(&Interval::new("b", 0, 10), &genome);
        assert_eq!(step.closing, Some(Gap::new("c", 10, 30)));

        let empty = ScanState::new("a").with_skip_unobserved_closing(true);
        assert_eq!(empty.finish(&genome), None);
    }

    #[test]
    fn test_full_coverage_closing_on_change_still_fires() {
        let genome = small_genome();
        let mut state = ScanState::new("a");

        state.fold(&Interval::new("a", 0, 100), &genome);
        let step = state.fold(&Interval::new("b", 0, 50), &genome);

        assert_eq!(step.closing, Some(Gap::new("a", 100, 100)));
        assert_eq!(state.finish(&genome), None);
    }

    #[test]
    fn test_empty_input_finishes_initial_chromosome() {
        let genome = small_genome();
        let state = ScanState::new("a");

        assert_eq!(state.finish(&genome), Some(Gap::new("a", 0, 100)));
    }

    #[test]
    fn test_overrun_emits_inverted_tail() {
        let genome = small_genome();
        let mut state = ScanState::new("a");

        let gaps = fold_all(&mut state, &genome, &[("c", 0, 35)]);
        assert_eq!(gaps, vec![Gap::new("a", 0, 100), Gap::new("c", 35, 30)]);
        assert!(gaps[1].is_inverted());
    }

    #[test]
    fn test_step_iteration_order() {
        let step = Step {
            closing: Some(Gap::new("a", 1, 2)),
            leading: Some(Gap::new("b", 0, 3)),
        };
        let gaps: Vec<Gap> = step.into_iter().collect();
        assert_eq!(gaps[0].chrom, "a");
        assert_eq!(gaps[1].chrom, "b");
    }
}
