//! Record types flowing through a gap scan.

use std::fmt;

/// An input interval. Positions are kept exactly as read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

impl Interval {
    /// Create a new interval.
    #[inline]
    pub fn new(chrom: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chrom, self.start, self.end)
    }
}

/// An uncovered region of a chromosome.
///
/// A gap closing out a chromosome whose intervals ran past its reference
/// length comes out inverted (`start > end`); it is reported as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gap {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

impl Gap {
    #[inline]
    pub fn new(chrom: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
        }
    }

    /// Number of uncovered positions, zero for inverted gaps.
    #[inline]
    pub fn uncovered_len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chrom, self.start, self.end)
    }
}
