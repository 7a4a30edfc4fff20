//! Streaming interval input.
//!
//! Input is whitespace-delimited text, one `chrom start end` record per line.
//! The reader hands out one trimmed line at a time from a reused buffer, so
//! memory stays flat no matter how large the input is.

use crate::interval::Interval;
use crate::streaming::parsing::{parse_position, split_chrom};
use std::io::{self, BufRead, BufReader, Read};
use thiserror::Error;

/// Errors that can occur while reading intervals or writing gaps.
#[derive(Error, Debug)]
pub enum BedError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid BED format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, BedError>;

/// A line-oriented interval reader.
pub struct BedReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl<R: Read> BedReader<R> {
    /// Create a new reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Create a reader with custom buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next line, trimmed. Blank lines are returned as empty strings.
    pub fn read_line(&mut self) -> Result<Option<&str>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(self.buffer.trim()))
    }

    /// 1-based number of the line last returned by [`read_line`](Self::read_line).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next record, skipping lines whose chromosome fails `keep`.
    ///
    /// The chromosome filter runs before the positions are looked at, so a
    /// rejected line is never a parse error.
    pub fn read_interval_where<F>(&mut self, mut keep: F) -> Result<Option<Interval>>
    where
        F: FnMut(&str) -> bool,
    {
        loop {
            let line_number = self.line_number + 1;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            let (chrom, mut rest) = split_chrom(line).ok_or_else(|| BedError::Parse {
                line: line_number,
                message: "Expected at least 3 fields, got 0".to_string(),
            })?;

            if !keep(chrom) {
                continue;
            }

            let start = parse_position(rest.next(), "start", line_number)?;
            let end = parse_position(rest.next(), "end", line_number)?;
            return Ok(Some(Interval::new(chrom, start, end)));
        }
    }

    /// Iterate over every record in the input.
    pub fn intervals(self) -> IntervalIter<R> {
        IntervalIter { reader: self }
    }
}

/// Iterator over all records of a [`BedReader`].
pub struct IntervalIter<R: Read> {
    reader: BedReader<R>,
}

impl<R: Read> Iterator for IntervalIter<R> {
    type Item = Result<Interval>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_interval_where(|_| true).transpose()
    }
}

/// Parse intervals from a string (useful for testing).
pub fn parse_intervals(content: &str) -> Result<Vec<Interval>> {
    BedReader::new(content.as_bytes()).intervals().collect()
}
