//! Gap output formatting.
//!
//! Uses itoa for integer formatting to avoid allocation per record.

use crate::bed::BedError;
use crate::interval::Gap;
use std::io::{BufWriter, Write};

/// Buffer size for BedWriter (256KB default).
const DEFAULT_BUFFER_SIZE: usize = 256 * 1024;

/// Buffered writer for `chrom\tstart\tend` lines.
pub struct BedWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> BedWriter<W> {
    /// Create a new BedWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new BedWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write a BED3 record followed by newline.
    #[inline]
    pub fn write_bed3_line(&mut self, chrom: &[u8], start: u64, end: u64) -> Result<(), BedError> {
        self.writer.write_all(chrom)?;
        self.writer.write_all(b"\t")?;
        self.writer.write_all(self.itoa_buf.format(start).as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer.write_all(self.itoa_buf.format(end).as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write one gap.
    #[inline]
    pub fn write_gap(&mut self, gap: &Gap) -> Result<(), BedError> {
        self.write_bed3_line(gap.chrom.as_bytes(), gap.start, gap.end)
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<(), BedError> {
        self.writer.flush().map_err(BedError::Io)
    }
}
