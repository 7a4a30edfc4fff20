//! Streaming building blocks for the gap scan.
//!
//! - Whitespace field parsing
//! - Scan state folding
//! - Efficient output formatting
//!
//! Memory use is constant in the size of the input.

pub mod output;
pub mod parsing;
pub mod scan_state;

pub use output::BedWriter;
pub use parsing::{parse_position, split_chrom};
pub use scan_state::{ScanState, Step};
