//! invert-regions: genomic gap extraction.
//!
//! Computes the complement of a sorted interval stream against a table of
//! chromosome lengths, in a single streaming pass.
//!
//! # Features
//!
//! - **Streaming I/O**: constant memory, gaps are yielded as they are found
//! - **Built-in reference**: GRCh37 chromosome lengths, replaceable by a genome file
//!
//! # Example
//!
//! ```rust
//! use invert_regions::{bed::BedReader, commands::ComplementCommand, genome::Genome};
//!
//! let genome = Genome::grch37();
//! let input = "1\t1000\t2000\n1\t5000\t6000\n2\t0\t243199373\n";
//! let reader = BedReader::new(input.as_bytes());
//!
//! let gaps: Vec<_> = ComplementCommand::new()
//!     .extract(reader, &genome)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(gaps.len(), 3);
//! assert_eq!(gaps[2].to_string(), "1\t6000\t249250621");
//! ```

pub mod bed;
pub mod commands;
pub mod genome;
pub mod interval;
pub mod streaming;

// Re-export commonly used types
pub use bed::{parse_intervals, BedError, BedReader};
pub use commands::{ComplementCommand, GapExtractor, GapStats};
pub use genome::Genome;
pub use interval::{Gap, Interval};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
