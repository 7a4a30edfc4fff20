//! Command implementations.

pub mod complement;

pub use complement::{ComplementCommand, GapExtractor, GapStats};
