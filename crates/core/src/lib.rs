//! # whitespace_stats core
//!
//! Pure, allocation-free text classification.
//!
//! - [`encoding`]: closed set of Unicode encodings and their preambles
//! - [`character`]: printability and per-character counters
//! - [`line`]: line boundary detection and per-line whitespace classification
//! - [`analyzer`]: the per-file driver folding everything into [`TextStatistics`]
//! - [`stats`]: result types handed to the outer layers
//!
//! Nothing here performs I/O; decoding and file access live in the engine crate.

#![cfg_attr(not(test), no_std)]

pub mod analyzer;
pub mod character;
pub mod encoding;
pub mod line;
pub mod stats;

pub use analyzer::TextAnalyzer;
pub use encoding::Encoding;
pub use stats::{FileCharacteristics, TextStatistics};
