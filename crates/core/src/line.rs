//! Line splitting and per-line whitespace classification.

pub mod boundary;
pub mod classifier;

pub use boundary::{Boundary, LineBoundaryDetector, Terminator};
pub use classifier::{LeadingWhitespace, LineClassifier, LineSummary};
