//! Merge assistant and file operations for hoardscan.
//!
//! This crate drives the interactive half of the pipeline: reviewing
//! duplicate pairs (keep or delete), diffing two divergent documents
//! region by region, and writing merged output in the document's own
//! format. Every side effect is gated on a [`DecisionProvider`]
//! confirmation, so a provider that declines everything leaves the
//! filesystem untouched.

mod diff;
mod error;
mod extract;
mod merge;
mod writer;

pub use diff::{diff_regions, resolve};
pub use error::MergeError;
pub use extract::extract_lines;
pub use merge::{DivergentOutcome, MergeAssistant, MergeConfig, MergeConfigBuilder, MergeOutcome};
pub use writer::write_merged;

// Re-export core types for convenience
pub use hoardscan_core::{DecisionProvider, DiffRegion, DocCategory, DuplicatePair, RegionChoice};
