//! Core types and traits for hoardscan.
//!
//! This crate provides the fundamental data structures used throughout
//! the hoardscan ecosystem: scan configuration, errors and warnings,
//! document categories and archive formats, content hashes, the scan
//! report accumulator, and the decision-provider seam that keeps all
//! interactive choices out of the library crates.

mod category;
mod config;
mod decision;
mod error;
mod hash;
mod report;

pub use category::{ArchiveFormat, DocCategory};
pub use config::{ScanConfig, ScanConfigBuilder};
pub use decision::{
    DecisionProvider, DiffRegion, DuplicatePair, QuizAnswer, RegionChoice, ScriptedDecisions,
};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use hash::ContentHash;
pub use report::{ArchiveSummary, ScanReport, SYSTEM_POINTS_MAX};
