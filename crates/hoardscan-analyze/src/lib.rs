//! Analysis for hoardscan.
//!
//! This crate provides the non-interactive halves of the pipeline:
//!
//! - **Duplicate detection** - category-grouped whole-file BLAKE3
//!   hashing with an append-only first-seen index
//! - **Quiz** - the fixed ten-question self-report set and its scoring
//! - **Risk classification** - the pure threshold bands combining scan
//!   points and the quiz sum into a final label
//!
//! # Duplicate Detection
//!
//! ```rust,ignore
//! use hoardscan_analyze::DuplicateFinder;
//! use hoardscan_scan::{ScanConfig, Scanner};
//!
//! let report = Scanner::new().scan(&ScanConfig::downloads()).unwrap();
//! let dups = DuplicateFinder::new().find(&report);
//!
//! for pair in &dups.pairs {
//!     println!("{} duplicates {}", pair.duplicate.display(), pair.original.display());
//! }
//! ```
//!
//! # Risk classification
//!
//! ```rust
//! use hoardscan_analyze::classify;
//!
//! let assessment = classify(3, 0);
//! assert_eq!(assessment.overall.label(), "Severe Digital Hoarder");
//! ```

mod duplicates;
mod quiz;
mod risk;

pub use duplicates::{
    DuplicateConfig, DuplicateConfigBuilder, DuplicateFinder, DuplicateReport,
};
pub use quiz::{QUESTION_COUNT, QUIZ_QUESTIONS, QuizScore, run_quiz};
pub use risk::{OverallRisk, PsychRisk, RiskAssessment, SystemRisk, classify};

// Re-export core types for convenience
pub use hoardscan_core::{ContentHash, DocCategory, DuplicatePair, QuizAnswer, ScanReport};
