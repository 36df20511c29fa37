//! File system and archive scanning engine for hoardscan.
//!
//! This crate walks a directory tree with jwalk, tallying plain files
//! and folders, and opens every compressed archive it meets to count the
//! members packed inside it and the deepest entry nesting observed.
//!
//! # Example
//!
//! ```rust,no_run
//! use hoardscan_scan::{ScanConfig, Scanner};
//!
//! let config = ScanConfig::downloads();
//! let report = Scanner::new().scan(&config).unwrap();
//!
//! println!("{} plain files", report.normal_files.len());
//! println!("{} files inside archives", report.files_in_archives);
//! println!("deepest nesting: {}", report.max_nesting_depth);
//! ```
//!
//! Unreadable or corrupt archives never abort a scan; each one becomes a
//! single [`hoardscan_core::ScanWarning`] on the report.

mod archive;
mod scanner;

pub use archive::{ArchiveError, inspect_archive};
pub use scanner::Scanner;

// Re-export core types for convenience
pub use hoardscan_core::{
    ArchiveFormat, ArchiveSummary, ScanConfig, ScanError, ScanReport, ScanWarning, WarningKind,
};
