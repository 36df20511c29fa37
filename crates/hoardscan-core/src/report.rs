//! Scan report accumulator and statistics.
//!
//! All counters live in a [`ScanReport`] value instantiated per scan and
//! returned by the scanner, so repeated scans never share mutable state.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::category::ArchiveFormat;
use crate::config::ScanConfig;
use crate::error::ScanWarning;

/// Maximum attainable system points.
pub const SYSTEM_POINTS_MAX: u8 = 4;

/// Plain-file count above which a system point is scored.
const MANY_FILES: usize = 50_000;
/// Plain-folder count above which a system point is scored.
const MANY_FOLDERS: usize = 10_000;
/// In-archive file count above which a system point is scored.
const MANY_ARCHIVED_FILES: u64 = 10_000;
/// Nesting depth above which a system point is scored.
const DEEP_NESTING: u32 = 5;

/// Per-archive summary produced by archive inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSummary {
    /// Path of the archive on the filesystem.
    pub path: PathBuf,
    /// Detected archive format.
    pub format: ArchiveFormat,
    /// Number of file members.
    pub entry_files: u64,
    /// Number of folder members.
    pub entry_folders: u64,
    /// Deepest nesting observed among members, including the level the
    /// archive itself was found at. Nesting of a member is the number of
    /// `'/'` occurrences in its entry name, not its real tree depth.
    pub max_nesting: u32,
}

/// Complete result of one scan pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Plain files discovered, in traversal order.
    pub normal_files: Vec<PathBuf>,

    /// Plain folders discovered, in traversal order.
    pub normal_folders: Vec<PathBuf>,

    /// Archives that listed cleanly.
    pub archives: Vec<ArchiveSummary>,

    /// Running total of file members across all archives.
    pub files_in_archives: u64,

    /// Running total of folder members across all archives.
    pub folders_in_archives: u64,

    /// Running maximum nesting depth across all archives.
    pub max_nesting_depth: u32,

    /// Non-fatal problems encountered during the scan.
    pub warnings: Vec<ScanWarning>,

    /// When this scan was performed.
    pub scanned_at: SystemTime,

    /// Duration of the scan.
    pub scan_duration: Duration,

    /// Scan configuration used.
    pub config: ScanConfig,
}

impl ScanReport {
    /// Create an empty report for the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            normal_files: Vec::new(),
            normal_folders: Vec::new(),
            archives: Vec::new(),
            files_in_archives: 0,
            folders_in_archives: 0,
            max_nesting_depth: 0,
            warnings: Vec::new(),
            scanned_at: SystemTime::now(),
            scan_duration: Duration::ZERO,
            config,
        }
    }

    /// Fold one archive summary into the running totals.
    pub fn record_archive(&mut self, summary: ArchiveSummary) {
        self.files_in_archives += summary.entry_files;
        self.folders_in_archives += summary.entry_folders;
        self.max_nesting_depth = self.max_nesting_depth.max(summary.max_nesting);
        self.archives.push(summary);
    }

    /// System-behavior points in `0..=SYSTEM_POINTS_MAX`.
    ///
    /// One point for each fixed heuristic threshold exceeded: very many
    /// plain files, very many plain folders, very many files packed
    /// inside archives, and unusually deep archive nesting.
    pub fn system_points(&self) -> u8 {
        let mut points = 0;
        if self.normal_files.len() > MANY_FILES {
            points += 1;
        }
        if self.normal_folders.len() > MANY_FOLDERS {
            points += 1;
        }
        if self.files_in_archives > MANY_ARCHIVED_FILES {
            points += 1;
        }
        if self.max_nesting_depth > DEEP_NESTING {
            points += 1;
        }
        points
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_report() -> ScanReport {
        ScanReport::new(ScanConfig::new("/test"))
    }

    #[test]
    fn test_record_archive_accumulates() {
        let mut report = empty_report();
        report.record_archive(ArchiveSummary {
            path: PathBuf::from("/dl/a.zip"),
            format: ArchiveFormat::Zip,
            entry_files: 3,
            entry_folders: 1,
            max_nesting: 4,
        });
        report.record_archive(ArchiveSummary {
            path: PathBuf::from("/dl/b.7z"),
            format: ArchiveFormat::SevenZ,
            entry_files: 2,
            entry_folders: 0,
            max_nesting: 2,
        });

        assert_eq!(report.files_in_archives, 5);
        assert_eq!(report.folders_in_archives, 1);
        assert_eq!(report.max_nesting_depth, 4);
        assert_eq!(report.archives.len(), 2);
    }

    #[test]
    fn test_system_points_zero_for_empty() {
        assert_eq!(empty_report().system_points(), 0);
    }

    #[test]
    fn test_system_points_thresholds() {
        let mut report = empty_report();
        // Exactly at a threshold scores nothing; one past it scores.
        report.files_in_archives = 10_000;
        report.max_nesting_depth = 5;
        assert_eq!(report.system_points(), 0);

        report.files_in_archives = 10_001;
        report.max_nesting_depth = 6;
        assert_eq!(report.system_points(), 2);
    }

    #[test]
    fn test_system_points_max() {
        let mut report = empty_report();
        report.normal_files = vec![PathBuf::from("/f"); MANY_FILES + 1];
        report.normal_folders = vec![PathBuf::from("/d"); MANY_FOLDERS + 1];
        report.files_in_archives = MANY_ARCHIVED_FILES + 1;
        report.max_nesting_depth = DEEP_NESTING + 1;
        assert_eq!(report.system_points(), SYSTEM_POINTS_MAX);
    }
}
