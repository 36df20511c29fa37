//! JWalk-based directory scanner.

use std::path::Path;
use std::time::Instant;

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

use hoardscan_core::{
    ArchiveFormat, ScanConfig, ScanError, ScanReport, ScanWarning, WarningKind,
};

use crate::archive::inspect_archive;

/// Archives met directly on the filesystem are counted at this level.
const FILESYSTEM_LEVEL: u32 = 1;

/// Directory scanner using jwalk for traversal.
pub struct Scanner {
    _private: (),
}

impl Scanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Perform a scan of the configured root.
    ///
    /// Every file whose extension matches a known archive format is
    /// opened and its members tallied; all other files land in
    /// `normal_files`. Unreadable entries and archives become warnings.
    pub fn scan(&self, config: &ScanConfig) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory { path: root_path });
        }

        let mut report = ScanReport::new(config.clone());
        self.walk(config, &root_path, &mut report);

        report.scan_duration = start.elapsed();
        debug!(
            files = report.normal_files.len(),
            folders = report.normal_folders.len(),
            archives = report.archives.len(),
            "scan complete"
        );
        Ok(report)
    }

    fn walk(&self, config: &ScanConfig, root_path: &Path, report: &mut ScanReport) {
        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: std::time::Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let ignore = config.ignore_matcher();
        let prune = ignore.clone();

        let walker = WalkDir::new(root_path)
            .parallelism(parallelism)
            .sort(true)
            .skip_hidden(!config.include_hidden)
            .follow_links(config.follow_symlinks)
            .min_depth(0)
            .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX))
            // Dropping an ignored directory here also prunes everything
            // underneath it from the walk.
            .process_read_dir(move |_depth, _path, _state, children| {
                children.retain(|child| match child {
                    Ok(entry) => {
                        !prune.is_match(entry.file_name().to_string_lossy().as_ref())
                    }
                    Err(_) => true,
                });
            });

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    report
                        .warnings
                        .push(ScanWarning::new(path, err.to_string(), WarningKind::ReadError));
                    continue;
                }
            };

            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().to_string();

            if ignore.is_match(&file_name) {
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                // The root itself is not one of its own folders.
                if entry.depth() > 0 {
                    report.normal_folders.push(path);
                }
            } else if file_type.is_symlink() && !config.follow_symlinks {
                if !path.exists() {
                    let target = std::fs::read_link(&path)
                        .map(|p| p.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    report.warnings.push(ScanWarning::new(
                        &path,
                        format!("Broken symlink: {} -> {target}", path.display()),
                        WarningKind::BrokenSymlink,
                    ));
                    continue;
                }
                // A live symlink to a file counts like the file it names.
                report.normal_files.push(path);
            } else if let Some(format) = ArchiveFormat::from_path(&path) {
                match inspect_archive(&path, format, FILESYSTEM_LEVEL) {
                    Ok(summary) => {
                        debug!(
                            archive = %path.display(),
                            files = summary.entry_files,
                            folders = summary.entry_folders,
                            nesting = summary.max_nesting,
                            "archive listed"
                        );
                        report.record_archive(summary);
                    }
                    Err(err) => {
                        warn!(archive = %path.display(), error = %err, "skipping archive");
                        report
                            .warnings
                            .push(ScanWarning::unreadable_archive(&path, err));
                    }
                }
            } else {
                report.normal_files.push(path);
            }
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
