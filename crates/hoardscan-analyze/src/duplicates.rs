//! Duplicate document detection using content hashing.
//!
//! Files are grouped by document category (plain text, PDF, word
//! document) and hashed whole with BLAKE3. Within each category an
//! append-only, insertion-ordered first-seen index maps each hash to the
//! first path observed with it; every later file whose hash is already
//! present becomes a duplicate pair against that first path. The index
//! is never re-validated during a pass.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use blake3::Hasher;
use derive_builder::Builder;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use hoardscan_core::{ContentHash, DocCategory, DuplicatePair, ScanReport, ScanWarning};

/// Configuration for duplicate detection.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct DuplicateConfig {
    /// Minimum file size in bytes to consider.
    #[builder(default = "1")]
    pub min_size: u64,

    /// Maximum number of pairs to report (0 = unlimited).
    #[builder(default = "0")]
    pub max_pairs: usize,

    /// Restrict detection to these categories (empty = all).
    #[builder(default)]
    pub categories: Vec<DocCategory>,
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self {
            min_size: 1,
            max_pairs: 0,
            categories: Vec::new(),
        }
    }
}

impl DuplicateConfig {
    /// Create a new config builder.
    pub fn builder() -> DuplicateConfigBuilder {
        DuplicateConfigBuilder::default()
    }

    fn wants(&self, category: DocCategory) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// Results from duplicate detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateReport {
    /// Duplicate pairs in traversal order.
    pub pairs: Vec<DuplicatePair>,

    /// Number of files successfully hashed.
    pub files_hashed: u64,

    /// Total bytes hashed.
    pub bytes_hashed: u64,

    /// Pair counts per category.
    pub by_category: HashMap<DocCategory, usize>,

    /// Files that could not be read and were skipped.
    pub skipped: Vec<ScanWarning>,
}

impl DuplicateReport {
    /// Check if any duplicates were found.
    pub fn has_duplicates(&self) -> bool {
        !self.pairs.is_empty()
    }
}

/// Duplicate document finder.
pub struct DuplicateFinder {
    config: DuplicateConfig,
}

impl DuplicateFinder {
    /// Create a new finder with default config.
    pub fn new() -> Self {
        Self {
            config: DuplicateConfig::default(),
        }
    }

    /// Create a new finder with custom config.
    pub fn with_config(config: DuplicateConfig) -> Self {
        Self { config }
    }

    /// Find duplicate pairs among the scanned plain files.
    pub fn find(&self, report: &ScanReport) -> DuplicateReport {
        // Candidates keep traversal order; hashing is parallel but the
        // collected results preserve that order, so the first-seen index
        // is deterministic.
        let candidates: Vec<(&PathBuf, DocCategory)> = report
            .normal_files
            .iter()
            .filter_map(|path| DocCategory::from_path(path).map(|c| (path, c)))
            .filter(|(_, category)| self.config.wants(*category))
            .collect();

        let hashed: Vec<(&PathBuf, DocCategory, Result<(ContentHash, u64), std::io::Error>)> =
            candidates
                .into_par_iter()
                .map(|(path, category)| (path, category, hash_file(path)))
                .collect();

        let mut pairs = Vec::new();
        let mut skipped = Vec::new();
        let mut files_hashed = 0u64;
        let mut bytes_hashed = 0u64;
        let mut by_category: HashMap<DocCategory, usize> = HashMap::new();
        let mut first_seen: HashMap<DocCategory, IndexMap<ContentHash, PathBuf>> = HashMap::new();

        for (path, category, result) in hashed {
            let (hash, size) = match result {
                Ok(pair) => pair,
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "skipping unreadable file");
                    skipped.push(ScanWarning::read_error(path, &err));
                    continue;
                }
            };

            files_hashed += 1;
            bytes_hashed += size;

            if size < self.config.min_size {
                continue;
            }

            let index = first_seen.entry(category).or_default();
            match index.get(&hash) {
                Some(original) => {
                    *by_category.entry(category).or_default() += 1;
                    pairs.push(DuplicatePair {
                        category,
                        original: original.clone(),
                        duplicate: path.clone(),
                        hash,
                        size,
                    });
                }
                None => {
                    index.insert(hash, path.clone());
                }
            }
        }

        if self.config.max_pairs > 0 && pairs.len() > self.config.max_pairs {
            pairs.truncate(self.config.max_pairs);
        }

        DuplicateReport {
            pairs,
            files_hashed,
            bytes_hashed,
            by_category,
            skipped,
        }
    }
}

impl Default for DuplicateFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the whole-file BLAKE3 hash and size of a file.
fn hash_file(path: &Path) -> Result<(ContentHash, u64), std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Hasher::new();
    let mut buffer = vec![0u8; 64 * 1024];
    let mut size = 0u64;

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        size += bytes_read as u64;
        hasher.update(&buffer[..bytes_read]);
    }

    Ok((ContentHash::new(*hasher.finalize().as_bytes()), size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoardscan_core::ScanConfig;
    use std::fs;
    use tempfile::TempDir;

    fn report_for(temp: &TempDir, names: &[&str]) -> ScanReport {
        let mut report = ScanReport::new(ScanConfig::new(temp.path()));
        for name in names {
            report.normal_files.push(temp.path().join(name));
        }
        report
    }

    #[test]
    fn test_identical_content_pairs_within_category() {
        let temp = TempDir::new().unwrap();
        // 32 bytes of identical content must still pair.
        let content = b"exactly thirty-two bytes of text";
        assert_eq!(content.len(), 32);
        fs::write(temp.path().join("first.txt"), content).unwrap();
        fs::write(temp.path().join("second.txt"), content).unwrap();
        fs::write(temp.path().join("other.txt"), b"different content").unwrap();

        let report = report_for(&temp, &["first.txt", "second.txt", "other.txt"]);
        let dups = DuplicateFinder::new().find(&report);

        assert_eq!(dups.pairs.len(), 1);
        let pair = &dups.pairs[0];
        assert_eq!(pair.category, DocCategory::PlainText);
        assert!(pair.original.ends_with("first.txt"));
        assert!(pair.duplicate.ends_with("second.txt"));
        assert_eq!(pair.size, 32);
    }

    #[test]
    fn test_same_bytes_different_category_do_not_pair() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), b"shared bytes").unwrap();
        fs::write(temp.path().join("a.pdf"), b"shared bytes").unwrap();

        let report = report_for(&temp, &["a.txt", "a.pdf"]);
        let dups = DuplicateFinder::new().find(&report);

        assert!(!dups.has_duplicates());
        assert_eq!(dups.files_hashed, 2);
    }

    #[test]
    fn test_three_copies_yield_two_pairs_against_first() {
        let temp = TempDir::new().unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            fs::write(temp.path().join(name), b"same same").unwrap();
        }

        let report = report_for(&temp, &["a.txt", "b.txt", "c.txt"]);
        let dups = DuplicateFinder::new().find(&report);

        assert_eq!(dups.pairs.len(), 2);
        assert!(dups.pairs.iter().all(|p| p.original.ends_with("a.txt")));
    }

    #[test]
    fn test_unreadable_file_is_skipped_not_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("real.txt"), b"content").unwrap();

        let mut report = report_for(&temp, &["real.txt"]);
        report.normal_files.push(temp.path().join("ghost.txt"));

        let dups = DuplicateFinder::new().find(&report);
        assert_eq!(dups.files_hashed, 1);
        assert_eq!(dups.skipped.len(), 1);
    }

    #[test]
    fn test_non_document_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.bin"), b"same").unwrap();
        fs::write(temp.path().join("b.bin"), b"same").unwrap();

        let report = report_for(&temp, &["a.bin", "b.bin"]);
        let dups = DuplicateFinder::new().find(&report);

        assert_eq!(dups.files_hashed, 0);
        assert!(!dups.has_duplicates());
    }

    #[test]
    fn test_category_filter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), b"same").unwrap();
        fs::write(temp.path().join("b.txt"), b"same").unwrap();

        let config = DuplicateConfig::builder()
            .categories(vec![DocCategory::Pdf])
            .build()
            .unwrap();
        let report = report_for(&temp, &["a.txt", "b.txt"]);
        let dups = DuplicateFinder::with_config(config).find(&report);

        assert!(!dups.has_duplicates());
    }
}
