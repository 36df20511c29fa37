//! The interactive duplicate review and merge workflow.
//!
//! Every file mutation is gated on an explicit confirmation from the
//! decision provider. A provider that declines everything leaves the
//! filesystem byte-for-byte unchanged.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use hoardscan_core::{DecisionProvider, DocCategory, DuplicatePair, ScanWarning};

use crate::diff::{diff_regions, resolve};
use crate::error::MergeError;
use crate::extract::extract_lines;
use crate::writer::write_merged;

/// Configuration for the merge assistant.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct MergeConfig {
    /// Directory merged documents are written to.
    pub output_dir: PathBuf,

    /// Delete to the system trash instead of permanently.
    #[builder(default = "true")]
    pub use_trash: bool,

    /// Ask whether to continue after this many reviewed pairs.
    #[builder(default = "5")]
    pub checkpoint_interval: usize,
}

impl MergeConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.checkpoint_interval == Some(0) {
            return Err("Checkpoint interval must be at least 1".to_string());
        }
        Ok(())
    }
}

impl MergeConfig {
    /// Create a new config builder.
    pub fn builder() -> MergeConfigBuilder {
        MergeConfigBuilder::default()
    }

    /// Config writing merged output under `<root>/merged`.
    pub fn for_root(root: &Path) -> Self {
        Self {
            output_dir: root.join("merged"),
            use_trash: true,
            checkpoint_interval: 5,
        }
    }
}

/// Result of a duplicate review run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Pairs presented to the provider.
    pub reviewed: usize,
    /// Duplicates deleted on confirmation.
    pub deleted: usize,
    /// Pairs kept untouched.
    pub kept: usize,
    /// Pairs skipped because a confirmed deletion failed.
    pub skipped: usize,
    /// The user declined to continue at a checkpoint.
    pub stopped_early: bool,
    /// Per-pair problems that were skipped over.
    pub failures: Vec<ScanWarning>,
}

/// Result of one direct two-file diff review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivergentOutcome {
    /// Differing regions presented.
    pub regions: usize,
    /// Path of the merged document, if a save was confirmed.
    pub merged_path: Option<PathBuf>,
    /// Both inputs were deleted after the merge.
    pub inputs_deleted: bool,
    /// Input deletions that were confirmed but failed.
    pub failures: Vec<ScanWarning>,
}

/// Drives duplicate review and document merging.
pub struct MergeAssistant {
    config: MergeConfig,
}

impl MergeAssistant {
    /// Create an assistant with the given config.
    pub fn with_config(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Review hash-identical duplicate pairs one by one.
    ///
    /// Each pair offers a single delete-the-duplicate confirmation.
    /// After every `checkpoint_interval` pairs the provider is asked
    /// whether to continue; declining ends the run early.
    pub fn review(
        &self,
        pairs: &[DuplicatePair],
        provider: &mut dyn DecisionProvider,
    ) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();

        // Interval 0 means no checkpoints; the builder rejects it, but
        // the config can also be assembled field by field.
        let interval = self.config.checkpoint_interval;

        for (i, pair) in pairs.iter().enumerate() {
            if interval > 0 && i > 0 && i % interval == 0 {
                let prompt = format!(
                    "Reviewed {i} of {} duplicate pairs. Continue?",
                    pairs.len()
                );
                if !provider.confirm(&prompt) {
                    outcome.stopped_early = true;
                    break;
                }
            }

            outcome.reviewed += 1;
            let prompt = format!(
                "[{}] {} is an exact copy of {} ({}). Delete the copy?",
                pair.category,
                pair.duplicate.display(),
                pair.original.display(),
                pair.hash.short_hex(),
            );

            if provider.confirm(&prompt) {
                match self.delete(&pair.duplicate) {
                    Ok(()) => {
                        info!(deleted = %pair.duplicate.display(), "duplicate removed");
                        outcome.deleted += 1;
                    }
                    Err(err) => {
                        warn!(file = %pair.duplicate.display(), error = %err, "delete failed");
                        outcome.skipped += 1;
                        outcome.failures.push(ScanWarning::new(
                            &pair.duplicate,
                            err.to_string(),
                            hoardscan_core::WarningKind::ReadError,
                        ));
                    }
                }
            } else {
                outcome.kept += 1;
            }
        }

        outcome
    }

    /// Interactive diff review of two divergent same-category documents.
    ///
    /// The provider resolves each differing region, then confirms the
    /// save; only then is a merged document written. A follow-up
    /// confirmation offers deleting the two inputs.
    pub fn review_divergent(
        &self,
        left: &Path,
        right: &Path,
        category: DocCategory,
        provider: &mut dyn DecisionProvider,
    ) -> Result<DivergentOutcome, MergeError> {
        let left_lines = extract_lines(left, category)?;
        let right_lines = extract_lines(right, category)?;

        let regions = diff_regions(&left_lines, &right_lines);
        if regions.is_empty() {
            return Ok(DivergentOutcome {
                regions: 0,
                merged_path: None,
                inputs_deleted: false,
                failures: Vec::new(),
            });
        }

        let (merged, region_count) = resolve(&left_lines, &right_lines, provider);

        let save_prompt = format!(
            "Save merged document for {} + {}?",
            left.display(),
            right.display()
        );
        if !provider.confirm(&save_prompt) {
            return Ok(DivergentOutcome {
                regions: region_count,
                merged_path: None,
                inputs_deleted: false,
                failures: Vec::new(),
            });
        }

        let stem = left
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let merged_path = write_merged(&stem, &merged, category, &self.config.output_dir)?;
        info!(merged = %merged_path.display(), "merged document written");

        let delete_prompt = format!(
            "Merged document saved to {}. Delete the two source files?",
            merged_path.display()
        );
        let mut inputs_deleted = false;
        let mut failures = Vec::new();
        if provider.confirm(&delete_prompt) {
            inputs_deleted = true;
            for input in [left, right] {
                if let Err(err) = self.delete(input) {
                    warn!(file = %input.display(), error = %err, "delete failed");
                    failures.push(ScanWarning::new(
                        input,
                        err.to_string(),
                        hoardscan_core::WarningKind::ReadError,
                    ));
                    inputs_deleted = false;
                }
            }
        }

        Ok(DivergentOutcome {
            regions: region_count,
            merged_path: Some(merged_path),
            inputs_deleted,
            failures,
        })
    }

    fn delete(&self, path: &Path) -> Result<(), MergeError> {
        if self.config.use_trash {
            trash::delete(path).map_err(|e| MergeError::delete(path, e))
        } else {
            std::fs::remove_file(path).map_err(|e| MergeError::delete(path, e))
        }
    }
}
