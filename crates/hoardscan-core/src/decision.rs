//! The decision seam between library logic and the human.
//!
//! Traversal, diff and merge logic produce pending decisions; a
//! [`DecisionProvider`] resolves each one. The CLI supplies a console
//! provider; tests use [`ScriptedDecisions`] for headless runs.

use std::collections::VecDeque;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::category::DocCategory;
use crate::hash::ContentHash;

/// A duplicate pair detected within one document category.
///
/// `original` is the first path observed with this content hash during a
/// single detection pass; `duplicate` is a later path with the same hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicatePair {
    /// Document category both files belong to.
    pub category: DocCategory,
    /// First file observed with this hash.
    pub original: PathBuf,
    /// Later file with an identical hash.
    pub duplicate: PathBuf,
    /// Shared content hash.
    pub hash: ContentHash,
    /// File size in bytes.
    pub size: u64,
}

/// One differing region of a line-level diff between two documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffRegion {
    /// Zero-based region index within the diff.
    pub index: usize,
    /// First affected line number on the left side (1-based).
    pub left_start: usize,
    /// Lines from the left document (empty for pure insertions).
    pub left: Vec<String>,
    /// First affected line number on the right side (1-based).
    pub right_start: usize,
    /// Lines from the right document (empty for pure deletions).
    pub right: Vec<String>,
    /// Character-level rendering for single-line replacements.
    pub inline_hint: Option<String>,
}

/// Resolution chosen for one diff region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionChoice {
    /// Keep the left side.
    Left,
    /// Keep the right side.
    Right,
    /// Keep both, left lines first.
    Both,
    /// Replace the region with custom text.
    Custom(String),
}

/// A quiz answer on the fixed never/sometimes/always scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizAnswer {
    Never,
    Sometimes,
    Always,
}

impl QuizAnswer {
    /// Point value of this answer.
    pub fn points(&self) -> u8 {
        match self {
            Self::Never => 0,
            Self::Sometimes => 1,
            Self::Always => 2,
        }
    }

    /// Parse user input; only "0", "1" and "2" (after trimming) are valid.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(Self::Never),
            "1" => Some(Self::Sometimes),
            "2" => Some(Self::Always),
            _ => None,
        }
    }
}

/// Resolves the decisions an interactive run produces.
///
/// Implementations must return only valid values; interactive providers
/// re-prompt until the input parses, scripted providers carry prepared
/// answers.
pub trait DecisionProvider {
    /// Answer a yes/no question. `false` always means "do nothing".
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Choose how to resolve one differing region.
    fn resolve_region(&mut self, region: &DiffRegion) -> RegionChoice;

    /// Answer quiz question `number` (1-based).
    fn quiz_answer(&mut self, number: usize, question: &str) -> QuizAnswer;
}

/// Deterministic decision provider for headless runs and tests.
///
/// Each decision kind is drawn from its own queue. When a queue runs dry
/// the provider declines: confirmations answer no, regions keep the left
/// side, quiz questions answer never. An empty script therefore performs
/// no side effects at all.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    confirms: VecDeque<bool>,
    regions: VecDeque<RegionChoice>,
    answers: VecDeque<QuizAnswer>,
}

impl ScriptedDecisions {
    /// Create an empty script (declines everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue confirmation answers.
    pub fn with_confirms(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirms.extend(answers);
        self
    }

    /// Queue region choices.
    pub fn with_regions(mut self, choices: impl IntoIterator<Item = RegionChoice>) -> Self {
        self.regions.extend(choices);
        self
    }

    /// Queue quiz answers.
    pub fn with_answers(mut self, answers: impl IntoIterator<Item = QuizAnswer>) -> Self {
        self.answers.extend(answers);
        self
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.confirms.pop_front().unwrap_or(false)
    }

    fn resolve_region(&mut self, _region: &DiffRegion) -> RegionChoice {
        self.regions.pop_front().unwrap_or(RegionChoice::Left)
    }

    fn quiz_answer(&mut self, _number: usize, _question: &str) -> QuizAnswer {
        self.answers.pop_front().unwrap_or(QuizAnswer::Never)
    }
}
