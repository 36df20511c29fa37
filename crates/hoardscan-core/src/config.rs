//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

/// Configuration for scanning operations.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan.
    pub root: PathBuf,

    /// Follow symbolic links.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Include hidden files (starting with .).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Maximum depth to traverse (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Patterns to ignore (glob syntax).
    #[builder(default)]
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Number of threads for traversal (0 = auto-detect).
    #[builder(default = "0")]
    #[serde(default)]
    pub threads: usize,
}

fn default_true() -> bool {
    true
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                return Err("Root path cannot be empty".to_string());
            }
            None => return Err("Root path is required".to_string()),
            _ => {}
        }
        if let Some(ref patterns) = self.ignore_patterns {
            for pattern in patterns {
                Glob::new(pattern).map_err(|e| format!("Invalid ignore pattern: {e}"))?;
            }
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config for scanning a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
            include_hidden: true,
            max_depth: None,
            ignore_patterns: Vec::new(),
            threads: 0,
        }
    }

    /// Config targeting the user's Downloads directory, falling back to
    /// the current directory when the platform has none.
    pub fn downloads() -> Self {
        let root = directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    /// Compile the ignore patterns into a matcher.
    ///
    /// Patterns validated at build time cannot fail here; patterns set
    /// directly on the struct may, in which case they are dropped.
    pub fn ignore_matcher(&self) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.ignore_patterns {
            if let Ok(glob) = Glob::new(pattern) {
                builder.add(glob);
            }
        }
        builder.build().unwrap_or_else(|_| GlobSet::empty())
    }

    /// Check if hidden files should be skipped.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::downloads()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ScanConfig::builder()
            .root("/home/user/Downloads")
            .threads(4usize)
            .follow_symlinks(true)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user/Downloads"));
        assert_eq!(config.threads, 4);
        assert!(config.follow_symlinks);
    }

    #[test]
    fn test_config_requires_root() {
        assert!(ScanConfig::builder().build().is_err());
        assert!(ScanConfig::builder().root("").build().is_err());
    }

    #[test]
    fn test_config_rejects_bad_patterns() {
        let result = ScanConfig::builder()
            .root("/test")
            .ignore_patterns(vec!["[unclosed".to_string()])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_ignore_matcher() {
        let config = ScanConfig::builder()
            .root("/test")
            .ignore_patterns(vec!["node_modules".to_string(), "*.log".to_string()])
            .build()
            .unwrap();

        let matcher = config.ignore_matcher();
        assert!(matcher.is_match("node_modules"));
        assert!(matcher.is_match("test.log"));
        assert!(!matcher.is_match("src"));
    }

    #[test]
    fn test_should_skip_hidden() {
        let mut config = ScanConfig::new("/test");

        // By default, hidden files are included
        assert!(!config.should_skip_hidden(".git"));

        config.include_hidden = false;
        assert!(config.should_skip_hidden(".git"));
        assert!(!config.should_skip_hidden("src"));
    }
}
