//! Document categories and archive formats recognized by the scanner.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Category of document considered for duplicate detection.
///
/// Duplicate pairs are only ever formed within a single category, so a
/// text file and a PDF with identical bytes are never paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocCategory {
    /// Plain text (.txt, .md, .log, .csv).
    PlainText,
    /// PDF document.
    Pdf,
    /// Word-processor document (.docx).
    WordDoc,
}

impl DocCategory {
    /// Classify a path by its extension. Case insensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" | "md" | "log" | "csv" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::WordDoc),
            _ => None,
        }
    }

    /// Extension used when writing a merged document of this category.
    pub fn merged_extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Pdf => "pdf",
            Self::WordDoc => "docx",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PlainText => "plain text",
            Self::Pdf => "PDF",
            Self::WordDoc => "word document",
        }
    }
}

impl std::fmt::Display for DocCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compressed archive formats the scanner can open and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchiveFormat {
    Zip,
    Rar,
    SevenZ,
    Tar,
    TarGz,
    TarXz,
    TarBz2,
}

impl ArchiveFormat {
    /// Classify a path by its extension. Case insensitive; `.tgz` is
    /// treated as `.tar.gz`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            return Some(Self::TarGz);
        }
        if name.ends_with(".tar.xz") {
            return Some(Self::TarXz);
        }
        if name.ends_with(".tar.bz2") {
            return Some(Self::TarBz2);
        }
        match name.rsplit('.').next()? {
            "zip" => Some(Self::Zip),
            "rar" => Some(Self::Rar),
            "7z" => Some(Self::SevenZ),
            "tar" => Some(Self::Tar),
            _ => None,
        }
    }

    /// Short label for reports and warnings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Rar => "rar",
            Self::SevenZ => "7z",
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
            Self::TarXz => "tar.xz",
            Self::TarBz2 => "tar.bz2",
        }
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
