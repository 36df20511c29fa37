//! Per-format archive inspection.
//!
//! Each inspector opens an archive, counts file and folder members as
//! the underlying library reports them, and tracks the deepest member
//! nesting. Nesting of a member is `level + n` where `n` is the number
//! of `'/'` occurrences in the entry name; this deliberately mirrors the
//! entry-name heuristic rather than reconstructing the real tree depth.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use hoardscan_core::{ArchiveFormat, ArchiveSummary};

/// Errors from opening or listing a single archive.
///
/// Callers downgrade these to one warning per archive; they are never
/// fatal to a scan.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file itself could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive library rejected the contents.
    #[error("{format} listing failed at {path}: {message}")]
    Format {
        path: PathBuf,
        format: ArchiveFormat,
        message: String,
    },
}

impl ArchiveError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn format(path: &Path, format: ArchiveFormat, err: impl std::fmt::Display) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            format,
            message: err.to_string(),
        }
    }
}

/// Running member tally for one archive.
struct MemberCounts {
    level: u32,
    files: u64,
    folders: u64,
    max_nesting: u32,
}

impl MemberCounts {
    fn new(level: u32) -> Self {
        Self {
            level,
            files: 0,
            folders: 0,
            max_nesting: 0,
        }
    }

    fn record(&mut self, name: &str, is_dir: bool) {
        if is_dir {
            self.folders += 1;
        } else {
            self.files += 1;
        }
        let nesting = name.matches('/').count() as u32;
        self.max_nesting = self.max_nesting.max(self.level + nesting);
    }

    fn into_summary(self, path: &Path, format: ArchiveFormat) -> ArchiveSummary {
        ArchiveSummary {
            path: path.to_path_buf(),
            format,
            entry_files: self.files,
            entry_folders: self.folders,
            max_nesting: self.max_nesting,
        }
    }
}

/// Open an archive found at nesting `level` and count its members.
///
/// The summary is only produced when the whole archive lists cleanly;
/// any failure discards the partial tally for this archive.
pub fn inspect_archive(
    path: &Path,
    format: ArchiveFormat,
    level: u32,
) -> Result<ArchiveSummary, ArchiveError> {
    let counts = match format {
        ArchiveFormat::Zip => inspect_zip(path, level)?,
        ArchiveFormat::Rar => inspect_rar(path, level)?,
        ArchiveFormat::SevenZ => inspect_sevenz(path, level)?,
        ArchiveFormat::Tar => inspect_tar(path, format, File::open(path).map_err(|e| ArchiveError::io(path, e))?, level)?,
        ArchiveFormat::TarGz => {
            let file = File::open(path).map_err(|e| ArchiveError::io(path, e))?;
            inspect_tar(path, format, flate2::read::GzDecoder::new(file), level)?
        }
        ArchiveFormat::TarXz => {
            let file = File::open(path).map_err(|e| ArchiveError::io(path, e))?;
            inspect_tar(path, format, xz2::read::XzDecoder::new(file), level)?
        }
        ArchiveFormat::TarBz2 => {
            let file = File::open(path).map_err(|e| ArchiveError::io(path, e))?;
            inspect_tar(path, format, bzip2::read::BzDecoder::new(file), level)?
        }
    };

    Ok(counts.into_summary(path, format))
}

fn inspect_zip(path: &Path, level: u32) -> Result<MemberCounts, ArchiveError> {
    let file = File::open(path).map_err(|e| ArchiveError::io(path, e))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| ArchiveError::format(path, ArchiveFormat::Zip, e))?;

    let mut counts = MemberCounts::new(level);
    for index in 0..archive.len() {
        let entry = archive
            .by_index(index)
            .map_err(|e| ArchiveError::format(path, ArchiveFormat::Zip, e))?;
        counts.record(entry.name(), entry.is_dir());
    }
    Ok(counts)
}

fn inspect_rar(path: &Path, level: u32) -> Result<MemberCounts, ArchiveError> {
    let archive = unrar::Archive::new(&path)
        .open_for_listing()
        .map_err(|e| ArchiveError::format(path, ArchiveFormat::Rar, e))?;

    let mut counts = MemberCounts::new(level);
    for header in archive {
        let header = header.map_err(|e| ArchiveError::format(path, ArchiveFormat::Rar, e))?;
        let name = header.filename.to_string_lossy().replace('\\', "/");
        counts.record(&name, header.is_directory());
    }
    Ok(counts)
}

fn inspect_sevenz(path: &Path, level: u32) -> Result<MemberCounts, ArchiveError> {
    let reader = sevenz_rust::SevenZReader::open(path, sevenz_rust::Password::empty())
        .map_err(|e| ArchiveError::format(path, ArchiveFormat::SevenZ, e))?;

    let mut counts = MemberCounts::new(level);
    for entry in &reader.archive().files {
        counts.record(entry.name(), entry.is_directory());
    }
    Ok(counts)
}

fn inspect_tar<R: Read>(
    path: &Path,
    format: ArchiveFormat,
    reader: R,
    level: u32,
) -> Result<MemberCounts, ArchiveError> {
    let mut archive = tar::Archive::new(reader);
    let entries = archive
        .entries()
        .map_err(|e| ArchiveError::format(path, format, e))?;

    let mut counts = MemberCounts::new(level);
    for entry in entries {
        let entry = entry.map_err(|e| ArchiveError::format(path, format, e))?;
        let name = entry
            .path()
            .map_err(|e| ArchiveError::format(path, format, e))?
            .to_string_lossy()
            .into_owned();
        counts.record(&name, entry.header().entry_type().is_dir());
    }
    Ok(counts)
}
