//! Per-category document text extraction.

use std::path::Path;

use docx_rs::DocumentChild;

use hoardscan_core::DocCategory;

use crate::error::MergeError;

/// Extract a document's text as a vector of lines.
///
/// Plain text is read directly; PDFs go through the page text
/// extractor; word documents yield one line per paragraph. Extraction
/// failures are errors the caller skips the pair on.
pub fn extract_lines(path: &Path, category: DocCategory) -> Result<Vec<String>, MergeError> {
    match category {
        DocCategory::PlainText => extract_text(path),
        DocCategory::Pdf => extract_pdf(path),
        DocCategory::WordDoc => extract_docx(path),
    }
}

fn extract_text(path: &Path) -> Result<Vec<String>, MergeError> {
    let content = std::fs::read_to_string(path).map_err(|e| MergeError::io(path, e))?;
    Ok(content.lines().map(str::to_owned).collect())
}

fn extract_pdf(path: &Path) -> Result<Vec<String>, MergeError> {
    let text = pdf_extract::extract_text(path).map_err(|e| MergeError::extract(path, e))?;
    let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_owned()).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

fn extract_docx(path: &Path) -> Result<Vec<String>, MergeError> {
    let bytes = std::fs::read(path).map_err(|e| MergeError::io(path, e))?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| MergeError::extract(path, e))?;

    let lines = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(p.raw_text()),
            _ => None,
        })
        .collect();
    Ok(lines)
}
