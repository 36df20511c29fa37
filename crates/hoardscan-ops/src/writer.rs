//! Merged document writers.
//!
//! A merged document is written in the category's own format: joined
//! text, one paragraph per line for word documents, or drawn text lines
//! on generated PDF pages.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph, Run};
use printpdf::{BuiltinFont, Mm, PdfDocument};

use hoardscan_core::DocCategory;

use crate::error::MergeError;

/// Write merged lines to `output_dir` as `merged_<stem>.<ext>`.
///
/// The output directory is created on first use; creation only happens
/// once a save was confirmed, so declining a merge creates nothing.
pub fn write_merged(
    stem: &str,
    lines: &[String],
    category: DocCategory,
    output_dir: &Path,
) -> Result<PathBuf, MergeError> {
    std::fs::create_dir_all(output_dir).map_err(|e| MergeError::io(output_dir, e))?;
    let path = output_dir.join(format!("merged_{stem}.{}", category.merged_extension()));

    match category {
        DocCategory::PlainText => write_text(&path, lines)?,
        DocCategory::WordDoc => write_docx(&path, lines)?,
        DocCategory::Pdf => write_pdf(&path, lines, stem)?,
    }
    Ok(path)
}

fn write_text(path: &Path, lines: &[String]) -> Result<(), MergeError> {
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(path, content).map_err(|e| MergeError::io(path, e))
}

fn write_docx(path: &Path, lines: &[String]) -> Result<(), MergeError> {
    let file = File::create(path).map_err(|e| MergeError::io(path, e))?;

    let mut docx = Docx::new();
    for line in lines {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line.as_str())));
    }

    docx.build()
        .pack(file)
        .map_err(|e| MergeError::write(path, e))
}

fn write_pdf(path: &Path, lines: &[String], title: &str) -> Result<(), MergeError> {
    // A4 with a fixed line grid; a new page starts when one fills up.
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(210.0), Mm(297.0), "text");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| MergeError::write(path, e))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = 282.0;

    for line in lines {
        if y < 15.0 {
            let (page, layer_index) = doc.add_page(Mm(210.0), Mm(297.0), "text");
            layer = doc.get_page(page).get_layer(layer_index);
            y = 282.0;
        }
        layer.use_text(line.as_str(), 11.0, Mm(15.0), Mm(y), &font);
        y -= 6.0;
    }

    let file = File::create(path).map_err(|e| MergeError::io(path, e))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| MergeError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_write_text_joins_lines() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("merged");

        let written = write_merged(
            "notes",
            &lines(&["one", "two"]),
            DocCategory::PlainText,
            &out_dir,
        )
        .unwrap();

        assert!(written.ends_with("merged_notes.txt"));
        assert_eq!(std::fs::read_to_string(&written).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_write_docx_produces_file() {
        let temp = TempDir::new().unwrap();
        let written = write_merged(
            "report",
            &lines(&["alpha", "beta"]),
            DocCategory::WordDoc,
            temp.path(),
        )
        .unwrap();

        assert!(written.ends_with("merged_report.docx"));
        assert!(std::fs::metadata(&written).unwrap().len() > 0);
    }

    #[test]
    fn test_write_pdf_spans_pages() {
        let temp = TempDir::new().unwrap();
        // More lines than fit one page.
        let many: Vec<String> = (0..120).map(|i| format!("line {i}")).collect();

        let written = write_merged("long", &many, DocCategory::Pdf, temp.path()).unwrap();

        assert!(written.ends_with("merged_long.pdf"));
        let bytes = std::fs::read(&written).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_output_dir_is_created() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/merged");

        write_merged("x", &lines(&["y"]), DocCategory::PlainText, &nested).unwrap();
        assert!(nested.is_dir());
    }
}
