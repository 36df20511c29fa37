use std::path::PathBuf;

use hoardscan_core::{
    ArchiveFormat, ArchiveSummary, ContentHash, DecisionProvider, DocCategory, QuizAnswer,
    ScanConfig, ScanReport, ScanWarning, ScriptedDecisions, WarningKind,
};

#[test]
fn test_report_serializes_round_trip() {
    let mut report = ScanReport::new(ScanConfig::new("/tmp/downloads"));
    report.normal_files.push(PathBuf::from("/tmp/downloads/a.txt"));
    report.normal_folders.push(PathBuf::from("/tmp/downloads/sub"));
    report.record_archive(ArchiveSummary {
        path: PathBuf::from("/tmp/downloads/x.zip"),
        format: ArchiveFormat::Zip,
        entry_files: 7,
        entry_folders: 2,
        max_nesting: 3,
    });
    report
        .warnings
        .push(ScanWarning::unreadable_archive("/tmp/downloads/bad.rar", "truncated"));

    let json = serde_json::to_string(&report).unwrap();
    let back: ScanReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.normal_files.len(), 1);
    assert_eq!(back.files_in_archives, 7);
    assert_eq!(back.max_nesting_depth, 3);
    assert_eq!(back.warnings[0].kind, WarningKind::ArchiveUnreadable);
}

#[test]
fn test_category_and_format_do_not_overlap() {
    // An archive is never a document and vice versa.
    for name in ["a.zip", "b.rar", "c.7z", "d.tar.gz"] {
        let path = PathBuf::from(name);
        assert!(ArchiveFormat::from_path(&path).is_some());
        assert!(DocCategory::from_path(&path).is_none());
    }
    for name in ["a.txt", "b.pdf", "c.docx"] {
        let path = PathBuf::from(name);
        assert!(DocCategory::from_path(&path).is_some());
        assert!(ArchiveFormat::from_path(&path).is_none());
    }
}

#[test]
fn test_content_hash_display_matches_hex() {
    let hash = ContentHash::new([0x0f; 32]);
    assert_eq!(format!("{hash}"), hash.to_hex());
}

#[test]
fn test_scripted_quiz_answers_in_order() {
    let mut script = ScriptedDecisions::new().with_answers([
        QuizAnswer::Never,
        QuizAnswer::Sometimes,
        QuizAnswer::Always,
    ]);

    let total: u8 = (1..=3)
        .map(|n| script.quiz_answer(n, "question").points())
        .sum();
    assert_eq!(total, 3);
}
