use std::fs;

use tempfile::TempDir;

use hoardscan_analyze::{
    DuplicateConfig, DuplicateFinder, QUESTION_COUNT, QuizAnswer, classify, run_quiz,
};
use hoardscan_core::{DocCategory, ScanConfig, ScanReport, ScriptedDecisions};

fn scan_report_listing(temp: &TempDir, names: &[&str]) -> ScanReport {
    let mut report = ScanReport::new(ScanConfig::new(temp.path()));
    for name in names {
        report.normal_files.push(temp.path().join(name));
    }
    report
}

#[test]
fn test_duplicate_config_builder() {
    let config = DuplicateConfig::builder()
        .min_size(64u64)
        .max_pairs(3usize)
        .categories(vec![DocCategory::PlainText])
        .build()
        .unwrap();

    assert_eq!(config.min_size, 64);
    assert_eq!(config.max_pairs, 3);
    assert_eq!(config.categories, vec![DocCategory::PlainText]);

    let default_config = DuplicateConfig::default();
    assert_eq!(default_config.min_size, 1);
    assert_eq!(default_config.max_pairs, 0);
}

#[test]
fn test_detection_end_to_end_over_mixed_tree() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("report.txt"), "quarterly numbers").unwrap();
    fs::write(temp.path().join("report_copy.txt"), "quarterly numbers").unwrap();
    fs::write(temp.path().join("todo.md"), "buy milk").unwrap();
    fs::write(temp.path().join("photo.png"), "png bytes").unwrap();

    let report = scan_report_listing(
        &temp,
        &["report.txt", "report_copy.txt", "todo.md", "photo.png"],
    );
    let dups = DuplicateFinder::new().find(&report);

    assert_eq!(dups.pairs.len(), 1);
    assert_eq!(dups.files_hashed, 3); // the png is not a document
    assert_eq!(dups.by_category.get(&DocCategory::PlainText), Some(&1));
}

#[test]
fn test_max_pairs_truncates() {
    let temp = TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "c.txt", "d.txt"] {
        fs::write(temp.path().join(name), "same everywhere").unwrap();
    }

    let report = scan_report_listing(&temp, &["a.txt", "b.txt", "c.txt", "d.txt"]);
    let config = DuplicateConfig::builder().max_pairs(2usize).build().unwrap();
    let dups = DuplicateFinder::with_config(config).find(&report);

    assert_eq!(dups.pairs.len(), 2);
}

#[test]
fn test_quiz_and_classifier_pipeline() {
    let mut provider =
        ScriptedDecisions::new().with_answers([QuizAnswer::Sometimes; QUESTION_COUNT]);
    let score = run_quiz(&mut provider);
    assert_eq!(score.total(), 10);

    let assessment = classify(0, score.total());
    assert_eq!(assessment.psych.label(), "Medium Emotional Hoarding");
    assert_eq!(assessment.overall.label(), "Borderline Digital Hoarder");
}

#[test]
fn test_classifier_fixed_bands_table() {
    // (points, total) -> (system, psych, overall)
    let cases = [
        (0, 0, "Normal", "Low Emotional Hoarding", "Normal User"),
        (0, 5, "Normal", "Low Emotional Hoarding", "Normal User"),
        (
            1,
            6,
            "Normal",
            "Medium Emotional Hoarding",
            "Borderline Digital Hoarder",
        ),
        (
            2,
            0,
            "Borderline",
            "Low Emotional Hoarding",
            "Borderline Digital Hoarder",
        ),
        (
            2,
            12,
            "Borderline",
            "Medium Emotional Hoarding",
            "Borderline Digital Hoarder",
        ),
        (
            3,
            0,
            "Severe",
            "Low Emotional Hoarding",
            "Severe Digital Hoarder",
        ),
        (
            0,
            13,
            "Normal",
            "High Emotional Hoarding",
            "Severe Digital Hoarder",
        ),
        (
            3,
            20,
            "Severe",
            "High Emotional Hoarding",
            "Severe Digital Hoarder",
        ),
    ];

    for (points, total, system, psych, overall) in cases {
        let assessment = classify(points, total);
        assert_eq!(assessment.system.label(), system, "points={points}");
        assert_eq!(assessment.psych.label(), psych, "total={total}");
        assert_eq!(assessment.overall.label(), overall, "({points},{total})");
    }
}
