//! hoardscan - a digital hoarding detector for your downloads folder.
//!
//! Usage:
//!   hoard [PATH]               Full check: scan, duplicates, quiz, verdict
//!   hoard scan [PATH]          Scan and show system-behavior summary
//!   hoard duplicates [PATH]    Find duplicate documents
//!   hoard quiz                 Take the self-report quiz only
//!   hoard merge LEFT RIGHT     Diff and merge two documents interactively
//!   hoard --help               Show help

mod console;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};

use hoardscan_analyze::{DuplicateConfig, DuplicateFinder, DuplicateReport, classify, run_quiz};
use hoardscan_core::{DecisionProvider, DocCategory, ScanConfig, ScanReport};
use hoardscan_ops::{MergeAssistant, MergeConfig};
use hoardscan_scan::Scanner;

use console::ConsoleDecisions;

#[derive(Parser)]
#[command(
    name = "hoardscan",
    version,
    about = "A digital hoarding detector",
    long_about = "hoardscan checks a directory (your Downloads folder by default) for \
                  signs of digital hoarding.\n\n\
                  Run `hoard` for the full check, or use subcommands for the \
                  individual steps."
)]
struct Cli {
    /// Path to check (defaults to the Downloads folder)
    path: Option<PathBuf>,

    /// Skip hidden files and folders
    #[arg(long)]
    no_hidden: bool,

    /// Number of traversal threads (0 = auto)
    #[arg(short = 't', long, default_value = "0")]
    threads: usize,

    /// Delete permanently instead of moving to the system trash
    #[arg(long)]
    no_trash: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan and show the system-behavior summary
    Scan {
        /// Path to scan
        path: Option<PathBuf>,

        /// Maximum directory depth to traverse
        #[arg(short, long)]
        depth: Option<u32>,

        /// Glob patterns to ignore
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Find duplicate documents by content hash
    Duplicates {
        /// Path to scan
        path: Option<PathBuf>,

        /// Minimum file size in bytes to consider
        #[arg(short, long, default_value = "1")]
        min_size: u64,

        /// Review each pair interactively and offer deletion
        #[arg(short, long)]
        review: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Take the ten-question self-report quiz
    Quiz,

    /// Diff two documents of the same kind and merge them interactively
    Merge {
        /// First document
        left: PathBuf,

        /// Second document
        right: PathBuf,

        /// Directory to write the merged document to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let use_trash = !cli.no_trash;

    match cli.command {
        Some(Command::Scan {
            path,
            depth,
            ignore,
            format,
        }) => {
            let config = build_config(path, !cli.no_hidden, cli.threads, depth, ignore)?;
            let report = run_scan(&config)?;
            match format {
                OutputFormat::Text => print_scan_summary(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Some(Command::Duplicates {
            path,
            min_size,
            review,
            format,
        }) => {
            let config = build_config(path, !cli.no_hidden, cli.threads, None, Vec::new())?;
            let report = run_scan(&config)?;
            let duplicates = find_duplicates(&report, min_size);
            match format {
                OutputFormat::Text => print_duplicates(&duplicates),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&duplicates)?),
            }
            if review && duplicates.has_duplicates() {
                review_duplicates(&config.root, &duplicates, use_trash);
            }
        }
        Some(Command::Quiz) => {
            let mut provider = ConsoleDecisions::new();
            let score = run_quiz(&mut provider);
            let assessment = classify(0, score.total());
            println!();
            println!("Quiz total: {} / 20", score.total());
            println!("Self-report: {}", assessment.psych.label());
        }
        Some(Command::Merge {
            left,
            right,
            output,
        }) => {
            run_merge(&left, &right, output, use_trash)?;
        }
        None => {
            let config = build_config(cli.path, !cli.no_hidden, cli.threads, None, Vec::new())?;
            run_full_check(&config, use_trash)?;
        }
    }

    Ok(())
}

/// Assemble a scan config from CLI arguments.
fn build_config(
    path: Option<PathBuf>,
    include_hidden: bool,
    threads: usize,
    max_depth: Option<u32>,
    ignore: Vec<String>,
) -> Result<ScanConfig> {
    let root = match path {
        Some(p) => p,
        None => ScanConfig::downloads().root,
    };
    ScanConfig::builder()
        .root(root)
        .include_hidden(include_hidden)
        .threads(threads)
        .max_depth(max_depth)
        .ignore_patterns(ignore)
        .build()
        .map_err(|e| eyre!("Invalid scan configuration: {e}"))
}

/// Scan the configured root.
fn run_scan(config: &ScanConfig) -> Result<ScanReport> {
    eprintln!("Scanning {}...", config.root.display());
    let scanner = Scanner::new();
    scanner.scan(config).context("Scan failed")
}

/// The default end-to-end check: scan, duplicates, quiz, verdict.
fn run_full_check(config: &ScanConfig, use_trash: bool) -> Result<()> {
    let report = run_scan(config)?;
    print_scan_summary(&report);

    let mut provider = ConsoleDecisions::new();

    let duplicates = find_duplicates(&report, 1);
    print_duplicates(&duplicates);
    if duplicates.has_duplicates() && provider.confirm("Review the duplicate pairs now?") {
        review_duplicates(&config.root, &duplicates, use_trash);
    }

    println!();
    println!("{}", "─".repeat(60));
    println!(" Self-Report Quiz");
    println!("{}", "─".repeat(60));
    println!(" Answer each question with 0 (never), 1 (sometimes) or 2 (always).");
    let score = run_quiz(&mut provider);

    let assessment = classify(report.system_points(), score.total());

    println!();
    println!("{}", "─".repeat(60));
    println!(" Verdict");
    println!("{}", "─".repeat(60));
    println!(
        " System behavior: {} ({} of 4 points)",
        assessment.system.label(),
        assessment.system_points
    );
    println!(
        " Self-report:     {} ({} of 20 points)",
        assessment.psych.label(),
        assessment.quiz_total
    );
    println!();
    println!(" => {}", assessment.overall.label());
    println!();
    for line in assessment.overall.advice().lines() {
        println!(" {line}");
    }

    Ok(())
}

/// Hash documents in the scan report and pair up identical ones.
fn find_duplicates(report: &ScanReport, min_size: u64) -> DuplicateReport {
    eprintln!("Hashing documents...");
    let config = DuplicateConfig::builder()
        .min_size(min_size)
        .build()
        .unwrap_or_default();
    DuplicateFinder::with_config(config).find(report)
}

/// Walk the duplicate pairs interactively, offering deletion.
fn review_duplicates(root: &Path, duplicates: &DuplicateReport, use_trash: bool) {
    let mut config = MergeConfig::for_root(root);
    config.use_trash = use_trash;
    let assistant = MergeAssistant::with_config(config);
    let mut provider = ConsoleDecisions::new();
    let outcome = assistant.review(&duplicates.pairs, &mut provider);

    println!();
    println!(
        " Reviewed {} pair(s): {} deleted, {} kept",
        outcome.reviewed, outcome.deleted, outcome.kept
    );
    if outcome.stopped_early {
        println!(" Review stopped early.");
    }
    for failure in &outcome.failures {
        println!(" Warning: {}", failure.message);
    }
}

/// Diff two same-kind documents and merge them region by region.
fn run_merge(left: &Path, right: &Path, output: Option<PathBuf>, use_trash: bool) -> Result<()> {
    let left_kind = DocCategory::from_path(left)
        .ok_or_else(|| eyre!("{} is not a supported document", left.display()))?;
    let right_kind = DocCategory::from_path(right)
        .ok_or_else(|| eyre!("{} is not a supported document", right.display()))?;
    if left_kind != right_kind {
        return Err(eyre!(
            "Cannot merge a {} with a {}",
            left_kind.label(),
            right_kind.label()
        ));
    }

    let output_dir = match output {
        Some(dir) => dir,
        None => left
            .parent()
            .map(|p| p.join("merged"))
            .unwrap_or_else(|| PathBuf::from("merged")),
    };

    let config = MergeConfig::builder()
        .output_dir(output_dir)
        .use_trash(use_trash)
        .build()
        .map_err(|e| eyre!("Invalid merge configuration: {e}"))?;
    let assistant = MergeAssistant::with_config(config);
    let mut provider = ConsoleDecisions::new();

    let outcome = assistant
        .review_divergent(left, right, left_kind, &mut provider)
        .context("Merge failed")?;

    println!();
    if outcome.regions == 0 {
        println!(" The documents have identical content; nothing to merge.");
    } else if let Some(path) = &outcome.merged_path {
        println!(" Merged document written to {}", path.display());
        if outcome.inputs_deleted {
            println!(" Both source files were deleted.");
        }
        for failure in &outcome.failures {
            println!(" Warning: {}", failure.message);
        }
    } else {
        println!(" No merged document was written.");
    }

    Ok(())
}

/// Print the scan half of the report.
fn print_scan_summary(report: &ScanReport) {
    let when = chrono::DateTime::<chrono::Local>::from(report.scanned_at);

    println!();
    println!("{}", "─".repeat(60));
    println!(" {}", report.config.root.display());
    println!(
        " Scanned {} in {:.2}s",
        when.format("%Y-%m-%d %H:%M:%S"),
        report.scan_duration.as_secs_f64()
    );
    println!("{}", "─".repeat(60));
    println!(" {:<28} {:>10}", "Files", report.normal_files.len());
    println!(" {:<28} {:>10}", "Folders", report.normal_folders.len());
    println!(" {:<28} {:>10}", "Archives", report.archives.len());
    println!(" {:<28} {:>10}", "Files inside archives", report.files_in_archives);
    println!(" {:<28} {:>10}", "Folders inside archives", report.folders_in_archives);
    println!(" {:<28} {:>10}", "Deepest archive nesting", report.max_nesting_depth);
    println!();
    println!(
        " System points: {} of {}",
        report.system_points(),
        hoardscan_core::SYSTEM_POINTS_MAX
    );

    if report.has_warnings() {
        println!();
        println!(" {} warning(s) during scan:", report.warnings.len());
        for warning in report.warnings.iter().take(10) {
            println!("   {}", warning.message);
        }
        if report.warnings.len() > 10 {
            println!("   ... and {} more", report.warnings.len() - 10);
        }
    }
}

/// Print the duplicate report.
fn print_duplicates(duplicates: &DuplicateReport) {
    println!();
    println!("{}", "─".repeat(60));
    println!(" Duplicate Documents");
    println!("{}", "─".repeat(60));

    if duplicates.pairs.is_empty() {
        println!(" No duplicate documents found.");
    } else {
        let wasted: u64 = duplicates.pairs.iter().map(|p| p.size).sum();
        println!(
            " Found {} duplicate pair(s), {} reclaimable",
            duplicates.pairs.len(),
            format_size(wasted)
        );
        println!();
        for (i, pair) in duplicates.pairs.iter().enumerate() {
            println!(
                " {}. [{}] {} ({})",
                i + 1,
                pair.category,
                format_size(pair.size),
                pair.hash.short_hex()
            );
            println!("      original:  {}", pair.original.display());
            println!("      duplicate: {}", pair.duplicate.display());
        }
    }

    println!();
    println!(
        " Hashed {} file(s), {} total",
        duplicates.files_hashed,
        format_size(duplicates.bytes_hashed)
    );
    for skipped in &duplicates.skipped {
        println!(" Skipped: {}", skipped.message);
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
