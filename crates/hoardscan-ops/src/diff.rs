//! Line-level diffing between two documents.
//!
//! Differing regions come from a line-level diff; single-line
//! replacements additionally carry a character-level rendering so the
//! provider can show exactly what changed inside the line.

use similar::{Algorithm, ChangeTag, DiffOp, DiffTag, TextDiff, capture_diff_slices};

use hoardscan_core::{DecisionProvider, DiffRegion, RegionChoice};

/// Compute the differing regions between two line vectors.
///
/// Equal runs contribute nothing; each delete, insert or replace op
/// becomes one region.
pub fn diff_regions(left: &[String], right: &[String]) -> Vec<DiffRegion> {
    let ops = capture_diff_slices(Algorithm::Myers, left, right);
    let mut regions = Vec::new();

    for op in &ops {
        if op.tag() == DiffTag::Equal {
            continue;
        }
        regions.push(region_from_op(op, left, right, regions.len()));
    }
    regions
}

fn region_from_op(op: &DiffOp, left: &[String], right: &[String], index: usize) -> DiffRegion {
    let left_lines: Vec<String> = left[op.old_range()].to_vec();
    let right_lines: Vec<String> = right[op.new_range()].to_vec();

    let inline_hint = if left_lines.len() == 1 && right_lines.len() == 1 {
        Some(inline_hint(&left_lines[0], &right_lines[0]))
    } else {
        None
    };

    DiffRegion {
        index,
        left_start: op.old_range().start + 1,
        left: left_lines,
        right_start: op.new_range().start + 1,
        right: right_lines,
        inline_hint,
    }
}

/// Render a character-level diff of two lines with `[-..-]` and `{+..+}`
/// markers.
fn inline_hint(left: &str, right: &str) -> String {
    let diff = TextDiff::from_chars(left, right);
    let mut out = String::new();
    let mut pending: Option<(ChangeTag, String)> = None;

    let mut flush = |out: &mut String, pending: &mut Option<(ChangeTag, String)>| {
        if let Some((tag, text)) = pending.take() {
            match tag {
                ChangeTag::Delete => {
                    out.push_str("[-");
                    out.push_str(&text);
                    out.push_str("-]");
                }
                ChangeTag::Insert => {
                    out.push_str("{+");
                    out.push_str(&text);
                    out.push_str("+}");
                }
                ChangeTag::Equal => out.push_str(&text),
            }
        }
    };

    for change in diff.iter_all_changes() {
        let tag = change.tag();
        match &mut pending {
            Some((current, text)) if *current == tag => text.push_str(change.value()),
            _ => {
                flush(&mut out, &mut pending);
                pending = Some((tag, change.value().to_owned()));
            }
        }
    }
    flush(&mut out, &mut pending);
    out
}

/// Walk the diff and build the merged line vector, asking the provider
/// to resolve each differing region.
pub fn resolve(
    left: &[String],
    right: &[String],
    provider: &mut dyn DecisionProvider,
) -> (Vec<String>, usize) {
    let ops = capture_diff_slices(Algorithm::Myers, left, right);
    let mut merged = Vec::new();
    let mut region_index = 0;

    for op in &ops {
        if op.tag() == DiffTag::Equal {
            merged.extend_from_slice(&left[op.old_range()]);
            continue;
        }

        let region = region_from_op(op, left, right, region_index);
        region_index += 1;

        match provider.resolve_region(&region) {
            RegionChoice::Left => merged.extend_from_slice(&region.left),
            RegionChoice::Right => merged.extend_from_slice(&region.right),
            RegionChoice::Both => {
                merged.extend_from_slice(&region.left);
                merged.extend_from_slice(&region.right);
            }
            RegionChoice::Custom(text) => {
                merged.extend(text.lines().map(str::to_owned));
            }
        }
    }

    (merged, region_index)
}
