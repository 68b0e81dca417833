//! Text renderings of a diff result.

use std::fmt::Write;

use crate::diff::{DiffLine, DiffStats};

/// Formats a diff as a table: old line number, new line number, marker and
/// content, one row per record.
///
/// Line numbers that do not apply to a record (the old number of an
/// insertion, the new number of a deletion) are left blank.
#[must_use]
pub fn render_table(lines: &[DiffLine]) -> String {
    let widest = lines
        .iter()
        .flat_map(|line| [line.line_old(), line.line_new()])
        .flatten()
        .max()
        .unwrap_or(0);
    let width = widest.to_string().len();

    let mut output = String::new();
    for line in lines {
        let old = line.line_old().map(|n| n.to_string()).unwrap_or_default();
        let new = line.line_new().map(|n| n.to_string()).unwrap_or_default();
        let _ = writeln!(
            output,
            "{old:>width$} {new:>width$} {} {}",
            line.kind().marker(),
            line.content()
        );
    }
    output
}

/// Formats a diff in unified style (similar to `diff -u` with full context).
///
/// # Arguments
///
/// * `old_label` - Name of the original text (for headers).
/// * `new_label` - Name of the modified text (for headers).
/// * `lines` - The diff records.
#[must_use]
pub fn render_unified(old_label: &str, new_label: &str, lines: &[DiffLine]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "--- {old_label}");
    let _ = writeln!(output, "+++ {new_label}");

    for line in lines {
        output.push(line.kind().marker());
        output.push_str(line.content());
        output.push('\n');
    }

    output
}

/// One-line summary of the counts, e.g. `+1 added, -2 removed, 3 unchanged`.
#[must_use]
pub fn render_summary(stats: &DiffStats) -> String {
    format!(
        "+{} added, -{} removed, {} unchanged",
        stats.added, stats.removed, stats.unchanged
    )
}
