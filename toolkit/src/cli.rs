//! Command line interface.
//!
//! `devtoolkit diff OLD NEW` prints the line diff of two files and
//! `devtoolkit serve` runs the HTTP API.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use diff_engine::render::{render_summary, render_table, render_unified};

use crate::checker::{DiffChecker, DiffReport};
use crate::infrastructure::config::DiffSettings;

/// Message printed when the compared texts have the same lines.
pub const IDENTICAL_MESSAGE: &str = "Both texts are identical - no differences found.";

/// Developer utilities: line diff checker.
#[derive(Debug, Parser)]
#[command(name = "devtoolkit", version, about)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two text files line by line
    Diff {
        /// Original file
        old: PathBuf,
        /// Modified file
        new: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Compare in the reverse direction (modified against original)
        #[arg(long)]
        swap: bool,
    },

    /// Run the HTTP API
    Serve,
}

/// How `diff` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line numbers, marker and content per row, then a summary.
    Table,
    /// `---`/`+++` headers and marked lines, then a summary.
    Unified,
    /// The report as JSON.
    Json,
}

/// Reads both files and compares them.
///
/// # Errors
///
/// Returns an error if a file cannot be read as UTF-8 or the comparison is
/// refused.
pub fn diff_files(
    old: &Path,
    new: &Path,
    swap: bool,
    limits: &DiffSettings,
) -> anyhow::Result<DiffReport> {
    let old_text =
        fs::read_to_string(old).with_context(|| format!("Failed to read {}", old.display()))?;
    let new_text =
        fs::read_to_string(new).with_context(|| format!("Failed to read {}", new.display()))?;

    let mut checker = DiffChecker::new(limits.clone());
    checker.set_old_text(old_text);
    checker.set_new_text(new_text);
    if swap {
        checker.swap()?;
    }
    Ok(checker.compare()?.clone())
}

/// Renders a report in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(
    report: &DiffReport,
    format: OutputFormat,
    old_label: &str,
    new_label: &str,
) -> anyhow::Result<String> {
    let body = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            return Ok(json);
        }
        OutputFormat::Table => render_table(report.lines()),
        OutputFormat::Unified => render_unified(old_label, new_label, report.lines()),
    };

    let mut output = body;
    output.push('\n');
    output.push_str(&render_summary(report.stats()));
    output.push('\n');
    if report.is_identical() {
        output.push_str(IDENTICAL_MESSAGE);
        output.push('\n');
    }
    Ok(output)
}
