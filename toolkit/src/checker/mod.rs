//! Diff checker session.
//!
//! Holds the two texts of the Diff Checker tool and the diff currently on
//! show. Editing either text hides the diff; swapping keeps it on show and
//! recomputes it for the exchanged texts.
//!
//! # Example
//!
//! ```
//! use devtoolkit::checker::DiffChecker;
//! use devtoolkit::infrastructure::config::DiffSettings;
//!
//! let mut checker = DiffChecker::new(DiffSettings::default());
//! checker.set_old_text("a\nb");
//! checker.set_new_text("a\nb\nc");
//! let report = checker.compare().expect("within limits");
//! assert_eq!(report.stats().added, 1);
//! ```

mod error;
mod report;

pub use error::{CheckerError, Side};
pub use report::DiffReport;

use diff_engine::{DiffAlgorithm, LcsDiff, split_lines};
use tracing::{debug, instrument};

use crate::infrastructure::config::DiffSettings;

/// Validates both texts against `limits` and diffs them with `algorithm`.
///
/// # Errors
///
/// Returns `CheckerError::NothingToCompare` if both texts are empty,
/// `CheckerError::TooManyLines` if either text exceeds `limits.max_lines` and
/// `CheckerError::TableTooLarge` if the LCS table would exceed
/// `limits.max_cells`.
pub fn check_texts<A: DiffAlgorithm + ?Sized>(
    algorithm: &A,
    limits: &DiffSettings,
    old_text: &str,
    new_text: &str,
) -> Result<DiffReport, CheckerError> {
    if old_text.is_empty() && new_text.is_empty() {
        return Err(CheckerError::NothingToCompare);
    }

    let old = split_lines(old_text);
    let new = split_lines(new_text);
    for (side, lines) in [(Side::Original, old.len()), (Side::Modified, new.len())] {
        if lines > limits.max_lines {
            return Err(CheckerError::TooManyLines {
                side,
                lines,
                max: limits.max_lines,
            });
        }
    }

    let cells = DiffSettings::table_cells(old.len(), new.len());
    if cells > limits.max_cells {
        return Err(CheckerError::TableTooLarge {
            cells,
            max: limits.max_cells,
        });
    }

    Ok(DiffReport::from_lines(algorithm.diff(&old, &new)))
}

/// State of one diff checker: the two texts and the diff on show.
#[derive(Debug, Clone)]
pub struct DiffChecker<A = LcsDiff> {
    algorithm: A,
    limits: DiffSettings,
    old_text: String,
    new_text: String,
    report: Option<DiffReport>,
}

impl DiffChecker<LcsDiff> {
    /// Creates an empty checker using the LCS engine.
    #[must_use]
    pub fn new(limits: DiffSettings) -> Self {
        Self::with_algorithm(LcsDiff::new(), limits)
    }
}

impl<A: DiffAlgorithm> DiffChecker<A> {
    /// Creates an empty checker using `algorithm`.
    #[must_use]
    pub fn with_algorithm(algorithm: A, limits: DiffSettings) -> Self {
        Self {
            algorithm,
            limits,
            old_text: String::new(),
            new_text: String::new(),
            report: None,
        }
    }

    /// The original text.
    #[must_use]
    pub fn old_text(&self) -> &str {
        &self.old_text
    }

    /// The modified text.
    #[must_use]
    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    /// Replaces the original text and hides the diff.
    pub fn set_old_text(&mut self, text: impl Into<String>) {
        self.old_text = text.into();
        self.report = None;
    }

    /// Replaces the modified text and hides the diff.
    pub fn set_new_text(&mut self, text: impl Into<String>) {
        self.new_text = text.into();
        self.report = None;
    }

    /// Line count of the original text, `None` while it is empty.
    #[must_use]
    pub fn old_line_count(&self) -> Option<usize> {
        diff_engine::line_count(&self.old_text)
    }

    /// Line count of the modified text, `None` while it is empty.
    #[must_use]
    pub fn new_line_count(&self) -> Option<usize> {
        diff_engine::line_count(&self.new_text)
    }

    /// False while both texts are empty.
    #[must_use]
    pub fn can_compare(&self) -> bool {
        !self.old_text.is_empty() || !self.new_text.is_empty()
    }

    /// The diff on show, if any.
    #[must_use]
    pub fn report(&self) -> Option<&DiffReport> {
        self.report.as_ref()
    }

    /// Diffs the two texts and puts the result on show.
    ///
    /// # Errors
    ///
    /// See [`check_texts`]. On error the previous diff stays hidden.
    #[instrument(
        level = "debug",
        skip(self),
        fields(old_chars = self.old_text.len(), new_chars = self.new_text.len())
    )]
    pub fn compare(&mut self) -> Result<&DiffReport, CheckerError> {
        self.report = None;
        let report = check_texts(&self.algorithm, &self.limits, &self.old_text, &self.new_text)?;
        debug!(
            added = report.stats().added,
            removed = report.stats().removed,
            unchanged = report.stats().unchanged,
            "comparison finished"
        );
        Ok(self.report.insert(report))
    }

    /// Exchanges the two texts. A diff on show is recomputed.
    ///
    /// # Errors
    ///
    /// See [`check_texts`].
    pub fn swap(&mut self) -> Result<(), CheckerError> {
        std::mem::swap(&mut self.old_text, &mut self.new_text);
        if self.report.is_some() {
            self.compare()?;
        }
        Ok(())
    }

    /// Empties both texts and hides the diff.
    pub fn clear(&mut self) {
        self.old_text.clear();
        self.new_text.clear();
        self.report = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diff_engine::DiffLine;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Subscriber, span};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::{self, Layer, SubscriberExt};
    use tracing_subscriber::Registry;

    fn checker() -> DiffChecker {
        DiffChecker::new(DiffSettings::default())
    }

    #[test]
    fn test_compare_shows_report() {
        let mut checker = checker();
        checker.set_old_text("a\nb\nc");
        checker.set_new_text("a\nc");
        let report = checker.compare().unwrap().clone();
        assert_eq!(
            report.lines(),
            &[
                DiffLine::equal(1, 1, "a"),
                DiffLine::remove(2, "b"),
                DiffLine::equal(3, 2, "c"),
            ]
        );
        assert_eq!(checker.report(), Some(&report));
    }

    #[test]
    fn test_editing_hides_report() {
        let mut checker = checker();
        checker.set_old_text("a");
        checker.set_new_text("b");
        checker.compare().unwrap();
        checker.set_new_text("c");
        assert!(checker.report().is_none());
    }

    #[test]
    fn test_nothing_to_compare() {
        let mut checker = checker();
        assert!(!checker.can_compare());
        assert_eq!(checker.compare(), Err(CheckerError::NothingToCompare));
    }

    #[test]
    fn test_one_side_empty_is_comparable() {
        let mut checker = checker();
        checker.set_new_text("x");
        assert!(checker.can_compare());
        let report = checker.compare().unwrap();
        assert_eq!(
            report.lines(),
            &[DiffLine::remove(1, ""), DiffLine::add(1, "x")]
        );
    }

    #[test]
    fn test_identical_texts() {
        let mut checker = checker();
        checker.set_old_text("same\ntext");
        checker.set_new_text("same\ntext");
        let report = checker.compare().unwrap();
        assert!(report.is_identical());
        assert_eq!(report.stats().unchanged, 2);
    }

    #[test]
    fn test_swap_recomputes_shown_report() {
        let mut checker = checker();
        checker.set_old_text("a\nb");
        checker.set_new_text("a\nb\nc");
        checker.compare().unwrap();
        checker.swap().unwrap();
        assert_eq!(checker.old_text(), "a\nb\nc");
        assert_eq!(checker.new_text(), "a\nb");
        let stats = checker.report().unwrap().stats();
        assert_eq!((stats.added, stats.removed), (0, 1));
    }

    #[test]
    fn test_swap_without_report_keeps_it_hidden() {
        let mut checker = checker();
        checker.set_old_text("a");
        checker.set_new_text("b");
        checker.swap().unwrap();
        assert_eq!(checker.old_text(), "b");
        assert!(checker.report().is_none());
    }

    #[test]
    fn test_clear() {
        let mut checker = checker();
        checker.set_old_text("a");
        checker.set_new_text("b");
        checker.compare().unwrap();
        checker.clear();
        assert_eq!(checker.old_text(), "");
        assert_eq!(checker.new_text(), "");
        assert!(checker.report().is_none());
        assert_eq!(checker.old_line_count(), None);
    }

    #[test]
    fn test_line_counts() {
        let mut checker = checker();
        checker.set_old_text("one\ntwo\n");
        assert_eq!(checker.old_line_count(), Some(3));
        assert_eq!(checker.new_line_count(), None);
    }

    #[test]
    fn test_line_limit() {
        let mut checker = DiffChecker::new(DiffSettings {
            max_lines: 2,
            ..DiffSettings::default()
        });
        checker.set_old_text("a");
        checker.set_new_text("a\nb\nc");
        assert_eq!(
            checker.compare(),
            Err(CheckerError::TooManyLines {
                side: Side::Modified,
                lines: 3,
                max: 2,
            })
        );
        assert!(checker.report().is_none());
    }

    #[test]
    fn test_table_size_limit() {
        // Each side is well under the line limit, the pair is not.
        let text = "x\n".repeat(3000);
        let result = check_texts(&LcsDiff::new(), &DiffSettings::default(), &text, &text);
        assert_eq!(
            result,
            Err(CheckerError::TableTooLarge {
                cells: 3002 * 3002,
                max: 4_000_000,
            })
        );
    }

    #[test]
    fn test_table_size_limit_boundary() {
        let limits = DiffSettings {
            max_cells: 12,
            ..DiffSettings::default()
        };
        assert!(check_texts(&LcsDiff::new(), &limits, "a\nb", "a\nb\nc").is_ok());
        assert_eq!(
            check_texts(&LcsDiff::new(), &limits, "a\nb", "a\nb\nc\nd"),
            Err(CheckerError::TableTooLarge { cells: 15, max: 12 })
        );
    }

    /// Counts spans that reach the layer.
    struct SpanCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for SpanCounter {
        fn on_new_span(&self, _: &span::Attributes<'_>, _: &span::Id, _: layer::Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn spans_at(level: LevelFilter) -> usize {
        let spans = Arc::new(AtomicUsize::new(0));
        let subscriber =
            Registry::default().with(SpanCounter(Arc::clone(&spans)).with_filter(level));
        tracing::subscriber::with_default(subscriber, || {
            let mut checker = checker();
            checker.set_old_text("a");
            checker.set_new_text("b");
            checker.compare().unwrap();
        });
        spans.load(Ordering::SeqCst)
    }

    #[test]
    fn test_compare_spans_are_debug_level() {
        assert_eq!(spans_at(LevelFilter::INFO), 0);
        assert!(spans_at(LevelFilter::DEBUG) > 0);
    }
}
