//! Splitting text blobs into line sequences.

/// Splits `text` on `'\n'` into the line sequence the engine compares.
///
/// An empty text is one empty line, never an empty sequence, and a trailing
/// newline produces a trailing empty line. Carriage returns are kept as part
/// of the line content.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Number of lines `text` splits into, or `None` for an empty text.
#[must_use]
pub fn line_count(text: &str) -> Option<usize> {
    if text.is_empty() {
        None
    } else {
        Some(text.split('\n').count())
    }
}
