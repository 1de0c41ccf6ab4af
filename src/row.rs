//! Row representation and line splitting.

/// An ordered list of trimmed field strings from one non-blank line.
///
/// A row carries exactly as many fields as the split produced; no padding,
/// no truncation, and no width agreement with neighboring rows.
pub type Row = Vec<String>;

/// Whether a line is blank after trimming. Blank lines are skipped by
/// every parse operation and never appear in a result.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split one line on `,` and trim each field.
///
/// Plain split, no quote awareness.
pub(crate) fn split_line(line: &str) -> Row {
    line.split(',').map(|field| field.trim().to_string()).collect()
}
