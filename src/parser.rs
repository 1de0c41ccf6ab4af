//! Synchronous parse operations over a line source.

use std::io::BufRead;

use crate::error::ParseError;
use crate::row::{self, Row};
use crate::schema::RowSchema;
use crate::source::LineSource;

/// Read every non-blank line of `source` as a row of trimmed fields.
///
/// Each line is split on `,` and each field trimmed; rows keep whatever
/// width the split produced, so widths may differ across the source.
/// Lines that are empty after trimming are skipped.
///
/// Fails with [`ParseError::SourceUnavailable`] if the source cannot be
/// opened or read; malformed rows are never errors in this untyped mode.
pub fn read_rows(source: &dyn LineSource) -> Result<Vec<Row>, ParseError> {
    let reader = source.open().map_err(|e| ParseError::SourceUnavailable {
        target: source.id().to_string(),
        source: e,
    })?;

    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| ParseError::SourceUnavailable {
            target: source.id().to_string(),
            source: e,
        })?;

        if row::is_blank(&line) {
            continue;
        }
        rows.push(row::split_line(&line));
    }

    Ok(rows)
}

/// Read every non-blank line of `source` and validate it through `schema`.
///
/// Rows are processed in source order. The first row the schema rejects
/// fails the whole call with [`ParseError::Validation`]: records
/// accumulated so far are dropped and no further lines are read.
pub fn read_records<S>(source: &dyn LineSource, schema: &S) -> Result<Vec<S::Record>, ParseError>
where
    S: RowSchema,
{
    let reader = source.open().map_err(|e| ParseError::SourceUnavailable {
        target: source.id().to_string(),
        source: e,
    })?;

    let mut records = Vec::new();
    for (offset, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ParseError::SourceUnavailable {
            target: source.id().to_string(),
            source: e,
        })?;

        if row::is_blank(&line) {
            continue;
        }
        let fields = row::split_line(&line);
        match schema.validate(&fields) {
            Ok(record) => records.push(record),
            Err(violation) => {
                return Err(ParseError::Validation {
                    target: source.id().to_string(),
                    line: offset + 1,
                    fields,
                    violation,
                });
            }
        }
    }

    Ok(records)
}
