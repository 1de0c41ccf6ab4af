//! Asynchronous parse operations over an async line source.
//!
//! These mirror [`read_rows`](crate::parser::read_rows) and
//! [`read_records`](crate::parser::read_records) but fetch lines through
//! tokio, suspending at each line boundary. Each call runs as a single
//! logical task: lines are processed strictly in order and the result is
//! fully materialized before it is returned.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::ParseError;
use crate::row::{self, Row};
use crate::schema::RowSchema;
use crate::source::AsyncLineSource;

/// Async counterpart of [`read_rows`](crate::parser::read_rows).
pub async fn read_rows_async(source: &dyn AsyncLineSource) -> Result<Vec<Row>, ParseError> {
    let reader = source
        .open()
        .await
        .map_err(|e| ParseError::SourceUnavailable {
            target: source.id().to_string(),
            source: e,
        })?;

    let mut lines = BufReader::new(reader).lines();
    let mut rows = Vec::new();
    loop {
        let line = lines
            .next_line()
            .await
            .map_err(|e| ParseError::SourceUnavailable {
                target: source.id().to_string(),
                source: e,
            })?;
        let Some(line) = line else { break };

        if row::is_blank(&line) {
            continue;
        }
        rows.push(row::split_line(&line));
    }

    Ok(rows)
}

/// Async counterpart of [`read_records`](crate::parser::read_records).
///
/// The first row the schema rejects fails the whole call; no further
/// lines are fetched from the source.
pub async fn read_records_async<S>(
    source: &dyn AsyncLineSource,
    schema: &S,
) -> Result<Vec<S::Record>, ParseError>
where
    S: RowSchema,
{
    let reader = source
        .open()
        .await
        .map_err(|e| ParseError::SourceUnavailable {
            target: source.id().to_string(),
            source: e,
        })?;

    let mut lines = BufReader::new(reader).lines();
    let mut records = Vec::new();
    let mut line_number = 0usize;
    loop {
        let line = lines
            .next_line()
            .await
            .map_err(|e| ParseError::SourceUnavailable {
                target: source.id().to_string(),
                source: e,
            })?;
        let Some(line) = line else { break };
        line_number += 1;

        if row::is_blank(&line) {
            continue;
        }
        let fields = row::split_line(&line);
        match schema.validate(&fields) {
            Ok(record) => records.push(record),
            Err(violation) => {
                return Err(ParseError::Validation {
                    target: source.id().to_string(),
                    line: line_number,
                    fields,
                    violation,
                });
            }
        }
    }

    Ok(records)
}
