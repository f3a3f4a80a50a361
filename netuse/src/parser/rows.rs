//! Reassembly of logical rows from the table body.
//!
//! `NET USE` wraps a row onto a second, indented line when the remote path
//! is too wide for its column. The wrapped text always belongs to the last
//! column.

use tracing::warn;

use super::columns::{Column, separator_index};
use crate::table::{NetUseRow, NetUseTable};

/// Line printed after the last row of a populated table.
pub const TERMINATOR_LINE: &str = "The command completed successfully.";

/// Returns the body lines: everything after the separator up to the
/// terminator, a blank line, or the end of input.
pub(crate) fn body_lines<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let Some(separator) = separator_index(lines) else {
        return &[];
    };
    let rest = &lines[separator + 1..];
    let end = rest
        .iter()
        .position(|line| line.is_empty() || *line == TERMINATOR_LINE)
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Builds a table from body lines, merging two-line rows.
pub(crate) fn build_table(columns: &[Column], body: &[&str]) -> NetUseTable {
    let mut table = NetUseTable::new();
    for (index, &line) in body.iter().enumerate() {
        if is_continuation(line) {
            let follows_row_start = index > 0 && !is_continuation(body[index - 1]);
            if !follows_row_start {
                warn!(line = index, "skipping continuation line without a row to extend");
            }
            continue;
        }

        let next = body.get(index + 1).copied().unwrap_or_default();
        let row = if is_continuation(next) {
            parse_multiline_row(line, next, columns)
        } else {
            parse_singleline_row(line, columns)
        };
        table.add_row(row);
    }
    table
}

fn is_continuation(line: &str) -> bool {
    line.starts_with(char::is_whitespace)
}

fn parse_singleline_row(line: &str, columns: &[Column]) -> NetUseRow {
    NetUseRow::from_raw_fields(
        columns
            .iter()
            .map(|column| (column.name.as_str(), column.extract(line))),
    )
}

/// Joins a wrapped row into one line and re-bounds the last two columns
/// around the join point.
fn parse_multiline_row(first: &str, second: &str, columns: &[Column]) -> NetUseRow {
    let joined = format!("{first} {}", second.trim());
    let width = first.chars().count();

    let mut adjusted = columns.to_vec();
    let count = adjusted.len();
    if count >= 2 {
        adjusted[count - 2].end = Some(width);
    }
    if let Some(last) = adjusted.last_mut() {
        last.start = width + 1;
    }
    parse_singleline_row(&joined, &adjusted)
}
