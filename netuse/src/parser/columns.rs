//! Fixed-width column layout detection.

use tracing::debug;

use crate::error::{FormatError, Result};

/// A named column addressed by character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Column {
    pub(crate) name: String,
    pub(crate) start: usize,
    /// Exclusive end offset; `None` extends to the end of the line.
    pub(crate) end: Option<usize>,
}

impl Column {
    pub(crate) fn new(name: &str, start: usize, end: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            start,
            end,
        }
    }

    /// Returns this column's trimmed text from `line`.
    ///
    /// Short lines and inverted ranges yield an empty string.
    pub(crate) fn extract(&self, line: &str) -> String {
        let take = match self.end {
            Some(end) if end <= self.start => return String::new(),
            Some(end) => end - self.start,
            None => usize::MAX,
        };
        let value: String = line.chars().skip(self.start).take(take).collect();
        value.trim().to_string()
    }
}

/// Returns `true` for a non-empty line made only of dashes.
pub(crate) fn is_separator_line(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|ch| ch == '-')
}

/// Index of the first separator line, if any.
pub(crate) fn separator_index(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| is_separator_line(line))
}

/// Detects the column layout from the lines preceding the separator.
///
/// The header is the last line before the separator whose first character
/// is alphabetic; earlier lines are banner text.
pub(crate) fn detect_columns(lines: &[&str]) -> Result<Vec<Column>> {
    let separator = separator_index(lines).ok_or(FormatError::MissingSeparator)?;

    let mut candidates = Vec::new();
    for (index, line) in lines[..separator].iter().enumerate() {
        if starts_alphabetic(line) {
            candidates.push(index);
        }
    }
    let header_index = *candidates.last().ok_or(FormatError::MissingHeader)?;

    let columns = columns_from_header(lines[header_index]);
    debug!(
        header_line = header_index,
        columns = ?columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        "detected NET USE column layout"
    );
    Ok(columns)
}

fn starts_alphabetic(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_alphabetic)
}

fn columns_from_header(header: &str) -> Vec<Column> {
    let names: Vec<&str> = header.split_whitespace().collect();
    let starts: Vec<usize> = names
        .iter()
        .map(|name| {
            let byte_index = header.find(name).unwrap_or_default();
            header[..byte_index].chars().count()
        })
        .collect();

    names
        .iter()
        .zip(&starts)
        .enumerate()
        .map(|(index, (name, &start))| {
            let end = starts.get(index + 1).map(|next| next.saturating_sub(1));
            Column::new(name, start, end)
        })
        .collect()
}
