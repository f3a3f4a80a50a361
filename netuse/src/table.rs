//! Parsed `NET USE` table and its query operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use win_unc_core::{UncDirectory, normalize_remote_path};

use crate::error::UnknownColumn;

/// Standardized column names exposed by [`NetUseTable`].
///
/// The raw titles printed by `NET USE` are mapped onto these through
/// [`RAW_COLUMN_NAMES`], so callers keep working if the command's headings
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardColumn {
    Local,
    Remote,
    Status,
}

/// Maps raw `NET USE` column titles to standardized columns.
pub const RAW_COLUMN_NAMES: &[(&str, StandardColumn)] = &[
    ("Local", StandardColumn::Local),
    ("Remote", StandardColumn::Remote),
    ("Status", StandardColumn::Status),
];

impl StandardColumn {
    pub const ALL: [StandardColumn; 3] = [Self::Local, Self::Remote, Self::Status];

    /// Looks up the standardized column for a raw header title.
    ///
    /// Returns `None` for titles outside the rename table (e.g. `Network`).
    pub fn from_raw(raw: &str) -> Option<Self> {
        RAW_COLUMN_NAMES
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, column)| *column)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for StandardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardColumn {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// One logical row of `NET USE` output.
///
/// Every row carries all standardized columns; values missing from the
/// output are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetUseRow {
    local: String,
    remote: String,
    status: String,
}

impl NetUseRow {
    pub fn new(local: &str, remote: &str, status: &str) -> Self {
        Self {
            local: local.to_string(),
            remote: remote.to_string(),
            status: status.to_string(),
        }
    }

    /// Builds a row from `(raw title, value)` pairs, keeping only titles in
    /// [`RAW_COLUMN_NAMES`].
    pub fn from_raw_fields<'a>(fields: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        let mut row = Self::default();
        for (name, value) in fields {
            match StandardColumn::from_raw(name) {
                Some(StandardColumn::Local) => row.local = value,
                Some(StandardColumn::Remote) => row.remote = value,
                Some(StandardColumn::Status) => row.status = value,
                None => {}
            }
        }
        row
    }

    /// Local device, e.g. `Z:`. Empty for connections without a drive letter.
    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn get(&self, column: StandardColumn) -> &str {
        match column {
            StandardColumn::Local => &self.local,
            StandardColumn::Remote => &self.remote,
            StandardColumn::Status => &self.status,
        }
    }

    fn matches(&self, local: Option<&str>, remote: Option<&str>, status: Option<&str>) -> bool {
        criterion(local).is_none_or(|local| drive_letters_equal(local, &self.local))
            && criterion(remote).is_none_or(|remote| remote_paths_equal(remote, &self.remote))
            && criterion(status).is_none_or(|status| case_insensitive_eq(status, &self.status))
    }
}

/// Ordered rows parsed from `NET USE` output.
///
/// Rows keep the order in which the command printed them; duplicates are
/// allowed.
///
/// # Examples
///
/// ```
/// use win_unc_netuse::{NetUseRow, NetUseTable};
///
/// let mut table = NetUseTable::new();
/// table.add_row(NetUseRow::new("Z:", r"\\server\share", "OK"));
/// table.add_row(NetUseRow::new("", r"\\server\IPC$", "Disconnected"));
///
/// assert_eq!(table.get_connected_devices(), vec!["Z:"]);
/// assert_eq!(table.get_matching_rows(Some("z"), None, None).len(), 1);
/// assert_eq!(table.get_matching_rows(None, Some(r"\\SERVER\ipc$"), None).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetUseTable {
    rows: Vec<NetUseRow>,
}

impl NetUseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row, keeping insertion order.
    pub fn add_row(&mut self, row: NetUseRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[NetUseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NetUseRow> {
        self.rows.iter()
    }

    /// Returns every row's value for `column`, in row order.
    pub fn get_column(&self, column: StandardColumn) -> Vec<&str> {
        self.rows.iter().map(|row| row.get(column)).collect()
    }

    /// Remote paths of all rows, in row order.
    pub fn get_connected_paths(&self) -> Vec<&str> {
        self.get_column(StandardColumn::Remote)
    }

    /// Remote paths of all rows as [`UncDirectory`] values.
    pub fn get_connected_directories(&self) -> Vec<UncDirectory> {
        self.rows
            .iter()
            .map(|row| UncDirectory::new(row.remote()))
            .collect()
    }

    /// Local devices in use, skipping connections without a drive letter.
    pub fn get_connected_devices(&self) -> Vec<&str> {
        self.get_column(StandardColumn::Local)
            .into_iter()
            .filter(|device| !device.is_empty())
            .collect()
    }

    /// Returns the rows matching every supplied criterion.
    ///
    /// - `local` ignores a trailing colon and case (`"Z:"` matches `"z"`).
    /// - `remote` ignores case and an administrative `\IPC$` share.
    /// - `status` is a case-insensitive exact match. Case folding covers
    ///   non-ASCII letters too.
    ///
    /// A criterion that is `None` or empty matches every row.
    pub fn get_matching_rows(
        &self,
        local: Option<&str>,
        remote: Option<&str>,
        status: Option<&str>,
    ) -> Vec<&NetUseRow> {
        self.rows
            .iter()
            .filter(|row| row.matches(local, remote, status))
            .collect()
    }
}

impl<'a> IntoIterator for &'a NetUseTable {
    type Item = &'a NetUseRow;
    type IntoIter = std::slice::Iter<'a, NetUseRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn criterion(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn drive_letters_equal(left: &str, right: &str) -> bool {
    case_insensitive_eq(left.trim_end_matches(':'), right.trim_end_matches(':'))
}

/// Compares with full Unicode lower-casing.
fn case_insensitive_eq(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

fn remote_paths_equal(left: &str, right: &str) -> bool {
    normalize_remote_path(left) == normalize_remote_path(right)
}
