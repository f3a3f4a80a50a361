//! Error types for `NET USE` table parsing.

use thiserror::Error;

/// The header block of `NET USE` output could not be recognized.
///
/// Returned by [`parse_net_use_table`](crate::parse_net_use_table). Row
/// extraction itself never fails; only a missing header structure does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No line made entirely of dashes was found.
    #[error("no separator line found in NET USE output")]
    MissingSeparator,
    /// No line starting with a letter precedes the separator.
    #[error("no column header line found before the separator")]
    MissingHeader,
}

/// A column name that is not one of the standardized columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column: {0}")]
pub struct UnknownColumn(pub String);

/// Convenience alias for results with [`FormatError`].
pub type Result<T> = std::result::Result<T, FormatError>;
