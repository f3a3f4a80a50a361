//! Parser for `NET USE` output.
//!
//! The output is a fixed-width table:
//!
//! ```text
//! New connections will be remembered.
//!
//!
//! Status       Local     Remote                    Network
//!
//! -------------------------------------------------------------------------------
//! OK           Z:        \\server\share            Microsoft Windows Network
//! Unavailable  Y:        \\server\a-rather-long-share-name
//!                                                 Microsoft Windows Network
//! The command completed successfully.
//! ```
//!
//! Column offsets come from the header line above the dashed separator.
//! Rows below it span one or two physical lines.

mod columns;
mod rows;

use tracing::debug;

use crate::error::Result;
use crate::table::NetUseTable;

pub use rows::TERMINATOR_LINE;

/// Text printed instead of a table when there are no connections.
pub const EMPTY_TABLE_INDICATOR: &str = "There are no entries in the list.";

/// Parses the captured output of `NET USE` into a [`NetUseTable`].
///
/// Output containing [`EMPTY_TABLE_INDICATOR`] yields an empty table.
///
/// # Errors
///
/// Returns [`FormatError`](crate::FormatError) when the output has no dashed
/// separator line or no column header above it.
///
/// # Examples
///
/// ```
/// use win_unc_netuse::parse_net_use_table;
///
/// let output = "\
/// Status       Local     Remote                    Network
///
/// -------------------------------------------------------------------------------
/// OK           Z:        \\\\server\\share            Microsoft Windows Network
/// The command completed successfully.
/// ";
///
/// let table = parse_net_use_table(output).unwrap();
/// assert_eq!(table.get_connected_devices(), vec!["Z:"]);
/// assert_eq!(table.get_connected_paths(), vec![r"\\server\share"]);
///
/// let empty = parse_net_use_table("There are no entries in the list.\n").unwrap();
/// assert!(empty.is_empty());
/// ```
pub fn parse_net_use_table(text: &str) -> Result<NetUseTable> {
    if text.contains(EMPTY_TABLE_INDICATOR) {
        debug!("NET USE reported no entries");
        return Ok(NetUseTable::new());
    }

    let lines: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    let columns = columns::detect_columns(&lines)?;
    let body = rows::body_lines(&lines);
    let table = rows::build_table(&columns, body);

    debug!(
        body_lines = body.len(),
        rows = table.len(),
        "parsed NET USE table"
    );
    Ok(table)
}
