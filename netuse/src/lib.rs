//! Structured access to the output of the Windows `NET USE` command.
//!
//! `NET USE` prints its connections as a fixed-width text table. This crate
//! turns that captured text into a [`NetUseTable`] whose rows expose the
//! standardized `local`, `remote` and `status` columns.
//!
//! # Main entry points
//!
//! - [`parse_net_use_table`]: parse captured output. Running the command is
//!   left to the caller.
//! - [`NetUseTable::get_matching_rows`]: look up connections by drive
//!   letter, remote path or status.
//! - [`output::format_table`]: render a table as JSON, YAML, Markdown or
//!   aligned text.
//!
//! # Example
//!
//! ```
//! use win_unc_netuse::parse_net_use_table;
//!
//! let output = "\
//! New connections will be remembered.
//!
//! Status       Local     Remote                    Network
//!
//! -------------------------------------------------------------------------------
//! OK           Z:        \\\\server\\share            Microsoft Windows Network
//! Disconnected           \\\\server\\IPC$             Microsoft Windows Network
//! The command completed successfully.
//! ";
//!
//! let table = parse_net_use_table(output).unwrap();
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get_connected_devices(), vec!["Z:"]);
//!
//! let rows = table.get_matching_rows(None, Some(r"\\SERVER"), None);
//! assert_eq!(rows[0].status(), "Disconnected");
//! ```

mod error;
pub mod output;
mod parser;
mod table;

pub use error::{FormatError, Result, UnknownColumn};
pub use parser::{EMPTY_TABLE_INDICATOR, TERMINATOR_LINE, parse_net_use_table};
pub use table::{NetUseRow, NetUseTable, RAW_COLUMN_NAMES, StandardColumn};
