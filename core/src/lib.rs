//! UNC path and credential primitives for Windows network drives.
//!
//! This crate models the addresses handed to `NET USE`:
//!
//! - [`UncDirectory`]: a UNC path plus optional credentials, comparable by
//!   its normalized path and usable wherever a path string is expected.
//! - [`UncCredentials`]: an optional username and password, each of which
//!   may be absent, empty, or non-empty.
//! - [`parse_unc_directory`]: lenient parsing of
//!   `[username][:password]@\\host\share` strings.
//!
//! Supporting modules provide path normalization ([`normalize_unc_path`]),
//! character sanitizers for command-line values, and builders for `NET USE`
//! argument vectors ([`connect_args`], [`disconnect_args`]). Nothing in this
//! crate performs I/O or spawns processes.
//!
//! # Example
//!
//! ```
//! use win_unc_core::*;
//!
//! let dir = parse_unc_directory(r"admin:hunter2@\\FileServer\Public\");
//! assert_eq!(dir.username(), Some("admin"));
//! assert_eq!(dir.normalized_path(), r"\\fileserver\public");
//! assert_eq!(dir.to_string(), r"admin:hunter2@\\FileServer\Public\");
//!
//! // Directories without credentials compare against plain strings.
//! assert_eq!(UncDirectory::new(r"\\FileServer\IPC$"), r"\\fileserver");
//! ```

mod command;
mod normalize;
mod parse;
mod sanitize;
mod types;

pub use command::{
    NET_PROGRAM, connect_args, disconnect_args, list_args, render_command_line,
};
pub use normalize::{IPC_SUFFIX, UNC_PREFIX, is_unc_path, normalize_remote_path, normalize_unc_path};
pub use parse::{parse_credentials, parse_unc_directory};
pub use sanitize::{
    sanitize_file_name, sanitize_for_shell, sanitize_path, sanitize_unc_path, sanitize_username,
};
pub use types::{UncCredentials, UncDirectory};
