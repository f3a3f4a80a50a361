//! Path normalization used when comparing UNC paths.
//!
//! Windows treats UNC paths case-insensitively and ignores trailing
//! separators, and `\\host\IPC$` addresses the host itself. Comparisons in
//! this workspace therefore go through [`normalize_unc_path`] (directories)
//! or [`normalize_remote_path`] (rows of a `NET USE` table).

/// The two-character prefix every UNC path starts with.
pub const UNC_PREFIX: &str = r"\\";

/// Suffix of the administrative share, lower-cased.
pub const IPC_SUFFIX: &str = r"\ipc$";

const SEPARATOR: char = '\\';

/// Normalizes a UNC path for comparison.
///
/// Lower-cases the path, strips trailing separators (never eating into the
/// leading `\\`), and truncates an administrative `\ipc$` share so that only
/// the host remains. The steps repeat until the path stops changing, so
/// normalizing twice yields the same result as normalizing once.
///
/// # Examples
///
/// ```
/// use win_unc_core::normalize_unc_path;
///
/// assert_eq!(normalize_unc_path(r"\\ABC"), r"\\abc");
/// assert_eq!(normalize_unc_path(r"\\abc\DEF\\"), r"\\abc\def");
/// assert_eq!(normalize_unc_path(r"\\abc\IPC$"), r"\\abc");
/// ```
pub fn normalize_unc_path(path: &str) -> String {
    let mut current = path.to_lowercase();
    loop {
        let next = strip_ipc_share(strip_trailing_separators(&current));
        if next.len() == current.len() {
            return current;
        }
        current = next.to_string();
    }
}

/// Normalizes a remote path as reported in a `NET USE` table.
///
/// Only lower-cases and strips a trailing `\ipc$` share; separators are
/// left untouched.
///
/// # Examples
///
/// ```
/// use win_unc_core::normalize_remote_path;
///
/// assert_eq!(normalize_remote_path(r"\\HOST\IPC$"), r"\\host");
/// assert_eq!(normalize_remote_path(r"\\Host\Share"), r"\\host\share");
/// ```
pub fn normalize_remote_path(path: &str) -> String {
    let lowered = path.to_lowercase();
    strip_ipc_share(&lowered).to_string()
}

/// Returns `true` if `path` starts with the UNC prefix `\\`.
pub fn is_unc_path(path: &str) -> bool {
    path.starts_with(UNC_PREFIX)
}

fn strip_trailing_separators(path: &str) -> &str {
    let prefix_len = if is_unc_path(path) { UNC_PREFIX.len() } else { 0 };
    let trimmed = path[prefix_len..].trim_end_matches(SEPARATOR);
    &path[..prefix_len + trimmed.len()]
}

/// Expects an already lower-cased path.
fn strip_ipc_share(path: &str) -> &str {
    match path.strip_suffix(IPC_SUFFIX) {
        Some(host) if !host.trim_start_matches(SEPARATOR).is_empty() => host,
        _ => path,
    }
}
