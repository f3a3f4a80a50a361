//! Address parsing: `[username][:password]@\\host\share`.
//!
//! Parsing is lenient. Anything without a recognizable credential split is
//! a bare path, so these functions never fail.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{UncCredentials, UncDirectory};

// Greedy prefix: the split is the rightmost `@` directly followed by `\\`,
// so passwords may contain `@\\` literally.
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.*)@(\\\\.*)$").expect("static regex must compile")
});

/// Parses an address string into a [`UncDirectory`].
///
/// The credential portion ends at the rightmost `@` that immediately
/// precedes the UNC prefix `\\`. Without such an `@`, the whole string is the
/// path and no credentials are attached.
///
/// # Examples
///
/// ```
/// use win_unc_core::{parse_unc_directory, UncCredentials, UncDirectory};
///
/// let dir = parse_unc_directory(r"user:pass@\\server\share");
/// assert_eq!(dir.path(), r"\\server\share");
/// assert_eq!(dir.username(), Some("user"));
/// assert_eq!(dir.password(), Some("pass"));
///
/// // A password may itself contain `@\\`.
/// let dir = parse_unc_directory(r"user::@\\@\\path");
/// assert_eq!(
///     dir,
///     UncDirectory::with_credentials(r"\\path", UncCredentials::new(Some("user"), Some(r":@\\"))),
/// );
///
/// assert!(!parse_unc_directory(r"\\path").has_credentials());
/// ```
pub fn parse_unc_directory(address: &str) -> UncDirectory {
    match ADDRESS_RE.captures(address) {
        Some(caps) => {
            let creds = caps.get(1).map_or("", |m| m.as_str());
            let path = caps.get(2).map_or("", |m| m.as_str());
            UncDirectory::with_credentials(path, parse_credentials(creds))
        }
        None => UncDirectory::new(address),
    }
}

/// Parses the credential portion of an address (the text before `@`).
///
/// The first colon separates username from password; further colons belong
/// to the password. An empty username is treated as absent, while a
/// password after a colon is always present, even when empty.
///
/// # Examples
///
/// ```
/// use win_unc_core::{parse_credentials, UncCredentials};
///
/// assert_eq!(parse_credentials(""), UncCredentials::new(None, None));
/// assert_eq!(parse_credentials("user"), UncCredentials::new(Some("user"), None));
/// assert_eq!(parse_credentials("user:"), UncCredentials::new(Some("user"), Some("")));
/// assert_eq!(parse_credentials("::"), UncCredentials::new(None, Some(":")));
/// ```
pub fn parse_credentials(text: &str) -> UncCredentials {
    let (username, password) = match text.split_once(':') {
        Some((username, password)) => (username, Some(password)),
        None => (text, None),
    };
    let username = Some(username).filter(|name| !name.is_empty());
    UncCredentials::new(username, password)
}
