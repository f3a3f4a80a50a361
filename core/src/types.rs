//! UNC value types.
//!
//! [`UncCredentials`] and [`UncDirectory`] are immutable value objects. A
//! directory compares by its normalized path plus its credentials, and can
//! stand in for a plain path string in comparisons.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_unc_path;
use crate::parse::{parse_credentials, parse_unc_directory};

/// Optional username and password embedded in a UNC address.
///
/// Each component is tri-state: absent (`None`), explicitly empty
/// (`Some("")`), or non-empty. Absent and empty are observably different in
/// [`auth_string`](UncCredentials::auth_string) and in equality.
///
/// # Examples
///
/// ```
/// use win_unc_core::UncCredentials;
///
/// assert_eq!(UncCredentials::new(None, None).auth_string(), "");
/// assert_eq!(UncCredentials::new(Some("user"), None).auth_string(), "user");
/// assert_eq!(UncCredentials::new(None, Some("pass")).auth_string(), ":pass");
/// assert_eq!(UncCredentials::new(Some("user"), Some("pass")).auth_string(), "user:pass");
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UncCredentials {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl UncCredentials {
    /// Creates credentials from optional components.
    pub fn new(username: Option<&str>, password: Option<&str>) -> Self {
        Self {
            username: username.map(String::from),
            password: password.map(String::from),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns `true` when neither a username nor a password is present.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    /// Renders the credentials as `username[:password]`.
    ///
    /// An absent username renders as an empty string, so a password without
    /// a username produces a leading bare colon.
    ///
    /// # Examples
    ///
    /// ```
    /// use win_unc_core::UncCredentials;
    ///
    /// assert_eq!(UncCredentials::new(Some(""), None).auth_string(), "");
    /// assert_eq!(UncCredentials::new(None, Some("")).auth_string(), ":");
    /// assert_eq!(UncCredentials::new(Some("user"), Some(":")).auth_string(), "user::");
    /// ```
    pub fn auth_string(&self) -> String {
        let username = self.username.as_deref().unwrap_or_default();
        match &self.password {
            Some(password) => format!("{username}:{password}"),
            None => username.to_string(),
        }
    }
}

impl FromStr for UncCredentials {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_credentials(s))
    }
}

/// A UNC directory with optional credentials.
///
/// `path` is kept exactly as given. Equality, hashing and ordering use the
/// [normalized path](UncDirectory::normalized_path), so `\\HOST\Share\` and
/// `\\host\share` are the same directory. Credentials compare exactly.
///
/// A directory also compares against raw strings: it equals a string when
/// it has no credentials and its normalized path equals the string.
///
/// # Examples
///
/// ```
/// use win_unc_core::{UncCredentials, UncDirectory};
///
/// let dir = UncDirectory::with_credentials(
///     r"\\Server\Share",
///     UncCredentials::new(Some("user"), Some("pass")),
/// );
/// assert_eq!(dir.normalized_path(), r"\\server\share");
/// assert_eq!(dir.to_string(), r"user:pass@\\Server\Share");
///
/// assert_eq!(UncDirectory::new(r"\\ABC"), r"\\abc");
/// assert_eq!(r"\\abc", UncDirectory::new(r"\\ABC"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncDirectory {
    path: String,
    #[serde(default)]
    credentials: UncCredentials,
}

impl UncDirectory {
    /// Creates a directory without credentials.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            credentials: UncCredentials::default(),
        }
    }

    pub fn with_credentials(path: impl Into<String>, credentials: UncCredentials) -> Self {
        Self {
            path: path.into(),
            credentials,
        }
    }

    /// Parses `[username][:password]@path` leniently.
    ///
    /// See [`parse_unc_directory`](crate::parse_unc_directory).
    pub fn parse(address: &str) -> Self {
        parse_unc_directory(address)
    }

    /// The path exactly as it was given.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn credentials(&self) -> &UncCredentials {
        &self.credentials
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.username()
    }

    pub fn password(&self) -> Option<&str> {
        self.credentials.password()
    }

    pub fn has_credentials(&self) -> bool {
        !self.credentials.is_empty()
    }

    /// Lower-cased path without trailing separators or `\IPC$` share.
    ///
    /// See [`normalize_unc_path`].
    pub fn normalized_path(&self) -> String {
        normalize_unc_path(&self.path)
    }

    /// Returns `true` if `other` names the same location, ignoring
    /// credentials.
    pub fn same_location(&self, other: &UncDirectory) -> bool {
        self.normalized_path() == other.normalized_path()
    }

    fn eq_raw(&self, raw: &str) -> bool {
        !self.has_credentials() && self.normalized_path() == raw
    }

    fn cmp_raw(&self, raw: &str) -> Ordering {
        match self.normalized_path().as_str().cmp(raw) {
            Ordering::Equal if self.has_credentials() => Ordering::Greater,
            ordering => ordering,
        }
    }
}

/// Renders `auth@path`, or the bare path when the auth string is empty.
///
/// Credentials of `(Some(""), None)` render as the bare path, so they do not
/// survive a round trip through [`parse_unc_directory`].
impl fmt::Display for UncDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let auth = self.credentials.auth_string();
        if auth.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{auth}@{}", self.path)
        }
    }
}

impl FromStr for UncDirectory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_unc_directory(s))
    }
}

impl PartialEq for UncDirectory {
    fn eq(&self, other: &Self) -> bool {
        self.credentials == other.credentials && self.same_location(other)
    }
}

impl Eq for UncDirectory {}

impl Hash for UncDirectory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_path().hash(state);
        self.credentials.hash(state);
    }
}

impl Ord for UncDirectory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized_path()
            .cmp(&other.normalized_path())
            .then_with(|| self.credentials.cmp(&other.credentials))
    }
}

impl PartialOrd for UncDirectory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_raw_comparisons {
    ($($raw:ty),*) => {
        $(
            impl PartialEq<$raw> for UncDirectory {
                fn eq(&self, other: &$raw) -> bool {
                    self.eq_raw(other)
                }
            }

            impl PartialEq<UncDirectory> for $raw {
                fn eq(&self, other: &UncDirectory) -> bool {
                    other.eq_raw(self)
                }
            }

            impl PartialOrd<$raw> for UncDirectory {
                fn partial_cmp(&self, other: &$raw) -> Option<Ordering> {
                    Some(self.cmp_raw(other))
                }
            }

            impl PartialOrd<UncDirectory> for $raw {
                fn partial_cmp(&self, other: &UncDirectory) -> Option<Ordering> {
                    Some(other.cmp_raw(self).reverse())
                }
            }
        )*
    };
}

impl_raw_comparisons!(str, &str, String);

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(path: &str, username: Option<&str>, password: Option<&str>) -> UncDirectory {
        UncDirectory::with_credentials(path, UncCredentials::new(username, password))
    }

    #[test]
    fn test_eq_ignores_path_case() {
        assert_eq!(UncDirectory::new(r"\\path"), UncDirectory::new(r"\\path"));
        assert_eq!(UncDirectory::new(r"\\path"), UncDirectory::new(r"\\PATH"));
        assert_eq!(
            dir(r"\\path", Some("username"), None),
            dir(r"\\PATH", Some("username"), None)
        );
        assert_eq!(
            dir(r"\\path", Some("username"), Some("password")),
            dir(r"\\PATH", Some("username"), Some("password"))
        );
    }

    #[test]
    fn test_eq_is_strict_on_credentials() {
        assert_ne!(
            dir(r"\\path", Some("username"), None),
            dir(r"\\path", Some("USERNAME"), None)
        );
        assert_ne!(
            dir(r"\\path", Some("username"), Some("password")),
            dir(r"\\path", Some("username"), Some("PASSWORD"))
        );
        assert_ne!(
            dir(r"\\path", None, Some("")),
            dir(r"\\path", None, None)
        );
        assert_ne!(
            dir(r"\\path", Some(""), None),
            dir(r"\\path", None, None)
        );
    }

    #[test]
    fn test_eq_against_raw_strings() {
        assert_eq!(UncDirectory::new(r"\\path"), r"\\path");
        assert_eq!(r"\\path", UncDirectory::new(r"\\path"));
        assert_eq!(UncDirectory::new(r"\\path"), String::from(r"\\path"));
        assert_eq!(String::from(r"\\path"), UncDirectory::new(r"\\PATH\"));
        assert_ne!(UncDirectory::new(r"\\path"), "somestring");
        assert_ne!(dir(r"\\path", Some("user"), None), r"\\path");
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(UncDirectory::new(r"\\Host\Share"));
        assert!(set.contains(&UncDirectory::new(r"\\host\share\")));
        assert!(!set.contains(&dir(r"\\host\share", Some("user"), None)));
    }

    #[test]
    fn test_ordering_against_raw_strings() {
        let bare = UncDirectory::new(r"\\B");
        assert!(bare > r"\\a");
        assert!(bare < r"\\c");
        assert_eq!(bare.partial_cmp(r"\\b"), Some(Ordering::Equal));
        assert_eq!(
            dir(r"\\b", Some("user"), None).partial_cmp(r"\\b"),
            Some(Ordering::Greater)
        );
        assert_eq!(r"\\b".partial_cmp(&bare), Some(Ordering::Equal));
    }

    #[test]
    fn test_ordering_between_directories() {
        let mut dirs = vec![
            UncDirectory::new(r"\\c"),
            dir(r"\\a", Some("user"), None),
            UncDirectory::new(r"\\A"),
        ];
        dirs.sort();
        assert_eq!(dirs[0], UncDirectory::new(r"\\a"));
        assert_eq!(dirs[1], dir(r"\\a", Some("user"), None));
        assert_eq!(dirs[2], UncDirectory::new(r"\\c"));
    }

    #[test]
    fn test_display() {
        assert_eq!(UncDirectory::new(r"\\path").to_string(), r"\\path");
        assert_eq!(dir(r"\\path", Some("user"), None).to_string(), r"user@\\path");
        assert_eq!(
            dir(r"\\path", Some("user"), Some("pass")).to_string(),
            r"user:pass@\\path"
        );
        assert_eq!(dir(r"\\path", None, Some("pass")).to_string(), r":pass@\\path");
    }

    #[test]
    fn test_display_of_explicitly_empty_username() {
        let empty_user = dir(r"\\p", Some(""), None);
        assert_eq!(empty_user.to_string(), r"\\p");
        assert!(empty_user.has_credentials());
        // an empty username cannot be expressed in address text
        assert_ne!(UncDirectory::parse(&empty_user.to_string()), empty_user);
        assert!(UncDirectory::parse(&empty_user.to_string()).same_location(&empty_user));
    }

    #[test]
    fn test_auth_string() {
        let cases = [
            (None, None, ""),
            (Some(""), None, ""),
            (None, Some(""), ":"),
            (Some(""), Some(""), ":"),
            (Some("user"), None, "user"),
            (Some("user"), Some(""), "user:"),
            (Some(""), Some("pass"), ":pass"),
            (Some("user"), Some(":"), "user::"),
            (Some("user"), Some("pass"), "user:pass"),
        ];
        for (username, password, expected) in cases {
            assert_eq!(
                UncCredentials::new(username, password).auth_string(),
                expected,
                "username={username:?} password={password:?}"
            );
        }
    }

    #[test]
    fn test_serializes_raw_path_and_credentials() {
        let value = serde_json::to_value(dir(r"\\Host\Share", Some("user"), None)).unwrap();
        assert_eq!(value["path"], r"\\Host\Share");
        assert_eq!(value["credentials"]["username"], "user");
        assert!(value["credentials"]["password"].is_null());
    }
}
