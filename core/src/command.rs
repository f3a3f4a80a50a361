//! Builders for `NET USE` invocations.
//!
//! These functions only assemble arguments; running them is left to the
//! caller. Values coming from a [`UncDirectory`] are sanitized before they
//! are placed on the command line.

use crate::normalize::is_unc_path;
use crate::sanitize::{sanitize_for_shell, sanitize_unc_path, sanitize_username};
use crate::types::UncDirectory;

/// Program that owns the `USE` subcommand.
pub const NET_PROGRAM: &str = "NET";

const USE_SUBCOMMAND: &str = "USE";

/// Arguments that list current connections.
pub fn list_args() -> Vec<String> {
    vec![USE_SUBCOMMAND.to_string()]
}

/// Arguments that connect `directory`, optionally to a local device.
///
/// Produces `USE [device] path [password] [/USER:name] [/PERSISTENT:YES|NO]`.
/// An explicitly empty password is kept as an empty argument so that it
/// renders as `""`.
///
/// # Examples
///
/// ```
/// use win_unc_core::{connect_args, render_command_line, UncDirectory};
///
/// let dir = UncDirectory::parse(r"user:secret@\\server\share");
/// let args = connect_args(&dir, Some("z"), Some(false));
/// assert_eq!(
///     render_command_line(&args),
///     r"NET USE Z: \\server\share secret /USER:user /PERSISTENT:NO"
/// );
/// ```
pub fn connect_args(
    directory: &UncDirectory,
    local_device: Option<&str>,
    persistent: Option<bool>,
) -> Vec<String> {
    let mut args = vec![USE_SUBCOMMAND.to_string()];
    if let Some(device) = local_device {
        args.push(format_device(device));
    }
    args.push(sanitize_unc_path(directory.path()));
    if let Some(password) = directory.password() {
        args.push(password.to_string());
    }
    if let Some(username) = directory.username() {
        args.push(format!("/USER:{}", sanitize_username(username)));
    }
    if let Some(persistent) = persistent {
        let flag = if persistent { "YES" } else { "NO" };
        args.push(format!("/PERSISTENT:{flag}"));
    }
    args
}

/// Arguments that remove a connection, addressed by UNC path or local
/// device.
///
/// # Examples
///
/// ```
/// use win_unc_core::disconnect_args;
///
/// assert_eq!(disconnect_args("z:"), ["USE", "Z:", "/DELETE", "/YES"]);
/// ```
pub fn disconnect_args(target: &str) -> Vec<String> {
    let target = if is_unc_path(target) {
        sanitize_unc_path(target)
    } else {
        format_device(target)
    };
    vec![
        USE_SUBCOMMAND.to_string(),
        target,
        "/DELETE".to_string(),
        "/YES".to_string(),
    ]
}

/// Joins arguments into a single `NET` command line.
///
/// Arguments that are empty, contain whitespace or quotes, or contain a
/// `cmd.exe` metacharacter (`& | < > ^ ( ) % !`) are wrapped in double
/// quotes, with embedded quotes escaped.
pub fn render_command_line(args: &[String]) -> String {
    let mut line = NET_PROGRAM.to_string();
    for arg in args {
        line.push(' ');
        if needs_quoting(arg) {
            line.push('"');
            line.push_str(&sanitize_for_shell(arg));
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// Characters `cmd.exe` treats as separators, redirects, escapes or
/// variable markers outside double quotes.
const CMD_METACHARACTERS: &str = "&|<>^()%!";

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || arg
            .chars()
            .any(|ch| ch.is_whitespace() || ch == '"' || CMD_METACHARACTERS.contains(ch))
}

fn format_device(device: &str) -> String {
    let device = device.trim().trim_end_matches(':');
    if device == "*" {
        return device.to_string();
    }
    format!("{}:", device.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UncCredentials;

    #[test]
    fn test_connect_without_credentials() {
        let dir = UncDirectory::new(r"\\server\share");
        assert_eq!(connect_args(&dir, None, None), ["USE", r"\\server\share"]);
    }

    #[test]
    fn test_connect_any_device() {
        let dir = UncDirectory::new(r"\\server\share");
        assert_eq!(connect_args(&dir, Some("*"), None), ["USE", "*", r"\\server\share"]);
    }

    #[test]
    fn test_connect_quotes_empty_and_spaced_passwords() {
        let dir = UncDirectory::with_credentials(
            r"\\server\share",
            UncCredentials::new(Some("user"), Some("")),
        );
        assert_eq!(
            render_command_line(&connect_args(&dir, None, None)),
            r#"NET USE \\server\share "" /USER:user"#
        );

        let dir = UncDirectory::with_credentials(
            r"\\server\share",
            UncCredentials::new(Some("user"), Some(r#"a "b""#)),
        );
        assert_eq!(
            render_command_line(&connect_args(&dir, None, Some(true))),
            r#"NET USE \\server\share "a \"b\"" /USER:user /PERSISTENT:YES"#
        );
    }

    #[test]
    fn test_connect_sanitizes_path_and_username() {
        let dir = UncDirectory::with_credentials(
            r"\\ser:ver\share|",
            UncCredentials::new(Some(r"DOMAIN\us*er"), None),
        );
        assert_eq!(
            connect_args(&dir, None, None),
            ["USE", r"\\server\share", r"/USER:DOMAIN\user"]
        );
    }

    #[test]
    fn test_connect_quotes_cmd_metacharacters() {
        let dir = UncDirectory::with_credentials(
            r"\\server\R&D",
            UncCredentials::new(Some("user"), Some("p&w|x")),
        );
        assert_eq!(
            render_command_line(&connect_args(&dir, Some("z"), None)),
            r#"NET USE Z: "\\server\R&D" "p&w|x" /USER:user"#
        );

        for password in ["a^b", "(x)", "%PATH%", "hi!", "a>b"] {
            let dir = UncDirectory::with_credentials(
                r"\\server\share",
                UncCredentials::new(None, Some(password)),
            );
            let line = render_command_line(&connect_args(&dir, None, None));
            assert!(line.ends_with(&format!("\"{password}\"")), "line: {line}");
        }
    }

    #[test]
    fn test_disconnect_quotes_cmd_metacharacters() {
        assert_eq!(
            render_command_line(&disconnect_args(r"\\server\R&D")),
            r#"NET USE "\\server\R&D" /DELETE /YES"#
        );
    }

    #[test]
    fn test_disconnect_by_path() {
        assert_eq!(
            disconnect_args(r"\\server\share"),
            ["USE", r"\\server\share", "/DELETE", "/YES"]
        );
    }

    #[test]
    fn test_list_args() {
        assert_eq!(render_command_line(&list_args()), "NET USE");
    }
}
