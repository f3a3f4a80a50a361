//! Character filters applied before values are placed on a `NET USE`
//! command line.

const USERNAME_ILLEGAL: &str = "\"/[]:;|=,+*?<>\0";
const PATH_ILLEGAL: &str = "<>\"/|?*";

/// Escapes double quotes for use inside a quoted shell argument.
///
/// # Examples
///
/// ```
/// use win_unc_core::sanitize_for_shell;
///
/// assert_eq!(sanitize_for_shell(r#"pa"ss"#), r#"pa\"ss"#);
/// ```
pub fn sanitize_for_shell(value: &str) -> String {
    value.replace('"', r#"\""#)
}

/// Removes characters that cannot appear in a Windows logon name or
/// `domain\logon` name.
pub fn sanitize_username(name: &str) -> String {
    name.chars()
        .filter(|ch| !USERNAME_ILLEGAL.contains(*ch))
        .collect()
}

/// Removes characters that cannot appear in a Windows path.
pub fn sanitize_path(path: &str) -> String {
    path.chars().filter(|ch| is_path_char(*ch)).collect()
}

/// Removes characters that cannot appear in a UNC path.
///
/// # Examples
///
/// ```
/// use win_unc_core::sanitize_unc_path;
///
/// assert_eq!(sanitize_unc_path(r"\\ser:ver\sh|are"), r"\\server\share");
/// ```
pub fn sanitize_unc_path(path: &str) -> String {
    path.chars()
        .filter(|ch| is_path_char(*ch) && *ch != ':')
        .collect()
}

/// Removes characters that cannot appear in a Windows file name.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .filter(|ch| is_path_char(*ch) && !matches!(ch, ':' | '\\'))
        .collect()
}

fn is_path_char(ch: char) -> bool {
    !PATH_ILLEGAL.contains(ch) && u32::from(ch) > 30
}
