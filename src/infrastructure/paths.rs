//! Path helpers for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Directory for plugin-owned files such as the trace log.
///
/// `/host` is the cwd of the last focused terminal (usually the home
/// directory), so this normally lands in `~/.local/share/zellij/dropdown`.
///
/// ```
/// use dropdown::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/dropdown"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("dropdown")
}

/// Rewrites a leading `~` to the sandbox's `/host`.
///
/// ```
/// use dropdown::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
