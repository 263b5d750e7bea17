//! Sandbox path mapping.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory for the plugin's trace files.
///
/// Inside the sandbox `/host` is the cwd of the last focused terminal, which
/// is usually the user's home, so this normally resolves to
/// `~/.local/share/zellij/character-catalog`.
///
/// ```rust
/// use character_catalog::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/character-catalog")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("character-catalog")
}

/// Maps a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option so users can write `~/themes/dark.toml`.
/// `~user` forms are left alone.
///
/// ```rust
/// use character_catalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/catalog.toml"), "/etc/catalog.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
