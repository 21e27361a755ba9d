//! Conventional config file locations
//!
//! Resolves the per-application config path from `$XDG_CONFIG_HOME` or
//! `$HOME/.config`, e.g. `~/.config/<app>/config.json`. Path computation
//! only; nothing is created here.

use std::path::PathBuf;
use tracing::warn;

/// Directory holding an application's config file.
///
/// Uses `$XDG_CONFIG_HOME/<app>` when `XDG_CONFIG_HOME` is set, otherwise
/// `$HOME/.config/<app>`. Returns `None` when neither variable is set.
pub fn config_dir(app: &str) -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));

    match base {
        Some(base) => Some(base.join(app)),
        None => {
            warn!(
                app,
                "Cannot resolve a config directory: neither XDG_CONFIG_HOME nor HOME is set"
            );
            None
        }
    }
}

/// Full path to an application's config file: `<config_dir>/config.json`.
pub fn config_file_path(app: &str) -> Option<PathBuf> {
    config_dir(app).map(|dir| dir.join("config.json"))
}
