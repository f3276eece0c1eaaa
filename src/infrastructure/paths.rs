//! Path utilities for logs and user-supplied files.
//!
//! This module provides the platform data directory used for log output and
//! tilde expansion for paths given on the command line.

use std::path::PathBuf;

/// Returns the directory stackdash writes its logs to.
///
/// Resolves to `<platform data dir>/stackdash` (on Linux typically
/// `~/.local/share/stackdash`), falling back to the current directory when
/// the platform reports no data directory.
#[must_use]
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stackdash")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix pass through unchanged, as do tilde paths
/// when no home directory can be determined.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_ends_with_app_name() {
        assert!(log_dir().ends_with("stackdash"));
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/data.json"), PathBuf::from("/tmp/data.json"));
        assert_eq!(expand_tilde("relative/file"), PathBuf::from("relative/file"));
    }

    #[test]
    fn tilde_paths_resolve_under_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/themes/x.toml"), home.join("themes/x.toml"));
            assert_eq!(expand_tilde("~"), home);
        }
    }
}
