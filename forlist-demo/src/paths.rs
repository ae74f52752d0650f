//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "forlist";
const APPLICATION: &str = "forlist-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/forlist-demo` or `~/.cache/forlist-demo`
/// - macOS: `~/Library/Caches/dev.forlist.forlist-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\forlist\forlist-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Log file used when the cache directory is unavailable or unwritable.
pub const FALLBACK_LOG_FILE: &str = "forlist-demo.log";

/// Log file locations in order of preference: the cache directory, then the
/// working directory.
pub fn log_file_candidates() -> Vec<PathBuf> {
    cache_dir()
        .map(|dir| dir.join("latest.log"))
        .into_iter()
        .chain(std::iter::once(PathBuf::from(FALLBACK_LOG_FILE)))
        .collect()
}
