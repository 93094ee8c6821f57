use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the campus map description.
pub const MAP_FILENAME: &str = "campus_map.json";

/// Environment variable that overrides the map location.
pub const MAP_PATH_ENV: &str = "CAMPUSNAV_MAP";

/// Resolve the default map location using platform-specific project directories.
pub fn default_map_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "campusnav", "campusnav").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(MAP_FILENAME))
}

/// Locate the campus map description.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `CAMPUSNAV_MAP` environment variable.
/// 3. Platform-specific project data directory.
///
/// Paths without an extension are treated as directories holding
/// `campus_map.json`. The resolved file must exist.
pub fn resolve_map_path(target: Option<&Path>) -> Result<PathBuf> {
    resolve_map_path_with(target, env::var_os(MAP_PATH_ENV))
}

fn resolve_map_path_with(target: Option<&Path>, env_value: Option<OsString>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = target {
        canonical_map_path(explicit)
    } else if let Some(env_path) = env_value {
        canonical_map_path(Path::new(&env_path))
    } else {
        default_map_path()?
    };

    debug!(path = %resolved.display(), "resolved campus map path");
    if resolved.is_file() {
        Ok(resolved)
    } else {
        Err(Error::MapNotFound { path: resolved })
    }
}

fn canonical_map_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }

    path.join(MAP_FILENAME)
}
