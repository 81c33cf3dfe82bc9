//! Per-user data directory resolution.
//!
//! Locates the writable directory where the poster keeps persistent data
//! (posting history, draft articles), following the XDG base-directory
//! convention: `$XDG_DATA_HOME` when usable, `~/.local/share` otherwise.
//!
//! The environment is consulted on every call, never cached, so a host
//! application that adjusts `XDG_DATA_HOME` at runtime observes the
//! change immediately.

use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable governing the data-home base directory.
pub const DATA_HOME_ENV: &str = "XDG_DATA_HOME";

/// Resolve the per-user data-home base directory.
///
/// Returns `$XDG_DATA_HOME` when it is set, non-empty, and absolute.
/// A set-but-empty or relative value is ignored per the base-directory
/// specification, falling back to the home directory joined with
/// `.local/share`.
///
/// Fails with [`Error::NoHomeDirectory`] only when the fallback is
/// needed and no home directory can be determined.
pub fn data_home() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_HOME_ENV) {
        let dir = PathBuf::from(dir);
        if !dir.as_os_str().is_empty() && dir.is_absolute() {
            return Ok(dir);
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".local").join("share"))
        .ok_or(Error::NoHomeDirectory)
}

/// Resolve `data_home()/resource`, creating the directory (and any
/// missing parents) if needed, and return the resulting path.
///
/// Created directories get owner-only permissions (mode `0o700`) on
/// Unix. A path that already exists as a directory is success, which
/// also absorbs benign races with concurrent creators; any other
/// creation failure is reported as [`Error::PathCreation`] with the
/// underlying OS error. Repeated calls return the identical path.
pub fn save_data_path(resource: &str) -> Result<PathBuf> {
    let path = data_home()?.join(resource);
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    match builder.create(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "created data directory");
            Ok(path)
        }
        Err(_) if path.is_dir() => Ok(path),
        Err(source) => Err(Error::PathCreation { path, source }),
    }
}
