//! Per-user directories for overlay settings and log files.
//!
//! Everything lives under a single `.waveform_overlay` folder inside the OS
//! config directory. `WAVEFORM_OVERLAY_CONFIG_HOME` replaces the OS config
//! directory, which keeps tests and portable installs out of the user profile.

use std::{
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Folder created under the config base.
pub const APP_DIR_NAME: &str = ".waveform_overlay";
/// Environment variable that replaces the OS config directory.
pub const CONFIG_HOME_ENV: &str = "WAVEFORM_OVERLAY_CONFIG_HOME";

const LOGS_DIR_NAME: &str = "logs";

static BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Failures while locating or creating the overlay directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// Neither an override nor an OS config directory is available.
    #[error("No config directory available for overlay files")]
    NoBaseDir,
    /// The directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Root `.waveform_overlay` directory, created on demand.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(base.join(APP_DIR_NAME))
}

/// Directory holding per-launch log files, created on demand.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join(LOGS_DIR_NAME))
}

/// Path of `file_name` inside the root directory. The file itself may not exist.
pub fn file_in_root(file_name: impl AsRef<Path>) -> Result<PathBuf, AppDirError> {
    Ok(app_root_dir()?.join(file_name))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    let overridden = BASE_OVERRIDE.lock().ok().and_then(|guard| guard.clone());
    if overridden.is_some() {
        return overridden;
    }
    if let Some(path) = std::env::var_os(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
pub(crate) fn set_base_override(path: Option<PathBuf>) {
    let mut guard = BASE_OVERRIDE
        .lock()
        .expect("base override mutex poisoned");
    *guard = path;
}

#[cfg(test)]
pub(crate) struct BaseOverrideGuard;

#[cfg(test)]
impl BaseOverrideGuard {
    pub(crate) fn set(path: &Path) -> Self {
        set_base_override(Some(path.to_path_buf()));
        Self
    }
}

#[cfg(test)]
impl Drop for BaseOverrideGuard {
    fn drop(&mut self) {
        set_base_override(None);
    }
}
