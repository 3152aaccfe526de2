//! Local persistence for the theme preference.
//!
//! Browser builds keep it in `localStorage`; native builds write a small JSON
//! file under the platform config directory. A missing value is not an error
//! and yields the default mode.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::theme::ThemeMode;

/// `localStorage` key (web builds).
pub const THEME_STORAGE_KEY: &str = "tmedian.theme-mode";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no storage backend available")]
    Unavailable,
    #[error("storage backend rejected the operation")]
    Rejected,
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed stored preference: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPreference {
    theme_mode: ThemeMode,
}

fn encode(mode: ThemeMode) -> Result<String, StorageError> {
    Ok(serde_json::to_string(&StoredPreference { theme_mode: mode })?)
}

fn decode(raw: &str) -> Result<ThemeMode, StorageError> {
    let stored: StoredPreference = serde_json::from_str(raw)?;
    Ok(stored.theme_mode)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
pub fn load_theme_mode() -> Result<ThemeMode, StorageError> {
    let storage = local_storage()?;
    match storage
        .get_item(THEME_STORAGE_KEY)
        .map_err(|_| StorageError::Rejected)?
    {
        Some(raw) => decode(&raw),
        None => Ok(ThemeMode::default()),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_theme_mode(mode: ThemeMode) -> Result<(), StorageError> {
    let raw = encode(mode)?;
    local_storage()?
        .set_item(THEME_STORAGE_KEY, &raw)
        .map_err(|_| StorageError::Rejected)
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{load_theme_mode_from, save_theme_mode_to, theme_file_in, THEME_FILE_NAME};

#[cfg(not(target_arch = "wasm32"))]
pub fn load_theme_mode() -> Result<ThemeMode, StorageError> {
    load_theme_mode_from(&native::default_path()?)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_theme_mode(mode: ThemeMode) -> Result<(), StorageError> {
    save_theme_mode_to(&native::default_path()?, mode)
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{decode, encode, StorageError};
    use crate::core::theme::ThemeMode;

    pub const THEME_FILE_NAME: &str = "theme.json";

    pub(super) fn default_path() -> Result<PathBuf, StorageError> {
        let dirs = ProjectDirs::from("com", "tmedian", "TMediaN").ok_or(StorageError::Unavailable)?;
        Ok(theme_file_in(dirs.config_dir()))
    }

    pub fn theme_file_in(config_dir: &Path) -> PathBuf {
        config_dir.join(THEME_FILE_NAME)
    }

    pub fn load_theme_mode_from(path: &Path) -> Result<ThemeMode, StorageError> {
        match fs::read_to_string(path) {
            Ok(raw) => decode(&raw),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(ThemeMode::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save_theme_mode_to(path: &Path, mode: ThemeMode) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, encode(mode)?)?;
        Ok(())
    }
}
