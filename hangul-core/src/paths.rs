//! Where layout files are looked for
//!
//! The search path is a list of directories separated by the platform path
//! separator (`:` on Unix, `;` on Windows). It comes from the
//! `LIBHANGUL_KEYBOARD_PATH` environment variable when set, otherwise from a
//! system directory followed by a per-user directory. Later directories load
//! later, so a user layout shadows a system layout with the same id.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the keyboard search path.
pub const KEYBOARD_PATH_ENV: &str = "LIBHANGUL_KEYBOARD_PATH";

/// File extension of layout description files.
pub const LAYOUT_EXTENSION: &str = "xml";

/// Directory below the data directories that holds layout files.
const KEYBOARD_SUBDIR: &str = "libhangul/keyboards";

#[cfg(not(windows))]
const DEFAULT_SYSTEM_KEYBOARD_DIR: &str = match option_env!("LIBHANGUL_KEYBOARD_DIR") {
    Some(dir) => dir,
    None => "/usr/share/libhangul/keyboards",
};

/// The system-wide keyboard directory.
#[cfg(not(windows))]
pub fn system_keyboard_dir() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_SYSTEM_KEYBOARD_DIR))
}

/// The system-wide keyboard directory, `%APPDATA%\libhangul\keyboards`.
#[cfg(windows)]
pub fn system_keyboard_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(KEYBOARD_SUBDIR))
}

/// The per-user keyboard directory, `$XDG_DATA_HOME/libhangul/keyboards`
/// or `~/.local/share/libhangul/keyboards`.
#[cfg(not(windows))]
pub fn user_keyboard_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(KEYBOARD_SUBDIR))
}

/// The per-user keyboard directory.
#[cfg(windows)]
pub fn user_keyboard_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|dir| dir.join(".libhangul").join("keyboards"))
}

/// System directory then user directory, joined with the path separator.
pub fn default_search_path() -> OsString {
    let dirs: Vec<PathBuf> = system_keyboard_dir()
        .into_iter()
        .chain(user_keyboard_dir())
        .collect();
    env::join_paths(&dirs).unwrap_or_else(|err| {
        log::warn!("Cannot join keyboard directories: {}", err);
        dirs.first()
            .map(|dir| dir.clone().into_os_string())
            .unwrap_or_default()
    })
}

/// The search path from the environment, or the default one.
pub fn search_path() -> OsString {
    match env::var_os(KEYBOARD_PATH_ENV) {
        Some(path) => path,
        None => default_search_path(),
    }
}

/// Split a search path into directories, dropping empty entries.
pub fn split_search_path(search_path: &OsStr) -> Vec<PathBuf> {
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect()
}

/// The layout files directly inside `dir`, sorted by file name.
pub fn layout_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension() == Some(OsStr::new(LAYOUT_EXTENSION)))
        .collect();
    files.sort();
    Ok(files)
}
