//! Layout file loader
//!
//! Reads a `hangul-keyboard` XML description into a [`Keyboard`]:
//!
//! ```xml
//! <hangul-keyboard id="2a" type="jamo">
//!   <name>Dubeolsik Alternative</name>
//!   <name xml:lang="ko">두벌식 변형</name>
//!   <map id="0">
//!     <item key="0x72" value="0x1100"/>
//!   </map>
//!   <combination id="0">
//!     <item first="0x1169" second="0x1161" result="0x116a"/>
//!   </combination>
//!   <include file="common.xml"/>
//! </hangul-keyboard>
//! ```
//!
//! Included files are parsed into the same keyboard, so a layout can be
//! split across several files. Relative include paths are resolved against
//! the directory of the file that contains the `include` element.

mod context;

use crate::keyboard::Keyboard;
use crate::Result;
use context::LoadContext;
use std::env;
use std::path::{Path, PathBuf};

/// Maximum number of layout files open at once along one include chain.
pub const MAX_INCLUDE_DEPTH: usize = 64;

/// Display names are cut to this many bytes.
pub const MAX_NAME_LEN: usize = 1023;

/// Settings that affect how layout files are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Active locale, e.g. `ko_KR.UTF-8`. A `<name xml:lang="...">` is used
    /// when its language is a prefix of this string.
    pub locale: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            locale: current_locale(),
        }
    }
}

impl LoaderOptions {
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

/// The message locale of the process, following POSIX precedence.
pub fn current_locale() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "C".to_string())
}

/// Resolve the target of an `include` element found in `current`.
///
/// Absolute targets are used as they are; relative ones are joined to the
/// directory holding `current`.
pub fn resolve_include(current: &Path, file: &str) -> PathBuf {
    let target = Path::new(file);
    if target.is_absolute() || file.starts_with('/') {
        return target.to_path_buf();
    }
    match current.parent() {
        Some(dir) => dir.join(target),
        None => target.to_path_buf(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardLoader {
    options: LoaderOptions,
}

impl KeyboardLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Parse the layout file at `path`.
    ///
    /// Errors in the root file fail the load. Errors in an included file are
    /// logged and only drop the rest of that file.
    pub fn load(&self, path: &Path) -> Result<Keyboard> {
        let mut context = LoadContext::new(&self.options);
        context.parse_file(path)?;
        let keyboard = context.finish(path)?;

        log::info!(
            "Loaded keyboard '{}' from {}",
            keyboard.id().unwrap_or_default(),
            path.display()
        );
        Ok(keyboard)
    }
}

/// Load one layout file with the default options.
pub fn load_keyboard(path: impl AsRef<Path>) -> Result<Keyboard> {
    KeyboardLoader::default().load(path.as_ref())
}

impl Keyboard {
    /// Load a keyboard from a layout file with the default options.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_keyboard(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_include() {
        let current = Path::new("/a/b/root.xml");
        assert_eq!(resolve_include(current, "sub.xml"), PathBuf::from("/a/b/sub.xml"));
        assert_eq!(
            resolve_include(current, "common/sub.xml"),
            PathBuf::from("/a/b/common/sub.xml")
        );
    }

    #[test]
    fn test_resolve_absolute_include() {
        let current = Path::new("/a/b/root.xml");
        assert_eq!(resolve_include(current, "/x/sub.xml"), PathBuf::from("/x/sub.xml"));
    }

    #[test]
    fn test_resolve_include_without_directory() {
        assert_eq!(resolve_include(Path::new("root.xml"), "sub.xml"), PathBuf::from("sub.xml"));
    }

    #[test]
    fn test_locale_options() {
        let options = LoaderOptions::with_locale("ko_KR.UTF-8");
        assert_eq!(options.locale, "ko_KR.UTF-8");
        assert_eq!(KeyboardLoader::new(options.clone()).options(), &options);
    }
}
