//! Keyboard registry
//!
//! The registry knows every selectable keyboard: the fixed built-in set and
//! the keyboards loaded from layout directories or registered by the
//! embedding application. Indexes enumerate built-ins first, then loaded
//! keyboards in the order they were added.
//!
//! Lookup by id prefers the most recently added loaded keyboard, then falls
//! back to the built-ins, so a loaded layout can shadow a built-in one with
//! the same id. Removal by id takes the first match instead.

use crate::builtin;
use crate::keyboard::Keyboard;
use crate::loader::{KeyboardLoader, LoaderOptions};
use crate::paths;
use crate::{Error, Result};
use parking_lot::{Mutex, RwLock};
use std::ffi::OsStr;
use std::ops::Deref;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Capacity of the first allocation of the loaded keyboard list.
const INITIAL_CAPACITY: usize = 16;

/// A keyboard handed out by the registry.
#[derive(Debug, Clone)]
pub enum KeyboardRef {
    Builtin(&'static Keyboard),
    Loaded(Arc<Keyboard>),
}

impl KeyboardRef {
    pub fn is_builtin(&self) -> bool {
        matches!(self, KeyboardRef::Builtin(_))
    }
}

impl Deref for KeyboardRef {
    type Target = Keyboard;

    fn deref(&self) -> &Keyboard {
        match self {
            KeyboardRef::Builtin(keyboard) => *keyboard,
            KeyboardRef::Loaded(keyboard) => &**keyboard,
        }
    }
}

/// Outcome of [`KeyboardRegistry::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    /// At least one keyboard was loaded.
    Success,
    /// Every directory on the search path yielded nothing.
    NoKeyboardsFound,
    /// Loaded keyboards were already present; nothing was scanned.
    AlreadyInitialized,
}

#[derive(Debug)]
pub struct KeyboardRegistry {
    builtins: &'static [Keyboard],
    loaded: RwLock<Vec<Arc<Keyboard>>>,
    /// Held for the whole of `init` so only one scan runs at a time.
    init_lock: Mutex<()>,
    loader: KeyboardLoader,
}

impl Default for KeyboardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardRegistry {
    pub fn new() -> Self {
        Self::with_options(LoaderOptions::default())
    }

    pub fn with_options(options: LoaderOptions) -> Self {
        Self {
            builtins: builtin::keyboards(),
            loaded: RwLock::new(Vec::new()),
            init_lock: Mutex::new(()),
            loader: KeyboardLoader::new(options),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static KeyboardRegistry {
        static GLOBAL: OnceLock<KeyboardRegistry> = OnceLock::new();
        GLOBAL.get_or_init(KeyboardRegistry::new)
    }

    /// Load every layout file in `dir` and return how many were added.
    ///
    /// Files that fail to load are logged and skipped; a missing or
    /// unreadable directory adds nothing.
    pub fn load_directory(&self, dir: &Path) -> usize {
        let files = match paths::layout_files(dir) {
            Ok(files) => files,
            Err(err) => {
                log::debug!("Skipping keyboard directory {}: {}", dir.display(), err);
                return 0;
            }
        };
        log::debug!("Scanning {} ({} layout files)", dir.display(), files.len());

        let mut added = 0;
        for path in files {
            let keyboard = match self.loader.load(&path) {
                Ok(keyboard) => keyboard,
                Err(err) => {
                    log::warn!("Failed to load keyboard {}: {}", path.display(), err);
                    continue;
                }
            };
            match self.append(Arc::new(keyboard)) {
                Ok(()) => added += 1,
                Err(err) => log::warn!("Cannot add keyboard {}: {}", path.display(), err),
            }
        }
        added
    }

    /// Load keyboards from every directory on `search_path`, or on the
    /// environment/default search path when `None`.
    pub fn init(&self, search_path: Option<&OsStr>) -> InitStatus {
        let _guard = self.init_lock.lock();
        if !self.loaded.read().is_empty() {
            return InitStatus::AlreadyInitialized;
        }

        let search_path = match search_path {
            Some(path) => path.to_os_string(),
            None => paths::search_path(),
        };

        let total: usize = paths::split_search_path(&search_path)
            .iter()
            .map(|dir| self.load_directory(dir))
            .sum();
        log::info!("Loaded {} keyboards from {:?}", total, search_path);

        if total == 0 {
            InitStatus::NoKeyboardsFound
        } else {
            InitStatus::Success
        }
    }

    /// Drop every loaded keyboard. Built-ins are unaffected.
    pub fn shutdown(&self) {
        let mut loaded = self.loaded.write();
        let released = loaded.len();
        *loaded = Vec::new();
        log::info!("Released {} loaded keyboards", released);
    }

    pub fn count(&self) -> usize {
        self.builtins.len() + self.loaded.read().len()
    }

    pub fn builtin_count(&self) -> usize {
        self.builtins.len()
    }

    pub fn keyboard_at(&self, index: usize) -> Option<KeyboardRef> {
        if let Some(keyboard) = self.builtins.get(index) {
            return Some(KeyboardRef::Builtin(keyboard));
        }
        self.loaded
            .read()
            .get(index - self.builtins.len())
            .cloned()
            .map(KeyboardRef::Loaded)
    }

    pub fn id_at(&self, index: usize) -> Option<String> {
        self.keyboard_at(index)
            .and_then(|keyboard| keyboard.id().map(str::to_owned))
    }

    pub fn name_at(&self, index: usize) -> Option<String> {
        self.keyboard_at(index)
            .and_then(|keyboard| keyboard.name().map(str::to_owned))
    }

    /// Snapshot of all keyboards in index order.
    pub fn keyboards(&self) -> Vec<KeyboardRef> {
        let loaded = self.loaded.read();
        self.builtins
            .iter()
            .map(KeyboardRef::Builtin)
            .chain(loaded.iter().cloned().map(KeyboardRef::Loaded))
            .collect()
    }

    /// Find the keyboard bound to `id`.
    ///
    /// Loaded keyboards are searched newest first, then built-ins from the
    /// last declared backwards.
    pub fn resolve(&self, id: &str) -> Option<KeyboardRef> {
        let loaded = self.loaded.read();
        if let Some(keyboard) = loaded.iter().rev().find(|kb| kb.id() == Some(id)) {
            return Some(KeyboardRef::Loaded(Arc::clone(keyboard)));
        }
        drop(loaded);

        self.builtins
            .iter()
            .rev()
            .find(|kb| kb.id() == Some(id))
            .map(KeyboardRef::Builtin)
    }

    /// Like [`resolve`](Self::resolve), but a miss is an error.
    pub fn get(&self, id: &str) -> Result<KeyboardRef> {
        self.resolve(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Add `keyboard` to the end of the loaded list and return its id.
    pub fn register(&self, keyboard: Keyboard) -> Result<String> {
        let id = keyboard
            .id()
            .map(str::to_owned)
            .ok_or_else(|| Error::InvalidArgument("keyboard has no id".to_string()))?;
        self.append(Arc::new(keyboard))?;
        log::info!("Registered keyboard '{}'", id);
        Ok(id)
    }

    /// Remove the first loaded keyboard with `id` and hand it back.
    pub fn unregister(&self, id: &str) -> Option<Arc<Keyboard>> {
        let mut loaded = self.loaded.write();
        let index = loaded.iter().position(|kb| kb.id() == Some(id))?;
        let keyboard = loaded.remove(index);
        log::info!("Unregistered keyboard '{}'", id);
        Some(keyboard)
    }

    fn append(&self, keyboard: Arc<Keyboard>) -> Result<()> {
        let mut loaded = self.loaded.write();
        let len = loaded.len();
        if len == loaded.capacity() {
            let target = match loaded.capacity() {
                0 => INITIAL_CAPACITY,
                cap => cap.checked_mul(2).ok_or(Error::OutOfMemory)?,
            };
            loaded
                .try_reserve_exact(target - len)
                .map_err(|_| Error::OutOfMemory)?;
        }
        loaded.push(keyboard);
        Ok(())
    }
}
