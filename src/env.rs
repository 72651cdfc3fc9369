//! Interpreter state shared across commands.

use std::env as stdenv;
use std::path::{Path, PathBuf};

/// Directories searched for external commands until a `path` command
/// replaces them.
pub const DEFAULT_SEARCH_PATH: &[&str] = &["./", "/usr/bin/", "/bin/"];

/// Mutable interpreter state: the search path and the working directory.
///
/// The environment is owned by the interpreter and handed to commands by
/// reference; nothing here is global.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Directories consulted, in order, when resolving a command name.
    pub search_path: Vec<String>,
    /// Working directory given to spawned commands.
    pub current_dir: PathBuf,
}

impl Environment {
    pub fn new() -> Self {
        let search_path = DEFAULT_SEARCH_PATH.iter().map(|s| s.to_string()).collect();
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            search_path,
            current_dir,
        }
    }

    /// Replaces the whole search path.
    ///
    /// An empty `entries` leaves no directory to search, so every
    /// external command will fail to resolve until a new path is set.
    pub fn replace_search_path(&mut self, entries: Vec<String>) {
        self.search_path = entries;
    }

    /// Resolves a command name to the first executable match on the
    /// search path.
    ///
    /// Each candidate is the directory, a `/`, and the name, checked in
    /// path order. Resolution only ever looks where the search path
    /// points; a name like `/bin/ls` gets no special treatment.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.search_path
            .iter()
            .map(|dir| PathBuf::from(format!("{}/{}", dir, name)))
            .find(|candidate| is_executable(candidate))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Tests that move the process working directory, or spawn from a
/// snapshot of it, serialize on this lock; [`Environment::new`] reads
/// that directory.
#[cfg(test)]
pub(crate) fn lock_current_dir() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX.get_or_init(|| Mutex::new(())).lock().unwrap()
}
