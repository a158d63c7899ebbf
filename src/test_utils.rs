#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `LaunchBoard` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use std::ffi::OsString;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the `XDG_CONFIG_HOME` environment variable.
static CONFIG_ROOT_LOCK: Mutex<()> = Mutex::new(());

/// Environment variable that selects the config root
const CONFIG_ROOT_VAR: &str = "XDG_CONFIG_HOME";

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points the config root at a temp directory for a test scope
/// and restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because another
/// thread may read the environment concurrently. Tests that touch the config
/// root hold `CONFIG_ROOT_LOCK` for the guard's lifetime, so modifications are
/// serialized, and the original value is restored on drop (including on panic).
pub struct ConfigRootGuard {
    original: Option<OsString>,
    // Held for the lifetime of the guard for exclusive access to the variable
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under a global lock"
)]
impl ConfigRootGuard {
    /// Create a new guard that sets the config root to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A previous test panicking while holding the lock must not fail every later test
        let lock = CONFIG_ROOT_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(CONFIG_ROOT_VAR);
        // SAFETY: CONFIG_ROOT_LOCK serializes every writer of this variable and
        // the guard restores the previous value on drop.
        unsafe {
            std::env::set_var(CONFIG_ROOT_VAR, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under a global lock"
)]
impl Drop for ConfigRootGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held by this guard; see struct-level documentation.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(CONFIG_ROOT_VAR, original);
            }
        } else {
            unsafe {
                std::env::remove_var(CONFIG_ROOT_VAR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_sets_and_restores_config_root() {
        let before = std::env::var_os(CONFIG_ROOT_VAR);
        let temp_dir = create_test_dir();
        {
            let _guard = ConfigRootGuard::new(&temp_dir);
            assert_eq!(
                std::env::var_os(CONFIG_ROOT_VAR),
                Some(temp_dir.path().as_os_str().to_owned())
            );
        }
        let lock = CONFIG_ROOT_LOCK.lock().unwrap();
        assert_eq!(std::env::var_os(CONFIG_ROOT_VAR), before);
        drop(lock);
    }
}
