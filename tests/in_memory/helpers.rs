//! Shared fixtures for integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use rstest::fixture;
use uuid::Uuid;

pub use crate::test_helpers::{EnvVarGuard, FixedClock};

/// Scratch directory removed when dropped.
pub struct ScratchDir {
    path: Utf8PathBuf,
}

impl ScratchDir {
    /// Returns the directory path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        drop(std::fs::remove_dir_all(&self.path));
    }
}

/// Provides a unique, not yet created directory under the system temp dir.
#[fixture]
pub fn scratch() -> ScratchDir {
    let base = Utf8PathBuf::from_path_buf(std::env::temp_dir())
        .unwrap_or_else(|_| Utf8PathBuf::from("/tmp"));
    ScratchDir {
        path: base.join(format!("task-tracker-test-{}", Uuid::new_v4())),
    }
}

/// Provides a clock pinned to 14 March 2025.
#[fixture]
pub fn clock() -> FixedClock {
    FixedClock::on_day(2025, 3, 14)
}
