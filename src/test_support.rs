//! Shared fixtures for unit tests.

use crate::persistence::{
    SnapshotError, SnapshotKey, SnapshotResult, SnapshotStore, adapters::InMemorySnapshotStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Clock returning a controllable instant.
#[derive(Debug, Clone)]
pub(crate) struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub(crate) fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub(crate) fn on_day(year: i32, month: u32, day: u32) -> Self {
        let now = Utc
            .with_ymd_and_hms(year, month, day, 9, 30, 0)
            .single()
            .expect("valid calendar instant");
        Self::at(now)
    }

    pub(crate) fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Snapshot store whose writes can be switched to fail.
#[derive(Debug, Default)]
pub(crate) struct FailingSnapshotStore {
    inner: InMemorySnapshotStore,
    fail_writes: AtomicBool,
}

impl FailingSnapshotStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SnapshotStore for FailingSnapshotStore {
    async fn read(&self, key: SnapshotKey) -> SnapshotResult<Option<String>> {
        self.inner.read(key).await
    }

    async fn write(&self, key: SnapshotKey, contents: String) -> SnapshotResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SnapshotError::storage(std::io::Error::other(
                "snapshot write rejected",
            )));
        }
        self.inner.write(key, contents).await
    }
}
