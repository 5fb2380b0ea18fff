use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::KvStore;

/// In-memory [`KvStore`] backed by a `BTreeMap`.
///
/// The fake every handler test runs against, and the backend behind
/// `STORE_BACKEND=memory` for local runs without a Spanner emulator.
/// The `BTreeMap` keeps keys ordered, so prefix listings come back in the
/// same key order the Spanner backend produces.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.locked()?.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.locked()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn list_keys(&self, prefix: &str, limit: i64) -> Result<Vec<String>> {
        let entries = self.locked()?;
        let keys = entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .take(limit.max(0) as usize)
            .map(|(key, _)| key.clone())
            .collect();
        Ok(keys)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
