use anyhow::{Result, anyhow};
use async_trait::async_trait;

use super::KvStore;

/// [`KvStore`] whose every operation fails, for exercising the store-failure
/// response paths that [`MemoryStore`](super::MemoryStore) can never hit.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl KvStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("injected store failure"))
    }

    async fn put(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("injected store failure"))
    }

    async fn list_keys(&self, _prefix: &str, _limit: i64) -> Result<Vec<String>> {
        Err(anyhow!("injected store failure"))
    }

    async fn health_check(&self) -> Result<()> {
        Err(anyhow!("injected store failure"))
    }
}
