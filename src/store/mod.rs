pub mod memory;
pub mod spanner;
#[cfg(test)]
pub mod testing;

pub use memory::MemoryStore;
pub use spanner::SpannerStore;

use anyhow::Result;
use async_trait::async_trait;

/// Key prefix under which feedback records live.
pub const FEEDBACK_PREFIX: &str = "feedback_";

/// Page size for key listings. Only the first page is ever fetched;
/// pagination beyond it is not supported.
pub const LIST_PAGE_SIZE: i64 = 100;

/// External key-value namespace the service persists to.
///
/// String keys map to JSON-encoded string values. Handlers hold this as
/// `Arc<dyn KvStore>`, so tests substitute [`MemoryStore`] for the
/// production [`SpannerStore`] without touching handler code.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any existing value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// List up to `limit` keys starting with `prefix`, in key order.
    async fn list_keys(&self, prefix: &str, limit: i64) -> Result<Vec<String>>;

    /// Lightweight connectivity probe for the health endpoint.
    async fn health_check(&self) -> Result<()>;
}
