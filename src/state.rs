use crate::store::KvStore;
use std::sync::Arc;

/// Shared application state
///
/// The store is injected as a trait object so handlers never know which
/// backend they run against.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
}
