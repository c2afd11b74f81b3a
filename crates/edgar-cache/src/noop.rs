//! No-op cache implementation.

use async_trait::async_trait;
use edgar_core::{Cik, CompanyFacts, FactsCache, Result, Symbol};
use std::sync::Arc;
use tracing::trace;

/// A no-op cache that doesn't store anything.
///
/// All `get_*` methods return `Ok(None)` and all `put_*` methods return
/// `Ok(())`, so every lookup goes back to the network. Useful for disabling
/// caching or testing code paths without cache hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFactsCache;

impl NoopFactsCache {
    /// Create a new no-op cache.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FactsCache for NoopFactsCache {
    async fn get_cik(&self, _symbol: &Symbol) -> Result<Option<Cik>> {
        trace!("NoopFactsCache: get_cik called, returning None");
        Ok(None)
    }

    async fn put_cik_map(&self, _entries: &[(Symbol, Cik)]) -> Result<()> {
        trace!("NoopFactsCache: put_cik_map called, doing nothing");
        Ok(())
    }

    async fn has_cik_map(&self) -> Result<bool> {
        Ok(false)
    }

    async fn get_facts(&self, _cik: &Cik) -> Result<Option<Arc<CompanyFacts>>> {
        trace!("NoopFactsCache: get_facts called, returning None");
        Ok(None)
    }

    async fn put_facts(&self, _cik: &Cik, _facts: Arc<CompanyFacts>) -> Result<()> {
        trace!("NoopFactsCache: put_facts called, doing nothing");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_noop_never_stores() {
        let cache = NoopFactsCache::new();
        let symbol = Symbol::new("AAPL");
        let cik = Cik::new("320193");

        cache
            .put_cik_map(&[(symbol.clone(), cik.clone())])
            .await
            .unwrap();
        assert!(cache.get_cik(&symbol).await.unwrap().is_none());
        assert!(!cache.has_cik_map().await.unwrap());

        let facts = Arc::new(CompanyFacts {
            cik: 320_193,
            entity_name: "Apple Inc.".to_string(),
            facts: HashMap::new(),
        });
        cache.put_facts(&cik, facts).await.unwrap();
        assert!(cache.get_facts(&cik).await.unwrap().is_none());
    }
}
