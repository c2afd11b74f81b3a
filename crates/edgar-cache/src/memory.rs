//! In-memory cache implementation.

use async_trait::async_trait;
use edgar_core::{Cik, CompanyFacts, FactsCache, Result, Symbol};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-lifetime in-memory cache for EDGAR lookups.
///
/// The ticker-to-CIK mapping is stored wholesale on first fetch; company
/// facts are stored per CIK behind `Arc` so hits avoid cloning the (large)
/// facts document. Data is lost when the cache is dropped.
#[derive(Debug, Default)]
pub struct InMemoryFactsCache {
    ciks: RwLock<Option<HashMap<Symbol, Cik>>>,
    facts: RwLock<HashMap<Cik, Arc<CompanyFacts>>>,
}

impl InMemoryFactsCache {
    /// Create a new empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FactsCache for InMemoryFactsCache {
    async fn get_cik(&self, symbol: &Symbol) -> Result<Option<Cik>> {
        let ciks = self.ciks.read().await;
        Ok(ciks.as_ref().and_then(|map| map.get(symbol).cloned()))
    }

    async fn put_cik_map(&self, entries: &[(Symbol, Cik)]) -> Result<()> {
        let mut ciks = self.ciks.write().await;
        *ciks = Some(entries.iter().cloned().collect());
        debug!("Cached {} ticker-CIK entries", entries.len());
        Ok(())
    }

    async fn has_cik_map(&self) -> Result<bool> {
        Ok(self.ciks.read().await.is_some())
    }

    async fn get_facts(&self, cik: &Cik) -> Result<Option<Arc<CompanyFacts>>> {
        let facts = self.facts.read().await;
        match facts.get(cik) {
            Some(entry) => {
                debug!(cik = %cik, "Cache hit for company facts");
                Ok(Some(Arc::clone(entry)))
            }
            None => {
                debug!(cik = %cik, "Cache miss for company facts");
                Ok(None)
            }
        }
    }

    async fn put_facts(&self, cik: &Cik, facts: Arc<CompanyFacts>) -> Result<()> {
        let mut cache = self.facts.write().await;
        cache.insert(cik.clone(), facts);
        debug!(cik = %cik, "Cached company facts");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.ciks.write().await = None;
        self.facts.write().await.clear();
        debug!("Cleared all cache entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_facts() -> Arc<CompanyFacts> {
        Arc::new(CompanyFacts {
            cik: 320_193,
            entity_name: "Apple Inc.".to_string(),
            facts: HashMap::new(),
        })
    }

    #[tokio::test]
    async fn test_cik_map_round_trip() {
        let cache = InMemoryFactsCache::new();
        let symbol = Symbol::new("AAPL");

        assert!(!cache.has_cik_map().await.unwrap());
        assert!(cache.get_cik(&symbol).await.unwrap().is_none());

        let entries = vec![
            (Symbol::new("AAPL"), Cik::new("320193")),
            (Symbol::new("MSFT"), Cik::new("789019")),
        ];
        cache.put_cik_map(&entries).await.unwrap();

        assert!(cache.has_cik_map().await.unwrap());
        assert_eq!(
            cache.get_cik(&symbol).await.unwrap(),
            Some(Cik::new("320193"))
        );
        // Mapping present but ticker absent: a definitive miss.
        assert!(
            cache
                .get_cik(&Symbol::new("UNKNOWN"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_facts_round_trip() {
        let cache = InMemoryFactsCache::new();
        let cik = Cik::new("320193");

        assert!(cache.get_facts(&cik).await.unwrap().is_none());

        cache.put_facts(&cik, sample_facts()).await.unwrap();

        let cached = cache.get_facts(&cik).await.unwrap().unwrap();
        assert_eq!(cached.entity_name, "Apple Inc.");
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = InMemoryFactsCache::new();
        let cik = Cik::new("320193");

        cache
            .put_cik_map(&[(Symbol::new("AAPL"), cik.clone())])
            .await
            .unwrap();
        cache.put_facts(&cik, sample_facts()).await.unwrap();

        cache.clear().await.unwrap();

        assert!(!cache.has_cik_map().await.unwrap());
        assert!(cache.get_facts(&cik).await.unwrap().is_none());
    }
}
