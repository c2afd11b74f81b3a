//! Cache trait for EDGAR lookups.
//!
//! This module defines the [`FactsCache`] trait for caching the two
//! expensive EDGAR fetches: the ticker-to-CIK mapping and per-company facts.
//! Caching is an explicit object with `clear()` invalidation so the
//! extraction engine itself stays pure and independently testable.

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    error::Result,
    facts::CompanyFacts,
    types::{Cik, Symbol},
};

/// Trait for caching EDGAR identifier mappings and company facts.
///
/// Implementations can store data in various backends. All methods take
/// `&self`; implementations are expected to handle interior mutability.
#[async_trait]
pub trait FactsCache: Send + Sync {
    /// Looks up a cached CIK for a symbol.
    ///
    /// Returns `Ok(Some(cik))` on a hit, `Ok(None)` on a miss.
    async fn get_cik(&self, symbol: &Symbol) -> Result<Option<Cik>>;

    /// Stores the full ticker-to-CIK mapping.
    ///
    /// The SEC publishes the mapping as one document, so it is cached
    /// wholesale rather than entry by entry.
    async fn put_cik_map(&self, entries: &[(Symbol, Cik)]) -> Result<()>;

    /// Returns true if a ticker-to-CIK mapping has been stored.
    ///
    /// Used to distinguish "mapping not fetched yet" from "ticker absent
    /// from the mapping".
    async fn has_cik_map(&self) -> Result<bool>;

    /// Retrieves cached company facts for a CIK.
    ///
    /// Returns `Ok(Some(facts))` on a hit, `Ok(None)` on a miss.
    async fn get_facts(&self, cik: &Cik) -> Result<Option<Arc<CompanyFacts>>>;

    /// Stores company facts for a CIK.
    async fn put_facts(&self, cik: &Cik, facts: Arc<CompanyFacts>) -> Result<()>;

    /// Clears all cached data.
    async fn clear(&self) -> Result<()>;
}
