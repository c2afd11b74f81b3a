#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edgar-rs/edgar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SEC EDGAR API client for financial statement extraction.
//!
//! This crate fetches raw data from SEC EDGAR and drives the `edgar-xbrl`
//! extraction engine:
//!
//! - CIK (Central Index Key) lookup from ticker symbols
//! - Company facts from the EDGAR XBRL API
//! - Canonical financial statement tables per company
//!
//! # Example
//!
//! ```no_run
//! use edgar_client::EdgarClient;
//! use edgar_core::{PeriodType, Symbol};
//! use edgar_xbrl::StatementType;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EdgarClient::new("MyApp/1.0 (contact@example.com)");
//!
//!     let symbol = Symbol::new("AAPL");
//!     let table = client
//!         .financial_statement(&symbol, StatementType::Income, PeriodType::Annual)
//!         .await?;
//!
//!     println!("{:?}", table.to_dataframe()?);
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use edgar_cache::InMemoryFactsCache;
use edgar_core::{Cik, CompanyFacts, EdgarError, FactsCache, PeriodType, Result, Symbol};
use edgar_xbrl::{StatementType, StatementTable, assemble_statement, resolve_statement};

/// SEC EDGAR API base URL.
const EDGAR_BASE_URL: &str = "https://data.sec.gov";

/// SEC company tickers URL.
const COMPANY_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// Default rate limit: 10 requests per second (SEC requirement).
const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(100);

/// Rate limiter to ensure we don't exceed SEC's rate limits.
#[derive(Debug)]
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Instant::now() - min_interval,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }
        self.last_request = Instant::now();
    }
}

/// SEC EDGAR client.
///
/// Fetches ticker mappings and company facts from EDGAR (rate limited to the
/// SEC's 10 requests/second), caches them behind a [`FactsCache`], and
/// exposes canonical financial statement tables built by the `edgar-xbrl`
/// engine.
pub struct EdgarClient {
    client: reqwest::Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    cache: Arc<dyn FactsCache>,
}

impl std::fmt::Debug for EdgarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgarClient")
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}

impl EdgarClient {
    /// Create a new EDGAR client with the specified user agent.
    ///
    /// The SEC requires identifying user agent headers. Format should be:
    /// "AppName/Version (contact@email.com)". Lookups are cached in memory
    /// for the lifetime of the client.
    ///
    /// # Example
    /// ```
    /// use edgar_client::EdgarClient;
    ///
    /// let client = EdgarClient::new("MyApp/1.0 (contact@example.com)");
    /// ```
    #[must_use]
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self::with_client(client)
    }

    /// Create a new EDGAR client with a custom HTTP client.
    ///
    /// The client must already carry an identifying `User-Agent` header;
    /// rate limiting is still applied.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(DEFAULT_RATE_LIMIT))),
            cache: Arc::new(InMemoryFactsCache::new()),
        }
    }

    /// Replace the cache backing this client.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn FactsCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Look up a company's CIK number from its ticker symbol.
    ///
    /// The SEC publishes the full ticker-to-CIK mapping as one document; it
    /// is fetched once and answered from the cache afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`EdgarError::SymbolNotFound`] if the ticker does not appear
    /// in the mapping.
    pub async fn cik_for(&self, symbol: &Symbol) -> Result<Cik> {
        if symbol.as_str().is_empty() {
            return Err(EdgarError::InvalidParameter("Empty ticker".to_string()));
        }

        if let Some(cik) = self.cache.get_cik(symbol).await? {
            return Ok(cik);
        }
        if self.cache.has_cik_map().await? {
            return Err(EdgarError::SymbolNotFound(symbol.to_string()));
        }

        self.rate_limiter.lock().await.wait().await;

        debug!("Fetching company tickers from SEC");
        let response = self
            .client
            .get(COMPANY_TICKERS_URL)
            .send()
            .await
            .map_err(|e| EdgarError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EdgarError::Network(format!(
                "Failed to fetch company tickers: HTTP {}",
                response.status()
            )));
        }

        let data: HashMap<String, CompanyTickerInfo> = response
            .json()
            .await
            .map_err(|e| EdgarError::Parse(format!("Failed to parse company tickers: {}", e)))?;

        let entries: Vec<(Symbol, Cik)> = data
            .values()
            .map(|company| (Symbol::new(&company.ticker), Cik::from(company.cik_str)))
            .collect();
        self.cache.put_cik_map(&entries).await?;

        match entries.into_iter().find(|(ticker, _)| ticker == symbol) {
            Some((_, cik)) => {
                debug!(cik = %cik, ticker = %symbol, "Resolved CIK");
                Ok(cik)
            }
            None => Err(EdgarError::SymbolNotFound(symbol.to_string())),
        }
    }

    /// Fetch company facts from SEC EDGAR.
    ///
    /// One API call returns all XBRL facts for a company; results are
    /// cached per CIK.
    pub async fn company_facts(&self, cik: &Cik) -> Result<Arc<CompanyFacts>> {
        if let Some(facts) = self.cache.get_facts(cik).await? {
            return Ok(facts);
        }

        self.rate_limiter.lock().await.wait().await;

        let url = format!("{}/api/xbrl/companyfacts/CIK{}.json", EDGAR_BASE_URL, cik);

        debug!("Fetching company facts from {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EdgarError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EdgarError::Network(format!(
                "Failed to fetch company facts for CIK {}: HTTP {}",
                cik,
                response.status()
            )));
        }

        let facts: CompanyFacts = response
            .json()
            .await
            .map_err(|e| EdgarError::Parse(format!("Failed to parse company facts: {}", e)))?;

        let facts = Arc::new(facts);
        self.cache.put_facts(cik, Arc::clone(&facts)).await?;

        Ok(facts)
    }

    /// Retrieve a canonical financial statement for a company.
    ///
    /// Resolves the ticker, fetches (or reuses cached) company facts, and
    /// runs extraction and assembly for the requested statement type and
    /// period granularity.
    ///
    /// # Errors
    ///
    /// Returns [`EdgarError::NoData`] when no reporting period survives
    /// extraction, rather than an empty table.
    pub async fn financial_statement(
        &self,
        symbol: &Symbol,
        statement: StatementType,
        period_type: PeriodType,
    ) -> Result<StatementTable> {
        let cik = self.cik_for(symbol).await?;
        let facts = self.company_facts(&cik).await?;

        let resolved = resolve_statement(&facts, statement, period_type);
        let table = assemble_statement(&resolved, period_type)?;

        if table.is_empty() {
            warn!(
                ticker = %symbol,
                statement = %statement,
                "No statement data survived extraction"
            );
            return Err(EdgarError::NoData {
                symbol: symbol.to_string(),
                statement: statement.to_string(),
            });
        }

        Ok(table)
    }

    /// Clear all cached EDGAR data (ticker-CIK mapping and company facts).
    pub async fn clear_cache(&self) -> Result<()> {
        self.cache.clear().await
    }
}

/// Company ticker information from SEC JSON.
#[derive(Debug, Deserialize)]
struct CompanyTickerInfo {
    /// CIK as a number (SEC returns this as an integer).
    cik_str: u64,
    /// Ticker symbol.
    ticker: String,
    /// Company name.
    #[allow(dead_code)]
    title: String,
}
