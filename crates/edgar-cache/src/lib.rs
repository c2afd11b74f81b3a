#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edgar-rs/edgar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Caching implementations for SEC EDGAR lookups.
//!
//! This crate provides implementations of the [`FactsCache`] trait from
//! `edgar-core`:
//!
//! - [`InMemoryFactsCache`] - process-lifetime cache, the default
//! - [`NoopFactsCache`] - no-op cache that refetches everything

/// In-memory cache implementation.
pub mod memory;
/// No-op cache implementation.
pub mod noop;

// Re-export the trait for convenience
pub use edgar_core::FactsCache;

// Re-export implementations
pub use memory::InMemoryFactsCache;
pub use noop::NoopFactsCache;
