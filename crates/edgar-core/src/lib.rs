#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edgar-rs/edgar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and traits for SEC EDGAR financial statement extraction.
//!
//! This crate provides the foundational abstractions shared by the engine,
//! cache, and client crates:
//!
//! - [`Symbol`] and [`Cik`] - company identifiers
//! - [`CompanyFacts`] - the raw XBRL facts data model
//! - [`PeriodType`] and [`ReportingPeriod`] - reporting period definitions
//! - [`FactsCache`] - caching abstraction
//! - [`EdgarError`] - error taxonomy

/// Cache trait for EDGAR lookups.
pub mod cache;
/// Error types for EDGAR data operations.
pub mod error;
/// Raw company facts data model.
pub mod facts;
/// Reporting period definitions.
pub mod period;
/// Identifier types for companies in EDGAR.
pub mod types;

// Re-export commonly used items at crate root
pub use cache::FactsCache;
pub use error::{EdgarError, Result};
pub use facts::{CompanyFacts, ConceptFacts, FactValue, US_GAAP_TAXONOMY};
pub use period::{PeriodType, ReportingPeriod};
pub use types::{Cik, Symbol};
