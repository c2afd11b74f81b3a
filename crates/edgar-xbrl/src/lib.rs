#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edgar-rs/edgar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! XBRL concept extraction engine for SEC EDGAR financial statements.
//!
//! This crate turns a company's raw XBRL facts into one canonical value per
//! (field, reporting period):
//!
//! - [`StatementType`] selects one of the fixed concept dictionaries
//! - [`resolve_statement`] resolves every canonical field of a statement
//! - [`assemble_statement`] builds the rectangular [`StatementTable`]
//!
//! The engine is purely functional and synchronous: it operates over facts
//! already in memory, holds no state, and is trivially parallelizable across
//! companies by the caller. Fetching and caching live in `edgar-client` and
//! `edgar-cache`.
//!
//! # Example
//!
//! ```
//! use edgar_core::{CompanyFacts, PeriodType};
//! use edgar_xbrl::{StatementType, assemble_statement, resolve_statement};
//!
//! # fn example(facts: &CompanyFacts) -> edgar_core::Result<()> {
//! let resolved = resolve_statement(facts, StatementType::Income, PeriodType::Annual);
//! let table = assemble_statement(&resolved, PeriodType::Annual)?;
//! for field in table.rows() {
//!     println!("{field}: {:?}", table.row(field));
//! }
//! # Ok(())
//! # }
//! ```

/// Canonical concept dictionaries.
pub mod concepts;
/// Concept resolution: from raw facts to one value per period.
pub mod resolve;
/// Statement assembly: from resolved series to a rectangular table.
pub mod statement;

pub use concepts::{
    BALANCE_CONCEPTS, CASHFLOW_CONCEPTS, ConceptDictionary, INCOME_CONCEPTS, StatementType,
};
pub use resolve::{
    ResolvedSeries, UNIT_PRIORITY, resolve_dictionary, resolve_field, resolve_statement,
};
pub use statement::{StatementTable, assemble_statement};
