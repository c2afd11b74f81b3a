//! Error types for EDGAR data operations.
//!
//! This module defines [`EdgarError`] which covers all error cases that can
//! occur when fetching, parsing, or extracting financial statement data.

use thiserror::Error;

/// Errors that can occur during EDGAR data operations.
#[derive(Error, Debug)]
pub enum EdgarError {
    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The requested ticker could not be resolved to a CIK.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No statement data survived extraction for the requested symbol.
    #[error("No {statement} data found for {symbol}")]
    NoData {
        /// The symbol that was requested.
        symbol: String,
        /// The statement type that was requested.
        statement: String,
    },

    /// Error parsing data returned by EDGAR.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error interacting with the facts cache.
    #[error("Cache error: {0}")]
    Cache(String),

    /// An unrecognized statement type was requested.
    ///
    /// This is a caller contract violation and is never degraded to an
    /// empty result.
    #[error("Invalid statement type {0:?}: expected \"income\", \"balance\", or \"cashflow\"")]
    InvalidStatement(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`EdgarError`].
pub type Result<T> = std::result::Result<T, EdgarError>;
