//! Reporting period definitions.
//!
//! This module defines [`PeriodType`] for selecting annual or quarterly data
//! and [`ReportingPeriod`] for labeling statement columns.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Period type for fundamental financial data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    /// Annual reporting period.
    #[default]
    Annual,
    /// Quarterly reporting period.
    Quarterly,
}

impl PeriodType {
    /// Returns the SEC filing form that reports this period type.
    #[must_use]
    pub const fn form(&self) -> &'static str {
        match self {
            Self::Annual => "10-K",
            Self::Quarterly => "10-Q",
        }
    }
}

/// A labeled reporting period, anchored on a period end date.
///
/// Annual periods display as `2023`, quarterly periods as `2023Q4`. The
/// quarter is derived from the calendar quarter of the end date. Ordering
/// follows `(year, quarter)`, so sorted period labels preserve the
/// chronological order of the end dates they were derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportingPeriod {
    year: i32,
    quarter: Option<u8>,
}

impl ReportingPeriod {
    /// Creates an annual period for the given year.
    #[must_use]
    pub const fn annual(year: i32) -> Self {
        Self {
            year,
            quarter: None,
        }
    }

    /// Creates a quarterly period for the given year and quarter (1-4).
    #[must_use]
    pub const fn quarterly(year: i32, quarter: u8) -> Self {
        Self {
            year,
            quarter: Some(quarter),
        }
    }

    /// Derives the period label for a period end date.
    #[must_use]
    pub fn from_end_date(end: NaiveDate, period_type: PeriodType) -> Self {
        match period_type {
            PeriodType::Annual => Self::annual(end.year()),
            PeriodType::Quarterly => {
                let quarter = ((end.month() - 1) / 3 + 1) as u8;
                Self::quarterly(end.year(), quarter)
            }
        }
    }

    /// Returns the calendar year of this period.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the quarter (1-4) for quarterly periods, `None` for annual.
    #[must_use]
    pub const fn quarter(&self) -> Option<u8> {
        self.quarter
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quarter {
            Some(q) => write!(f, "{}Q{}", self.year, q),
            None => write!(f, "{}", self.year),
        }
    }
}
