//! Statement assembly: from resolved series to a rectangular table.
//!
//! Assembly unions the period end dates seen across every resolved field
//! into one sorted column axis, zero-fills cells where a field has no value
//! for a date, and relabels the columns as annual or quarterly reporting
//! periods. Zero-fill is explicit: downstream consumers cannot distinguish
//! "no data" from a reported value of exactly zero.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame};

use edgar_core::{EdgarError, PeriodType, ReportingPeriod, Result};

use crate::resolve::ResolvedSeries;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A rectangular financial statement: canonical fields by reporting periods.
///
/// Rows follow the concept dictionary's declaration order; columns are in
/// ascending period order. Construct with [`assemble_statement`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatementTable {
    period_type: PeriodType,
    rows: Vec<&'static str>,
    columns: Vec<ReportingPeriod>,
    values: Vec<Vec<f64>>,
}

impl StatementTable {
    /// Returns the period granularity of the columns.
    #[must_use]
    pub const fn period_type(&self) -> PeriodType {
        self.period_type
    }

    /// Returns the row labels, in dictionary declaration order.
    #[must_use]
    pub fn rows(&self) -> &[&'static str] {
        &self.rows
    }

    /// Returns the column periods, in ascending order.
    #[must_use]
    pub fn columns(&self) -> &[ReportingPeriod] {
        &self.columns
    }

    /// Returns the values of one row, or `None` for an unknown field.
    #[must_use]
    pub fn row(&self, field: &str) -> Option<&[f64]> {
        let idx = self.rows.iter().position(|row| *row == field)?;
        Some(&self.values[idx])
    }

    /// Returns a single cell, or `None` for an unknown field or period.
    #[must_use]
    pub fn value(&self, field: &str, period: ReportingPeriod) -> Option<f64> {
        let col = self.columns.iter().position(|c| *c == period)?;
        self.row(field).map(|row| row[col])
    }

    /// Returns true if no reporting period survived assembly.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Converts the table to a polars `DataFrame`.
    ///
    /// The first column, `item`, holds the canonical field names; each
    /// reporting period becomes an `f64` column labeled `2023` or `2023Q4`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.columns.len() + 1);
        columns.push(Column::new("item".into(), self.rows.clone()));

        for (idx, period) in self.columns.iter().enumerate() {
            let cells: Vec<f64> = self.values.iter().map(|row| row[idx]).collect();
            let label = period.to_string();
            columns.push(Column::new(label.as_str().into(), cells));
        }

        DataFrame::new(columns).map_err(|e| EdgarError::Other(e.to_string()))
    }
}

/// Assembles resolved fields into a [`StatementTable`].
///
/// Every period end date present in at least one field's series becomes a
/// column in every row, zero-filled where a field has no entry. When two
/// distinct end dates collapse to the same period label (fiscal-year
/// boundary edge case), the first date in sort order is kept and later ones
/// are dropped.
///
/// # Errors
///
/// Returns [`EdgarError::Parse`] if a period end date is not a valid
/// `YYYY-MM-DD` calendar date.
pub fn assemble_statement(
    items: &[(&'static str, ResolvedSeries)],
    period_type: PeriodType,
) -> Result<StatementTable> {
    let dates: BTreeSet<&str> = items
        .iter()
        .flat_map(|(_, series)| series.keys().map(String::as_str))
        .collect();

    let mut columns: Vec<ReportingPeriod> = Vec::with_capacity(dates.len());
    let mut kept_dates: Vec<&str> = Vec::with_capacity(dates.len());
    for date in dates {
        let end = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| EdgarError::Parse(format!("invalid period end date {date:?}: {e}")))?;
        let period = ReportingPeriod::from_end_date(end, period_type);
        if columns.contains(&period) {
            continue;
        }
        columns.push(period);
        kept_dates.push(date);
    }

    let rows: Vec<&'static str> = items.iter().map(|(field, _)| *field).collect();
    let values: Vec<Vec<f64>> = items
        .iter()
        .map(|(_, series)| {
            kept_dates
                .iter()
                .map(|date| series.get(*date).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    Ok(StatementTable {
        period_type,
        rows,
        columns,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(entries: &[(&str, f64)]) -> ResolvedSeries {
        entries
            .iter()
            .map(|(date, val)| (date.to_string(), *val))
            .collect()
    }

    #[test]
    fn test_union_and_zero_fill() {
        let items = vec![
            (
                "Revenues",
                series(&[("2021-09-25", 365.0), ("2022-09-24", 394.0)]),
            ),
            ("GrossProfit", series(&[("2022-09-24", 170.0)])),
        ];

        let table = assemble_statement(&items, PeriodType::Annual).unwrap();
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(
            table.columns(),
            &[
                ReportingPeriod::annual(2021),
                ReportingPeriod::annual(2022)
            ]
        );
        assert_eq!(table.row("Revenues").unwrap(), &[365.0, 394.0]);
        // Absent cell is an explicit zero, not a missing-value marker.
        assert_eq!(table.row("GrossProfit").unwrap(), &[0.0, 170.0]);
    }

    #[test]
    fn test_field_with_no_data_is_all_zeros() {
        let items = vec![
            ("Revenues", series(&[("2022-09-24", 394.0)])),
            ("InterestIncome", ResolvedSeries::new()),
        ];

        let table = assemble_statement(&items, PeriodType::Annual).unwrap();
        assert_eq!(table.row("InterestIncome").unwrap(), &[0.0]);
    }

    #[test]
    fn test_quarterly_labels() {
        let items = vec![(
            "Revenues",
            series(&[("2022-12-31", 117.0), ("2023-04-01", 94.8)]),
        )];

        let table = assemble_statement(&items, PeriodType::Quarterly).unwrap();
        assert_eq!(
            table.columns(),
            &[
                ReportingPeriod::quarterly(2022, 4),
                ReportingPeriod::quarterly(2023, 2)
            ]
        );
    }

    #[test]
    fn test_duplicate_period_labels_keep_first_date() {
        // Two fiscal-year ends landing in the same calendar quarter collapse
        // to one column holding the earlier date's values.
        let items = vec![(
            "Revenues",
            series(&[("2023-09-24", 100.0), ("2023-09-30", 200.0)]),
        )];

        let table = assemble_statement(&items, PeriodType::Quarterly).unwrap();
        assert_eq!(table.columns(), &[ReportingPeriod::quarterly(2023, 3)]);
        assert_eq!(table.row("Revenues").unwrap(), &[100.0]);
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let items = vec![
            (
                "Revenues",
                series(&[("2021-09-25", 365.0), ("2022-09-24", 394.0)]),
            ),
            ("GrossProfit", series(&[("2021-09-25", 152.0)])),
        ];

        let first = assemble_statement(&items, PeriodType::Annual).unwrap();
        let second = assemble_statement(&items, PeriodType::Annual).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_items_produce_empty_table() {
        let items = vec![("Revenues", ResolvedSeries::new())];
        let table = assemble_statement(&items, PeriodType::Annual).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.shape(), (1, 0));
    }

    #[test]
    fn test_invalid_end_date_is_a_parse_error() {
        let items = vec![("Revenues", series(&[("2023-13-99", 1.0)]))];
        let err = assemble_statement(&items, PeriodType::Annual).unwrap_err();
        assert!(matches!(err, EdgarError::Parse(_)));
    }

    #[test]
    fn test_end_to_end_from_facts_json() {
        use crate::concepts::StatementType;
        use crate::resolve::resolve_statement;
        use edgar_core::CompanyFacts;

        // Abridged company facts document in the EDGAR API shape. Revenue is
        // tagged under the second synonym only, with a restated 2022 value
        // and a 10-Q entry that must not leak into annual extraction.
        let facts: CompanyFacts = serde_json::from_value(serde_json::json!({
            "cik": 320193,
            "entityName": "Apple Inc.",
            "facts": {
                "us-gaap": {
                    "RevenueFromContractWithCustomerExcludingAssessedTax": {
                        "label": "Revenue",
                        "units": {
                            "USD": [
                                {"start": "2020-09-27", "end": "2021-09-25",
                                 "val": 365817000000.0, "form": "10-K", "filed": "2021-10-29"},
                                {"start": "2021-09-26", "end": "2022-09-24",
                                 "val": 111111111111.0, "form": "10-K", "filed": "2022-10-28"},
                                {"start": "2021-09-26", "end": "2022-09-24",
                                 "val": 394328000000.0, "form": "10-K", "filed": "2023-11-03"},
                                {"start": "2022-12-31", "end": "2023-04-01",
                                 "val": 94836000000.0, "form": "10-Q", "filed": "2023-05-05"}
                            ]
                        }
                    },
                    "GrossProfit": {
                        "label": "Gross Profit",
                        "units": {
                            "USD": [
                                {"start": "2020-09-27", "end": "2021-09-25",
                                 "val": 152836000000.0, "form": "10-K", "filed": "2021-10-29"}
                            ]
                        }
                    }
                }
            }
        }))
        .unwrap();

        let resolved = resolve_statement(&facts, StatementType::Income, PeriodType::Annual);
        let table = assemble_statement(&resolved, PeriodType::Annual).unwrap();

        assert_eq!(
            table.columns(),
            &[
                ReportingPeriod::annual(2021),
                ReportingPeriod::annual(2022)
            ]
        );
        // Later filing wins the restated 2022 period.
        assert_eq!(
            table.row("Revenues").unwrap(),
            &[365_817_000_000.0, 394_328_000_000.0]
        );
        assert_eq!(table.row("GrossProfit").unwrap(), &[152_836_000_000.0, 0.0]);
        // Fields with no facts at all come out as zero rows.
        assert_eq!(table.row("InterestIncome").unwrap(), &[0.0, 0.0]);
    }

    #[test]
    fn test_to_dataframe_layout() {
        let items = vec![
            ("Revenues", series(&[("2022-09-24", 394.0)])),
            ("GrossProfit", series(&[("2022-09-24", 170.0)])),
        ];

        let table = assemble_statement(&items, PeriodType::Annual).unwrap();
        let df = table.to_dataframe().unwrap();
        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.get_column_names()[0].as_str(), "item");
        assert_eq!(df.get_column_names()[1].as_str(), "2022");
    }
}
