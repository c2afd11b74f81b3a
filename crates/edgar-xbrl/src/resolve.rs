//! Concept resolution: from raw facts to one value per period.
//!
//! Resolution runs per canonical field, walking the field's synonym list in
//! order. For each candidate concept the engine selects a measurement unit,
//! filters observations by filing form (with duration-based re-classification
//! for annual data), and deduplicates restatements by latest filing date.
//! The first synonym that yields any data wins the field entirely; partial
//! data is never merged across synonyms, which would silently combine
//! non-comparable line-item definitions.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use edgar_core::{CompanyFacts, ConceptFacts, FactValue, PeriodType};

use crate::concepts::{ConceptDictionary, StatementType};

/// One resolved value per period end date (`YYYY-MM-DD`), for one field.
pub type ResolvedSeries = BTreeMap<String, f64>;

/// Measurement unit preference order.
///
/// Currency amounts dominate; per-share and share-count units only arise for
/// EPS and share-count fields, and `pure` (ratios) is rarest.
pub const UNIT_PRIORITY: [&str; 4] = ["USD", "USD/shares", "shares", "pure"];

/// Minimum period duration, in days, for an observation tagged 10-K to be
/// treated as covering a full fiscal year.
const MIN_ANNUAL_DURATION_DAYS: i64 = 350;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Selects the observations for the preferred unit of a concept.
///
/// Returns `None` when none of the recognized units is present, in which
/// case the concept yields no data and the caller moves to the next synonym.
fn select_unit(concept: &ConceptFacts) -> Option<&[FactValue]> {
    UNIT_PRIORITY
        .iter()
        .find_map(|unit| concept.units.get(*unit))
        .map(Vec::as_slice)
}

/// Returns true if an annual-tagged observation covers a full fiscal year.
///
/// 10-K filings occasionally carry quarterly-duration entries (partial-year
/// restatements); those are rejected by the 350-day floor. Observations with
/// missing or unparseable period dates are kept rather than dropped.
fn covers_full_year(value: &FactValue) -> bool {
    let Some(start) = value.start.as_deref().filter(|s| !s.is_empty()) else {
        return true;
    };
    let parsed = NaiveDate::parse_from_str(start, DATE_FORMAT).and_then(|start| {
        NaiveDate::parse_from_str(&value.end, DATE_FORMAT).map(|end| (start, end))
    });
    match parsed {
        Ok((start, end)) => {
            end.signed_duration_since(start).num_days() >= MIN_ANNUAL_DURATION_DAYS
        }
        Err(_) => true,
    }
}

/// Filters observations by filing form and groups the survivors by period
/// end date as `(filed, val)` pairs.
fn collect_observations(
    values: &[FactValue],
    period_type: PeriodType,
) -> HashMap<String, Vec<(String, f64)>> {
    let form = period_type.form();
    let mut groups: HashMap<String, Vec<(String, f64)>> = HashMap::new();

    for value in values {
        if value.form.as_deref() != Some(form) {
            continue;
        }
        if value.end.is_empty() {
            continue;
        }
        if period_type == PeriodType::Annual && !covers_full_year(value) {
            continue;
        }
        groups
            .entry(value.end.clone())
            .or_default()
            .push((value.filed.clone().unwrap_or_default(), value.val));
    }

    groups
}

/// Collapses each period group to the value from its latest filing.
///
/// Amendments and restatements produce several observations for one period
/// end date; the entry with the lexically greatest `filed` date wins. ISO
/// dates sort lexically in chronological order, and the stable sort keeps
/// ties deterministic.
fn deduplicate(groups: HashMap<String, Vec<(String, f64)>>) -> ResolvedSeries {
    groups
        .into_iter()
        .filter_map(|(end, mut filings)| {
            filings.sort_by(|a, b| b.0.cmp(&a.0));
            filings.into_iter().next().map(|(_, val)| (end, val))
        })
        .collect()
}

/// Resolves one canonical field against a concept map.
///
/// Walks the synonym list in order and returns the series from the first
/// synonym that survives unit selection, form filtering, and deduplication
/// with at least one period. Returns an empty series when every synonym is
/// absent or filters to nothing.
#[must_use]
pub fn resolve_field(
    concepts: &HashMap<String, ConceptFacts>,
    synonyms: &[&str],
    period_type: PeriodType,
) -> ResolvedSeries {
    for synonym in synonyms {
        let Some(concept) = concepts.get(*synonym) else {
            continue;
        };
        let Some(values) = select_unit(concept) else {
            continue;
        };

        let series = deduplicate(collect_observations(values, period_type));
        if !series.is_empty() {
            return series;
        }
    }

    ResolvedSeries::new()
}

/// Resolves every field of a statement dictionary against a company's facts.
///
/// Fields resolve independently, in dictionary declaration order. A field
/// with no usable data still appears, paired with an empty series, so the
/// assembled table keeps a zero-filled row for it. A missing `us-gaap`
/// taxonomy resolves every field empty.
#[must_use]
pub fn resolve_statement(
    facts: &CompanyFacts,
    statement: StatementType,
    period_type: PeriodType,
) -> Vec<(&'static str, ResolvedSeries)> {
    resolve_dictionary(facts, statement.concepts(), period_type)
}

/// Resolves an explicit dictionary against a company's facts.
#[must_use]
pub fn resolve_dictionary(
    facts: &CompanyFacts,
    dictionary: ConceptDictionary,
    period_type: PeriodType,
) -> Vec<(&'static str, ResolvedSeries)> {
    let empty = HashMap::new();
    let concepts = facts.us_gaap().unwrap_or(&empty);

    let resolved: Vec<(&'static str, ResolvedSeries)> = dictionary
        .iter()
        .map(|(field, synonyms)| (*field, resolve_field(concepts, synonyms, period_type)))
        .collect();

    let populated = resolved.iter().filter(|(_, s)| !s.is_empty()).count();
    debug!(
        entity = %facts.entity_name,
        fields = resolved.len(),
        populated,
        "Resolved statement fields"
    );

    resolved
}
