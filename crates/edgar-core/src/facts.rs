//! Raw company facts data model.
//!
//! These types mirror the JSON returned by the EDGAR XBRL company facts API
//! (`/api/xbrl/companyfacts/CIK##########.json`): all reported facts for one
//! company, organized by taxonomy, concept, and measurement unit. They are
//! immutable input to the extraction engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The taxonomy namespace the extraction engine reads.
pub const US_GAAP_TAXONOMY: &str = "us-gaap";

/// All XBRL facts reported by one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFacts {
    /// CIK number, as reported by the API (not zero-padded).
    pub cik: u64,
    /// Registered entity name.
    pub entity_name: String,
    /// Facts organized by taxonomy namespace, then concept name.
    pub facts: HashMap<String, HashMap<String, ConceptFacts>>,
}

impl CompanyFacts {
    /// Returns the `us-gaap` concepts, if the taxonomy is present.
    #[must_use]
    pub fn us_gaap(&self) -> Option<&HashMap<String, ConceptFacts>> {
        self.facts.get(US_GAAP_TAXONOMY)
    }
}

/// All reported observations for a single XBRL concept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptFacts {
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Concept description.
    #[serde(default)]
    pub description: Option<String>,
    /// Observations partitioned by measurement unit (USD, shares, etc.).
    #[serde(default)]
    pub units: HashMap<String, Vec<FactValue>>,
}

/// A single reported observation for a concept over one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactValue {
    /// Start date of the period (`YYYY-MM-DD`), absent for point-in-time facts.
    #[serde(default)]
    pub start: Option<String>,
    /// End date of the period (`YYYY-MM-DD`).
    #[serde(default)]
    pub end: String,
    /// Reported value.
    #[serde(default)]
    pub val: f64,
    /// Accession number of the filing.
    #[serde(default)]
    pub accn: Option<String>,
    /// Fiscal year.
    #[serde(default)]
    pub fy: Option<i32>,
    /// Fiscal period (FY, Q1, Q2, ...).
    #[serde(default)]
    pub fp: Option<String>,
    /// Filing form type (10-K, 10-Q, 8-K, ...).
    #[serde(default)]
    pub form: Option<String>,
    /// Date the filing was submitted (`YYYY-MM-DD`).
    #[serde(default)]
    pub filed: Option<String>,
    /// XBRL frame identifier.
    #[serde(default)]
    pub frame: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_company_facts() {
        let json = serde_json::json!({
            "cik": 320193,
            "entityName": "Apple Inc.",
            "facts": {
                "us-gaap": {
                    "Assets": {
                        "label": "Assets",
                        "description": "Sum of the carrying amounts of all assets.",
                        "units": {
                            "USD": [
                                {
                                    "end": "2023-09-30",
                                    "val": 352583000000.0,
                                    "accn": "0000320193-23-000106",
                                    "fy": 2023,
                                    "fp": "FY",
                                    "form": "10-K",
                                    "filed": "2023-11-03",
                                    "frame": "CY2023Q3I"
                                }
                            ]
                        }
                    }
                }
            }
        });

        let facts: CompanyFacts = serde_json::from_value(json).unwrap();
        assert_eq!(facts.entity_name, "Apple Inc.");

        let assets = &facts.us_gaap().unwrap()["Assets"];
        let usd = &assets.units["USD"];
        assert_eq!(usd.len(), 1);
        assert_eq!(usd[0].end, "2023-09-30");
        assert_eq!(usd[0].val, 352_583_000_000.0);
        assert_eq!(usd[0].form.as_deref(), Some("10-K"));
        assert!(usd[0].start.is_none());
    }

    #[test]
    fn test_missing_taxonomy() {
        let json = serde_json::json!({
            "cik": 1,
            "entityName": "Shell Co",
            "facts": {}
        });

        let facts: CompanyFacts = serde_json::from_value(json).unwrap();
        assert!(facts.us_gaap().is_none());
    }

    #[test]
    fn test_lenient_fact_value_fields() {
        // Some facts omit start, frame, or even fiscal metadata entirely.
        let json = serde_json::json!({
            "end": "2021-06-30",
            "val": 12.5
        });

        let value: FactValue = serde_json::from_value(json).unwrap();
        assert_eq!(value.end, "2021-06-30");
        assert_eq!(value.val, 12.5);
        assert!(value.form.is_none());
        assert!(value.filed.is_none());
    }
}
