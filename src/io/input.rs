//! Wire format of the inputs handed over by the intake and reference-data
//! collaborators.
//!
//! The record types here mirror what the intake form submits and accept
//! its loose encodings: a cleared numeric field arrives as `""`, numbers
//! may arrive as strings, and the ranking may be wrapped in
//! `{"ranking": [...]}`. Nothing here checks domain invariants; that is
//! [`crate::validation`]'s job.

use crate::core::ReferenceData;
use crate::errors::{Error, Result};
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Assessment as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(default)]
    pub maturity: IndexMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priorities: RawPriorities,
    #[serde(default, alias = "financial_inputs")]
    pub fin_inputs: Option<RawFinancialInputs>,
}

/// Priority ranking in either of its submitted shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPriorities {
    Ranked {
        #[serde(default, deserialize_with = "null_as_default")]
        ranking: Vec<String>,
    },
    List(Vec<String>),
}

impl Default for RawPriorities {
    fn default() -> Self {
        RawPriorities::List(Vec::new())
    }
}

impl RawPriorities {
    pub fn ranking(&self) -> &[String] {
        match self {
            RawPriorities::Ranked { ranking } => ranking,
            RawPriorities::List(list) => list,
        }
    }
}

/// Financial inputs as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFinancialInputs {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub production_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub downtime_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub downtime_cost_per_hour: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub scrap_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub energy_spend: Option<f64>,
    #[serde(default)]
    pub time_unit: Option<String>,
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept numbers, numeric strings, `""` and `null`.
fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Option::<Amount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Amount::Number(n)) => Ok(Some(n)),
        Some(Amount::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("expected a number, got '{text}'")))
            }
        }
    }
}

pub fn parse_assessment_record(json: &str, origin: &str) -> Result<AssessmentRecord> {
    serde_json::from_str(json).map_err(|e| Error::json(origin, e))
}

pub fn parse_reference_data(json: &str, origin: &str) -> Result<ReferenceData> {
    serde_json::from_str(json).map_err(|e| Error::json(origin, e))
}

fn read_input(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::file_system(format!("Failed to read {what}"), path, e))
}

pub fn load_assessment(path: &Path) -> Result<AssessmentRecord> {
    let contents = read_input(path, "assessment")?;
    parse_assessment_record(&contents, &path.display().to_string())
}

pub fn load_reference(path: &Path) -> Result<ReferenceData> {
    let contents = read_input(path, "reference data")?;
    parse_reference_data(&contents, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_record_accepts_wrapped_ranking() {
        let record = parse_assessment_record(
            indoc! {r#"
                {
                    "maturity": {"Quality": 4, "Process": 2},
                    "priorities": {"ranking": ["Cost", "Quality"]}
                }
            "#},
            "test",
        )
        .unwrap();
        assert_eq!(record.priorities.ranking(), ["Cost", "Quality"]);
        assert_eq!(
            record.maturity.keys().collect::<Vec<_>>(),
            vec!["Quality", "Process"]
        );
        assert!(record.fin_inputs.is_none());
    }

    #[test]
    fn test_record_accepts_bare_ranking_list() {
        let record =
            parse_assessment_record(r#"{"maturity": {}, "priorities": ["Safety"]}"#, "test")
                .unwrap();
        assert_eq!(record.priorities.ranking(), ["Safety"]);
    }

    #[test]
    fn test_ranking_without_entries_reads_as_empty() {
        for priorities in [r#"{}"#, r#"{"ranking": null}"#, "null"] {
            let json = format!(r#"{{"maturity": {{"Process": 2}}, "priorities": {priorities}}}"#);
            let record = parse_assessment_record(&json, "test").unwrap();
            assert!(record.priorities.ranking().is_empty(), "{priorities}");
        }
    }

    #[test]
    fn test_cleared_and_string_amounts() {
        let record = parse_assessment_record(
            r#"{"fin_inputs": {"scrap_cost": "", "energy_spend": "1200.5", "downtime_hours": null, "time_unit": "days"}}"#,
            "test",
        )
        .unwrap();
        let fin = record.fin_inputs.unwrap();
        assert_eq!(fin.scrap_cost, None);
        assert_eq!(fin.energy_spend, Some(1200.5));
        assert_eq!(fin.downtime_hours, None);
        assert_eq!(fin.time_unit.as_deref(), Some("days"));
    }

    #[test]
    fn test_non_numeric_amount_is_a_json_error() {
        let err = parse_assessment_record(r#"{"fin_inputs": {"scrap_cost": "lots"}}"#, "form.json")
            .unwrap_err();
        assert!(err.to_string().contains("form.json"));
        assert_eq!(err.code(), crate::errors::ErrorCode::INPUT_JSON);
    }

    #[test]
    fn test_reference_defaults_to_empty_tables() {
        let reference = parse_reference_data("{}", "ref").unwrap();
        assert!(reference.benchmarks.is_empty());
        assert!(reference.technologies.is_empty());
    }
}
