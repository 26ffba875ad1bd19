//! Boundary validation: turn submitted records into typed engine inputs.
//!
//! Every structural problem in a record is collected before anything is
//! rejected, so one round trip shows the submitter all of them. Only
//! problems that would make the computation meaningless are errors
//! (unknown identifiers, ratings outside 1..=5, duplicate priorities,
//! negative or non-finite amounts). Incomplete assessments and odd
//! reference data are reported separately as warnings.

pub mod completeness;
pub mod reference;

pub use completeness::{check_completeness, AssessmentCompleteness};
pub use reference::{
    check_benchmarks, check_reference_data, check_technologies, ReferenceWarning,
};

use crate::core::{
    Assessment, BusinessPriority, FinancialInputs, MaturityScore, Pillar, PriorityRanking,
    TimeUnit,
};
use crate::effects::{
    combine_validations, run_validation, validation_failures, validation_success,
    InputValidation,
};
use crate::errors::Result;
use crate::io::input::{AssessmentRecord, RawFinancialInputs};
use stillwater::Validation;

/// Validate a record, failing with every problem found.
pub fn parse_assessment(record: &AssessmentRecord) -> Result<Assessment> {
    run_validation(validate_assessment(record))
}

/// Validate a record, accumulating all problems.
pub fn validate_assessment(record: &AssessmentRecord) -> InputValidation<Assessment> {
    let maturity = validate_maturity(record);
    let priorities = validate_priorities(record.priorities.ranking());
    let financials = match &record.fin_inputs {
        Some(raw) => validate_financials(raw).optional(),
        None => validation_success(None),
    };

    match (maturity, priorities, financials) {
        (
            Validation::Success(maturity),
            Validation::Success(priorities),
            Validation::Success(financials),
        ) => validation_success(Assessment {
            maturity,
            priorities,
            financials,
        }),
        (maturity, priorities, financials) => {
            let errors: Vec<String> = [
                maturity.collect_errors(),
                priorities.collect_errors(),
                financials.collect_errors(),
            ]
            .into_iter()
            .flatten()
            .collect();
            validation_failures(errors)
        }
    }
}

fn validate_maturity(record: &AssessmentRecord) -> InputValidation<MaturityScore> {
    let entries: Vec<InputValidation<(Pillar, u8)>> = record
        .maturity
        .iter()
        .map(|(name, value)| validate_rating(name, *value))
        .collect();

    match combine_validations(entries) {
        Validation::Success(pairs) => {
            match MaturityScore::from_pairs(pairs) {
                Ok(score) => validation_success(score),
                Err(e) => validation_failures(e.messages()),
            }
        }
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

fn validate_rating(name: &str, value: f64) -> InputValidation<(Pillar, u8)> {
    let pillar = name.parse::<Pillar>();
    let rating = rating_from(value);

    match (pillar, rating) {
        (Ok(pillar), Some(rating)) => validation_success((pillar, rating)),
        (pillar, rating) => {
            let mut errors = Vec::new();
            if let Err(e) = pillar {
                errors.push(format!("maturity.{name}: {e}"));
            }
            if rating.is_none() {
                errors.push(format!(
                    "maturity.{name}: rating {value} must be a whole number from 1 to 5"
                ));
            }
            validation_failures(errors)
        }
    }
}

fn rating_from(value: f64) -> Option<u8> {
    let whole = value.is_finite() && value.fract() == 0.0;
    if whole && (1.0..=5.0).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

fn validate_priorities(ranking: &[String]) -> InputValidation<PriorityRanking> {
    let mut parsed: Vec<BusinessPriority> = Vec::with_capacity(ranking.len());
    let mut errors = Vec::new();

    for (index, name) in ranking.iter().enumerate() {
        match name.parse::<BusinessPriority>() {
            Ok(priority) if parsed.contains(&priority) => errors.push(format!(
                "priorities.ranking[{index}]: '{priority}' is ranked more than once"
            )),
            Ok(priority) => parsed.push(priority),
            Err(e) => errors.push(format!("priorities.ranking[{index}]: {e}")),
        }
    }

    if !errors.is_empty() {
        return validation_failures(errors);
    }
    match PriorityRanking::new(parsed) {
        Ok(ranking) => validation_success(ranking),
        Err(e) => validation_failures(e.messages()),
    }
}

fn validate_financials(raw: &RawFinancialInputs) -> InputValidation<FinancialInputs> {
    let time_unit = match raw.time_unit.as_deref() {
        None | Some("") => TimeUnit::default(),
        Some(unit) => unit.parse::<TimeUnit>().unwrap_or_else(|e| {
            tracing::warn!("fin_inputs.time_unit: {}, showing hours", e);
            TimeUnit::default()
        }),
    };

    let inputs = FinancialInputs {
        production_hours: raw.production_hours,
        downtime_hours: raw.downtime_hours,
        downtime_cost_per_hour: raw.downtime_cost_per_hour,
        scrap_cost: raw.scrap_cost,
        energy_spend: raw.energy_spend,
        time_unit,
    };

    match inputs.check() {
        Ok(()) => validation_success(inputs),
        Err(e) => validation_failures(e.messages()),
    }
}

/// Small adapters over stillwater's `Validation` used above.
trait ValidationExt<T> {
    fn collect_errors(self) -> Vec<String>;
    fn optional(self) -> InputValidation<Option<T>>;
}

impl<T> ValidationExt<T> for InputValidation<T> {
    fn collect_errors(self) -> Vec<String> {
        match self {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.into_vec(),
        }
    }

    fn optional(self) -> InputValidation<Option<T>> {
        crate::effects::validation_map(self, Some)
    }
}
