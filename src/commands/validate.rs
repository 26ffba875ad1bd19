use crate::effects::run_validation;
use crate::io;
use crate::validation::{check_completeness, check_reference_data, validate_assessment};
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

pub struct ValidateConfig {
    pub assessment: PathBuf,
    pub reference: Option<PathBuf>,
    pub strict: bool,
}

/// What `validate` found. Errors make the assessment unusable; warnings
/// only flag incomplete or suspicious data.
#[derive(Debug, Default, PartialEq)]
pub struct ValidationDetails {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub incomplete: bool,
}

impl ValidationDetails {
    pub fn passes(&self, strict: bool) -> bool {
        self.errors.is_empty() && !(strict && self.incomplete)
    }
}

pub fn validate_file(config: ValidateConfig) -> Result<()> {
    let details = collect_details(&config)?;
    print_details(&details);

    if !details.errors.is_empty() {
        anyhow::bail!(
            "{} is not a valid assessment ({} problem(s))",
            config.assessment.display(),
            details.errors.len()
        );
    }
    if !details.passes(config.strict) {
        anyhow::bail!(
            "{} is incomplete; every pillar must be rated and at least one priority ranked",
            config.assessment.display()
        );
    }

    println!("{} {} is valid", "✓".green(), config.assessment.display());
    Ok(())
}

pub fn collect_details(config: &ValidateConfig) -> Result<ValidationDetails> {
    let record = io::load_assessment(&config.assessment)?;
    let mut details = ValidationDetails::default();

    match run_validation(validate_assessment(&record)) {
        Ok(assessment) => {
            let completeness = check_completeness(&assessment);
            details.incomplete = !completeness.is_complete();
            details.warnings.extend(completeness.describe());
        }
        Err(e) => details.errors = e.messages(),
    }

    if let Some(path) = &config.reference {
        let reference = io::load_reference(path)?;
        details
            .warnings
            .extend(check_reference_data(&reference).iter().map(ToString::to_string));
    }

    Ok(details)
}

fn print_details(details: &ValidationDetails) {
    for error in &details.errors {
        println!("  {} {}", "error:".red().bold(), error);
    }
    for warning in &details.warnings {
        println!("  {} {}", "warning:".yellow(), warning);
    }
}
