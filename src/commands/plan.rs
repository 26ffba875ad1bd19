use crate::cli;
use crate::config::{self, TechmapConfig};
use crate::engine;
use crate::io::{self, create_writer, OutputFormat, PlanReport};
use crate::validation::{check_completeness, check_reference_data, parse_assessment};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

pub struct PlanConfig {
    pub assessment: PathBuf,
    pub reference: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_plan(config: PlanConfig) -> Result<()> {
    let settings = match &config.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => config::load_config(),
    };

    let record = io::load_assessment(&config.assessment)?;
    let reference = io::load_reference(&config.reference)?;
    for warning in check_reference_data(&reference) {
        warn!("{}", warning);
    }

    let assessment = parse_assessment(&record)?;
    for note in check_completeness(&assessment).describe() {
        info!("{}", note);
    }

    let result = engine::calculate_roi(&assessment, &reference, &settings.roi_config());
    let ranking = engine::explain_ranking(&assessment);

    let format = resolve_format(config.format, &settings);
    apply_color_preference(&settings, config.output.is_some());

    let sink = io::open_sink(config.output.as_deref())?;
    let mut writer = create_writer(format, sink);
    writer.write_report(&PlanReport {
        result: &result,
        reference: &reference,
        ranking: &ranking,
        financials: assessment.financials.as_ref(),
        generated: chrono::Utc::now(),
    })?;

    if let Some(path) = &config.output {
        info!("Wrote report to {}", path.display());
    }
    Ok(())
}

/// Command line first, then the config file, then terminal.
pub fn resolve_format(
    requested: Option<cli::OutputFormat>,
    settings: &TechmapConfig,
) -> OutputFormat {
    requested
        .map(Into::into)
        .or_else(|| settings.default_format())
        .unwrap_or(OutputFormat::Terminal)
}

fn apply_color_preference(settings: &TechmapConfig, to_file: bool) {
    let configured = settings.output.as_ref().and_then(|o| o.use_color);
    match (configured, to_file) {
        (Some(false), _) | (None, true) => colored::control::set_override(false),
        (Some(true), _) => colored::control::set_override(true),
        (None, false) => {}
    }
}
