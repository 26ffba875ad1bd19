use serde::{Deserialize, Serialize};

use super::roi::{AssumptionsConfig, BenchmarkDefaults, RoiConfig};
use crate::io::output::OutputFormat;

/// Root configuration structure for techmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TechmapConfig {
    /// Cost and payback assumptions
    #[serde(default)]
    pub assumptions: Option<AssumptionsConfig>,

    /// Fallback improvement percentages for missing benchmark categories
    #[serde(default)]
    pub benchmark_defaults: Option<BenchmarkDefaults>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl TechmapConfig {
    /// Engine settings, with defaults filled in for absent sections.
    pub fn roi_config(&self) -> RoiConfig {
        RoiConfig {
            assumptions: self.assumptions.clone().unwrap_or_default(),
            benchmark_defaults: self.benchmark_defaults.unwrap_or_default(),
        }
    }

    /// Output format from the config file, if one was set.
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
