//! Configuration loaded from `.techmap.toml`.

mod core;
mod loader;
pub mod roi;

pub use self::core::{OutputConfig, TechmapConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_near,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use roi::{AssumptionsConfig, BenchmarkDefaults, RoiConfig};

/// Commented default configuration written by `techmap init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Techmap Configuration

[assumptions]
# Implementation cost charged per roadmap technology
cost_per_technology = 100000.0
# Payback reported when no savings can be computed
default_payback_months = 18
statement = "Based on industry averages for similar manufacturing operations."

# Median improvement (%) used when the benchmark table lacks a category
[benchmark_defaults]
downtime = 15.0
scrap = 8.0
energy = 6.0

[output]
default_format = "terminal"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.roi_config(), RoiConfig::default());
    }
}
