use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "techmap")]
#[command(
    about = "Turns a manufacturing maturity assessment into a phased technology roadmap with ROI estimates",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a roadmap and ROI estimate from an assessment
    Plan {
        /// Assessment JSON file
        assessment: PathBuf,

        /// Reference data JSON file (benchmarks and technology catalog)
        #[arg(short, long)]
        reference: PathBuf,

        /// Output format (defaults to the config file's, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .techmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check an assessment for problems without computing anything
    Validate {
        /// Assessment JSON file
        assessment: PathBuf,

        /// Also sanity-check this reference data file
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Fail when pillars are unrated or no priorities are ranked
        #[arg(long)]
        strict: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plan_arguments() {
        let cli = Cli::try_parse_from([
            "techmap",
            "plan",
            "assessment.json",
            "--reference",
            "reference.json",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Plan {
                assessment,
                reference,
                format,
                output,
                config,
            } => {
                assert_eq!(assessment, PathBuf::from("assessment.json"));
                assert_eq!(reference, PathBuf::from("reference.json"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(output.is_none());
                assert!(config.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_plan_requires_reference() {
        assert!(Cli::try_parse_from(["techmap", "plan", "assessment.json"]).is_err());
    }

    #[test]
    fn test_validate_strict_flag() {
        let cli = Cli::try_parse_from(["techmap", "validate", "a.json", "--strict"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Validate {
                strict: true,
                reference: None,
                ..
            }
        ));
    }
}
