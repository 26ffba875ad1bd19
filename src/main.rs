use anyhow::Result;
use techmap::cli::{self, Commands};
use techmap::commands::{self, PlanConfig, ValidateConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Plan {
            assessment,
            reference,
            format,
            output,
            config,
        } => commands::handle_plan(PlanConfig {
            assessment,
            reference,
            format,
            output,
            config,
        }),
        Commands::Validate {
            assessment,
            reference,
            strict,
        } => commands::validate_file(ValidateConfig {
            assessment,
            reference,
            strict,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

/// Logs go to stderr so JSON on stdout stays parseable. `RUST_LOG` wins
/// over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("techmap={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
