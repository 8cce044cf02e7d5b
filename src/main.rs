use anyhow::{Context as _, Result};
use clap::Parser;
use nettypes::cli::{Cli, Context};
use nettypes::config::AppSettings;
use nettypes::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
const LOG_LEVEL_ENV: &str = "RUST_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            output::print_error(&format!("{:#}", err));
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => AppSettings::load().unwrap_or_else(|err| {
            output::print_warning(&format!("{}; using default settings", err));
            AppSettings::default()
        }),
    };

    setup_tracing(&settings, cli.verbose);
    if !settings.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let ctx = Context::new(cli, settings);
    tracing::debug!(format = %ctx.format, "settings loaded");

    Ok(cli.command.execute(&ctx)?)
}

/// Log to stderr. `RUST_LOG` wins over the configured filter; `--verbose`
/// raises the fallback to `debug`.
fn setup_tracing(settings: &AppSettings, verbose: bool) {
    let fallback = if verbose { "debug" } else { settings.log_filter.as_str() };
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
