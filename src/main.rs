use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::errors::*;
pub use domain::models::*;
pub use services::acl::LocalAcl;
pub use services::config::load_config;
pub use services::output::{print_error, print_one};
pub use services::render::render;
pub use services::report::{build_document, load_document, save_document};
pub use services::scan::scan;
pub use services::storage::{ensure_absent, write_new};
pub use services::walker::LocalFs;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = load_config();
    init_tracing(
        config
            .as_ref()
            .ok()
            .and_then(|c| c.defaults.log.as_deref()),
    );

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(cli.json, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: Result<ConfigFile, ConfigError>) -> anyhow::Result<()> {
    let config = config?;
    if handle_scan_command(cli, &config)? {
        return Ok(());
    }
    handle_render_command(cli, &config)?;
    Ok(())
}

/// Diagnostics go to stderr so stdout stays parseable under `--json`.
fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<ScanError>() {
        e.code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "CONFIG_INVALID"
    } else {
        "INTERNAL"
    }
}

fn report_failure(json: bool, err: &anyhow::Error) {
    let message = format!("{:#}", err);
    if json && print_error(error_code(err), &message).is_ok() {
        return;
    }
    error!("{}", message);
}
