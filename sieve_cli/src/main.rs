mod cli;
mod commands;
mod errors;
mod settings;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use cli::{SieveCli, SieveCliCommand};
use errors::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = SieveCli::parse();
    initialize_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &SieveCli) -> Result<(), CliError> {
    let config = settings::load_config(cli)?;
    let catalog = settings::load_catalog(cli)?;

    match &cli.command {
        SieveCliCommand::Catalog => commands::show_catalog(&catalog, cli.format),
        SieveCliCommand::Verify { equations } => {
            commands::verify_file(equations, &config, cli.format)
        }
        SieveCliCommand::Compose { tokens } => {
            commands::compose_search(tokens, catalog, config, cli.format).await
        }
        SieveCliCommand::Load { filters } => {
            commands::load_filters(filters, catalog, config, cli.format).await
        }
    }
}

fn log_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

fn initialize_logging(verbose: bool) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level(verbose))
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failure_logged_at_default_level() {
        assert!(log::Level::Error <= log_level(false));
        assert!(log::Level::Info > log_level(false));
        assert!(log::Level::Debug <= log_level(true));
    }
}
