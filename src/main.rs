//! vcap CLI entry point.

use anyhow::Result;
use clap::Parser;

use vcap::cli::commands::services::ServiceFilter;
use vcap::cli::commands::{app, credential, services};
use vcap::cli::{output, Cli, Commands};
use vcap::infrastructure::config::ConfigLoader;
use vcap::infrastructure::logging::LoggerImpl;
use vcap::{SystemEnvironment, VcapLoader};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        vcap::cli::handle_error(err, cli.json);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    LoggerImpl::init(&config.logging)?;

    let loader = VcapLoader::from_config(SystemEnvironment, &config);

    match &cli.command {
        Commands::App => output(&app::execute(&loader)?, cli.json),
        Commands::Services { name, label, tag } => {
            let filter = ServiceFilter {
                name: name.clone(),
                label: label.clone(),
                tag: tag.clone(),
            };
            output(&services::execute(&loader, &filter)?, cli.json);
        }
        Commands::Credential { identifier, key } => {
            output(&credential::execute(&loader, identifier, key)?, cli.json);
        }
    }

    Ok(())
}
