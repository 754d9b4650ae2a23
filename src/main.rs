mod commands;
mod logging;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use seekramp::cli::{Cli, Commands, ConfigCommands};
use seekramp::Config;

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    match &cli.command {
        Commands::Play(args) => {
            let config = load_config(&cli)?;
            commands::play::handle(args, &config)
        }
        Commands::Simulate(args) => {
            let config = load_config(&cli)?;
            commands::simulate::handle(args, &config)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(&load_config(&cli)?),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(cli.config.as_deref(), *force)
            }
        },
        Commands::Completions { shell } => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "seekramp",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
