use super::args::{Cli, Commands};
use super::handlers;
use crate::logging::init_logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    match cli.command.as_ref().unwrap_or(&Commands::Menu) {
        Commands::Menu => handlers::menu::handle(cli.config.as_deref(), cli.verbose, cli.format),
        Commands::Plugins => handlers::plugins::handle(cli.format),
        Commands::ConfigPath => handlers::config_path::handle(cli.config.as_deref()),
    }
}
