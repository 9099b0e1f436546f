use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ohmybar")]
#[command(about = "Print an xbar menu of your open tickets, issues, pull requests and bookmarks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $OHMYBAR_CONFIG, ~/.config/ohmybar/config.toml, ~/.ohmybar.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Attach error causes to failed plugins
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log level for stderr (OHMYBAR_LOG overrides)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the menu (default)
    Menu,

    /// List available plugins
    Plugins,

    /// Show which config file would be used
    ConfigPath,
}
