pub mod config;
pub mod error;
pub mod menu;
pub mod plugin;

pub use config::{Config, PluginsConfig, resolve_config_path};
pub use error::{Error, Result};
pub use menu::{build_menu, error_menu};
pub use plugin::{ActivePlugin, Plugin};
