pub mod config_path;
pub mod menu;
pub mod plugins;
