mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
