use crate::types::OutputFormat;
use anyhow::{Context, Result};
use ohmybar_engine::render_to;
use ohmybar_runtime::{Config, build_menu, error_menu, resolve_config_path};
use ohmybar_types::MenuNode;
use std::io::{self, Write};

/// Load the config, or explain in the menu why it could not be loaded
fn load_config(explicit: Option<&str>) -> ohmybar_runtime::Result<Config> {
    let path = resolve_config_path(explicit)?;
    tracing::debug!("config: {}", path.display());
    Config::load_from(&path)
}

fn collect(explicit: Option<&str>, verbose: bool) -> Result<Vec<MenuNode>> {
    let mut config = match load_config(explicit) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("unusable config: {}", err);
            return Ok(error_menu(&err, verbose));
        }
    };
    config.verbose |= verbose;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    Ok(runtime.block_on(build_menu(&config)))
}

pub fn handle(explicit: Option<&str>, verbose: bool, format: OutputFormat) -> Result<()> {
    let nodes = collect(explicit, verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Plain => render_to(&nodes, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &nodes)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
