use crate::types::OutputFormat;
use anyhow::Result;
use ohmybar_providers::get_all_plugins;
use serde_json::json;

pub fn handle(format: OutputFormat) -> Result<()> {
    let plugins = get_all_plugins();

    match format {
        OutputFormat::Plain => {
            let width = plugins.iter().map(|p| p.name.len()).max().unwrap_or(0);
            for plugin in plugins {
                println!("{:<width$}  {}", plugin.name, plugin.description, width = width);
            }
        }
        OutputFormat::Json => {
            let listing: Vec<_> = plugins
                .iter()
                .map(|plugin| {
                    json!({
                        "name": plugin.name,
                        "kind": format!("{:?}", plugin.kind),
                        "description": plugin.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }

    Ok(())
}
