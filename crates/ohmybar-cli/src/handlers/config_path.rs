use anyhow::Result;
use ohmybar_runtime::resolve_config_path;

pub fn handle(explicit: Option<&str>) -> Result<()> {
    let path = resolve_config_path(explicit)?;
    let state = if path.exists() { "" } else { " (not found, defaults apply)" };
    println!("{}{}", path.display(), state);
    Ok(())
}
