//! Assertions on rendered menus.

use anyhow::{Context, Result};

/// Header line followed by the menu-bar separator
pub fn assert_menu_header(stdout: &str, header: &str) -> Result<()> {
    let mut lines = stdout.lines();
    let first = lines.next().context("Expected a header line")?;
    if first != header {
        anyhow::bail!("Expected header {:?}, got {:?}", header, first);
    }

    match lines.next() {
        Some("---") => Ok(()),
        other => anyhow::bail!("Expected '---' after header, got {:?}", other),
    }
}

/// A red top-level error line for `source`
pub fn assert_error_line(stdout: &str, source: &str) -> Result<()> {
    let prefix = format!("{}: ", source);
    stdout
        .lines()
        .find(|line| line.starts_with(&prefix))
        .filter(|line| line.ends_with("| color=red"))
        .map(|_| ())
        .with_context(|| format!("Expected a red error line for {}\n{}", source, stdout))
}
