use crate::plugin::ActivePlugin;
use crate::{Error, Result};
use ohmybar_providers::{BookmarksConfig, GithubConfig, HttpSettings, JiraConfig};
use ohmybar_types::expand_tilde;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "OHMYBAR_CONFIG";

pub const DEFAULT_HEADER: &str = "🤔";
pub const DEFAULT_ITEM_LENGTH: usize = 45;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. OHMYBAR_CONFIG environment variable (with tilde expansion)
/// 3. ~/.config/ohmybar/config.toml
/// 4. ~/.ohmybar.toml, when only that one exists
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.trim().is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    let home = dirs::home_dir().ok_or_else(|| {
        Error::Config("Could not determine config path: no home directory found".to_string())
    })?;

    let preferred = home.join(".config").join("ohmybar").join("config.toml");
    let legacy = home.join(".ohmybar.toml");
    if !preferred.exists() && legacy.exists() {
        return Ok(legacy);
    }

    Ok(preferred)
}

/// Per-plugin tables; a plugin is enabled by having a table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub jira: Option<JiraConfig>,
    pub github: Option<GithubConfig>,
    pub bookmarks: Option<BookmarksConfig>,
}

impl PluginsConfig {
    /// Enabled plugins in menu order
    pub fn active(&self) -> Vec<ActivePlugin<'_>> {
        let mut plugins = Vec::new();
        if let Some(jira) = &self.jira {
            plugins.push(ActivePlugin::IssueTracker(jira));
        }
        if let Some(github) = &self.github {
            plugins.push(ActivePlugin::SourceHost(github));
        }
        if let Some(bookmarks) = &self.bookmarks {
            plugins.push(ActivePlugin::Bookmarks(bookmarks));
        }
        plugins
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu-bar title line
    pub header: String,
    /// Free-form links shown above plugin output
    pub quick_links: Option<serde_json::Value>,
    /// Default maximum title length
    pub item_length: usize,
    /// Attach error cause chains to failed plugins
    pub verbose: bool,
    pub http: HttpSettings,
    pub plugins: PluginsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            quick_links: None,
            item_length: DEFAULT_ITEM_LENGTH,
            verbose: false,
            http: HttpSettings::default(),
            plugins: PluginsConfig::default(),
        }
    }
}

impl Config {
    /// Load a config file; a missing file yields the defaults.
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }
}
