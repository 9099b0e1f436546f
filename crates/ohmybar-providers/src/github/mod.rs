//! Source-host plugin: open issues and pull requests authored by the
//! token's owner, found through the search API.

pub mod normalize;
pub mod schema;

use crate::http::Auth;
use crate::registry::PluginKind;
use crate::traits::{FetchContext, Provider, required};
use crate::Result;
use ohmybar_types::{GroupDepth, Record, Show};
use reqwest::Url;
use serde::Deserialize;

pub use normalize::{normalize_item, normalize_items};

pub const DEFAULT_HOST: &str = "https://api.github.com";

/// Environment variable consulted when `token` is not configured
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub title: Option<String>,
    pub host: String,
    pub token: Option<String>,
    pub show: Show,
    pub exclude_projects: Vec<String>,
    pub group_depth: GroupDepth,
    pub use_separators: bool,
    pub item_length: Option<usize>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            title: None,
            host: DEFAULT_HOST.to_string(),
            token: None,
            show: Show::All,
            exclude_projects: Vec::new(),
            group_depth: GroupDepth::Flat,
            use_separators: true,
            item_length: None,
        }
    }
}

impl GithubConfig {
    fn resolve_token(&self) -> Result<String> {
        if let Some(token) = &self.token {
            return required(Some(token), "github token").map(str::to_string);
        }
        let from_env = std::env::var(TOKEN_ENV).ok();
        required(from_env.as_deref(), "github token").map(str::to_string)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.host.trim_end_matches('/'), path)
    }
}

impl Provider for GithubConfig {
    fn kind(&self) -> PluginKind {
        PluginKind::SourceHost
    }

    async fn fetch(&self, ctx: &FetchContext<'_>) -> Result<Vec<Record>> {
        let token = self.resolve_token()?;
        let auth = Auth::Token(&token);

        let user: schema::User = ctx.http.get_json(&self.api_url("user"), auth).await?;

        let mut search = Url::parse(&self.api_url("search/issues"))?;
        search
            .query_pairs_mut()
            .append_pair("q", &format!("is:open author:{}", user.login));

        let response: schema::SearchResponse = ctx.http.get_json(search.as_str(), auth).await?;
        let item_length = self.item_length.unwrap_or(ctx.item_length);
        let records = normalize_items(&response.items, &self.exclude_projects, item_length);

        tracing::info!(
            "github: {} of {} items for {}",
            records.len(),
            response.items.len(),
            user.login
        );

        Ok(records)
    }
}
