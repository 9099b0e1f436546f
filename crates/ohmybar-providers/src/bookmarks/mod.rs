//! Bookmarks plugin: links from a Chromium profile's `Bookmarks` file.
//!
//! Entries saved without a name get the title of the page they point to.
//! Those pages are fetched concurrently (bounded by
//! `http.max_concurrency`) and the results keep the file's order.

pub mod schema;
pub mod titles;

use crate::registry::PluginKind;
use crate::traits::{FetchContext, Provider, required};
use crate::Result;
use futures::stream::{self, StreamExt};
use ohmybar_types::{Record, RecordKind, expand_tilde, truncate};
use schema::{BookmarksFile, Entry};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookmarksConfig {
    pub title: Option<String>,
    pub file: Option<String>,
    /// Include the bookmarks bar
    pub bar: bool,
    /// Include the "Other bookmarks" folder
    pub other: bool,
    pub item_length: Option<usize>,
}

impl Default for BookmarksConfig {
    fn default() -> Self {
        Self {
            title: None,
            file: None,
            bar: true,
            other: false,
            item_length: None,
        }
    }
}

impl BookmarksConfig {
    /// Link entries of the enabled roots, in file order
    pub fn selected_entries<'a>(&self, file: &'a BookmarksFile) -> Vec<&'a Entry> {
        let mut entries = Vec::new();
        if self.bar {
            entries.extend(&file.roots.bookmark_bar.children);
        }
        if self.other {
            entries.extend(&file.roots.other.children);
        }
        entries.retain(|entry| entry.link().is_some());
        entries
    }
}

pub fn load_bookmarks(path: &Path) -> Result<BookmarksFile> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

async fn resolve(ctx: &FetchContext<'_>, entry: &Entry, item_length: usize) -> Option<Record> {
    let url = entry.link()?;

    let name = if entry.name.trim().is_empty() {
        titles::fetch_page_title(ctx.http, url).await
    } else {
        Some(entry.name.clone())
    };
    let title = name.unwrap_or_else(|| titles::fallback_title(url));

    Some(Record::new(
        truncate(&title, item_length),
        url,
        RecordKind::Bookmark,
    ))
}

impl Provider for BookmarksConfig {
    fn kind(&self) -> PluginKind {
        PluginKind::Bookmarks
    }

    async fn fetch(&self, ctx: &FetchContext<'_>) -> Result<Vec<Record>> {
        let file = required(self.file.as_deref(), "bookmarks file")?;
        let bookmarks = load_bookmarks(&expand_tilde(file))?;

        let item_length = self.item_length.unwrap_or(ctx.item_length);
        let concurrency = ctx.http.settings().max_concurrency.max(1);

        let records: Vec<Record> = stream::iter(self.selected_entries(&bookmarks))
            .map(|entry| resolve(ctx, entry, item_length))
            .buffered(concurrency)
            .filter_map(|record| async move { record })
            .collect()
            .await;

        tracing::info!("bookmarks: {} links", records.len());
        Ok(records)
    }
}
