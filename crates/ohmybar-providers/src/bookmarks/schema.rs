use serde::Deserialize;

/// Chromium `Bookmarks` file (only the parts the plugin reads)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarksFile {
    #[serde(default)]
    pub roots: Roots,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roots {
    #[serde(default)]
    pub bookmark_bar: Folder,
    #[serde(default)]
    pub other: Folder,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Folder {
    #[serde(default)]
    pub children: Vec<Entry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Entry {
    /// URL of a link entry; folders and empty links yield `None`
    pub fn link(&self) -> Option<&str> {
        match self.url.as_deref() {
            Some(url) if self.kind == "url" && !url.is_empty() => Some(url),
            _ => None,
        }
    }
}
