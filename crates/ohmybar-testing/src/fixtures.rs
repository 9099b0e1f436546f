//! Sample data for menu tests.

use serde_json::{Value, json};

/// Chromium `Bookmarks` file with the given `(name, url)` entries on the
/// bookmarks bar. An empty name makes the entry's title come from its page.
pub fn bookmarks_file(entries: &[(&str, &str)]) -> String {
    let children: Vec<Value> = entries
        .iter()
        .map(|(name, url)| json!({"name": name, "type": "url", "url": url}))
        .collect();

    json!({
        "roots": {
            "bookmark_bar": {"children": children},
            "other": {"children": []}
        }
    })
    .to_string()
}

/// `[plugins.bookmarks]` table pointing at `path`
pub fn bookmarks_plugin(path: &std::path::Path) -> String {
    format!("[plugins.bookmarks]\nfile = {:?}\n", path.display().to_string())
}
