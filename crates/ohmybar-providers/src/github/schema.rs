use serde::Deserialize;

/// `GET /user`
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

/// `GET /search/issues`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub state: Option<String>,
}
