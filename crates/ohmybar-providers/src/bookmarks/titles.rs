use crate::http::HttpClient;
use ohmybar_types::strip_scheme;
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));

/// Text of the first `<title>` element, whitespace collapsed
pub fn extract_title(html: &str) -> Option<String> {
    let captured = TITLE_TAG.captures(html)?.get(1)?.as_str();
    let title = captured.split_whitespace().collect::<Vec<_>>().join(" ");

    if title.is_empty() { None } else { Some(title) }
}

/// Title shown when a page cannot be scraped
pub fn fallback_title(url: &str) -> String {
    strip_scheme(url).to_string()
}

/// Scrape a page title.
///
/// Any failure, and any redirect to a different URL, yields `None`.
pub async fn fetch_page_title(http: &HttpClient, url: &str) -> Option<String> {
    match http.get_page(url).await {
        Ok(page) if page.is_canonical(url) => extract_title(&page.body),
        Ok(page) => {
            tracing::debug!("{} redirected to {}, not using its title", url, page.final_url);
            None
        }
        Err(err) => {
            tracing::debug!("no title for {}: {}", url, err);
            None
        }
    }
}
