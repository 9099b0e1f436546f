use crate::http::HttpClient;
use crate::registry::PluginKind;
use crate::Result;
use ohmybar_types::Record;
use std::future::Future;

/// Everything a provider needs from the surrounding run.
pub struct FetchContext<'a> {
    pub http: &'a HttpClient,
    /// Title length used when the plugin does not set its own
    pub item_length: usize,
}

/// Remote data source producing normalized records.
///
/// Responsibilities:
/// - Validate its own credentials before any request
/// - Call the remote service
/// - Normalize the response, skipping malformed entries
pub trait Provider {
    fn kind(&self) -> PluginKind;

    fn fetch(&self, ctx: &FetchContext<'_>) -> impl Future<Output = Result<Vec<Record>>>;
}

/// Treat missing and blank settings alike.
pub(crate) fn required<'a>(value: Option<&'a str>, what: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(crate::Error::Configuration(format!("missing {}", what))),
    }
}
