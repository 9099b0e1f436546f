use crate::{Error, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("ohmybar/", env!("CARGO_PKG_VERSION"));

/// Network limits shared by every plugin (`[http]` in the config file).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Upper bound on simultaneous page-title requests
    pub max_concurrency: usize,
    /// Extra attempts after a transport failure
    pub max_retries: u32,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_concurrency: 8,
            max_retries: 1,
        }
    }
}

/// Credentials attached to an API request.
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    None,
    Basic { user: &'a str, password: &'a str },
    /// `Authorization: token <value>` as source-host APIs expect
    Token(&'a str),
}

/// A fetched HTML page and the URL it was finally served from.
#[derive(Debug, Clone)]
pub struct Page {
    pub final_url: Url,
    pub body: String,
}

impl Page {
    /// True when no redirect moved the request to a different URL
    pub fn is_canonical(&self, requested: &str) -> bool {
        Url::parse(requested)
            .map(|url| url == self.final_url)
            .unwrap_or(false)
    }
}

pub struct HttpClient {
    client: reqwest::Client,
    settings: HttpSettings,
}

impl HttpClient {
    pub fn new(settings: HttpSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &HttpSettings {
        &self.settings
    }

    /// GET a JSON document; non-success statuses become [`Error::Status`]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, auth: Auth<'_>) -> Result<T> {
        let response = self
            .send_with_retry(|| {
                let request = self.client.get(url).header(ACCEPT, "application/json");
                match auth {
                    Auth::None => request,
                    Auth::Basic { user, password } => request.basic_auth(user, Some(password)),
                    Auth::Token(token) => request.header(AUTHORIZATION, format!("token {}", token)),
                }
            })
            .await?;

        let response = check_status(response)?;
        Ok(response.json::<T>().await?)
    }

    /// GET an HTML page, following redirects
    pub async fn get_page(&self, url: &str) -> Result<Page> {
        let response = self.send_with_retry(|| self.client.get(url)).await?;
        let response = check_status(response)?;
        let final_url = response.url().clone();
        let body = response.text().await?;

        Ok(Page { final_url, body })
    }

    async fn send_with_retry<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            match build().send().await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < self.settings.max_retries => {
                    attempt += 1;
                    tracing::debug!("request failed ({}), retry {}", err, attempt);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status {
            url: response.url().to_string(),
            status: status.as_u16(),
        })
    }
}
