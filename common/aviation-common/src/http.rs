//! Shared upstream HTTP client
//!
//! One [`UpstreamClient`] is built per process and cloned into every domain
//! server. Requests are sent once: no retries and no client-side timeout.

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use url::Url;

use crate::config::HttpConfig;
use crate::credentials::{ApiKey, FaaCredentials};
use crate::error::{AviationError, AviationResult};

const JSON: &str = "application/json";

/// How a request authenticates against its upstream
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    /// Public endpoint
    None,
    /// `client_id` / `client_secret` headers
    Faa(&'a FaaCredentials),
    /// `X-Api-Key` header
    ApiKey(&'a ApiKey),
}

impl Auth<'_> {
    fn apply(self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Auth::None => request,
            Auth::Faa(creds) => request
                .header("client_id", creds.client_id())
                .header("client_secret", creds.client_secret()),
            Auth::ApiKey(key) => request.header("X-Api-Key", key.expose()),
        }
    }
}

/// Ordered query parameters
///
/// Optional values that are absent or blank are left out entirely, so the
/// upstream never sees `param=`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always-present parameter
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Parameter sent only when set and non-blank
    pub fn opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.trim().is_empty() {
                self.pairs.push((key.to_string(), value));
            }
        }
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Append percent-encoded path segments to a base URL
///
/// ```rust,ignore
/// let url = join_url("https://external-api.faa.gov/adip", &["airport-details", "JFK"])?;
/// ```
pub fn join_url(base: &str, segments: &[&str]) -> AviationResult<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// HTTP client shared by every domain
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
}

impl UpstreamClient {
    pub fn new(config: &HttpConfig) -> AviationResult<Self> {
        let http = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { http })
    }

    /// GET `url` with `query`, returning the body text of a 2xx response
    pub async fn get_text(
        &self,
        api: &'static str,
        url: Url,
        query: &Query,
        auth: Auth<'_>,
    ) -> AviationResult<String> {
        tracing::debug!(api, url = %url, params = query.pairs().len(), "GET upstream");
        let request = auth.apply(self.http.get(url).query(query.pairs()));
        read_body(api, request.send().await?).await
    }

    /// Like [`get_text`](Self::get_text), asking for `application/json`
    pub async fn get_json(
        &self,
        api: &'static str,
        url: Url,
        query: &Query,
        auth: Auth<'_>,
    ) -> AviationResult<String> {
        tracing::debug!(api, url = %url, params = query.pairs().len(), "GET upstream (json)");
        let request = self.http.get(url).query(query.pairs()).header(ACCEPT, JSON);
        read_body(api, auth.apply(request).send().await?).await
    }

    /// POST `body` as JSON to `url`, returning the body text of a 2xx response
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        api: &'static str,
        url: Url,
        body: &B,
        auth: Auth<'_>,
    ) -> AviationResult<String> {
        tracing::debug!(api, url = %url, "POST upstream");
        let request = self.http.post(url).json(body).header(ACCEPT, JSON);
        read_body(api, auth.apply(request).send().await?).await
    }
}

async fn read_body(api: &'static str, response: Response) -> AviationResult<String> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(api, status = status.as_u16(), bytes = body.len(), "upstream rejected");
        return Err(AviationError::Upstream {
            api,
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    tracing::debug!(api, status = status.as_u16(), bytes = body.len(), "upstream responded");
    Ok(body)
}
