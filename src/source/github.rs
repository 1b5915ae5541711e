//! Repository content API source.

use super::{ContentPayload, ContentSource, PayloadEncoding};
use crate::config::ContentRequestConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT as USER_AGENT_HEADER};
use reqwest::Client;
use serde::Deserialize;

/// User agent sent with every request; the content API rejects requests without one.
pub const USER_AGENT: &str = concat!("slideloader/", env!("CARGO_PKG_VERSION"));

const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Reads slide files through the repository content API.
///
/// Each request is a GET on
/// `{host}/repos/{owner}/{repo}/contents/{base_path}/{filename}` whose JSON
/// body carries the file as base64 in its `content` field.
#[derive(Debug, Clone, Default)]
pub struct GitHubContentSource {
    client: Client,
    token: Option<String>,
}

impl GitHubContentSource {
    /// Create a source with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing HTTP client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Authenticate requests with a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    /// Whether requests are authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl ContentSource for GitHubContentSource {
    fn name(&self) -> &str {
        "github"
    }

    async fn fetch(&self, config: &ContentRequestConfig, filename: &str) -> Result<ContentPayload> {
        let url = config.content_url(filename)?;
        log::debug!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_JSON)
            .header(USER_AGENT_HEADER, USER_AGENT);
        if let Some(ref token) = self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::fetch(filename, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch(filename, e))?;

        if !status.is_success() {
            let reason = match api_message(&body) {
                Some(message) => format!("HTTP {} ({})", status, message),
                None => format!("HTTP {}", status),
            };
            return Err(Error::fetch(filename, reason));
        }

        parse_content_response(filename, &body)
    }
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(rename = "type")]
    kind: Option<String>,
    content: Option<String>,
    encoding: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

fn api_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .map(|m| m.message)
}

/// Parse a content API response body into a payload.
pub fn parse_content_response(filename: &str, body: &str) -> Result<ContentPayload> {
    let response: ContentResponse = serde_json::from_str(body).map_err(|e| {
        Error::decode(filename, format!("response is not a file object: {}", e))
    })?;

    if let Some(kind) = response.kind.as_deref() {
        if kind != "file" {
            return Err(Error::decode(filename, format!("expected a file, got {}", kind)));
        }
    }

    match response.encoding.as_deref() {
        None | Some("base64") => {}
        Some(other) => {
            return Err(Error::decode(
                filename,
                format!("unsupported content encoding: {}", other),
            ))
        }
    }

    let content = response
        .content
        .ok_or_else(|| Error::decode(filename, "response has no content field"))?;

    Ok(ContentPayload {
        filename: filename.to_string(),
        encoding: PayloadEncoding::Base64,
        content,
    })
}
