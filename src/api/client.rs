//! HTTP implementation of [`CaptionService`]

use super::error::{ApiError, Result};
use super::traits::CaptionService;
use super::types::{CaptionRequest, CaptionResult, GENERATE_CAPTION_PATH};
use reqwest::blocking::{Client, multipart};
use std::time::Duration;

/// Blocking client for `POST {api_base}/api/generate_caption`
#[derive(Debug, Clone)]
pub struct HttpCaptionClient {
    client: Client,
    endpoint: reqwest::Url,
}

impl HttpCaptionClient {
    /// Create a client for the given API base
    ///
    /// A trailing `/` on the base is ignored. Without a timeout the request
    /// waits as long as the networking layer allows.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the base is not an absolute http(s)
    /// URL, or `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(api_base: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = endpoint_url(api_base)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }

    /// Full URL requests are sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn form(request: &CaptionRequest) -> Result<multipart::Form> {
        let file = multipart::Part::bytes(request.file.bytes().to_vec())
            .file_name(request.file.name().to_string())
            .mime_str(request.file.mime_type())
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(multipart::Form::new()
            .part("file", file)
            .text("style", request.style.wire_value()))
    }
}

impl CaptionService for HttpCaptionClient {
    fn generate(&self, request: &CaptionRequest) -> Result<CaptionResult> {
        tracing::debug!(
            endpoint = %self.endpoint,
            file = request.file.name(),
            style = request.style.wire_value(),
            "sending caption request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(Self::form(request)?)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "caption API returned an error status");
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json::<CaptionResult>()?)
    }
}

/// Join the API base and the caption endpoint path
///
/// # Errors
///
/// Returns `ApiError::InvalidUrl` if the result is not an http(s) URL.
pub fn endpoint_url(api_base: &str) -> Result<reqwest::Url> {
    let base = api_base.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(&format!("{base}{GENERATE_CAPTION_PATH}"))
        .map_err(|_| ApiError::InvalidUrl(api_base.to_string()))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(ApiError::InvalidUrl(api_base.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_path() {
        let url = endpoint_url("http://localhost:8000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/generate_caption");
    }

    #[test]
    fn test_endpoint_url_tolerates_trailing_slash() {
        let url = endpoint_url("https://captions.example.com/").unwrap();
        assert_eq!(url.as_str(), "https://captions.example.com/api/generate_caption");
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let url = endpoint_url("http://example.com/v1").unwrap();
        assert_eq!(url.as_str(), "http://example.com/v1/api/generate_caption");
    }

    #[test]
    fn test_endpoint_url_rejects_garbage() {
        assert!(matches!(endpoint_url("not a url"), Err(ApiError::InvalidUrl(_))));
        assert!(matches!(endpoint_url("ftp://example.com"), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_reports_endpoint() {
        let client = HttpCaptionClient::new("http://127.0.0.1:9", Some(Duration::from_secs(1))).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/api/generate_caption");
    }
}
