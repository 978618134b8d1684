//! Google Slides REST client.

use super::auth::{fetch_access_token, ServiceAccountKey};
use super::{BatchAck, Presentation, SlidesApi};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::Mutation;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Slides API client authenticated with a service account key file.
///
/// The key file is read on every call, so a missing or broken file is
/// reported per request rather than at startup.
#[derive(Debug, Clone)]
pub struct GoogleSlides {
    http: reqwest::Client,
    credentials: PathBuf,
    api_base: Url,
}

#[derive(Serialize)]
struct BatchUpdateBody<'a> {
    requests: &'a [Mutation],
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

impl GoogleSlides {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("slidefill/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {}", e)))?;

        let api_base = Url::parse(&config.api_base)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                Error::Configuration(format!("invalid Slides API base URL: {}", config.api_base))
            })?;

        Ok(Self {
            http,
            credentials: config.credentials_file.clone(),
            api_base,
        })
    }

    /// Endpoint for a presentation, with `suffix` appended to the id segment
    /// (e.g. `":batchUpdate"`). The id is percent-encoded as one path segment.
    fn presentation_url(&self, document_id: &str, suffix: &str) -> Result<Url> {
        if matches!(document_id, "." | "..") {
            return Err(Error::InvalidRequest(format!(
                "Invalid document id: {}",
                document_id
            )));
        }

        let segment = format!("{}{}", document_id, suffix);
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Configuration("Slides API base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v1", "presentations", segment.as_str()]);
        Ok(url)
    }

    async fn bearer_token(&self) -> Result<String> {
        let key = ServiceAccountKey::load(&self.credentials).await?;
        fetch_access_token(&self.http, &key).await
    }
}

/// Turn a non-success response into the matching error.
async fn upstream_error(response: reqwest::Response, document_id: &str) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);

    log::warn!("Slides API returned {} for {}: {}", status, document_id, message);
    Error::from_status(status, document_id, message)
}

impl SlidesApi for GoogleSlides {
    async fn get_presentation(&self, document_id: &str) -> Result<Presentation> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .get(self.presentation_url(document_id, "")?)
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error(response, document_id).await);
        }
        Ok(response.json().await?)
    }

    async fn batch_update(&self, document_id: &str, requests: &[Mutation]) -> Result<BatchAck> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .post(self.presentation_url(document_id, ":batchUpdate")?)
            .bearer_auth(token)
            .json(&BatchUpdateBody { requests })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error(response, document_id).await);
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_url() {
        let config = Config::default().with_api_base("http://localhost:9000/");
        let client = GoogleSlides::new(&config).unwrap();
        assert_eq!(
            client.presentation_url("abc", "").unwrap().as_str(),
            "http://localhost:9000/v1/presentations/abc"
        );
        assert_eq!(
            client.presentation_url("abc", ":batchUpdate").unwrap().as_str(),
            "http://localhost:9000/v1/presentations/abc:batchUpdate"
        );
    }

    #[test]
    fn test_document_id_stays_in_one_segment() {
        let config = Config::default().with_api_base("https://slides.example.com/proxy");
        let client = GoogleSlides::new(&config).unwrap();

        let url = client.presentation_url("x/../..", "").unwrap();
        assert_eq!(
            url.as_str(),
            "https://slides.example.com/proxy/v1/presentations/x%2F..%2F.."
        );

        let url = client.presentation_url("a?b#c", ":batchUpdate").unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(url.path_segments().unwrap().count(), 4);

        let err = client.presentation_url("..", "").unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_invalid_api_base_is_configuration_error() {
        let config = Config::default().with_api_base("not a url");
        assert!(matches!(
            GoogleSlides::new(&config),
            Err(Error::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_at_call_time() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default()
            .with_credentials_file(dir.path().join("missing.json"))
            .with_api_base("http://127.0.0.1:9");
        let client = GoogleSlides::new(&config).unwrap();

        let err = client.get_presentation("doc").await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
