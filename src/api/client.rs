use reqwest::{
    blocking::{self, Client},
    StatusCode,
};
use url::Url;

use crate::bytecode::Bytecode;
use crate::errors::RequestFailure;

use super::errors::ApiClientError;
use super::models::{AnalysisDispatch, AnalysisRequest, Error};

/// Hosted analysis endpoint, used when no base URL is supplied.
pub const DEFAULT_API_URL: &str = "https://api.mythril.ai";

#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    api_key: String,
    client: Client,
}

impl ApiClient {
    /// # Errors
    ///
    /// Fails if provided `Url` cannot be a base. We rely on that
    /// invariant in other methods.
    pub fn new(base: Url, api_key: impl Into<String>) -> Result<Self, ApiClientError> {
        // Test here so that we are sure path_segments_mut succeeds
        if base.cannot_be_a_base() {
            Err(ApiClientError::CannotBeBase(base))
        } else {
            Ok(Self {
                base,
                api_key: api_key.into(),
                client: blocking::Client::new(),
            })
        }
    }

    /// Client against the official hosted endpoint.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the built-in URL fails to parse, which
    /// would be a bug rather than a runtime condition.
    pub fn hosted(api_key: impl Into<String>) -> Result<Self, ApiClientError> {
        let base = Url::parse(DEFAULT_API_URL)?;
        Self::new(base, api_key)
    }

    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn analysis_url(&self) -> Result<Url, ApiClientError> {
        let mut url = self.base.clone();
        let url_clone = url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiClientError::CannotBeBase(url_clone))?
            .extend(&["mythril", "v1", "analysis"]);
        Ok(url)
    }

    /// Submits bytecode for analysis and returns the job uuid assigned
    /// by the service. Single round-trip, no retries; any retry policy
    /// is the caller's.
    ///
    /// # Errors
    ///
    /// Will return `Err` on connection failure, on any non-200 status,
    /// or if a 200 response body is not the expected JSON.
    pub fn submit_bytecode(&self, bytecode: &Bytecode) -> Result<String, ApiClientError> {
        let url = self.analysis_url()?;
        let body = AnalysisRequest::bytecode(bytecode.as_ref());

        let response = self
            .client
            .post(url.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(ApiClientError::Reqwest)?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text()?;
            // 4xx bodies usually carry {"error": …}; surface that
            // message when present, the raw body otherwise.
            let msg = serde_json::from_str::<Error>(&text)
                .map_or(text, |parsed| parsed.error);
            return Err(ApiClientError::from(RequestFailure::new(url, status, msg)));
        }

        let response_text = response.text()?;
        log::debug!("Raw API Response: {response_text}");

        let data: AnalysisDispatch = serde_json::from_str(&response_text).map_err(|e| {
            log::error!("Failed to parse JSON response: {e}");
            log::error!("Response text: {response_text}");
            ApiClientError::Json(e)
        })?;

        log::debug!("Analysis queued: result={}, uuid={}", data.result, data.uuid);

        Ok(data.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosted_targets_official_endpoint() {
        let client = ApiClient::hosted("valid-api-key").unwrap();
        assert_eq!(client.base().as_str(), "https://api.mythril.ai/");
    }

    #[test]
    fn test_analysis_url_appends_fixed_path() {
        let base = Url::parse("http://localhost:3100").unwrap();
        let client = ApiClient::new(base, "valid-api-key").unwrap();
        assert_eq!(
            client.analysis_url().unwrap().as_str(),
            "http://localhost:3100/mythril/v1/analysis"
        );
    }

    #[test]
    fn test_analysis_url_over_https() {
        let base = Url::parse("https://localhost:3100").unwrap();
        let client = ApiClient::new(base, "valid-api-key").unwrap();
        assert_eq!(
            client.analysis_url().unwrap().as_str(),
            "https://localhost:3100/mythril/v1/analysis"
        );
    }

    #[test]
    fn test_rejects_url_that_cannot_be_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        let result = ApiClient::new(base, "valid-api-key");
        assert!(matches!(result, Err(ApiClientError::CannotBeBase(_))));
    }
}
