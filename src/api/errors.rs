use thiserror::Error;
use url::Url;

use crate::errors::RequestFailure;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("[E006] Invalid base URL: {0}\n\nSuggestions:\n  • Provide a valid HTTP or HTTPS URL\n  • Example: https://api.mythril.ai\n  • Ensure the URL includes the protocol (http:// or https://)")]
    CannotBeBase(Url),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Failure(#[from] RequestFailure),

    #[error("[E010] Analysis API returned a malformed response: {0}\n\nSuggestions:\n  • Check that the URL points at a Mythril analysis API\n  • The service may be behind a proxy returning non-JSON error pages")]
    Json(#[from] serde_json::Error),

    #[error("[E009] Invalid URL format: {0}\n\nSuggestions:\n  • Check the URL format is correct\n  • Ensure proper encoding of special characters\n  • Use absolute URLs with protocol (http:// or https://)")]
    UrlCannotBeBase(#[from] url::ParseError),
}

impl ApiClientError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CannotBeBase(_) => "E006",
            Self::Reqwest(_) => "E999", // Network errors get generic code
            Self::Failure(_) => "E011",
            Self::Json(_) => "E010",
            Self::UrlCannotBeBase(_) => "E009",
        }
    }

    /// True only for response-body parse failures on otherwise
    /// successful requests.
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
