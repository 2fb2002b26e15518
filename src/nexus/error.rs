// ABOUTME: Gateway error types with SNAFU pattern.
// ABOUTME: Classifies transport, status, and payload failures for programmatic handling.

use snafu::Snafu;

/// Longest excerpt of a response body kept in an error.
pub const BODY_EXCERPT_LEN: usize = 1000;

/// Failure talking to the Nexus REST API.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum GatewayError {
    #[snafu(display("request to {url} failed: {source}"))]
    Request { url: String, source: reqwest::Error },

    #[snafu(display("{url} responded {status}: {body}"))]
    Status { url: String, status: u16, body: String },

    #[snafu(display("unable to parse response from {url}: {source} (body: {body})"))]
    Decode {
        url: String,
        body: String,
        source: serde_json::Error,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// The request never produced a response (DNS, TLS, timeout, reset).
    Transport,
    /// Credentials were missing or refused.
    Unauthorized,
    /// Nexus answered with any other non-success status.
    Rejected,
    /// The response body was not the expected JSON.
    MalformedResponse,
}

impl GatewayError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> GatewayErrorKind {
        match self {
            GatewayError::Request { .. } => GatewayErrorKind::Transport,
            GatewayError::Status { status, .. } if matches!(status, 401 | 403) => {
                GatewayErrorKind::Unauthorized
            }
            GatewayError::Status { .. } => GatewayErrorKind::Rejected,
            GatewayError::Decode { .. } => GatewayErrorKind::MalformedResponse,
        }
    }

    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Cut a response body down to a loggable excerpt on a char boundary.
pub(crate) fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LEN).collect()
}
