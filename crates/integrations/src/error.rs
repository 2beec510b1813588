/// Errors raised inside the integration clients.
///
/// These are logged and swallowed by the public client methods.
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    /// No API key is configured for the service.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response was well-formed HTTP but missing the expected content.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}
