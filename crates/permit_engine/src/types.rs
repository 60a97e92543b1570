use thiserror::Error;

/// Errors raised by the feed client.
///
/// Every variant propagates to the caller unchanged; the client makes
/// exactly one attempt per invocation and never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// No API credential is configured. User-actionable.
    #[error("api credential is not configured")]
    MissingCredential,
    /// The request could not complete at the transport level (connect,
    /// send or timeout), before any status code existed.
    #[error("network error: {0}")]
    Network(String),
    /// The feed answered with a non-200 status.
    #[error("feed returned http {status}: {body}")]
    Transport { status: u16, body: String },
    /// The response body is missing the expected envelope key; the
    /// upstream contract has changed.
    #[error("feed response missing envelope key `{key}`")]
    Format { key: String },
    /// The feed reported a failure code inside the envelope.
    #[error("feed error {code}: {message}")]
    Api { code: String, message: String },
}
