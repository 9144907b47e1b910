use thiserror::Error;

pub type Result<T> = std::result::Result<T, InsightError>;

/// Failure modes of the AI insight pipeline. Each is surfaced distinctly so
/// callers can decide whether to back off, prompt the user, or alert an
/// operator; nothing here is retried automatically.
#[derive(Error, Debug)]
pub enum InsightError {
    /// The gateway API key is absent. Raised before any network call.
    #[error("AI gateway API key is not configured")]
    MissingCredential,

    /// The upstream provider returned 429.
    #[error("AI gateway rate limit exceeded")]
    RateLimited,

    /// The upstream provider returned 402.
    #[error("AI gateway quota exhausted")]
    QuotaExhausted,

    /// Any other non-success status from the gateway.
    #[error("AI gateway returned status {0}")]
    UpstreamStatus(u16),

    /// No response was obtained at all.
    #[error("AI gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The model replied, but not in the shape the schema demands.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}
