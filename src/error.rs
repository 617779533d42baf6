use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes for a single research request.
///
/// All three resolve the controller to `Failed`; the variant is kept so
/// diagnostics and tests can tell an unreachable service from a broken
/// payload. Display gives the message shown to the user.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// No usable HTTP response: connection refused, DNS failure, timeout,
    /// or a body cut off mid-read.
    #[error("could not reach the research service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status. The body is ignored
    /// by contract.
    #[error("research service returned {status}")]
    Protocol { status: StatusCode },

    /// A 2xx body that does not match the expected response shape.
    #[error("malformed research response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Rejection for a `submit` issued while a request is still in flight.
#[derive(Debug, Error)]
#[error("a research request is already in flight")]
pub struct AlreadyPending;
