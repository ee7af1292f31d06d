//! Error types for claim analysis

use thiserror::Error;

/// Error type for the remote claim analysis call
///
/// Every failure is surfaced to the caller as a distinct condition; the
/// service never retries and never substitutes partial data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClaimAnalysisError {
    /// The remote service could not be reached or reported a failure
    #[error("analysis request failed: {0}")]
    Transport(String),

    /// The remote service answered without a text payload
    #[error("analysis service returned an empty response")]
    EmptyResponse,

    /// The payload did not match the expected report shape
    #[error("analysis response did not match the expected report shape: {0}")]
    MalformedResponse(String),
}
