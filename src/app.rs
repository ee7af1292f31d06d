//! Application state and service initialization
//!
//! Centralizes service construction so Actix-web handlers receive one
//! shared state value.

use crate::service::ClaimAnalysisService;

/// Environment variable holding the provider API credential
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Application state shared across Actix-web handlers
pub struct AppState {
    /// Claim integrity analysis service
    pub analysis_service: ClaimAnalysisService,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Requires OPENAI_API_KEY; the key value itself is never logged or
    /// echoed back.
    pub fn new() -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_OPENAI_API_KEY)
            .map_err(|_| AppError::MissingConfig(ENV_OPENAI_API_KEY))?;

        let analysis_service = ClaimAnalysisService::new(&api_key)
            .map_err(|_| AppError::InvalidConfig("Invalid OPENAI_API_KEY"))?;

        Ok(Self { analysis_service })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
