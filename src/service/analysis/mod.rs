//! Claim integrity analysis service using the remote generative model
//!
//! Renders the fixed prompt pair for a claim, issues exactly one
//! extraction request with the report schema attached, and hard-validates
//! the reply before exposing it.

use rig::client::CompletionClient;
use rig::extractor::ExtractionError;
use rig::providers::openai;

use crate::model::{AnalysisReport, ClaimRecord};
use crate::service::analysis::prompts::{build_claim_prompt, build_system_instruction};
use crate::service::analysis::validation::validate_report;

pub mod error;
pub mod prompts;
pub mod validation;

pub use error::ClaimAnalysisError;

/// Environment variable for the analysis model (defaults to gpt-4o-mini if not set)
const ENV_ANALYSIS_MODEL: &str = "CLAIM_ANALYSIS_MODEL";

/// Default model for claim analysis
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// Generation temperature, kept low so repeated submissions of the same
/// claim tend toward the same accounting output
const ANALYSIS_TEMPERATURE: f64 = 0.2;

/// Service for analyzing claim integrity through the remote model
///
/// Each call is independent: no caching, no shared mutable state, and no
/// coordination between concurrent invocations.
pub struct ClaimAnalysisService {
    client: openai::Client,
    model: String,
}

impl ClaimAnalysisService {
    /// Create a new analysis service from the provider API key
    ///
    /// Optionally uses the CLAIM_ANALYSIS_MODEL env var (defaults to gpt-4o-mini).
    pub fn new(api_key: &str) -> Result<Self, String> {
        let client = openai::Client::new(api_key);

        let model =
            std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            "Claim analysis service initialized"
        );

        Ok(Self { client, model })
    }

    /// Identifier of the model this service sends requests to
    pub fn model_id(&self) -> &str {
        &self.model
    }

    /// Analyze one claim record
    ///
    /// Issues exactly one outbound request; failures are returned as
    /// distinct [`ClaimAnalysisError`] conditions without retrying.
    pub async fn analyze(
        &self,
        claim: &ClaimRecord,
    ) -> Result<AnalysisReport, ClaimAnalysisError> {
        let start_time = std::time::Instant::now();

        let system_instruction = build_system_instruction(claim);
        let prompt = build_claim_prompt(claim);
        let prompt_length = prompt.len();

        tracing::debug!(
            record = %claim.record_number,
            model = %self.model,
            prompt_length = prompt_length,
            "Initiating LLM call for claim analysis"
        );

        let extractor = self
            .client
            .extractor::<AnalysisReport>(&self.model)
            .preamble(&system_instruction)
            .additional_params(serde_json::json!({
                "temperature": ANALYSIS_TEMPERATURE
            }))
            .build();

        let report = match extractor.extract(prompt.as_str()).await {
            Ok(report) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    record = %claim.record_number,
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    "LLM call for claim analysis completed successfully"
                );
                report
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    record = %claim.record_number,
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "LLM call for claim analysis failed"
                );
                return Err(classify_extraction_error(e));
            }
        };

        // The remote schema enforcement is best-effort; re-check the shape
        // before handing the report to the caller
        let validation_result = validate_report(&report, claim);

        if !validation_result.is_valid {
            tracing::error!(
                record = %claim.record_number,
                errors = ?validation_result.errors,
                "Analysis report failed shape validation"
            );
            return Err(ClaimAnalysisError::MalformedResponse(
                validation_result.errors.join("; "),
            ));
        }

        if !validation_result.warnings.is_empty() {
            tracing::warn!(
                record = %claim.record_number,
                warnings = ?validation_result.warnings,
                "Analysis report produced quality warnings"
            );
        }

        Ok(report)
    }
}

/// Map an extraction failure onto the service error taxonomy
fn classify_extraction_error(err: ExtractionError) -> ClaimAnalysisError {
    match err {
        ExtractionError::NoData => ClaimAnalysisError::EmptyResponse,
        ExtractionError::DeserializationError(e) => {
            ClaimAnalysisError::MalformedResponse(e.to_string())
        }
        // Prompt failures carry the underlying request or provider error
        other => ClaimAnalysisError::Transport(other.to_string()),
    }
}
