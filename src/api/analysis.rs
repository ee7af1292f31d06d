//! REST API endpoint for claim integrity analysis

use actix_web::{HttpResponse, post, web};
use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::{
    AccountingSimulation, Advisory, AnalysisReport, ClaimReason, ClaimRecord, ClaimStatus,
    ComplianceAnalysis, JournalEntry,
};

/// OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Claims Integrity Agent",
        description = "Generative integrity analysis of hospital BPJS insurance claims"
    ),
    paths(
        analyze_claim,
        crate::api::health::liveness,
        crate::api::health::readiness
    ),
    components(schemas(
        ClaimRecord,
        ClaimStatus,
        ClaimReason,
        AnalysisReport,
        ComplianceAnalysis,
        AccountingSimulation,
        JournalEntry,
        Advisory,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth
    )),
    tags(
        (name = "claims", description = "Claim integrity analysis"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

/// Analyze a claim record
///
/// Validates the submitted claim, forwards it to the generative analysis
/// service, and returns the structured report.
#[utoipa::path(
    post,
    path = "/v1/claims/analysis",
    request_body = ClaimRecord,
    responses(
        (status = 200, description = "Analysis completed successfully", body = AnalysisReport),
        (status = 400, description = "Claim record failed validation"),
        (status = 502, description = "Analysis service failed or returned an unusable reply")
    ),
    tag = "claims"
)]
#[post("/v1/claims/analysis")]
pub async fn analyze_claim(
    state: web::Data<AppState>,
    claim: web::Json<ClaimRecord>,
) -> Result<HttpResponse, ApiError> {
    let claim = claim.into_inner();

    // Input constraints are checked here so the analysis client never sees
    // an invalid record
    claim.validate()?;

    let report = state.analysis_service.analyze(&claim).await?;

    Ok(HttpResponse::Ok().json(report))
}

/// Configure claim analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_claim);
}
