//! Structured analysis report returned by the generative model
//!
//! The `JsonSchema` derives double as the machine-checkable output-shape
//! descriptor attached to every extraction request, so the wire contract
//! and the typed model cannot drift apart.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Complete claim analysis report
///
/// Immutable once received; optional narrative fields are `Option`, never
/// sentinel strings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub compliance_analysis: ComplianceAnalysis,

    pub accounting_simulation: AccountingSimulation,

    pub advisory: Advisory,
}

/// Internal-control findings for the claim
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceAnalysis {
    #[schemars(description = "Warning regarding receivable risks if the claim is pending or denied")]
    pub risk_warning: Option<String>,

    #[schemars(description = "Specific action to fix the claim")]
    pub corrective_action: String,

    #[schemars(description = "Department responsible for the correction (e.g., Keuangan, Koder)")]
    pub responsible_unit: String,

    #[schemars(description = "Time limit for the corrective action")]
    pub deadline: String,
}

/// Simulated journal for the claim under government accrual accounting
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountingSimulation {
    pub journal_entries: Vec<JournalEntry>,

    #[schemars(description = "Explanation of the journal entry context")]
    pub description: String,

    #[schemars(description = "Accounting basis used (e.g., Basis Akrual)")]
    pub basis: String,
}

/// Paired debit/credit accounting record
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct JournalEntry {
    pub account: String,

    #[schemars(description = "Debit amount in rupiah, zero when the credit side is active")]
    pub debit: f64,

    #[schemars(description = "Credit amount in rupiah, zero when the debit side is active")]
    pub credit: f64,
}

/// Managerial follow-up advice
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    #[schemars(description = "Training advice when the error is human-related")]
    pub training_recommendation: Option<String>,

    #[schemars(description = "Standard PHI/RBAC security warning")]
    pub security_notice: String,
}
