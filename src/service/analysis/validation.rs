//! Validation logic for model-produced analysis reports
//!
//! The remote service enforces the requested schema best-effort only, so
//! every report is re-checked here before it is exposed to callers.

use crate::model::{AnalysisReport, ClaimRecord, ClaimStatus};

/// Result of report validation
#[derive(Debug)]
pub struct ReportValidationResult {
    /// Whether the report passed validation
    pub is_valid: bool,
    /// Critical errors that indicate an unusable report
    pub errors: Vec<String>,
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl ReportValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate a parsed report for shape and guidance conformance
///
/// Checks:
/// 1. Required narrative fields are non-empty
/// 2. Journal amounts are finite and non-negative
/// 3. Each journal entry has exactly one active side (warning only)
/// 4. Guidance-level expectations for the submitted claim (warnings)
pub fn validate_report(report: &AnalysisReport, claim: &ClaimRecord) -> ReportValidationResult {
    let mut result = ReportValidationResult::valid();

    check_required(
        &mut result,
        "complianceAnalysis.correctiveAction",
        &report.compliance_analysis.corrective_action,
    );
    check_required(
        &mut result,
        "complianceAnalysis.responsibleUnit",
        &report.compliance_analysis.responsible_unit,
    );
    check_required(
        &mut result,
        "complianceAnalysis.deadline",
        &report.compliance_analysis.deadline,
    );
    check_required(
        &mut result,
        "accountingSimulation.basis",
        &report.accounting_simulation.basis,
    );
    check_required(
        &mut result,
        "advisory.securityNotice",
        &report.advisory.security_notice,
    );

    if report.accounting_simulation.journal_entries.is_empty() {
        result.add_warning("accountingSimulation.journalEntries is empty".to_string());
    }

    for (i, entry) in report.accounting_simulation.journal_entries.iter().enumerate() {
        if entry.account.trim().is_empty() {
            result.add_error(format!("journal entry {} has an empty account name", i + 1));
        }

        for (side, amount) in [("debit", entry.debit), ("credit", entry.credit)] {
            if !amount.is_finite() || amount < 0.0 {
                result.add_error(format!(
                    "journal entry {} has an invalid {} amount: {}",
                    i + 1,
                    side,
                    amount
                ));
            }
        }

        // Normal double-entry output activates exactly one side per row
        let debit_active = entry.debit > 0.0;
        let credit_active = entry.credit > 0.0;
        if debit_active == credit_active {
            result.add_warning(format!(
                "journal entry {} ({}) does not have exactly one active side",
                i + 1,
                entry.account
            ));
        }
    }

    if report.accounting_simulation.description.trim().is_empty() {
        result.add_warning("accountingSimulation.description is empty".to_string());
    }

    if claim.status != ClaimStatus::Approved && report.compliance_analysis.risk_warning.is_none() {
        result.add_warning(
            "riskWarning missing for a claim that is not approved".to_string(),
        );
    }

    if claim.reason.is_staff_related() && report.advisory.training_recommendation.is_none() {
        result.add_warning(
            "trainingRecommendation missing for a staff-related reason".to_string(),
        );
    }

    result
}

fn check_required(result: &mut ReportValidationResult, field: &str, value: &str) {
    if value.trim().is_empty() {
        result.add_error(format!("{} is empty", field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AccountingSimulation, Advisory, ClaimReason, ComplianceAnalysis, JournalEntry,
    };

    fn denied_claim() -> ClaimRecord {
        ClaimRecord {
            record_number: "12-34-56".to_string(),
            claim_value: 5_000_000.0,
            status: ClaimStatus::Denied,
            reason: ClaimReason::CodingError,
        }
    }

    fn well_formed_report() -> AnalysisReport {
        AnalysisReport {
            compliance_analysis: ComplianceAnalysis {
                risk_warning: Some("Risiko piutang tidak tertagih".to_string()),
                corrective_action: "Perbaiki koding INA-CBG dan ajukan ulang".to_string(),
                responsible_unit: "Koder".to_string(),
                deadline: "10 hari kerja".to_string(),
            },
            accounting_simulation: AccountingSimulation {
                journal_entries: vec![
                    JournalEntry {
                        account: "Piutang Klaim BPJS".to_string(),
                        debit: 5_000_000.0,
                        credit: 0.0,
                    },
                    JournalEntry {
                        account: "Pendapatan-LO".to_string(),
                        debit: 0.0,
                        credit: 5_000_000.0,
                    },
                ],
                description: "Jurnal pengakuan hak atas layanan yang telah diberikan".to_string(),
                basis: "Basis Akrual".to_string(),
            },
            advisory: Advisory {
                training_recommendation: Some("Pelatihan koding untuk staf".to_string()),
                security_notice: "Akses data klaim dibatasi sesuai PHI/RBAC".to_string(),
            },
        }
    }

    #[test]
    fn test_well_formed_report_is_valid() {
        let result = validate_report(&well_formed_report(), &denied_claim());

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_required_field_is_an_error() {
        let mut report = well_formed_report();
        report.compliance_analysis.corrective_action = "  ".to_string();

        let result = validate_report(&report, &denied_claim());

        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.contains("correctiveAction"))
        );
    }

    #[test]
    fn test_negative_journal_amount_is_an_error() {
        let mut report = well_formed_report();
        report.accounting_simulation.journal_entries[0].debit = -1.0;

        let result = validate_report(&report, &denied_claim());

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("invalid debit")));
    }

    #[test]
    fn test_nan_journal_amount_is_an_error() {
        let mut report = well_formed_report();
        report.accounting_simulation.journal_entries[1].credit = f64::NAN;

        let result = validate_report(&report, &denied_claim());

        assert!(!result.is_valid);
    }

    #[test]
    fn test_both_sides_active_is_a_warning_only() {
        let mut report = well_formed_report();
        report.accounting_simulation.journal_entries[0].credit = 5_000_000.0;

        let result = validate_report(&report, &denied_claim());

        assert!(result.is_valid);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.contains("exactly one active side"))
        );
    }

    #[test]
    fn test_empty_journal_is_a_warning_only() {
        let mut report = well_formed_report();
        report.accounting_simulation.journal_entries.clear();

        let result = validate_report(&report, &denied_claim());

        assert!(result.is_valid);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.contains("journalEntries is empty"))
        );
    }

    #[test]
    fn test_missing_risk_warning_for_denied_claim_is_a_warning() {
        let mut report = well_formed_report();
        report.compliance_analysis.risk_warning = None;

        let result = validate_report(&report, &denied_claim());

        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("riskWarning")));
    }

    #[test]
    fn test_approved_claim_does_not_expect_risk_warning() {
        let mut report = well_formed_report();
        report.compliance_analysis.risk_warning = None;
        report.advisory.training_recommendation = None;

        let claim = ClaimRecord {
            record_number: "12-34-56".to_string(),
            claim_value: 5_000_000.0,
            status: ClaimStatus::Approved,
            reason: ClaimReason::None,
        };

        let result = validate_report(&report, &claim);

        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }
}
