//! Claim record input model
//!
//! One BPJS claim as submitted for integrity analysis. The enum labels are
//! the fixed Indonesian texts rendered into the analysis prompt.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// Settlement status reported by the payer for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Approved,
    Pending,
    Denied,
}

impl ClaimStatus {
    /// Fixed label used when rendering the claim for the analysis prompt
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Approved => "Layak Bayar (Approved)",
            ClaimStatus::Pending => "Pending (Tertunda)",
            ClaimStatus::Denied => "Gagal Bayar (Denied/Ditolak)",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejection or delay reason attached to a claim
///
/// Only meaningful when the status is not approved; `None` is accepted for
/// any status and is the default when the field is omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimReason {
    #[default]
    None,
    TechnicalError,
    CodingError,
    IncompleteDocs,
    NonEmergency,
}

impl ClaimReason {
    /// Fixed label used when rendering the claim for the analysis prompt
    pub fn label(&self) -> &'static str {
        match self {
            ClaimReason::None => "-",
            ClaimReason::TechnicalError => "Kendala Teknis E-Klaim Error",
            ClaimReason::CodingError => "Ketidaksesuaian/Kesalahan Koding",
            ClaimReason::IncompleteDocs => "Dokumen Medis/Resume Tidak Lengkap",
            ClaimReason::NonEmergency => "Kasus Non-Gawat Darurat/Estetika",
        }
    }

    /// Whether the reason points at a human process gap (coding or paperwork)
    pub fn is_staff_related(&self) -> bool {
        matches!(self, ClaimReason::CodingError | ClaimReason::IncompleteDocs)
    }
}

impl fmt::Display for ClaimReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One hospital insurance claim submitted for analysis
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    /// Medical record number identifying the patient episode
    pub record_number: String,
    /// Total claim value in rupiah
    pub claim_value: f64,
    pub status: ClaimStatus,
    #[serde(default)]
    pub reason: ClaimReason,
}

/// Error type for claim input validation
#[derive(Debug, Error)]
pub enum ClaimValidationError {
    #[error("record number must not be empty")]
    EmptyRecordNumber,

    #[error("claim value must be strictly positive, got {0}")]
    NonPositiveValue(f64),
}

impl ClaimRecord {
    /// Check the input constraints before the record reaches the analysis client
    pub fn validate(&self) -> Result<(), ClaimValidationError> {
        if self.record_number.trim().is_empty() {
            return Err(ClaimValidationError::EmptyRecordNumber);
        }
        // The comparison is false for NaN, so NaN is rejected here too
        if !(self.claim_value > 0.0) {
            return Err(ClaimValidationError::NonPositiveValue(self.claim_value));
        }
        Ok(())
    }
}
