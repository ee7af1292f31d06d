pub mod analysis;
pub mod claim;
pub mod config;

pub use analysis::{
    AccountingSimulation, Advisory, AnalysisReport, ComplianceAnalysis, JournalEntry,
};
pub use claim::{ClaimReason, ClaimRecord, ClaimStatus, ClaimValidationError};
pub use config::Config;
