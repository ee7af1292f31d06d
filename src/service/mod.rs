pub mod analysis;

pub use analysis::{ClaimAnalysisError, ClaimAnalysisService};
