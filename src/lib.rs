pub mod config;
pub mod error;
pub mod evaluation;
pub mod narrative;
pub mod report;
pub mod resolve;
pub mod scoring;
pub mod server;
pub mod signals;
pub mod types;

pub use evaluation::evaluate_claim;
pub use resolve::{resolve_form_data, HYDRAFULL_DEMO_DATA};
pub use types::{ClaimRecord, EvaluationResult, EvidenceRecord, Tier, TierColor};
