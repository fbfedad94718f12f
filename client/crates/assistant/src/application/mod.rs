//! Application Layer
//!
//! The chat coach and the trust-score estimator.

pub mod coach;
pub mod trust_score;

// Re-exports
pub use coach::ChatCoachUseCase;
pub use trust_score::TrustScoreUseCase;
