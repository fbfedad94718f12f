//! Assistant notice texts

pub const COACH_FAILED: &str = "Failed to get response. Please check your API key and try again.";
pub const TRUST_FAILED: &str =
    "Failed to calculate trust score. Please check your API key and try again.";

/// Success notice after a trust score was calculated
pub fn trust_calculated(display_score: &str) -> String {
    format!("Trust Score Calculated! Score: {display_score}")
}
