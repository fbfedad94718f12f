//! User Profile Entity
//!
//! Public profile of a platform member as served by the backend.

/// Highest trust score the backend assigns
pub const MAX_TRUST_SCORE: f64 = 100.0;

/// User profile entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserProfile {
    pub username: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    /// One-line bio
    pub bio: Option<String>,
    /// Longer free-form description
    pub about: Option<String>,
    pub tags: Vec<String>,
    pub passing_year: Option<i32>,
    /// Trust score on a 0-100 scale
    pub trust_score: Option<f64>,
    /// Skill-exchange credit balance
    pub credits: Option<i64>,
    pub skills_offered: Vec<String>,
    pub skills_required: Vec<String>,
}

impl UserProfile {
    /// Star rating (0-5) derived from the trust score
    pub fn rating(&self) -> Option<f64> {
        self.trust_score
            .map(|score| score.clamp(0.0, MAX_TRUST_SCORE) / 20.0)
    }

    /// Route of this user's profile page
    pub fn profile_path(&self) -> String {
        format!("/user/{}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_scales_trust_score() {
        let mut profile = UserProfile {
            username: "ada".into(),
            trust_score: Some(90.0),
            ..Default::default()
        };
        assert_eq!(profile.rating(), Some(4.5));

        profile.trust_score = Some(140.0);
        assert_eq!(profile.rating(), Some(5.0));

        profile.trust_score = None;
        assert_eq!(profile.rating(), None);
    }
}
