//! Prompts
//!
//! Fixed instruction preambles sent ahead of user text.

use crate::domain::transcript::Transcript;

/// First message shown by the chat coach
pub const COACH_GREETING: &str = "Hello! I'm your Soft Skills Coach. I can help you improve your \
communication, leadership, presentation skills, and professional etiquette. What would you like \
to work on today?";

pub const COACH_PREAMBLE: &str = "You are an expert soft skills coach specializing in helping \
students and young professionals improve their:
- Communication skills (verbal and written)
- Presentation and public speaking
- Leadership and teamwork
- Professional etiquette and workplace behavior
- Emotional intelligence and interpersonal skills
- Time management and productivity
- Conflict resolution and negotiation

Provide practical, actionable advice with examples. Be encouraging, supportive, and specific. \
Keep responses concise but helpful. Answer in 5 small points always, don't elaborate much.";

pub const TRUST_PREAMBLE: &str = "You are a trust score analyzer for a peer-to-peer learning \
platform called bytee.
Analyze the provided reviews and feedback about a user and calculate a trust score out of 5.

Consider the following factors:
- Quality and consistency of help provided
- Positive feedback from peers
- Reliability and punctuality
- Communication skills
- Expertise demonstrated
- Number of successful exchanges
- Negative feedback or complaints

Return ONLY a JSON object with this exact structure (no additional text):
{
  \"score\": <number between 0-5 with one decimal>,
  \"analysis\": \"<brief 2-3 sentence explanation of the score>\"
}";

/// Coach prompt: the preamble followed by the conversation so far
pub fn coach_prompt(transcript: &Transcript) -> String {
    format!("{COACH_PREAMBLE}\n\n{}", transcript.render())
}

/// Trust prompt for the given reviews
pub fn trust_prompt(reviews: &str) -> String {
    format!("{TRUST_PREAMBLE}\n\nReviews to analyze:\n{reviews}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_prompt_layout() {
        let prompt = trust_prompt("Great mentor");
        assert!(prompt.starts_with("You are a trust score analyzer"));
        assert!(prompt.ends_with("}\n\nReviews to analyze:\nGreat mentor"));
    }

    #[test]
    fn test_coach_prompt_ends_with_latest_turn() {
        let mut transcript = Transcript::new();
        transcript.push_user("How do I run a standup?");
        let prompt = coach_prompt(&transcript);
        assert!(prompt.starts_with(COACH_PREAMBLE));
        assert!(prompt.ends_with("\n\nUser: How do I run a standup?"));
    }
}
