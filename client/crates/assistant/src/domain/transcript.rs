//! Chat Transcript
//!
//! The coach conversation as shown on screen. The canned greeting is
//! displayed first but never sent back to the model.

use std::fmt;

use crate::domain::prompt::COACH_GREETING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Coach,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::User => "User",
            Role::Coach => "Coach",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    greeting: ChatMessage,
    turns: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            greeting: ChatMessage::new(Role::Coach, COACH_GREETING),
            turns: Vec::new(),
        }
    }

    /// Every message in display order, greeting first
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        std::iter::once(&self.greeting).chain(self.turns.iter())
    }

    /// Messages exchanged so far, excluding the greeting
    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatMessage::new(Role::User, content));
    }

    pub fn push_coach(&mut self, content: impl Into<String>) {
        self.turns.push(ChatMessage::new(Role::Coach, content));
    }

    pub fn last(&self) -> &ChatMessage {
        self.turns.last().unwrap_or(&self.greeting)
    }

    /// `User:`/`Coach:` lines, one per turn
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|m| format!("{}: {}", m.role, m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_shown_not_rendered() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.messages().count(), 1);
        assert_eq!(transcript.last().role, Role::Coach);
        assert_eq!(transcript.render(), "");

        transcript.push_user("Hi");
        transcript.push_coach("Hello again");
        assert_eq!(transcript.messages().count(), 3);
        assert_eq!(transcript.render(), "User: Hi\nCoach: Hello again");
    }
}
