//! Vote Direction Value Object

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Direction of a vote on a post
///
/// Sent as the `voteType` field: `"upvote"` or `"downvote"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum VoteDirection {
    #[display("upvote")]
    #[serde(rename = "upvote")]
    Up,
    #[display("downvote")]
    #[serde(rename = "downvote")]
    Down,
}
