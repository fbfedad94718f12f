//! Common ID Types
//!
//! Type-safe wrappers for the opaque string identifiers the backend
//! assigns to its records (`_id`).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type PostId = Id<markers::Post>;
///
/// let id = PostId::new("p1");
/// assert_eq!(id.as_str(), "p1");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a server-assigned identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert to the raw identifier
    pub fn into_string(self) -> String {
        self.value
    }
}

// Manual impls: derives would require `T: Clone`/`T: PartialEq` on the marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;
    pub struct Post;
    pub struct Comment;
    pub struct Event;
    pub struct ExchangeRequest;
    pub struct ExchangeResponse;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type PostId = Id<markers::Post>;
pub type CommentId = Id<markers::Comment>;
pub type EventId = Id<markers::Event>;
pub type ExchangeRequestId = Id<markers::ExchangeRequest>;
pub type ExchangeResponseId = Id<markers::ExchangeResponse>;
