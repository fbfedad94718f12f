//! Wire Records
//!
//! JSON shapes served by the community endpoints. The backend is loose
//! about envelopes and number types, so decoding here is lenient: counts
//! accept integers, floats or numeric strings, timestamps that fail to
//! parse are treated as absent, and list endpoints answer either with a
//! named envelope or a bare array.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, EventId, ExchangeRequestId, ExchangeResponseId, PostId, UserId};
use platform::client::{GatewayError, decode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::entity::{
    comment::Comment,
    event::{Event, NewEvent},
    exchange_request::{ExchangeRequest, NewExchangeRequest},
    exchange_response::{ExchangeResponse, NewExchangeResponse},
    post::{NewPost, Post},
};
use crate::domain::value_object::{
    duration::{DurationUnit, ExchangeDuration},
    exchange_status::ExchangeStatus,
    location_type::LocationType,
    vote_direction::VoteDirection,
};

// ============================================================================
// Lenient field decoding
// ============================================================================

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    number(deserializer).map(|n| if n.is_finite() { n as i64 } else { 0 })
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    lenient_i64(deserializer).map(|n| n.max(0) as u64)
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_i64(deserializer).map(|n| n.clamp(0, u32::MAX as i64) as u32)
}

fn timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}

/// A reference that is either an id string or a populated `{ _id, ... }`
fn reference<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<UserId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) if !id.is_empty() => Some(UserId::new(id)),
        Value::Object(map) => map
            .get("_id")
            .or_else(|| map.get("id"))
            .and_then(Value::as_str)
            .map(UserId::new),
        _ => None,
    })
}

fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Record identifier, served as `_id`, `id` or both; `_id` wins
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawRecordId")]
pub struct RecordId(String);

#[derive(Deserialize)]
struct RawRecordId {
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

impl TryFrom<RawRecordId> for RecordId {
    type Error = &'static str;

    fn try_from(raw: RawRecordId) -> Result<Self, Self::Error> {
        raw.object_id
            .or(raw.id)
            .map(RecordId)
            .ok_or("record has neither `_id` nor `id`")
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// Take `body[key]` when present, otherwise the body itself
fn unwrap_envelope(body: Value, key: &str) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or_default(),
        other => other,
    }
}

/// Decode a list served as `{ key: [...] }` or as a bare array
///
/// A missing or null list decodes as empty.
pub fn decode_list<R, T>(body: Value, key: &str, convert: fn(R) -> T) -> Result<Vec<T>, GatewayError>
where
    R: DeserializeOwned,
{
    let list = match unwrap_envelope(body, key) {
        Value::Null => return Ok(Vec::new()),
        list @ Value::Array(_) => list,
        other => {
            return Err(GatewayError::Decode(format!(
                "expected a list under `{key}`, got {}",
                kind_of(&other)
            )));
        }
    };
    decode::<Vec<R>>(list).map(|records| records.into_iter().map(convert).collect())
}

/// Decode a single record served as `{ key: {...} }` or bare
///
/// `None` when the record is null.
pub fn decode_one<R, T>(
    body: Value,
    key: &str,
    convert: fn(R) -> T,
) -> Result<Option<T>, GatewayError>
where
    R: DeserializeOwned,
{
    match unwrap_envelope(body, key) {
        Value::Null => Ok(None),
        record => decode::<R>(record).map(|r| Some(convert(r))),
    }
}

/// `message` of a mutation reply, when the server sent one
pub fn reply_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Posts & comments
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(flatten)]
    id: RecordId,
    #[serde(default, deserialize_with = "text")]
    title: String,
    #[serde(default, deserialize_with = "text")]
    content: String,
    #[serde(default, deserialize_with = "text")]
    author_username: String,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    vote_score: i64,
    #[serde(default, deserialize_with = "lenient_u64")]
    comment_count: u64,
    #[serde(default, deserialize_with = "timestamp")]
    created_at: Option<DateTime<Utc>>,
}

impl From<PostRecord> for Post {
    fn from(r: PostRecord) -> Self {
        Post {
            id: PostId::new(r.id.0),
            title: r.title,
            content: r.content,
            author_username: r.author_username,
            avatar: r.avatar,
            vote_score: r.vote_score,
            comment_count: r.comment_count,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    #[serde(flatten)]
    id: RecordId,
    #[serde(default, deserialize_with = "text")]
    author_username: String,
    #[serde(default, deserialize_with = "text")]
    content: String,
    #[serde(default, deserialize_with = "timestamp")]
    created_at: Option<DateTime<Utc>>,
}

impl From<CommentRecord> for Comment {
    fn from(r: CommentRecord) -> Self {
        Comment {
            id: CommentId::new(r.id.0),
            author_username: r.author_username,
            content: r.content,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostBody<'a> {
    title: &'a str,
    content: &'a str,
}

impl<'a> From<&'a NewPost> for PostBody<'a> {
    fn from(post: &'a NewPost) -> Self {
        Self {
            title: &post.title,
            content: &post.content,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteBody {
    pub vote_type: VoteDirection,
}

#[derive(Debug, Serialize)]
pub struct CommentBody<'a> {
    pub content: &'a str,
}

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(flatten)]
    id: RecordId,
    #[serde(default, deserialize_with = "text")]
    title: String,
    #[serde(default, deserialize_with = "text")]
    description: String,
    #[serde(default, deserialize_with = "text")]
    location: String,
    #[serde(default, deserialize_with = "timestamp")]
    date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp")]
    end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "strings")]
    tags: Vec<String>,
    /// Only the count is shown; entries may be ids or populated users
    #[serde(default)]
    participants: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "timestamp")]
    created_at: Option<DateTime<Utc>>,
}

impl From<EventRecord> for Event {
    fn from(r: EventRecord) -> Self {
        Event {
            id: EventId::new(r.id.0),
            title: r.title,
            description: r.description,
            location: r.location,
            starts_at: r.date,
            ends_at: r.end_date,
            tags: r.tags,
            participant_count: r.participants.map_or(0, |p| p.len()),
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody<'a> {
    title: &'a str,
    description: &'a str,
    location: &'a str,
    date: &'a str,
    end_date: &'a str,
    tags: &'a [String],
}

impl<'a> From<&'a NewEvent> for EventBody<'a> {
    fn from(event: &'a NewEvent) -> Self {
        Self {
            title: &event.title,
            description: &event.description,
            location: &event.location,
            date: &event.date,
            end_date: &event.end_date,
            tags: &event.tags,
        }
    }
}

// ============================================================================
// Skill exchange
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DurationRecord {
    #[serde(default, deserialize_with = "lenient_u32")]
    value: u32,
    #[serde(default)]
    unit: DurationUnit,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationRecord {
    #[serde(default, rename = "type")]
    kind: LocationType,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequestRecord {
    #[serde(flatten)]
    id: RecordId,
    #[serde(default, deserialize_with = "text")]
    title: String,
    #[serde(default, deserialize_with = "text")]
    description: String,
    #[serde(default, deserialize_with = "text")]
    creator_username: String,
    #[serde(default, deserialize_with = "reference")]
    creator: Option<UserId>,
    #[serde(default, deserialize_with = "lenient_u32")]
    credits_requested: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    credits_offered: u32,
    #[serde(default, deserialize_with = "strings")]
    skills_requested: Vec<String>,
    #[serde(default, deserialize_with = "strings")]
    skills_offered: Vec<String>,
    #[serde(default)]
    duration: Option<DurationRecord>,
    #[serde(default)]
    location: Option<LocationRecord>,
    #[serde(default)]
    availability_schedule: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    view_count: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    response_count: u64,
    #[serde(default)]
    status: ExchangeStatus,
    #[serde(default, deserialize_with = "timestamp")]
    created_at: Option<DateTime<Utc>>,
}

impl From<ExchangeRequestRecord> for ExchangeRequest {
    fn from(r: ExchangeRequestRecord) -> Self {
        ExchangeRequest {
            id: ExchangeRequestId::new(r.id.0),
            title: r.title,
            description: r.description,
            creator_username: r.creator_username,
            creator: r.creator,
            credits_requested: r.credits_requested,
            credits_offered: r.credits_offered,
            skills_requested: r.skills_requested,
            skills_offered: r.skills_offered,
            duration: r.duration.map(|d| ExchangeDuration {
                value: d.value,
                unit: d.unit,
            }),
            location_type: r.location.unwrap_or_default().kind,
            availability_schedule: r.availability_schedule.filter(|s| !s.trim().is_empty()),
            view_count: r.view_count,
            response_count: r.response_count,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponseRecord {
    #[serde(flatten)]
    id: RecordId,
    #[serde(default, deserialize_with = "text")]
    responder_username: String,
    #[serde(default, deserialize_with = "reference")]
    responder: Option<UserId>,
    #[serde(default, deserialize_with = "text")]
    message: String,
    #[serde(default, deserialize_with = "strings")]
    skills_offered: Vec<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    credits_offered: u32,
    #[serde(default, deserialize_with = "timestamp")]
    created_at: Option<DateTime<Utc>>,
}

impl From<ExchangeResponseRecord> for ExchangeResponse {
    fn from(r: ExchangeResponseRecord) -> Self {
        ExchangeResponse {
            id: ExchangeResponseId::new(r.id.0),
            responder_username: r.responder_username,
            responder: r.responder,
            message: r.message,
            skills_offered: r.skills_offered,
            credits_offered: r.credits_offered,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationBody {
    #[serde(rename = "type")]
    kind: LocationType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequestBody<'a> {
    title: &'a str,
    description: &'a str,
    credits_requested: u32,
    credits_offered: u32,
    skills_requested: &'a [String],
    skills_offered: &'a [String],
    duration: ExchangeDuration,
    availability_schedule: &'a str,
    location: LocationBody,
}

impl<'a> From<&'a NewExchangeRequest> for ExchangeRequestBody<'a> {
    fn from(r: &'a NewExchangeRequest) -> Self {
        Self {
            title: &r.title,
            description: &r.description,
            credits_requested: r.credits_requested,
            credits_offered: r.credits_offered,
            skills_requested: &r.skills_requested,
            skills_offered: &r.skills_offered,
            duration: r.duration,
            availability_schedule: &r.availability_schedule,
            location: LocationBody {
                kind: r.location_type,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponseBody<'a> {
    message: &'a str,
    credits_offered: u32,
    skills_offered: &'a [String],
}

impl<'a> From<&'a NewExchangeResponse> for ExchangeResponseBody<'a> {
    fn from(r: &'a NewExchangeResponse) -> Self {
        Self {
            message: &r.message,
            credits_offered: r.credits_offered,
            skills_offered: &r.skills_offered,
        }
    }
}
