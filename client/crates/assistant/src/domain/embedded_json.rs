//! Embedded JSON extraction
//!
//! Generated text often wraps the requested JSON object in prose or a
//! markdown fence. The object is taken to span from the first `{` to the
//! last `}`.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbeddedJsonError {
    #[error("no JSON object in generated text")]
    NotFound,

    #[error("embedded JSON is invalid: {0}")]
    Invalid(String),
}

/// Extract the JSON object embedded in `text`
///
/// ## Examples
/// ```rust
/// use assistant::domain::parse_embedded_json;
///
/// let value = parse_embedded_json("```json\n{\"score\": 4.5}\n```").unwrap();
/// assert_eq!(value["score"], 4.5);
/// assert!(parse_embedded_json("no braces here").is_err());
/// ```
pub fn parse_embedded_json(text: &str) -> Result<Value, EmbeddedJsonError> {
    let start = text.find('{').ok_or(EmbeddedJsonError::NotFound)?;
    let end = text.rfind('}').ok_or(EmbeddedJsonError::NotFound)?;
    if end < start {
        return Err(EmbeddedJsonError::NotFound);
    }
    serde_json::from_str(&text[start..=end]).map_err(|e| EmbeddedJsonError::Invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_inside_prose() {
        let text = "Here you go:\n{\"score\": 3.8, \"analysis\": \"Reliable {mostly}\"}\nThanks!";
        assert_eq!(
            parse_embedded_json(text).unwrap(),
            json!({"score": 3.8, "analysis": "Reliable {mostly}"})
        );
    }

    #[test]
    fn test_missing_or_reversed_braces() {
        assert_eq!(parse_embedded_json(""), Err(EmbeddedJsonError::NotFound));
        assert_eq!(parse_embedded_json("score: 4"), Err(EmbeddedJsonError::NotFound));
        assert_eq!(parse_embedded_json("} then {"), Err(EmbeddedJsonError::NotFound));
    }

    #[test]
    fn test_invalid_object() {
        assert!(matches!(
            parse_embedded_json("{score: four}"),
            Err(EmbeddedJsonError::Invalid(_))
        ));
    }
}
