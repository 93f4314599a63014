//! Validated request values.
//!
//! Handlers turn raw request fields into these types before touching the
//! store, so repository operations never see an empty title or a
//! non-positive user reference.

use std::fmt;

/// Field-level validation failure. The `Display` text is what clients see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty
    Required { field: &'static str },

    /// Path identifier is not a positive integer
    InvalidId { entity: &'static str },

    /// User reference is missing or not positive
    InvalidUser { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::InvalidId { entity } => write!(f, "invalid {} ID", entity),
            Self::InvalidUser { field } => write!(f, "valid {} user ID is required", field),
        }
    }
}

impl std::error::Error for ValidationError {}

fn require(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        require("username", value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Title of a topic or post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        require("title", value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Body text of a post or comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body(String);

impl Body {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        require("body", value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Author reference carried on every created row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(i64);

impl UserId {
    pub fn new(field: &'static str, value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::InvalidUser { field });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// Parse a numeric path segment into a positive row id.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<i64, ValidationError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidId { entity }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(
            Title::new("").unwrap_err().to_string(),
            "title is required"
        );
        assert_eq!(Body::new("").unwrap_err().to_string(), "body is required");
        assert_eq!(
            Username::new("").unwrap_err().to_string(),
            "username is required"
        );
    }

    #[test]
    fn text_is_kept_verbatim() {
        assert_eq!(Title::new("  Q1 ").unwrap().as_str(), "  Q1 ");
        assert_eq!(Username::new("alice").unwrap().as_str(), "alice");
    }

    #[test]
    fn user_id_must_be_positive() {
        assert_eq!(UserId::new("created_by", 7).unwrap().get(), 7);
        for bad in [0, -1] {
            assert_eq!(
                UserId::new("created_by", bad).unwrap_err().to_string(),
                "valid created_by user ID is required"
            );
        }
    }

    #[test]
    fn path_ids() {
        assert_eq!(parse_id("topic", "42"), Ok(42));
        assert_eq!(parse_id("topic", "+3"), Ok(3));
        for bad in ["", "0", "-5", "abc", "1.5", "99999999999999999999"] {
            assert_eq!(
                parse_id("topic", bad),
                Err(ValidationError::InvalidId { entity: "topic" }),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            parse_id("post", "x").unwrap_err().to_string(),
            "invalid post ID"
        );
    }
}
