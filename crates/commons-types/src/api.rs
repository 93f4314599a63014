use serde::{Deserialize, Serialize};

// Missing request fields decode as empty strings / zero and are then rejected
// by field validation.

// -- Login --

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
}

// -- Topics --

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTopicRequest {
    pub title: String,
    pub description: Option<String>,
    pub created_by: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTopicRequest {
    pub title: String,
    pub description: Option<String>,
}

// -- Posts --

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub created_by: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub title: String,
    pub body: String,
}

// -- Comments --

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCommentRequest {
    pub body: String,
    pub created_by: i64,
}

/// Empty descriptions are stored as NULL.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title": "Q1"}"#).unwrap();
        assert_eq!(req.title, "Q1");
        assert_eq!(req.body, "");
        assert_eq!(req.created_by, 0);
    }

    #[test]
    fn null_description_is_none() {
        let req: CreateTopicRequest =
            serde_json::from_str(r#"{"title": "CS101", "description": null, "created_by": 1}"#)
                .unwrap();
        assert_eq!(req.description, None);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let res = serde_json::from_str::<CreateCommentRequest>(r#"{"body": "hi", "created_by": "1"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn empty_description_normalizes_to_none() {
        assert_eq!(normalize_description(Some(String::new())), None);
        assert_eq!(normalize_description(Some("x".into())), Some("x".into()));
        assert_eq!(normalize_description(None), None);
    }
}
