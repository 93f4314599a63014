use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Top-level discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

/// A message within a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub topic_id: i64,
    pub title: String,
    pub body: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

/// A reply attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub body: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn topic_without_description_omits_field() {
        let topic = Topic {
            id: 1,
            title: "CS101".into(),
            description: None,
            created_by: 1,
            created_at: Utc.with_ymd_and_hms(2024, 9, 1, 8, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&topic).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["created_at"], "2024-09-01T08:30:00Z");
    }

    #[test]
    fn topic_with_description_keeps_field() {
        let topic = Topic {
            id: 2,
            title: "MA1521".into(),
            description: Some("Calculus".into()),
            created_by: 3,
            created_at: Utc.with_ymd_and_hms(2024, 9, 1, 8, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&topic).unwrap();
        assert_eq!(json["description"], "Calculus");
        assert_eq!(json["created_by"], 3);
    }
}
