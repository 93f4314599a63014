//! Row mapping from SQLite into the shared wire models.
//!
//! `created_at` is stored as `YYYY-MM-DD HH:MM:SS[.SSS]` without a zone and
//! read back as UTC through rusqlite's chrono support.

use commons_types::models::{Comment, Post, Topic, User};
use rusqlite::Row;

pub(crate) fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub(crate) fn topic_from_row(row: &Row<'_>) -> rusqlite::Result<Topic> {
    Ok(Topic {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        created_by: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub(crate) fn post_from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        topic_id: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        created_by: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub(crate) fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        post_id: row.get(1)?,
        body: row.get(2)?,
        created_by: row.get(3)?,
        created_at: row.get(4)?,
    })
}
