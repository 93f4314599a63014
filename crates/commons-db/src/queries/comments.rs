use commons_types::models::Comment;
use commons_types::validation::{Body, UserId};
use rusqlite::params;
use tracing::debug;

use super::posts::post_exists;
use crate::models::comment_from_row;
use crate::{Database, DbError, Result};

impl Database {
    /// Comments on a post, oldest first. The post itself must exist.
    pub fn list_comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.with_conn(|conn| {
            if !post_exists(conn, post_id)? {
                return Err(DbError::not_found("post", post_id));
            }

            let mut stmt = conn.prepare(
                "SELECT id, post_id, body, created_by, created_at
                 FROM comments
                 WHERE post_id = ?1
                 ORDER BY created_at ASC, id ASC",
            )?;

            let comments = stmt
                .query_map([post_id], comment_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(comments)
        })
    }

    pub fn create_comment(&self, post_id: i64, body: &Body, created_by: UserId) -> Result<Comment> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            if !post_exists(&tx, post_id)? {
                return Err(DbError::not_found("post", post_id));
            }

            tx.execute(
                "INSERT INTO comments (post_id, body, created_by) VALUES (?1, ?2, ?3)",
                params![post_id, body.as_str(), created_by.get()],
            )?;

            let comment = tx.query_row(
                "SELECT id, post_id, body, created_by, created_at FROM comments WHERE id = ?1",
                [tx.last_insert_rowid()],
                comment_from_row,
            )?;
            tx.commit()?;

            debug!(comment_id = comment.id, post_id, "inserted comment");
            Ok(comment)
        })
    }
}
