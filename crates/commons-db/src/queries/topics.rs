use commons_types::models::Topic;
use commons_types::validation::{Title, UserId};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::models::topic_from_row;
use crate::{Database, DbError, Result};

impl Database {
    /// All topics, newest first.
    pub fn list_topics(&self) -> Result<Vec<Topic>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, description, created_by, created_at
                 FROM topics
                 ORDER BY created_at DESC, id DESC",
            )?;

            let topics = stmt
                .query_map([], topic_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(topics)
        })
    }

    pub fn get_topic(&self, id: i64) -> Result<Topic> {
        self.with_conn(|conn| query_topic(conn, id))
    }

    pub fn create_topic(
        &self,
        title: &Title,
        description: Option<&str>,
        created_by: UserId,
    ) -> Result<Topic> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO topics (title, description, created_by) VALUES (?1, ?2, ?3)",
                params![title.as_str(), description, created_by.get()],
            )?;

            let id = conn.last_insert_rowid();
            debug!(topic_id = id, "inserted topic");
            query_topic(conn, id)
        })
    }

    /// Replace title and description. Author and timestamp never change.
    pub fn update_topic(
        &self,
        id: i64,
        title: &Title,
        description: Option<&str>,
    ) -> Result<Topic> {
        self.with_conn_mut(|conn| {
            let updated = conn.execute(
                "UPDATE topics SET title = ?1, description = ?2 WHERE id = ?3",
                params![title.as_str(), description, id],
            )?;
            if updated == 0 {
                return Err(DbError::not_found("topic", id));
            }

            query_topic(conn, id)
        })
    }

    /// Delete a topic together with its posts and their comments.
    ///
    /// Children go first, all in one transaction: either every row is gone
    /// or none is.
    pub fn delete_topic(&self, id: i64) -> Result<()> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let comments = tx.execute(
                "DELETE FROM comments WHERE post_id IN (SELECT id FROM posts WHERE topic_id = ?1)",
                [id],
            )?;
            let posts = tx.execute("DELETE FROM posts WHERE topic_id = ?1", [id])?;
            let topics = tx.execute("DELETE FROM topics WHERE id = ?1", [id])?;

            if topics == 0 {
                return Err(DbError::not_found("topic", id));
            }

            tx.commit()?;
            debug!(topic_id = id, posts, comments, "deleted topic");
            Ok(())
        })
    }
}

fn query_topic(conn: &Connection, id: i64) -> Result<Topic> {
    conn.query_row(
        "SELECT id, title, description, created_by, created_at FROM topics WHERE id = ?1",
        [id],
        topic_from_row,
    )
    .optional()?
    .ok_or_else(|| DbError::not_found("topic", id))
}

pub(crate) fn topic_exists(conn: &Connection, id: i64) -> Result<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM topics WHERE id = ?1)",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists)
}
