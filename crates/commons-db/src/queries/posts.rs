use commons_types::models::Post;
use commons_types::validation::{Body, Title, UserId};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use super::topics::topic_exists;
use crate::models::post_from_row;
use crate::{Database, DbError, Result};

impl Database {
    /// Posts under a topic, oldest first. The topic itself must exist.
    pub fn list_posts_by_topic(&self, topic_id: i64) -> Result<Vec<Post>> {
        self.with_conn(|conn| {
            if !topic_exists(conn, topic_id)? {
                return Err(DbError::not_found("topic", topic_id));
            }

            let mut stmt = conn.prepare(
                "SELECT id, topic_id, title, body, created_by, created_at
                 FROM posts
                 WHERE topic_id = ?1
                 ORDER BY created_at ASC, id ASC",
            )?;

            let posts = stmt
                .query_map([topic_id], post_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(posts)
        })
    }

    pub fn get_post(&self, id: i64) -> Result<Post> {
        self.with_conn(|conn| query_post(conn, id))
    }

    pub fn create_post(
        &self,
        topic_id: i64,
        title: &Title,
        body: &Body,
        created_by: UserId,
    ) -> Result<Post> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            if !topic_exists(&tx, topic_id)? {
                return Err(DbError::not_found("topic", topic_id));
            }

            tx.execute(
                "INSERT INTO posts (topic_id, title, body, created_by) VALUES (?1, ?2, ?3, ?4)",
                params![topic_id, title.as_str(), body.as_str(), created_by.get()],
            )?;

            let post = query_post(&tx, tx.last_insert_rowid())?;
            tx.commit()?;

            debug!(post_id = post.id, topic_id, "inserted post");
            Ok(post)
        })
    }

    /// Replace title and body. Topic, author and timestamp never change.
    pub fn update_post(&self, id: i64, title: &Title, body: &Body) -> Result<Post> {
        self.with_conn_mut(|conn| {
            let updated = conn.execute(
                "UPDATE posts SET title = ?1, body = ?2 WHERE id = ?3",
                params![title.as_str(), body.as_str(), id],
            )?;
            if updated == 0 {
                return Err(DbError::not_found("post", id));
            }

            query_post(conn, id)
        })
    }

    /// Delete a post and its comments in one transaction.
    pub fn delete_post(&self, id: i64) -> Result<()> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let comments = tx.execute("DELETE FROM comments WHERE post_id = ?1", [id])?;
            let posts = tx.execute("DELETE FROM posts WHERE id = ?1", [id])?;

            if posts == 0 {
                return Err(DbError::not_found("post", id));
            }

            tx.commit()?;
            debug!(post_id = id, comments, "deleted post");
            Ok(())
        })
    }
}

fn query_post(conn: &Connection, id: i64) -> Result<Post> {
    conn.query_row(
        "SELECT id, topic_id, title, body, created_by, created_at FROM posts WHERE id = ?1",
        [id],
        post_from_row,
    )
    .optional()?
    .ok_or_else(|| DbError::not_found("post", id))
}

pub(crate) fn post_exists(conn: &Connection, id: i64) -> Result<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?1)",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists)
}
