use commons_types::models::User;
use commons_types::validation::Username;
use tracing::debug;

use crate::models::user_from_row;
use crate::{Database, Result};

impl Database {
    /// Return the user with this name, registering it first if it is new.
    ///
    /// Insert-or-ignore followed by a read under the writer lock, so two
    /// logins racing on the same name still leave a single row.
    pub fn login_or_register(&self, username: &Username) -> Result<User> {
        self.with_conn_mut(|conn| {
            let inserted = conn.execute(
                "INSERT INTO users (username) VALUES (?1) ON CONFLICT(username) DO NOTHING",
                [username.as_str()],
            )?;
            if inserted > 0 {
                debug!(username = username.as_str(), "registered new user");
            }

            let user = conn.query_row(
                "SELECT id, username, created_at FROM users WHERE username = ?1",
                [username.as_str()],
                user_from_row,
            )?;
            Ok(user)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::fixtures::count;

    #[test]
    fn login_twice_returns_same_user() {
        let db = Database::open_in_memory().unwrap();
        let name = Username::new("alice").unwrap();

        let first = db.login_or_register(&name).unwrap();
        let second = db.login_or_register(&name).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.username, "alice");
        assert_eq!(count(&db, "users"), 1);
    }

    #[test]
    fn distinct_names_get_distinct_ids() {
        let db = Database::open_in_memory().unwrap();

        let alice = db.login_or_register(&Username::new("alice").unwrap()).unwrap();
        let bob = db.login_or_register(&Username::new("bob").unwrap()).unwrap();

        assert_ne!(alice.id, bob.id);
        assert_eq!(bob.username, "bob");
        assert_eq!(count(&db, "users"), 2);
    }
}
