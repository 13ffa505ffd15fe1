//! SQLite-backed user store.
//!
//! One `users` table for accounts and a `prefs` key/value table holding the
//! durable current-session slot. Passwords are stored only as SHA-256
//! digests (lowercase hex).

use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Mutex;

use crate::auth::User;
use crate::traits::{StoreError, UserStore};

const CURRENT_USER_KEY: &str = "current_user_id";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS prefs (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

/// User store backed by a SQLite database file.
///
/// `rusqlite::Connection` is not `Sync`, so the connection sits behind a
/// mutex; every operation is a short point query.
pub struct SqliteUserStore {
    conn: Mutex<Connection>,
}

impl SqliteUserStore {
    /// Open (and if needed create) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(db_err)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database, for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA).map_err(db_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lowercase hex SHA-256 of the password.
    fn digest(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    fn user_by_email(conn: &Connection, email: &str) -> Result<Option<User>, StoreError> {
        conn.query_row(
            "SELECT id, name, email FROM users WHERE email = ?1 LIMIT 1",
            params![email],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(db_err)
    }

    fn user_by_id(conn: &Connection, id: i64) -> Result<Option<User>, StoreError> {
        conn.query_row(
            "SELECT id, name, email FROM users WHERE id = ?1 LIMIT 1",
            params![id],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(db_err)
    }

    fn set_current_user(conn: &Connection, id: i64) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![CURRENT_USER_KEY, id.to_string()],
        )
        .map_err(db_err)?;
        Ok(())
    }
}

impl UserStore for SqliteUserStore {
    fn register(&self, name: &str, email: &str, password: &str) -> Result<User, StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        if Self::user_by_email(&conn, email)?.is_some() {
            return Err(StoreError::EmailAlreadyUsed);
        }

        let result = conn.execute(
            "INSERT INTO users (name, email, password_hash) VALUES (?1, ?2, ?3)",
            params![name, email, Self::digest(password)],
        );
        match result {
            Ok(_) => {}
            // The UNIQUE constraint is the hard guarantee; the lookup above
            // only exists to give the common case a clean error.
            Err(e) if is_unique_violation(&e) => return Err(StoreError::EmailAlreadyUsed),
            Err(e) => return Err(db_err(e)),
        }

        let id = conn.last_insert_rowid();
        let user = Self::user_by_id(&conn, id)?.ok_or_else(|| {
            StoreError::Database("registered row disappeared".to_string())
        })?;
        Self::set_current_user(&conn, user.id)?;
        tracing::info!(user = %user.email, "registered account");
        Ok(user)
    }

    fn login(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        let user = conn
            .query_row(
                "SELECT id, name, email FROM users
                 WHERE email = ?1 AND password_hash = ?2 LIMIT 1",
                params![email, Self::digest(password)],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(db_err)?
            .ok_or(StoreError::InvalidCredentials)?;

        Self::set_current_user(&conn, user.id)?;
        tracing::info!(user = %user.email, "logged in");
        Ok(user)
    }

    fn current_user(&self) -> Result<Option<User>, StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM prefs WHERE key = ?1",
                params![CURRENT_USER_KEY],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_err)?;

        match value.and_then(|v| v.parse::<i64>().ok()) {
            Some(id) => Self::user_by_id(&conn, id),
            None => Ok(None),
        }
    }

    fn logout(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute(
            "DELETE FROM prefs WHERE key = ?1",
            params![CURRENT_USER_KEY],
        )
        .map_err(db_err)?;
        tracing::info!("logged out");
        Ok(())
    }
}

fn db_err(e: rusqlite::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(info, _)
            if info.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteUserStore {
        SqliteUserStore::open_in_memory().unwrap()
    }

    #[test]
    fn register_sets_session_and_returns_user() {
        let store = store();
        let user = store.register("Ash", "ash@pallet.town", "pikachu").unwrap();
        assert_eq!(user.name, "Ash");
        assert_eq!(user.email, "ash@pallet.town");
        assert_eq!(store.current_user().unwrap(), Some(user));
    }

    #[test]
    fn password_is_stored_as_digest_not_plaintext() {
        let store = store();
        store.register("Ash", "ash@pallet.town", "pikachu").unwrap();

        let conn = store.conn.lock().unwrap();
        let stored: String = conn
            .query_row(
                "SELECT password_hash FROM users WHERE email = 'ash@pallet.town'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_ne!(stored, "pikachu");
        assert_eq!(stored, SqliteUserStore::digest("pikachu"));
        assert_eq!(stored.len(), 64);
        assert!(stored.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let store = store();
        store.register("Ash", "ash@pallet.town", "pikachu").unwrap();
        let err = store
            .register("Gary", "ash@pallet.town", "eevee")
            .unwrap_err();
        assert_eq!(err, StoreError::EmailAlreadyUsed);
    }

    #[test]
    fn login_with_wrong_password_fails_without_session() {
        let store = store();
        store.register("Ash", "ash@pallet.town", "pikachu").unwrap();
        store.logout().unwrap();

        let err = store.login("ash@pallet.town", "raichu").unwrap_err();
        assert_eq!(err, StoreError::InvalidCredentials);
        assert_eq!(store.current_user().unwrap(), None);
    }

    #[test]
    fn login_with_unknown_email_fails() {
        let store = store();
        let err = store.login("nobody@nowhere", "x").unwrap_err();
        assert_eq!(err, StoreError::InvalidCredentials);
    }

    #[test]
    fn logout_clears_the_session_slot() {
        let store = store();
        store.register("Ash", "ash@pallet.town", "pikachu").unwrap();
        store.logout().unwrap();
        assert_eq!(store.current_user().unwrap(), None);
    }

    #[test]
    fn stale_session_id_resolves_to_no_user() {
        let store = store();
        {
            let conn = store.conn.lock().unwrap();
            SqliteUserStore::set_current_user(&conn, 999).unwrap();
        }
        assert_eq!(store.current_user().unwrap(), None);
    }
}
