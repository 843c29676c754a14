use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

use crate::error::Result;

/// Remembered last.fm usernames, keyed by chat nick.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn get_user(&self, nick: &str) -> Result<Option<String>>;
    async fn set_user(&self, nick: &str, user: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        // sqlite takes one writer at a time; the pool queues callers instead
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS lastfm (
                nick TEXT PRIMARY KEY NOT NULL,
                username TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// Every access runs in its own transaction; an early return drops `tx`,
// which rolls it back.
#[async_trait]
impl IdentityStore for SqliteStore {
    async fn get_user(&self, nick: &str) -> Result<Option<String>> {
        let mut tx = self.pool.begin().await?;

        let user: Option<String> =
            sqlx::query_scalar("SELECT username FROM lastfm WHERE nick = ?")
                .bind(nick)
                .fetch_optional(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(user.filter(|u| !u.is_empty()))
    }

    async fn set_user(&self, nick: &str, user: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO lastfm (nick, username)
            VALUES (?, ?)
            ON CONFLICT (nick)
            DO UPDATE SET username = excluded.username
            "#,
        )
        .bind(nick)
        .bind(user)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}
