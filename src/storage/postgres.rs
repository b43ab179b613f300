//! PostgreSQL message store
//!
//! Pool construction, one-time schema initialization, and the
//! `MessageStore` operations as runtime-checked queries.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config;
use crate::storage::{MessageStore, StorageError, StoredMessage};

/// PostgreSQL-backed message store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

/// Connection options assembled from the environment configuration
pub fn connect_options() -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config::DB_HOST)
        .port(*config::DB_PORT)
        .username(&config::DB_USER)
        .password(&config::DB_PASSWORD)
        .database(&config::DB_NAME)
}

/// Create the configured database when it does not exist yet
///
/// Connects through the maintenance database. Every failure here is logged
/// as a warning and swallowed; real connectivity problems surface when the
/// actual pool connects.
pub async fn ensure_database_exists() {
    let admin_options = connect_options().database(config::database::ADMIN_DATABASE);
    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect_with(admin_options)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            log::warn!("Skipping database bootstrap, maintenance connection failed: {}", e);
            return;
        }
    };

    let exists = sqlx::query_scalar::<_, i32>(
        "SELECT 1 FROM pg_catalog.pg_database WHERE datname = $1",
    )
    .bind(config::DB_NAME.as_str())
    .fetch_optional(&pool)
    .await;

    match exists {
        Ok(Some(_)) => {}
        Ok(None) => {
            // CREATE DATABASE cannot be parameterized or run in a transaction
            let create = format!(r#"CREATE DATABASE "{}""#, config::DB_NAME.as_str());
            match sqlx::raw_sql(&create).execute(&pool).await {
                Ok(_) => log::info!("Created database '{}'", config::DB_NAME.as_str()),
                Err(e) => {
                    log::warn!("Failed to create database '{}': {}", config::DB_NAME.as_str(), e);
                }
            }
        }
        Err(e) => {
            log::warn!("Failed to check for database '{}': {}", config::DB_NAME.as_str(), e);
        }
    }

    pool.close().await;
}

impl PgStore {
    /// Connect a pool with the given options.
    pub async fn connect(options: PgConnectOptions) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(config::database::MAX_CONNECTIONS)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Create the messages table and its owner/recency index when absent.
    /// Runs once at startup, before the dispatcher accepts updates.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS messages (
                id BIGSERIAL PRIMARY KEY,
                owner_id BIGINT NOT NULL,
                text TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            );
            CREATE INDEX IF NOT EXISTS messages_owner_recency_idx
                ON messages (owner_id, created_at DESC, id DESC);",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl MessageStore for PgStore {
    async fn save_message(&self, owner_id: i64, text: &str) -> Result<i64, StorageError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO messages (owner_id, text) VALUES ($1, $2) RETURNING id",
        )
        .bind(owner_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn messages_for_owner(&self, owner_id: i64) -> Result<Vec<StoredMessage>, StorageError> {
        let messages = sqlx::query_as::<_, StoredMessage>(
            "SELECT id, text, created_at FROM messages
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    async fn delete_all_messages(&self, owner_id: i64) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM messages WHERE owner_id = $1")
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_message(&self, owner_id: i64, message_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1 AND owner_id = $2")
            .bind(message_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
