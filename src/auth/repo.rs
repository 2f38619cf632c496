use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::sync::RwLock;
use tracing::info;

use crate::auth::repo_types::UserRecord;

/// Persistence boundary for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new record. Duplicate emails are accepted.
    async fn insert(&self, record: UserRecord) -> anyhow::Result<()>;

    /// First record stored under `email`, in insertion order.
    async fn find_one_by_email(&self, email: &str) -> anyhow::Result<Option<UserRecord>>;
}

/// PostgreSQL-backed store. Owns the connection pool for the lifetime of the process.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("connect to database")?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("run migrations")?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, record: UserRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(&record.email)
        .bind(&record.password_hash)
        .execute(&self.pool)
        .await
        .context("insert user")?;
        Ok(())
    }

    async fn find_one_by_email(&self, email: &str) -> anyhow::Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT email, password_hash
            FROM users
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("find user by email")?;
        Ok(user)
    }
}

/// In-process store, used by tests and local experiments.
#[derive(Default)]
pub struct MemoryUserStore {
    records: RwLock<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, record: UserRecord) -> anyhow::Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn find_one_by_email(&self, email: &str) -> anyhow::Result<Option<UserRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.email == email)
            .cloned())
    }
}
