//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Link, NewLink, Visit};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Connection pool tuning for [`PgLinkRepository::open`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// PostgreSQL repository for link storage and visit logging.
///
/// Each link is one row; visit timestamps live in a `BIGINT[]` column that is
/// only ever extended with `array_append`, so appends are a single UPDATE
/// serialized by the row lock.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: String,
    target: String,
    created_at: i64,
    visits: Vec<i64>,
}

impl TryFrom<LinkRow> for Link {
    type Error = AppError;

    fn try_from(row: LinkRow) -> Result<Self, Self::Error> {
        let created_at = Visit::from_millis(row.created_at)
            .map(|v| v.timestamp)
            .ok_or_else(|| AppError::store(format!("corrupt created_at for link '{}'", row.id)))?;

        let visits = row
            .visits
            .into_iter()
            .map(|millis| {
                Visit::from_millis(millis).ok_or_else(|| {
                    AppError::store(format!("corrupt visit timestamp for link '{}'", row.id))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Link::new(row.id, row.target, created_at, visits))
    }
}

impl PgLinkRepository {
    /// Creates a new repository over an existing connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects to PostgreSQL and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the connection or a migration fails.
    pub async fn open(database_url: &str, settings: &PoolSettings) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .max_lifetime(settings.max_lifetime)
            .connect(database_url)
            .await?;
        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::store(format!("migration failed: {}", e)))?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let created_at = Visit::now().timestamp_millis();

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (id, target, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO NOTHING
            RETURNING id, target, created_at, visits
            "#,
        )
        .bind(&new_link.id)
        .bind(&new_link.target)
        .bind(created_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => row.try_into(),
            None => Err(AppError::Collision { id: new_link.id }),
        }
    }

    async fn get(&self, id: &str) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, target, created_at, visits
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::not_found("Short URL not found"))?
            .try_into()
    }

    async fn append_visit(&self, id: &str, visit: Visit) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET visits = array_append(visits, $2)
            WHERE id = $1
            RETURNING id, target, created_at, visits
            "#,
        )
        .bind(id)
        .bind(visit.timestamp_millis())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::not_found("Short URL not found"))?
            .try_into()
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
