//! PostgreSQL implementation of the click event repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for the append-only click event log.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert(&self, new_click: NewClick) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO link_clicks
                (link_code, ip, country, city, device, browser, os, referer, user_agent)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&new_click.link_code)
        .bind(&new_click.ip)
        .bind(&new_click.country)
        .bind(&new_click.city)
        .bind(&new_click.device)
        .bind(&new_click.browser)
        .bind(&new_click.os)
        .bind(&new_click.referer)
        .bind(&new_click.user_agent)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list_by_code(&self, code: &str) -> Result<Vec<Click>, AppError> {
        let clicks = sqlx::query_as::<_, Click>(
            r#"
            SELECT id, link_code, clicked_at, ip, country, city,
                   device, browser, os, referer, user_agent
            FROM link_clicks
            WHERE link_code = $1
            ORDER BY clicked_at DESC
            "#,
        )
        .bind(code)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clicks)
    }

    async fn count_distinct_ips(&self, code: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT ip) FROM link_clicks WHERE link_code = $1 AND ip IS NOT NULL",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn delete_by_code(&self, code: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM link_clicks WHERE link_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
