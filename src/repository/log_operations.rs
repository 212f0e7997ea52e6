//! Log operations repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::log_operation::{CreateLogOperation, LogOperation, UpdateLogOperation},
};

#[derive(Clone)]
pub struct LogOperationsRepository {
    pool: Pool<Postgres>,
}

impl LogOperationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a log entry by log_id
    pub async fn get_by_id(&self, log_id: i32) -> AppResult<LogOperation> {
        sqlx::query_as::<_, LogOperation>(
            "SELECT log_id, id, name, title, borrow_date, return_date FROM log_operations WHERE log_id = $1",
        )
        .bind(log_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Log operation not found".to_string()))
    }

    /// List all log entries
    pub async fn list(&self) -> AppResult<Vec<LogOperation>> {
        let logs = sqlx::query_as::<_, LogOperation>(
            "SELECT log_id, id, name, title, borrow_date, return_date FROM log_operations ORDER BY log_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// Create a new log entry with the dates already resolved by the
    /// service layer, returning the generated log_id.
    pub async fn create(
        &self,
        log: &CreateLogOperation,
        borrow_date: NaiveDate,
        return_date: NaiveDate,
    ) -> AppResult<i32> {
        let log_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO log_operations (id, name, title, borrow_date, return_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING log_id
            "#,
        )
        .bind(log.id)
        .bind(&log.name)
        .bind(&log.title)
        .bind(borrow_date)
        .bind(return_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(log_id)
    }

    /// Overwrite name and title of an existing log entry
    pub async fn update(&self, log_id: i32, log: &UpdateLogOperation) -> AppResult<()> {
        sqlx::query("UPDATE log_operations SET name = $1, title = $2 WHERE log_id = $3")
            .bind(&log.name)
            .bind(&log.title)
            .bind(log_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a log entry by log_id
    pub async fn delete(&self, log_id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM log_operations WHERE log_id = $1")
            .bind(log_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
