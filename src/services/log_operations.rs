//! Borrow/return log management

use chrono::{Duration, NaiveDate, Utc};

use crate::{
    error::AppResult,
    models::log_operation::{CreateLogOperation, LogOperation, UpdateLogOperation},
    repository::Repository,
};

/// Borrowed books are due back 15 days after the borrow date
const BORROW_PERIOD_DAYS: i64 = 15;

#[derive(Clone)]
pub struct LogOperationsService {
    repository: Repository,
}

impl LogOperationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record a borrow operation. The borrow date defaults to today and
    /// the return date is always derived from it, never caller-supplied.
    pub async fn create(&self, log: CreateLogOperation) -> AppResult<i32> {
        let borrow_date = log.borrow_date.unwrap_or_else(|| Utc::now().date_naive());
        let return_date = compute_return_date(borrow_date);

        self.repository
            .log_operations
            .create(&log, borrow_date, return_date)
            .await
    }

    /// List all log entries
    pub async fn list(&self) -> AppResult<Vec<LogOperation>> {
        self.repository.log_operations.list().await
    }

    /// Get a log entry by log_id
    pub async fn get_by_id(&self, log_id: i32) -> AppResult<LogOperation> {
        self.repository.log_operations.get_by_id(log_id).await
    }

    /// Update name and title of an existing log entry
    pub async fn update(&self, log_id: i32, log: UpdateLogOperation) -> AppResult<()> {
        self.repository.log_operations.get_by_id(log_id).await?;
        self.repository.log_operations.update(log_id, &log).await
    }

    /// Delete a log entry by log_id
    pub async fn delete(&self, log_id: i32) -> AppResult<()> {
        self.repository.log_operations.get_by_id(log_id).await?;
        self.repository.log_operations.delete(log_id).await
    }
}

fn compute_return_date(borrow_date: NaiveDate) -> NaiveDate {
    borrow_date + Duration::days(BORROW_PERIOD_DAYS)
}
