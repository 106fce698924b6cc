//! Notification repository trait and PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_entity::notification::Notification;

/// Storage operations over notification records.
#[async_trait]
pub trait NotificationRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new notification.
    async fn create(&self, notification: &Notification) -> AppResult<Notification>;

    /// List all notifications referencing a file, newest first.
    async fn find_by_file(&self, file_id: Uuid) -> AppResult<Vec<Notification>>;

    /// Remove every notification referencing the given file. Returns the
    /// number of records removed.
    async fn delete_by_file(&self, file_id: Uuid) -> AppResult<u64>;
}

/// PostgreSQL-backed notification repository.
#[derive(Debug, Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn create(&self, notification: &Notification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, user_id, file_id, message, is_read, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(notification.id)
        .bind(notification.user_id)
        .bind(notification.file_id)
        .bind(&notification.message)
        .bind(notification.is_read)
        .bind(notification.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    async fn find_by_file(&self, file_id: Uuid) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE file_id = $1 ORDER BY created_at DESC",
        )
        .bind(file_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })
    }

    async fn delete_by_file(&self, file_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE file_id = $1")
            .bind(file_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notifications", e)
            })?;
        Ok(result.rows_affected())
    }
}
