//! Edit repository trait and PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_entity::edit::Edit;

/// Storage operations over edit records.
#[async_trait]
pub trait EditRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new edit record.
    async fn create(&self, edit: &Edit) -> AppResult<Edit>;

    /// List all edits applied to a file, newest first.
    async fn find_by_file(&self, file_id: Uuid) -> AppResult<Vec<Edit>>;

    /// Remove every edit referencing the given file. Returns the number
    /// of records removed.
    async fn delete_by_file(&self, file_id: Uuid) -> AppResult<u64>;
}

/// PostgreSQL-backed edit repository.
#[derive(Debug, Clone)]
pub struct PgEditRepository {
    pool: PgPool,
}

impl PgEditRepository {
    /// Create a new edit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EditRepository for PgEditRepository {
    async fn create(&self, edit: &Edit) -> AppResult<Edit> {
        sqlx::query_as::<_, Edit>(
            "INSERT INTO edits (id, file_id, edited_by, content, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(edit.id)
        .bind(edit.file_id)
        .bind(edit.edited_by)
        .bind(&edit.content)
        .bind(edit.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create edit", e))
    }

    async fn find_by_file(&self, file_id: Uuid) -> AppResult<Vec<Edit>> {
        sqlx::query_as::<_, Edit>(
            "SELECT * FROM edits WHERE file_id = $1 ORDER BY created_at DESC",
        )
        .bind(file_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list edits", e))
    }

    async fn delete_by_file(&self, file_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM edits WHERE file_id = $1")
            .bind(file_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete edits", e))?;
        Ok(result.rows_affected())
    }
}
