//! File repository trait and PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_entity::file::model::File;
use dochub_entity::file::status::FileStatus;
use dochub_entity::file::version::FileVersion;

/// Storage operations over file entities.
///
/// Implementations must persist the embedded `versions` ledger together
/// with the file in one atomic write, so a snapshot and the overwrite it
/// precedes land as a single read-modify-write.
#[async_trait]
pub trait FileRepository: Send + Sync + std::fmt::Debug {
    /// Find a file by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>>;

    /// List approved files, most recently updated first.
    async fn find_approved(&self) -> AppResult<Vec<File>>;

    /// List all files by one author regardless of status, most recently
    /// updated first.
    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<File>>;

    /// Persist a new file record.
    async fn create(&self, file: &File) -> AppResult<File>;

    /// Overwrite an existing file record. Fails with `NotFound` if the
    /// id does not exist.
    async fn update(&self, file: &File) -> AppResult<File>;

    /// Delete a file record. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// PostgreSQL-backed file repository.
///
/// The version ledger is stored as a JSONB column on the file row, so
/// every operation is a single-statement atomic write.
#[derive(Debug, Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for the `files` table; the ledger round-trips through JSONB.
#[derive(Debug, FromRow)]
struct FileRow {
    id: Uuid,
    name: String,
    content: String,
    author_id: Uuid,
    status: FileStatus,
    versions: Json<Vec<FileVersion>>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<FileRow> for File {
    fn from(row: FileRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            content: row.content,
            author_id: row.author_id,
            status: row.status,
            versions: row.versions.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>> {
        sqlx::query_as::<_, FileRow>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(File::from))
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn find_approved(&self) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, FileRow>(
            "SELECT * FROM files WHERE status = 'approved' ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(File::from).collect())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, FileRow>(
            "SELECT * FROM files WHERE author_id = $1 ORDER BY updated_at DESC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(File::from).collect())
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list files by author", e)
        })
    }

    async fn create(&self, file: &File) -> AppResult<File> {
        sqlx::query_as::<_, FileRow>(
            "INSERT INTO files (id, name, content, author_id, status, versions, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(file.id)
        .bind(&file.name)
        .bind(&file.content)
        .bind(file.author_id)
        .bind(file.status)
        .bind(Json(&file.versions))
        .bind(file.created_at)
        .bind(file.updated_at)
        .fetch_one(&self.pool)
        .await
        .map(File::from)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))
    }

    async fn update(&self, file: &File) -> AppResult<File> {
        sqlx::query_as::<_, FileRow>(
            "UPDATE files SET name = $2, content = $3, status = $4, versions = $5, \
             updated_at = $6 WHERE id = $1 RETURNING *",
        )
        .bind(file.id)
        .bind(&file.name)
        .bind(&file.content)
        .bind(file.status)
        .bind(Json(&file.versions))
        .bind(file.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update file", e))?
        .map(File::from)
        .ok_or_else(|| AppError::not_found(format!("File {} not found", file.id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }
}
