//! In-memory file repository.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use dochub_core::error::AppError;
use dochub_core::result::AppResult;
use dochub_entity::file::model::File;

use crate::repositories::file::FileRepository;

/// In-memory file repository for single-node deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileRepository {
    files: Arc<DashMap<Uuid, File>>,
}

impl MemoryFileRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sort newest-updated first, the listing order required everywhere.
fn sort_by_updated_desc(files: &mut [File]) {
    files.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

#[async_trait]
impl FileRepository for MemoryFileRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>> {
        Ok(self.files.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_approved(&self) -> AppResult<Vec<File>> {
        let mut files: Vec<File> = self
            .files
            .iter()
            .filter(|entry| entry.is_approved())
            .map(|entry| entry.value().clone())
            .collect();
        sort_by_updated_desc(&mut files);
        Ok(files)
    }

    async fn find_by_author(&self, author_id: Uuid) -> AppResult<Vec<File>> {
        let mut files: Vec<File> = self
            .files
            .iter()
            .filter(|entry| entry.author_id == author_id)
            .map(|entry| entry.value().clone())
            .collect();
        sort_by_updated_desc(&mut files);
        Ok(files)
    }

    async fn create(&self, file: &File) -> AppResult<File> {
        self.files.insert(file.id, file.clone());
        Ok(file.clone())
    }

    async fn update(&self, file: &File) -> AppResult<File> {
        match self.files.get_mut(&file.id) {
            Some(mut entry) => {
                *entry = file.clone();
                Ok(file.clone())
            }
            None => Err(AppError::not_found(format!("File {} not found", file.id))),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.files.remove(&id).is_some())
    }
}
