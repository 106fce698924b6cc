//! In-memory notification repository.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use dochub_core::result::AppResult;
use dochub_entity::notification::Notification;

use crate::repositories::notification::NotificationRepository;

/// In-memory notification repository for single-node deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotificationRepository {
    notifications: Arc<DashMap<Uuid, Notification>>,
}

impl MemoryNotificationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for MemoryNotificationRepository {
    async fn create(&self, notification: &Notification) -> AppResult<Notification> {
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(notification.clone())
    }

    async fn find_by_file(&self, file_id: Uuid) -> AppResult<Vec<Notification>> {
        let mut notifications: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|entry| entry.file_id == file_id)
            .map(|entry| entry.value().clone())
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    async fn delete_by_file(&self, file_id: Uuid) -> AppResult<u64> {
        let ids: Vec<Uuid> = self
            .notifications
            .iter()
            .filter(|entry| entry.file_id == file_id)
            .map(|entry| entry.id)
            .collect();
        let removed = ids
            .iter()
            .filter(|id| self.notifications.remove(id).is_some())
            .count();
        Ok(removed as u64)
    }
}
