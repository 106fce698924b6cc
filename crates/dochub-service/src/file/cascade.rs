//! Cascade deletion of records that depend on a file.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use dochub_core::error::AppError;
use dochub_database::repositories::edit::EditRepository;
use dochub_database::repositories::notification::NotificationRepository;

/// Removes every edit and notification referencing a file.
///
/// Edits and notifications hold weak (identifier-only) references to
/// their file, so nothing cleans them up implicitly. The file service
/// invokes this coordinator synchronously before removing the file
/// record itself; if cleanup fails, the whole delete is aborted so no
/// dangling references are left behind.
#[derive(Debug, Clone)]
pub struct CascadeCoordinator {
    /// Edit repository.
    edit_repo: Arc<dyn EditRepository>,
    /// Notification repository.
    notification_repo: Arc<dyn NotificationRepository>,
}

impl CascadeCoordinator {
    /// Creates a new cascade coordinator.
    pub fn new(
        edit_repo: Arc<dyn EditRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            edit_repo,
            notification_repo,
        }
    }

    /// Bulk-deletes all dependents of the given file.
    ///
    /// Fails closed: any repository error propagates and the caller must
    /// not proceed with removing the file record.
    pub async fn purge_dependents(&self, file_id: Uuid) -> Result<(), AppError> {
        let edits_removed = self.edit_repo.delete_by_file(file_id).await?;
        let notifications_removed = self.notification_repo.delete_by_file(file_id).await?;

        info!(
            file_id = %file_id,
            edits_removed,
            notifications_removed,
            "Purged dependent records"
        );

        Ok(())
    }
}
