//! Core file CRUD with policy enforcement and version ledger upkeep.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use dochub_auth::rbac::enforcer::PolicyEnforcer;
use dochub_auth::rbac::policies::FileAction;
use dochub_core::error::AppError;
use dochub_database::repositories::edit::EditRepository;
use dochub_database::repositories::file::FileRepository;
use dochub_database::repositories::notification::NotificationRepository;
use dochub_database::repositories::user::UserRepository;
use dochub_entity::edit::Edit;
use dochub_entity::file::model::{File, FileWithAuthor};
use dochub_entity::file::version::FileVersion;
use dochub_entity::notification::Notification;

use crate::context::RequestContext;
use crate::file::cascade::CascadeCoordinator;

/// Display name used when an author's user record no longer exists.
const UNKNOWN_AUTHOR: &str = "unknown";

/// Handles the file lifecycle with role and ownership checks.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File repository.
    file_repo: Arc<dyn FileRepository>,
    /// User repository (for author resolution).
    user_repo: Arc<dyn UserRepository>,
    /// Edit repository (save audit records).
    edit_repo: Arc<dyn EditRepository>,
    /// Notification repository.
    notification_repo: Arc<dyn NotificationRepository>,
    /// Access policy enforcer.
    enforcer: Arc<PolicyEnforcer>,
    /// Dependent-record cleanup coordinator.
    cascade: CascadeCoordinator,
}

/// Data for saving new content to a file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SaveFileRequest {
    /// The new content body.
    pub content: String,
    /// New display name. `None` or an empty string leaves the name
    /// unchanged.
    pub name: Option<String>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        file_repo: Arc<dyn FileRepository>,
        user_repo: Arc<dyn UserRepository>,
        edit_repo: Arc<dyn EditRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        enforcer: Arc<PolicyEnforcer>,
    ) -> Self {
        let cascade = CascadeCoordinator::new(
            Arc::clone(&edit_repo),
            Arc::clone(&notification_repo),
        );
        Self {
            file_repo,
            user_repo,
            edit_repo,
            notification_repo,
            enforcer,
            cascade,
        }
    }

    /// Lists approved files, most recently updated first, with author
    /// identities resolved.
    pub async fn list_approved(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<FileWithAuthor>, AppError> {
        self.enforcer.require_action(&ctx.role, FileAction::Read)?;

        let files = self.file_repo.find_approved().await?;
        self.resolve_authors(files).await
    }

    /// Lists the caller's own files regardless of status, most recently
    /// updated first.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<FileWithAuthor>, AppError> {
        self.enforcer
            .require_action(&ctx.role, FileAction::ListMine)?;

        let files = self.file_repo.find_by_author(ctx.user_id).await?;
        self.resolve_authors(files).await
    }

    /// Gets a single file with its author resolved.
    pub async fn get_file(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
    ) -> Result<FileWithAuthor, AppError> {
        self.enforcer.require_action(&ctx.role, FileAction::Read)?;

        let file = self.load_file(file_id).await?;
        Ok(self.resolve_author(file).await)
    }

    /// Returns a file's full version history, oldest first.
    pub async fn list_versions(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
    ) -> Result<Vec<FileVersion>, AppError> {
        self.enforcer.require_action(&ctx.role, FileAction::Read)?;

        let file = self.load_file(file_id).await?;
        Ok(file.versions)
    }

    /// Creates a new approved file authored by the caller.
    pub async fn create_file(
        &self,
        ctx: &RequestContext,
        name: &str,
        content: &str,
    ) -> Result<FileWithAuthor, AppError> {
        self.enforcer
            .require_action(&ctx.role, FileAction::Create)?;

        if name.trim().is_empty() {
            return Err(AppError::validation("File name is required"));
        }
        if content.is_empty() {
            return Err(AppError::validation("File content is required"));
        }

        let file = File::new(name, content, ctx.user_id);
        let file = self.file_repo.create(&file).await?;

        info!(user_id = %ctx.user_id, file_id = %file.id, "File created");

        Ok(FileWithAuthor {
            file,
            author_name: ctx.username.clone(),
        })
    }

    /// Saves new content to a file owned by the caller (admins bypass
    /// the ownership check). Captures a pre-image snapshot before the
    /// overwrite and optionally renames the file.
    pub async fn save_file(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
        req: SaveFileRequest,
    ) -> Result<FileWithAuthor, AppError> {
        self.enforcer.require_action(&ctx.role, FileAction::Save)?;

        let mut file = self.load_file(file_id).await?;
        self.enforcer
            .require_owner_or_admin(&ctx.role, ctx.user_id, file.author_id)?;

        // Snapshot strictly before the new content is written in.
        file.snapshot(ctx.user_id);
        file.content = req.content.clone();
        if let Some(name) = req.name {
            if !name.trim().is_empty() {
                file.name = name;
            }
        }
        file.updated_at = Utc::now();

        let file = self.file_repo.update(&file).await?;

        info!(user_id = %ctx.user_id, file_id = %file_id, "File saved");

        self.record_save(ctx, &file, &req.content).await;

        Ok(self.resolve_author(file).await)
    }

    /// Overwrites a file's content without an ownership check. Admin
    /// only; the ledger is maintained exactly as for a regular save.
    pub async fn force_update(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
        content: &str,
    ) -> Result<FileWithAuthor, AppError> {
        self.enforcer
            .require_action(&ctx.role, FileAction::ForceUpdate)?;

        let mut file = self.load_file(file_id).await?;

        file.snapshot(ctx.user_id);
        file.content = content.to_string();
        file.updated_at = Utc::now();

        let file = self.file_repo.update(&file).await?;

        info!(user_id = %ctx.user_id, file_id = %file_id, "File force-updated");

        self.record_save(ctx, &file, content).await;

        Ok(self.resolve_author(file).await)
    }

    /// Deletes a file and every dependent record referencing it.
    ///
    /// Any editor or admin may delete any file, owned or not; this is a
    /// deliberate moderation policy. Dependent cleanup runs strictly
    /// before the file record is removed and aborts the delete on
    /// failure.
    pub async fn delete_file(&self, ctx: &RequestContext, file_id: Uuid) -> Result<(), AppError> {
        self.enforcer
            .require_action(&ctx.role, FileAction::Delete)?;

        // Existence check up front so a missing id is NotFound, not a
        // silent no-op.
        let _file = self.load_file(file_id).await?;

        self.cascade.purge_dependents(file_id).await?;

        if !self.file_repo.delete(file_id).await? {
            return Err(AppError::not_found(format!("File {file_id} not found")));
        }

        info!(user_id = %ctx.user_id, file_id = %file_id, "File deleted");

        Ok(())
    }

    /// Loads a file or fails with `NotFound`.
    async fn load_file(&self, file_id: Uuid) -> Result<File, AppError> {
        self.file_repo
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Records the save as an edit and notifies the author when someone
    /// else wrote to their file. Both records are advisory: a failure is
    /// logged, never bubbled into the already-persisted save.
    async fn record_save(&self, ctx: &RequestContext, file: &File, content: &str) {
        let edit = Edit::new(file.id, ctx.user_id, content);
        if let Err(e) = self.edit_repo.create(&edit).await {
            warn!(file_id = %file.id, error = %e, "Failed to record edit");
        }

        if file.author_id != ctx.user_id {
            let notification = Notification::new(
                file.author_id,
                file.id,
                format!("{} updated '{}'", ctx.username, file.name),
            );
            if let Err(e) = self.notification_repo.create(&notification).await {
                warn!(file_id = %file.id, error = %e, "Failed to create notification");
            }
        }
    }

    /// Resolve the author display name for one file.
    async fn resolve_author(&self, file: File) -> FileWithAuthor {
        let author_name = match self.user_repo.find_by_id(file.author_id).await {
            Ok(Some(user)) => user.username,
            _ => UNKNOWN_AUTHOR.to_string(),
        };
        FileWithAuthor { file, author_name }
    }

    /// Resolve author display names for a listing in one batched lookup.
    async fn resolve_authors(&self, files: Vec<File>) -> Result<Vec<FileWithAuthor>, AppError> {
        let mut author_ids: Vec<Uuid> = files.iter().map(|f| f.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let names: HashMap<Uuid, String> = self
            .user_repo
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        Ok(files
            .into_iter()
            .map(|file| {
                let author_name = names
                    .get(&file.author_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
                FileWithAuthor { file, author_name }
            })
            .collect())
    }
}
