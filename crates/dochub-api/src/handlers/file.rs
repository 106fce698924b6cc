//! File endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use dochub_core::error::AppError;
use dochub_service::file::service::SaveFileRequest;

use crate::dto::request::{CreateFileRequest, ForceUpdateRequest, SaveFileRequest as SaveFileBody};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/files
///
/// Lists all approved files, most recently updated first.
pub async fn list_files(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let files = state.file_service.list_approved(user.context()).await?;

    Ok(Json(json!({
        "success": true,
        "data": files,
    })))
}

/// GET /api/files/mine
///
/// Lists the caller's own files regardless of status.
pub async fn list_my_files(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, AppError> {
    let files = state.file_service.list_mine(user.context()).await?;

    Ok(Json(json!({
        "success": true,
        "data": files,
    })))
}

/// GET /api/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let file = state.file_service.get_file(user.context(), id).await?;

    Ok(Json(json!({
        "success": true,
        "data": file,
    })))
}

/// GET /api/files/{id}/versions
///
/// Returns the file's full version history, oldest first.
pub async fn list_versions(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let versions = state.file_service.list_versions(user.context(), id).await?;

    Ok(Json(json!({
        "success": true,
        "data": versions,
    })))
}

/// POST /api/files
pub async fn create_file(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<CreateFileRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let file = state
        .file_service
        .create_file(user.context(), &body.name, &body.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": file,
        })),
    ))
}

/// PUT /api/files/{id}
///
/// Saves new content to a file. Only the file's author or an admin may
/// save; the previous content is captured in the version ledger.
pub async fn save_file(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<SaveFileBody>,
) -> Result<Json<Value>, AppError> {
    let req = SaveFileRequest {
        content: body.content,
        name: body.name,
    };
    let file = state.file_service.save_file(user.context(), id, req).await?;

    Ok(Json(json!({
        "success": true,
        "data": file,
    })))
}

/// PUT /api/files/{id}/force
///
/// Admin-only overwrite that skips the ownership check.
pub async fn force_update_file(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ForceUpdateRequest>,
) -> Result<Json<Value>, AppError> {
    let file = state
        .file_service
        .force_update(user.context(), id, &body.content)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": file,
    })))
}

/// DELETE /api/files/{id}
///
/// Deletes a file along with all of its edit and notification records.
pub async fn delete_file(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    state.file_service.delete_file(user.context(), id).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "deleted": true },
    })))
}
