//! Group management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use splitbook_db::{Group, GroupRepository};
use splitbook_shared::AppError;
use splitbook_shared::types::{GroupId, MemberId};
use tracing::info;

use crate::{ApiError, AppState, middleware::AuthUser};

/// Creates the group routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/{group_id}", get(get_group))
        .route("/groups/{group_id}/members", post(add_member))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a group.
#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    /// Group name.
    pub name: String,
    /// Extra members besides the caller.
    #[serde(default)]
    pub members: Vec<MemberId>,
}

/// Request body for adding a member.
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    /// Member identifier to append.
    pub member: MemberId,
}

/// List of groups.
#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    /// Groups the caller belongs to, oldest first.
    pub groups: Vec<Group>,
}

// ============================================================================
// Helpers
// ============================================================================

/// Loads a group the caller belongs to.
///
/// Unknown groups are 404, groups without the caller 403.
pub(crate) fn group_for_member(
    state: &AppState,
    group_id: GroupId,
    auth: &AuthUser,
) -> Result<Group, ApiError> {
    let group = GroupRepository::new(state.store.clone())
        .find_by_id(group_id)
        .ok_or_else(|| AppError::NotFound(format!("Group not found: {group_id}")))?;

    if !group.has_member(auth.member_id().as_str()) {
        return Err(AppError::Forbidden("You are not a member of this group".into()).into());
    }
    Ok(group)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /groups - Create a group with the caller as first member.
async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Group name is required".into()).into());
    }

    let group =
        GroupRepository::new(state.store.clone()).create(&payload.name, auth.user_id(), payload.members);

    info!(group_id = %group.id, user_id = %auth.user_id(), "Group created");
    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /groups - Groups the caller belongs to.
async fn list_groups(State(state): State<AppState>, auth: AuthUser) -> Json<GroupListResponse> {
    let groups = GroupRepository::new(state.store.clone()).list_for_member(auth.member_id().as_str());
    Json(GroupListResponse { groups })
}

/// GET /groups/{group_id} - Group detail.
async fn get_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<GroupId>,
) -> Result<Json<Group>, ApiError> {
    group_for_member(&state, group_id, &auth).map(Json)
}

/// POST /groups/{group_id}/members - Append a member.
async fn add_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<GroupId>,
    Json(payload): Json<AddMemberRequest>,
) -> Result<Json<Group>, ApiError> {
    group_for_member(&state, group_id, &auth)?;

    if payload.member.is_blank() {
        return Err(AppError::Validation("Member identifier is required".into()).into());
    }

    let group = GroupRepository::new(state.store.clone()).add_member(group_id, payload.member)?;
    info!(group_id = %group_id, members = group.members.len(), "Member added");
    Ok(Json(group))
}
