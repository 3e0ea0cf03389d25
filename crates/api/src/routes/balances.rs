//! Balance, settlement and summary routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use splitbook_core::summary::DISPLAY_DP;
use splitbook_core::{BalanceCalculator, BalanceMap, GroupSummary, Settlement, compute_settlements};
use splitbook_db::ExpenseRepository;
use splitbook_shared::types::GroupId;
use tracing::debug;

use super::groups::group_for_member;
use crate::{ApiError, AppState, middleware::AuthUser};

/// Creates the balance routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/groups/{group_id}/balances", get(get_balances))
        .route("/groups/{group_id}/summary", get(get_summary))
}

/// Balances with the transfers that settle them.
#[derive(Debug, Serialize)]
pub struct BalancesResponse {
    /// Net balance per member, in member order.
    pub balances: BalanceMap,
    /// Recommended transfers.
    pub settlements: Vec<Settlement>,
}

/// GET /groups/{group_id}/balances
async fn get_balances(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<GroupId>,
) -> Result<Json<BalancesResponse>, ApiError> {
    let group = group_for_member(&state, group_id, &auth)?;
    let records = ExpenseRepository::new(state.store.clone()).records(group_id);

    let balances = BalanceCalculator::strict().compute(&records, &group.members)?;
    let settlements = compute_settlements(&balances);
    debug!(
        group_id = %group_id,
        expenses = records.len(),
        settlements = settlements.len(),
        "Balances computed"
    );

    Ok(Json(BalancesResponse {
        balances: balances.rounded(DISPLAY_DP),
        settlements: settlements.iter().map(|s| s.rounded(DISPLAY_DP)).collect(),
    }))
}

/// GET /groups/{group_id}/summary
async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<GroupId>,
) -> Result<Json<GroupSummary>, ApiError> {
    let group = group_for_member(&state, group_id, &auth)?;
    let expenses = ExpenseRepository::new(state.store.clone()).snapshot(group_id);

    let summary = GroupSummary::build(
        &BalanceCalculator::strict(),
        &expenses,
        &group.members,
        state.summary.recent_expenses_limit,
    )?;
    Ok(Json(summary))
}
