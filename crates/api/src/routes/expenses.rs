//! Expense routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use splitbook_core::expense::{CustomAmounts, validate_new_expense};
use splitbook_core::{Category, Expense, ExpenseRecord, SplitMethod};
use splitbook_db::ExpenseRepository;
use splitbook_shared::AppError;
use splitbook_shared::types::{ExpenseId, GroupId, MemberId, PageRequest, PageResponse};
use tracing::info;

use super::groups::group_for_member;
use crate::{ApiError, AppState, middleware::AuthUser};

/// Creates the expense routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/groups/{group_id}/expenses",
            get(list_expenses).post(create_expense),
        )
        .route(
            "/groups/{group_id}/expenses/{expense_id}",
            delete(delete_expense),
        )
}

/// Request body for recording an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Short description.
    pub title: String,
    /// Total cost.
    pub amount: Decimal,
    /// Member who paid.
    pub paid_by: MemberId,
    /// Members sharing the cost. For a custom split this may be left empty
    /// and is then taken from `custom_amounts`.
    #[serde(default)]
    pub split_among: Vec<MemberId>,
    /// Split rule, `equal` when omitted.
    #[serde(default)]
    pub split_method: SplitMethod,
    /// Shares for a custom split.
    #[serde(default)]
    pub custom_amounts: Option<CustomAmounts>,
    /// Explicit category; the title decides when omitted.
    #[serde(default)]
    pub category: Option<Category>,
}

impl CreateExpenseRequest {
    fn into_record(self) -> (String, Option<Category>, ExpenseRecord) {
        let mut split_among = self.split_among;
        if split_among.is_empty()
            && self.split_method == SplitMethod::Custom
            && let Some(shares) = &self.custom_amounts
        {
            split_among = shares.keys().cloned().collect();
        }

        let record = ExpenseRecord {
            amount: self.amount,
            paid_by: self.paid_by,
            split_among,
            split_method: self.split_method,
            custom_amounts: self.custom_amounts,
        };
        (self.title, self.category, record)
    }
}

/// POST /groups/{group_id}/expenses - Record an expense.
async fn create_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<GroupId>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let group = group_for_member(&state, group_id, &auth)?;

    let (title, category, record) = payload.into_record();
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("Title is required".into()).into());
    }

    validate_new_expense(&record, &group.members)?;

    let expense = Expense {
        id: ExpenseId::new(),
        group_id,
        category: category.unwrap_or_else(|| state.categorizer.categorize(&title)),
        title,
        created_by: auth.user_id(),
        created_at: chrono::Utc::now(),
        record,
    };

    let expense = ExpenseRepository::new(state.store.clone()).create(expense)?;
    info!(
        group_id = %group_id,
        expense_id = %expense.id,
        category = %expense.category,
        "Expense recorded"
    );
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /groups/{group_id}/expenses - Newest first, paginated.
async fn list_expenses(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<GroupId>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PageResponse<Expense>>, ApiError> {
    group_for_member(&state, group_id, &auth)?;

    let expenses = ExpenseRepository::new(state.store.clone()).list_for_group(group_id);
    Ok(Json(page.paginate(expenses)))
}

/// DELETE /groups/{group_id}/expenses/{expense_id}
async fn delete_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((group_id, expense_id)): Path<(GroupId, ExpenseId)>,
) -> Result<StatusCode, ApiError> {
    group_for_member(&state, group_id, &auth)?;

    ExpenseRepository::new(state.store.clone()).delete(group_id, expense_id)?;
    info!(group_id = %group_id, expense_id = %expense_id, "Expense deleted");
    Ok(StatusCode::NO_CONTENT)
}
