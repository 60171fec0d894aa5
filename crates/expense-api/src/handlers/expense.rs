//! Expense handlers
//!
//! HTTP handlers for the expense CRUD endpoints. Repository outcomes are
//! translated here: `None`/`false` becomes 404, failures become 500.

use crate::dto::{ExpenseRequest, ExpenseResponse};
use crate::error::ApiError;
use crate::state::ApiState;
use actix_web::{web, HttpResponse};
use expense_core::AppError;
use tracing::{debug, info, instrument};

/// Resolve a raw `{id}` path segment
///
/// Anything that is not an optional sign followed by digits is a 400.
/// Numeric ids outside `1..=i32::MAX` can never have been assigned, so they
/// are answered as not-found without a database round trip.
fn expense_id(raw: &str) -> Result<i32, AppError> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(format!("Invalid expense ID: {}", raw)));
    }

    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(format!("Expense with ID {} not found", raw)))
}

/// Create an expense
///
/// POST /expenses
#[instrument(skip(state, req))]
pub async fn create_expense(
    state: web::Data<ApiState>,
    req: web::Json<ExpenseRequest>,
) -> Result<HttpResponse, ApiError> {
    let draft = req.into_inner().into_draft().map_err(|e| state.reject(e))?;

    debug!(vendor = %draft.vendor, "Creating expense");

    let created = state
        .expenses
        .create(&draft)
        .await
        .map_err(|e| state.reject(e))?;

    info!(id = created.id, "Expense created successfully");

    Ok(HttpResponse::Created().json(ExpenseResponse::from(created)))
}

/// List all expenses, newest first
///
/// GET /expenses
#[instrument(skip(state))]
pub async fn list_expenses(state: web::Data<ApiState>) -> Result<HttpResponse, ApiError> {
    debug!("Listing expenses");

    let expenses = state.expenses.list().await.map_err(|e| state.reject(e))?;

    let response_data: Vec<ExpenseResponse> = expenses.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(response_data))
}

/// Get a single expense by ID
///
/// GET /expenses/{id}
#[instrument(skip(state))]
pub async fn get_expense(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let expense_id = expense_id(&path).map_err(|e| state.reject(e))?;
    debug!(id = expense_id, "Getting expense");

    let expense = state
        .expenses
        .get(expense_id)
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| state.reject(AppError::expense_not_found(expense_id)))?;

    Ok(HttpResponse::Ok().json(ExpenseResponse::from(expense)))
}

/// Replace an expense
///
/// PUT /expenses/{id}
#[instrument(skip(state, req))]
pub async fn update_expense(
    state: web::Data<ApiState>,
    path: web::Path<String>,
    req: web::Json<ExpenseRequest>,
) -> Result<HttpResponse, ApiError> {
    let draft = req.into_inner().into_draft().map_err(|e| state.reject(e))?;
    let expense_id = expense_id(&path).map_err(|e| state.reject(e))?;

    debug!(id = expense_id, "Updating expense");

    let updated = state
        .expenses
        .update(expense_id, &draft)
        .await
        .map_err(|e| state.reject(e))?
        .ok_or_else(|| state.reject(AppError::expense_not_found(expense_id)))?;

    info!(id = expense_id, "Expense updated successfully");

    Ok(HttpResponse::Ok().json(ExpenseResponse::from(updated)))
}

/// Delete an expense
///
/// DELETE /expenses/{id}
#[instrument(skip(state))]
pub async fn delete_expense(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let expense_id = expense_id(&path).map_err(|e| state.reject(e))?;
    debug!(id = expense_id, "Deleting expense");

    let deleted = state
        .expenses
        .delete(expense_id)
        .await
        .map_err(|e| state.reject(e))?;

    if !deleted {
        return Err(state.reject(AppError::expense_not_found(expense_id)));
    }

    info!(id = expense_id, "Expense deleted successfully");

    Ok(HttpResponse::NoContent().finish())
}

/// Configure expense routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/expenses")
            .route("", web::get().to(list_expenses))
            .route("", web::post().to(create_expense))
            .route("/{id}", web::get().to(get_expense))
            .route("/{id}", web::put().to(update_expense))
            .route("/{id}", web::delete().to(delete_expense)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_id_range() {
        assert_eq!(expense_id("1").unwrap(), 1);
        assert_eq!(expense_id("+7").unwrap(), 7);
        assert_eq!(expense_id("2147483647").unwrap(), i32::MAX);
        assert!(matches!(expense_id("0"), Err(AppError::NotFound(_))));
        assert!(matches!(expense_id("-5"), Err(AppError::NotFound(_))));
        assert!(matches!(expense_id("2147483648"), Err(AppError::NotFound(_))));
        assert!(matches!(
            expense_id("99999999999999999999"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_expense_id_rejects_non_numeric() {
        for raw in ["abc", "", "-", "1.5", "12a", " 3", "--1"] {
            assert!(
                matches!(expense_id(raw), Err(AppError::Validation(_))),
                "{:?}",
                raw
            );
        }
    }
}
