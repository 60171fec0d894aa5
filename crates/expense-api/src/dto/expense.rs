//! Expense DTOs
//!
//! Request and response types for the expense endpoints.

use chrono::{DateTime, Utc};
use expense_core::models::{Expense, ExpenseDraft};
use expense_core::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of `POST /expenses` and `PUT /expenses/{id}`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ExpenseRequest {
    /// Monetary amount; JSON number or decimal string
    pub amount: Decimal,

    /// Who was paid
    #[validate(custom(function = "not_blank", message = "Vendor is required"))]
    pub vendor: String,

    /// Grouping label
    #[validate(custom(function = "not_blank", message = "Category is required"))]
    pub category: String,

    /// Optional note
    #[serde(default)]
    pub description: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl ExpenseRequest {
    /// Validate the request and convert it into a normalized draft
    pub fn into_draft(self) -> Result<ExpenseDraft, AppError> {
        self.validate()?;

        let draft = ExpenseDraft {
            amount: self.amount,
            vendor: self.vendor,
            category: self.category,
            description: self.description,
        }
        .normalized();

        draft.validate().map_err(AppError::Validation)?;

        Ok(draft)
    }
}

/// Expense as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    /// Server-assigned identifier
    pub id: i32,
    /// Exact decimal amount, serialized as a string
    pub amount: Decimal,
    /// Who was paid
    pub vendor: String,
    /// Grouping label
    pub category: String,
    /// Optional note
    pub description: Option<String>,
    /// Insertion time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            amount: expense.amount,
            vendor: expense.vendor,
            category: expense.category,
            description: expense.description,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> ExpenseRequest {
        ExpenseRequest {
            amount: dec!(12.50),
            vendor: "Acme".to_string(),
            category: "Office".to_string(),
            description: Some("Paper".to_string()),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let draft = request().into_draft().unwrap();
        assert_eq!(draft.amount, dec!(12.50));
        assert_eq!(draft.vendor, "Acme");
        assert_eq!(draft.description.as_deref(), Some("Paper"));
    }

    #[test]
    fn test_blank_vendor_rejected() {
        let mut req = request();
        req.vendor = "  ".to_string();
        assert!(matches!(req.into_draft(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_long_category_rejected() {
        let mut req = request();
        req.category = "x".repeat(256);
        assert!(matches!(req.into_draft(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_nul_in_description_rejected() {
        let mut req = request();
        req.description = Some("Pa\u{0}per".to_string());
        assert!(matches!(req.into_draft(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_fractional_cents_rejected() {
        let mut req = request();
        req.amount = dec!(0.001);
        assert!(matches!(req.into_draft(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_description_is_optional() {
        let req: ExpenseRequest =
            serde_json::from_str(r#"{"amount": 5, "vendor": "Cafe", "category": "Food"}"#)
                .unwrap();
        let draft = req.into_draft().unwrap();
        assert_eq!(draft.description, None);
        assert_eq!(draft.amount.to_string(), "5.00");
    }

    #[test]
    fn test_amount_accepts_string() {
        let req: ExpenseRequest = serde_json::from_str(
            r#"{"amount": "19.99", "vendor": "Cafe", "category": "Food"}"#,
        )
        .unwrap();
        assert_eq!(req.amount, dec!(19.99));
    }

    #[test]
    fn test_missing_amount_fails_to_parse() {
        let parsed: Result<ExpenseRequest, _> =
            serde_json::from_str(r#"{"vendor": "Cafe", "category": "Food"}"#);
        assert!(parsed.is_err());
    }
}
