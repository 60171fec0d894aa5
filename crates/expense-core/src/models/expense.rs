//! Expense model
//!
//! `ExpenseDraft` is the caller-supplied shape; `Expense` is the persisted
//! record. The store owns `id`, `created_at` and `updated_at`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest magnitude storable in a `NUMERIC(12,2)` column: 9999999999.99
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Fractional digits kept for monetary amounts
pub const AMOUNT_SCALE: u32 = 2;

/// Maximum length of vendor and category
pub const MAX_TEXT_LEN: usize = 255;

/// Expense data before persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// Monetary amount, exact decimal
    pub amount: Decimal,

    /// Who was paid
    pub vendor: String,

    /// Free-form grouping label
    pub category: String,

    /// Optional note
    pub description: Option<String>,
}

impl ExpenseDraft {
    /// Trim text fields; a blank description becomes absent
    pub fn normalized(self) -> Self {
        Self {
            amount: to_money_scale(self.amount),
            vendor: self.vendor.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }

    /// Validate draft invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.vendor.trim().is_empty() {
            return Err("Vendor cannot be empty".to_string());
        }

        if self.category.trim().is_empty() {
            return Err("Category cannot be empty".to_string());
        }

        if self.vendor.chars().count() > MAX_TEXT_LEN {
            return Err(format!("Vendor cannot exceed {} characters", MAX_TEXT_LEN));
        }

        if self.category.chars().count() > MAX_TEXT_LEN {
            return Err(format!("Category cannot exceed {} characters", MAX_TEXT_LEN));
        }

        if has_nul(&self.vendor)
            || has_nul(&self.category)
            || self.description.as_deref().is_some_and(has_nul)
        {
            return Err("Text fields cannot contain NUL characters".to_string());
        }

        if self.amount.normalize().scale() > AMOUNT_SCALE {
            return Err(format!(
                "Amount cannot have more than {} decimal places",
                AMOUNT_SCALE
            ));
        }

        if self.amount.abs() > MAX_AMOUNT {
            return Err(format!("Amount must be within ±{}", MAX_AMOUNT));
        }

        Ok(())
    }
}

/// Postgres text columns cannot store 0x00
fn has_nul(text: &str) -> bool {
    text.contains('\0')
}

/// Render with exactly two fractional digits when that loses nothing
fn to_money_scale(amount: Decimal) -> Decimal {
    let mut value = amount.normalize();
    if value.scale() <= AMOUNT_SCALE {
        value.rescale(AMOUNT_SCALE);
    }
    value
}

/// Persisted expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned identifier
    pub id: i32,

    pub amount: Decimal,
    pub vendor: String,
    pub category: String,
    pub description: Option<String>,

    /// Set once at insertion
    pub created_at: DateTime<Utc>,

    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}
