use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Amount;

pub type ExpenseId = Uuid;

/// A single recorded expense.
/// Expenses are immutable once created; there is no editing or deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Free-form label (e.g., "Groceries"). May be empty and need not be unique.
    pub category: String,
    pub amount: Amount,
    /// When the expense was recorded
    pub timestamp: DateTime<Utc>,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: Amount, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            timestamp,
        }
    }
}

/// A single recorded income. Incomes carry no category and no timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub amount: Amount,
}

impl Income {
    pub fn new(amount: Amount) -> Self {
        Self { amount }
    }
}
