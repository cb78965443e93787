use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Amount, Expense, Income};

/// In-memory ledger of expenses, incomes and a single savings goal.
///
/// The ledger never performs I/O and never fails on insertion: amounts reaching it are
/// already valid decimals. Aggregations use checked arithmetic and report overflow
/// instead of panicking.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
    /// Zero means "no goal set"
    savings_goal: Amount,
}

/// Outcome of comparing net savings against the savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalProgress {
    /// The goal is the zero sentinel; no percentage is computed.
    NotSet,
    Tracked {
        goal: Amount,
        /// (net / goal) * 100, signed and unclamped
        percent_of_goal: Amount,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsProgress {
    pub total_income: Amount,
    pub total_expenses: Amount,
    /// Total income minus total expenses, may be negative
    pub net: Amount,
    pub goal: GoalProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Amount overflow while computing {0}")]
    Overflow(&'static str),
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense stamped with the current time.
    pub fn add_expense(&mut self, category: impl Into<String>, amount: Amount) -> &Expense {
        self.record_expense(category, amount, Utc::now())
    }

    fn record_expense(
        &mut self,
        category: impl Into<String>,
        amount: Amount,
        timestamp: DateTime<Utc>,
    ) -> &Expense {
        self.expenses.push(Expense::new(category, amount, timestamp));
        &self.expenses[self.expenses.len() - 1]
    }

    pub fn add_income(&mut self, amount: Amount) -> Income {
        let income = Income::new(amount);
        self.incomes.push(income);
        income
    }

    /// Replace the savings goal. Setting zero clears it.
    pub fn set_savings_goal(&mut self, amount: Amount) {
        self.savings_goal = amount;
    }

    /// The current goal, or `None` while the zero sentinel is in place.
    pub fn savings_goal(&self) -> Option<Amount> {
        if self.savings_goal.is_zero() {
            None
        } else {
            Some(self.savings_goal)
        }
    }

    /// Expenses in insertion order. The iterator is cloneable and knows its length.
    pub fn expenses(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// Incomes in insertion order.
    pub fn incomes(&self) -> std::slice::Iter<'_, Income> {
        self.incomes.iter()
    }

    pub fn total_income(&self) -> Result<Amount, LedgerError> {
        sum_amounts(self.incomes.iter().map(|i| i.amount))
            .ok_or(LedgerError::Overflow("total income"))
    }

    pub fn total_expenses(&self) -> Result<Amount, LedgerError> {
        sum_amounts(self.expenses.iter().map(|e| e.amount))
            .ok_or(LedgerError::Overflow("total expenses"))
    }

    /// Compute totals, net savings and progress toward the goal.
    pub fn compute_progress(&self) -> Result<SavingsProgress, LedgerError> {
        let total_income = self.total_income()?;
        let total_expenses = self.total_expenses()?;
        let net = total_income
            .checked_sub(total_expenses)
            .ok_or(LedgerError::Overflow("net savings"))?;

        let goal = match self.savings_goal() {
            None => GoalProgress::NotSet,
            Some(goal) => GoalProgress::Tracked {
                goal,
                percent_of_goal: percent_of_goal(net, goal)
                    .ok_or(LedgerError::Overflow("percent of goal"))?,
            },
        };

        Ok(SavingsProgress {
            total_income,
            total_expenses,
            net,
            goal,
        })
    }

    /// Group expenses by exact category text.
    /// Sorted by total descending, ties broken by category name.
    pub fn category_totals(&self) -> Result<Vec<CategoryTotal>, LedgerError> {
        let mut by_category: HashMap<&str, CategoryTotal> = HashMap::new();

        for expense in &self.expenses {
            let entry = by_category
                .entry(expense.category.as_str())
                .or_insert_with(|| CategoryTotal {
                    category: expense.category.clone(),
                    total: Decimal::ZERO,
                    count: 0,
                });
            entry.total = entry
                .total
                .checked_add(expense.amount)
                .ok_or(LedgerError::Overflow("category totals"))?;
            entry.count += 1;
        }

        let mut totals: Vec<CategoryTotal> = by_category.into_values().collect();
        totals.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });
        Ok(totals)
    }
}

/// Sum amounts, returning `None` on overflow. An empty sequence sums to zero.
pub fn sum_amounts(amounts: impl IntoIterator<Item = Amount>) -> Option<Amount> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

/// (net / goal) * 100. The goal must not be zero; `None` on overflow or a zero goal.
pub fn percent_of_goal(net: Amount, goal: Amount) -> Option<Amount> {
    if goal.is_zero() {
        return None;
    }
    net.checked_div(goal)?.checked_mul(dec!(100))
}
