use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::{Amount, CategoryTotal, GoalProgress, LedgerError, SavingsProgress};

/// Flat view of savings progress, suitable for table, JSON and CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// `None` when no goal is set
    pub goal: Option<Amount>,
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub net: Amount,
    pub percent_of_goal: Option<Amount>,
}

impl ProgressReport {
    pub fn has_goal(&self) -> bool {
        self.goal.is_some()
    }
}

impl From<SavingsProgress> for ProgressReport {
    fn from(progress: SavingsProgress) -> Self {
        let (goal, percent_of_goal) = match progress.goal {
            GoalProgress::NotSet => (None, None),
            GoalProgress::Tracked {
                goal,
                percent_of_goal,
            } => (Some(goal), Some(percent_of_goal)),
        };

        Self {
            goal,
            total_income: progress.total_income,
            total_expenses: progress.total_expenses,
            net: progress.net,
            percent_of_goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub categories: Vec<CategorySummary>,
    pub total: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: Amount,
    pub count: usize,
    /// Share of all expenses, 0-100
    pub percentage: Amount,
}

impl CategoryReport {
    pub fn from_totals(totals: Vec<CategoryTotal>, total: Amount) -> Result<Self, LedgerError> {
        let categories = totals
            .into_iter()
            .map(|t| {
                Ok(CategorySummary {
                    percentage: share_of(t.total, total)?,
                    category: t.category,
                    total: t.total,
                    count: t.count,
                })
            })
            .collect::<Result<Vec<_>, LedgerError>>()?;

        Ok(Self { categories, total })
    }
}

/// Position of an income within the session, 1-based, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRow {
    pub number: usize,
    pub amount: Amount,
}

/// Entry counts for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub expense_count: usize,
    pub income_count: usize,
    pub goal_set: bool,
}

fn share_of(part: Amount, whole: Amount) -> Result<Amount, LedgerError> {
    if whole.is_zero() {
        return Ok(Decimal::ZERO);
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(LedgerError::Overflow("category share"))
}
