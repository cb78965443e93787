use tracing::{debug, warn};

use crate::domain::{parse_amount, Amount, Expense, Income, Ledger};

use super::{AmountField, AppError, CategoryReport, IncomeRow, LedgerSummary, ProgressReport};

/// Application service providing the ledger operations over raw text input.
/// This is the primary interface for any client (the interactive menu, tests, etc.).
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ========================
    // Recording
    // ========================

    /// Record an expense. The category is accepted as-is; the amount must parse.
    pub fn add_expense(&mut self, category: &str, amount: &str) -> Result<&Expense, AppError> {
        let amount = parse_field(amount, AmountField::ExpenseAmount)?;
        let expense = self.ledger.add_expense(category, amount);
        debug!(category = %expense.category, amount = %expense.amount, "expense recorded");
        Ok(expense)
    }

    pub fn add_income(&mut self, amount: &str) -> Result<Income, AppError> {
        let amount = parse_field(amount, AmountField::IncomeAmount)?;
        let income = self.ledger.add_income(amount);
        debug!(amount = %income.amount, "income recorded");
        Ok(income)
    }

    /// Replace the savings goal. Returns the new goal, `None` if it was set to zero.
    pub fn set_savings_goal(&mut self, amount: &str) -> Result<Option<Amount>, AppError> {
        let amount = parse_field(amount, AmountField::SavingsGoal)?;
        self.ledger.set_savings_goal(amount);
        debug!(goal = %amount, "savings goal set");
        Ok(self.ledger.savings_goal())
    }

    // ========================
    // Queries
    // ========================

    pub fn list_expenses(&self) -> std::slice::Iter<'_, Expense> {
        self.ledger.expenses()
    }

    pub fn list_incomes(&self) -> Vec<IncomeRow> {
        self.ledger
            .incomes()
            .enumerate()
            .map(|(i, income)| IncomeRow {
                number: i + 1,
                amount: income.amount,
            })
            .collect()
    }

    pub fn compute_progress(&self) -> Result<ProgressReport, AppError> {
        let progress = self.ledger.compute_progress()?;
        Ok(progress.into())
    }

    pub fn category_report(&self) -> Result<CategoryReport, AppError> {
        let totals = self.ledger.category_totals()?;
        let total = self.ledger.total_expenses()?;
        Ok(CategoryReport::from_totals(totals, total)?)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            expense_count: self.ledger.expenses().len(),
            income_count: self.ledger.incomes().len(),
            goal_set: self.ledger.savings_goal().is_some(),
        }
    }
}

fn parse_field(input: &str, field: AmountField) -> Result<Amount, AppError> {
    parse_amount(input).map_err(|source| {
        warn!(%field, input, "rejected amount");
        AppError::InvalidAmount { field, source }
    })
}
