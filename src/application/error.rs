use thiserror::Error;

use crate::domain::{LedgerError, ParseAmountError};

/// Which user-supplied amount failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    ExpenseAmount,
    IncomeAmount,
    SavingsGoal,
}

impl AmountField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountField::ExpenseAmount => "expense amount",
            AmountField::IncomeAmount => "income amount",
            AmountField::SavingsGoal => "savings goal",
        }
    }
}

impl std::fmt::Display for AmountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid {field}: {source}")]
    InvalidAmount {
        field: AmountField,
        #[source]
        source: ParseAmountError,
    },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl AppError {
    /// True for malformed user input, false for anything unexpected.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidAmount { .. })
    }
}
