//! Tally is an in-memory personal finance ledger: it records expenses and incomes,
//! holds a single savings goal and reports progress toward it.

pub mod application;
pub mod cli;
pub mod domain;

pub use domain::*;
