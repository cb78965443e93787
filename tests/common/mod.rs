// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use tally::application::LedgerService;
use tally::cli::{OutputFormat, Session};

/// Helper to build a service with the given incomes, expenses and goal
pub fn service_with(
    incomes: &[&str],
    expenses: &[(&str, &str)],
    goal: &str,
) -> Result<LedgerService> {
    let mut service = LedgerService::new();
    for income in incomes {
        service.add_income(income)?;
    }
    for (category, amount) in expenses {
        service.add_expense(category, amount)?;
    }
    service.set_savings_goal(goal)?;
    Ok(service)
}

/// Helper to drive an interactive session with scripted input.
/// Returns everything the session printed.
pub fn run_session(script: &str, format: OutputFormat) -> Result<String> {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut session = Session::new(input, Vec::new(), format);
    session.run()?;
    Ok(String::from_utf8(session.into_output())?)
}
