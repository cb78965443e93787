use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::application::{AppError, LedgerService};
use crate::domain::format_amount;

use super::render::{render_categories, render_expenses, render_incomes, render_progress, OutputFormat};

const MENU: &str = "\
1. Add expense
2. Add income
3. Set savings goal
4. List expenses
5. List incomes
6. Savings progress
7. Spending by category
0. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    AddIncome,
    SetSavingsGoal,
    ListExpenses,
    ListIncomes,
    Progress,
    SpendingByCategory,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(MenuChoice::AddExpense),
            "2" => Some(MenuChoice::AddIncome),
            "3" => Some(MenuChoice::SetSavingsGoal),
            "4" => Some(MenuChoice::ListExpenses),
            "5" => Some(MenuChoice::ListIncomes),
            "6" => Some(MenuChoice::Progress),
            "7" => Some(MenuChoice::SpendingByCategory),
            "0" | "q" | "quit" | "exit" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Interactive menu session over any line-oriented input and any output.
pub struct Session<R, W> {
    service: LedgerService,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            service: LedgerService::new(),
            input,
            output,
            format,
        }
    }

    pub fn service(&self) -> &LedgerService {
        &self.service
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "Tally - personal finance ledger")?;
        writeln!(
            self.output,
            "Entries live in memory only and are discarded on exit."
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Validation problems are reported inline by each action. Anything else that
    /// goes wrong inside an action is logged and reported, and the menu is shown again.
    /// Only a failure to read input ends the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if let Err(err) = self.show_menu() {
                error!(error = %err, "failed to display menu");
            }

            let Some(line) = self.prompt("Select an option: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                self.report(&format!(
                    "Unknown option '{}'. Enter a number from the menu.",
                    line.trim()
                ));
                continue;
            };

            debug!(?choice, "menu selection");
            match self.dispatch(choice) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) => {
                    error!(error = %err, "unexpected error");
                    self.report(&format!("An unexpected error occurred: {:#}", err));
                }
            }
        }

        self.farewell();
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<LoopControl> {
        match choice {
            MenuChoice::AddExpense => {
                let Some(category) = self.prompt("Category: ")? else {
                    return Ok(LoopControl::Exit);
                };
                let Some(amount) = self.prompt("Amount: ")? else {
                    return Ok(LoopControl::Exit);
                };

                match self.service.add_expense(&category, &amount) {
                    Ok(expense) => writeln!(
                        self.output,
                        "Expense recorded: {} {}",
                        expense.category,
                        format_amount(expense.amount)
                    )?,
                    Err(err) => self.report_validation(err)?,
                }
            }

            MenuChoice::AddIncome => {
                let Some(amount) = self.prompt("Amount: ")? else {
                    return Ok(LoopControl::Exit);
                };

                match self.service.add_income(&amount) {
                    Ok(income) => writeln!(
                        self.output,
                        "Income recorded: {}",
                        format_amount(income.amount)
                    )?,
                    Err(err) => self.report_validation(err)?,
                }
            }

            MenuChoice::SetSavingsGoal => {
                let Some(amount) = self.prompt("Savings goal: ")? else {
                    return Ok(LoopControl::Exit);
                };

                match self.service.set_savings_goal(&amount) {
                    Ok(Some(goal)) => {
                        writeln!(self.output, "Savings goal set to {}", format_amount(goal))?
                    }
                    Ok(None) => writeln!(self.output, "Savings goal cleared.")?,
                    Err(err) => self.report_validation(err)?,
                }
            }

            MenuChoice::ListExpenses => {
                render_expenses(&mut self.output, self.service.list_expenses(), self.format)?;
            }

            MenuChoice::ListIncomes => {
                let incomes = self.service.list_incomes();
                render_incomes(&mut self.output, &incomes, self.format)?;
            }

            MenuChoice::Progress => {
                let report = self.service.compute_progress()?;
                render_progress(&mut self.output, &report, self.format)?;
            }

            MenuChoice::SpendingByCategory => {
                let report = self.service.category_report()?;
                render_categories(&mut self.output, &report, self.format)?;
            }

            MenuChoice::Exit => return Ok(LoopControl::Exit),
        }

        Ok(LoopControl::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU)?;
        Ok(())
    }

    /// Print a prompt and read one line. `None` means input has ended.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Report a validation failure to the user; any other error is passed up.
    fn report_validation(&mut self, err: AppError) -> Result<()> {
        if !err.is_validation() {
            return Err(err.into());
        }
        writeln!(self.output, "{}. Please enter a number such as 12.50.", err)?;
        Ok(())
    }

    fn report(&mut self, message: &str) {
        if let Err(err) = writeln!(self.output, "{}", message) {
            error!(error = %err, "failed to write to output");
        }
    }

    fn farewell(&mut self) {
        let summary = self.service.summary();
        self.report(&format!(
            "Recorded {} expense(s) and {} income(s) this session. Goodbye!",
            summary.expense_count, summary.income_count
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse(" 6 \n"), Some(MenuChoice::Progress));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("Q"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
