use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::application::{CategoryReport, IncomeRow, ProgressReport};
use crate::domain::{format_amount, format_percentage, Expense};

/// How listings and reports are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable columns
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

pub fn render_expenses<'a, W: Write>(
    out: &mut W,
    expenses: impl ExactSizeIterator<Item = &'a Expense>,
    format: OutputFormat,
) -> Result<()> {
    if expenses.len() == 0 {
        writeln!(out, "No expenses recorded.")?;
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let expenses: Vec<&Expense> = expenses.collect();
            write_json(out, &expenses)?;
        }
        OutputFormat::Csv => write_csv(out, expenses)?,
        OutputFormat::Table => {
            writeln!(out, "{:<20} {:>12}  {:<19}", "CATEGORY", "AMOUNT", "RECORDED")?;
            writeln!(out, "{}", "-".repeat(53))?;
            for expense in expenses {
                writeln!(
                    out,
                    "{:<20} {:>12}  {}",
                    display_category(&expense.category),
                    format_amount(expense.amount),
                    expense.timestamp.format("%Y-%m-%d %H:%M:%S")
                )?;
            }
        }
    }

    Ok(())
}

pub fn render_incomes<W: Write>(out: &mut W, incomes: &[IncomeRow], format: OutputFormat) -> Result<()> {
    if incomes.is_empty() {
        writeln!(out, "No incomes recorded.")?;
        return Ok(());
    }

    match format {
        OutputFormat::Json => write_json(out, &incomes)?,
        OutputFormat::Csv => write_csv(out, incomes)?,
        OutputFormat::Table => {
            writeln!(out, "{:>4} {:>12}", "#", "AMOUNT")?;
            writeln!(out, "{}", "-".repeat(17))?;
            for row in incomes {
                writeln!(out, "{:>4} {:>12}", row.number, format_amount(row.amount))?;
            }
        }
    }

    Ok(())
}

pub fn render_progress<W: Write>(
    out: &mut W,
    report: &ProgressReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report)?,
        OutputFormat::Csv => write_csv(out, std::iter::once(report))?,
        OutputFormat::Table => match (report.goal, report.percent_of_goal) {
            (Some(goal), Some(percent)) => {
                writeln!(out, "Savings Goal:    {:>15}", format_amount(goal))?;
                writeln!(out, "Total Income:    {:>15}", format_amount(report.total_income))?;
                writeln!(out, "Total Expenses:  {:>15}", format_amount(report.total_expenses))?;
                writeln!(out, "{}", "-".repeat(32))?;
                writeln!(out, "Net Savings:     {:>15}", format_amount(report.net))?;
                writeln!(out, "Progress:        {:>14}%", format_amount(percent))?;
            }
            _ => {
                writeln!(out, "No savings goal set. Choose option 3 to set one.")?;
            }
        },
    }

    Ok(())
}

pub fn render_categories<W: Write>(
    out: &mut W,
    report: &CategoryReport,
    format: OutputFormat,
) -> Result<()> {
    if report.categories.is_empty() {
        writeln!(out, "No expenses recorded.")?;
        return Ok(());
    }

    match format {
        OutputFormat::Json => write_json(out, report)?,
        OutputFormat::Csv => write_csv(out, &report.categories)?,
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<20} {:>12} {:>6} {:>8}",
                "CATEGORY", "TOTAL", "COUNT", "PERCENT"
            )?;
            writeln!(out, "{}", "-".repeat(49))?;
            for cat in &report.categories {
                writeln!(
                    out,
                    "{:<20} {:>12} {:>6} {:>7}%",
                    display_category(&cat.category),
                    format_amount(cat.total),
                    cat.count,
                    format_percentage(cat.percentage)
                )?;
            }
            writeln!(out, "{}", "-".repeat(49))?;
            writeln!(out, "{:<20} {:>12}", "TOTAL", format_amount(report.total))?;
        }
    }

    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write, T: Serialize>(out: &mut W, rows: impl IntoIterator<Item = T>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn display_category(category: &str) -> String {
    if category.is_empty() {
        "(none)".to_string()
    } else {
        truncate(category, 20)
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
