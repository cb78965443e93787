mod common;

use std::str::FromStr;

use anyhow::Result;
use common::service_with;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally::application::{AmountField, AppError, LedgerService};

#[test]
fn test_valid_amounts_append_one_expense_each() -> Result<()> {
    let mut service = LedgerService::new();

    for (i, input) in ["50.00", "0.01", "1234567.891", "-20", "7"].iter().enumerate() {
        let before = service.list_expenses().len();
        service.add_expense("Misc", input)?;

        let expenses: Vec<_> = service.list_expenses().collect();
        assert_eq!(expenses.len(), before + 1);
        assert_eq!(expenses[i].amount, Decimal::from_str(input)?);
        assert_eq!(expenses[i].category, "Misc");
    }

    Ok(())
}

#[test]
fn test_invalid_amounts_leave_expenses_unchanged() -> Result<()> {
    let mut service = service_with(&[], &[("Rent", "800")], "0")?;

    for input in ["", "abc", "12.34.56", "ten euros", "NaN", "1__2", "1_000", "1e5"] {
        let err = service
            .add_expense("Groceries", input)
            .expect_err("amount should be rejected");
        assert!(matches!(
            err,
            AppError::InvalidAmount {
                field: AmountField::ExpenseAmount,
                ..
            }
        ));
    }

    let expenses: Vec<_> = service.list_expenses().collect();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].category, "Rent");

    Ok(())
}

#[test]
fn test_empty_category_is_accepted() -> Result<()> {
    let mut service = LedgerService::new();
    service.add_expense("", "5")?;

    assert_eq!(service.list_expenses().next().map(|e| e.category.as_str()), Some(""));
    Ok(())
}

#[test]
fn test_empty_ledger_without_goal() -> Result<()> {
    let service = LedgerService::new();
    let report = service.compute_progress()?;

    assert!(!report.has_goal());
    assert_eq!(report.goal, None);
    assert_eq!(report.percent_of_goal, None);
    assert_eq!(report.net, Decimal::ZERO);
    Ok(())
}

#[test]
fn test_progress_exceeding_goal() -> Result<()> {
    let service = service_with(&["1000.00"], &[("Groceries", "50.00")], "500.00")?;
    let report = service.compute_progress()?;

    assert_eq!(report.goal, Some(dec!(500.00)));
    assert_eq!(report.total_income, dec!(1000.00));
    assert_eq!(report.total_expenses, dec!(50.00));
    assert_eq!(report.net, dec!(950.00));
    assert_eq!(report.percent_of_goal, Some(dec!(190.0)));
    Ok(())
}

#[test]
fn test_progress_with_deficit() -> Result<()> {
    let service = service_with(&[], &[("Rent", "100.00")], "50.00")?;
    let report = service.compute_progress()?;

    assert_eq!(report.total_income, Decimal::ZERO);
    assert_eq!(report.net, dec!(-100.00));
    assert_eq!(report.percent_of_goal, Some(dec!(-200.0)));
    Ok(())
}

#[test]
fn test_second_goal_replaces_first() -> Result<()> {
    let mut service = service_with(&["600"], &[], "500.00")?;
    service.set_savings_goal("300.00")?;

    let report = service.compute_progress()?;
    assert_eq!(report.goal, Some(dec!(300.00)));
    assert_eq!(report.percent_of_goal, Some(dec!(200)));
    Ok(())
}

#[test]
fn test_fresh_listings_are_distinguishable_from_populated() -> Result<()> {
    let empty = LedgerService::new();
    assert_eq!(empty.list_expenses().len(), 0);
    assert!(empty.list_incomes().is_empty());

    let populated = service_with(&["10"], &[("Coffee", "3")], "0")?;
    assert_eq!(populated.list_expenses().len(), 1);
    assert_eq!(populated.list_incomes().len(), 1);
    Ok(())
}

#[test]
fn test_incomes_keep_insertion_order() -> Result<()> {
    let service = service_with(&["300", "100", "200"], &[], "0")?;
    let amounts: Vec<Decimal> = service.list_incomes().iter().map(|r| r.amount).collect();

    assert_eq!(amounts, vec![dec!(300), dec!(100), dec!(200)]);
    Ok(())
}

#[test]
fn test_category_report() -> Result<()> {
    let service = service_with(
        &[],
        &[
            ("Groceries", "60"),
            ("Dining", "20"),
            ("Groceries", "15"),
            ("Dining", "5"),
        ],
        "0",
    )?;

    let report = service.category_report()?;
    assert_eq!(report.total, dec!(100));
    assert_eq!(report.categories.len(), 2);

    let groceries = &report.categories[0];
    assert_eq!(groceries.category, "Groceries");
    assert_eq!(groceries.total, dec!(75));
    assert_eq!(groceries.count, 2);
    assert_eq!(groceries.percentage, dec!(75));

    assert_eq!(report.categories[1].percentage, dec!(25));
    Ok(())
}

#[test]
fn test_overflow_is_not_a_validation_error() -> Result<()> {
    let max = Decimal::MAX.to_string();
    let service = service_with(&[max.as_str(), max.as_str()], &[], "0")?;

    let err = service.compute_progress().expect_err("sum should overflow");
    assert!(!err.is_validation());
    Ok(())
}
