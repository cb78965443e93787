use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Money is represented as an exact decimal so that "0.10" stays 0.10.
/// There is no NaN or infinity in this representation.
pub type Amount = Decimal;

/// Format an amount as a human-readable string with two decimal places.
/// Example: 50 -> "50.00", -12.345 -> "-12.35"
pub fn format_amount(amount: Amount) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Format a percentage with one decimal place, rounding midpoints away from zero.
/// Example: 66.666... -> "66.7"
pub fn format_percentage(percent: Amount) -> String {
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", rounded)
}

/// Parse a decimal string into an exact amount.
/// Example: "50.00" -> 50.00, "12.5" -> 12.5, " 100 " -> 100
///
/// Only an optional sign, digits and at most one decimal point are accepted.
/// Values that cannot be held without rounding are rejected.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    if !is_plain_decimal(trimmed) {
        return Err(ParseAmountError::InvalidFormat(trimmed.to_string()));
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str_exact(unsigned)
        .map_err(|_| ParseAmountError::OutOfRange(trimmed.to_string()))
}

fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let is_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());

    match unsigned.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(unsigned),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    #[error("no amount given")]
    Empty,

    #[error("'{0}' is not a valid decimal number")]
    InvalidFormat(String),

    #[error("'{0}' is too large or too precise to store exactly")]
    OutOfRange(String),
}
