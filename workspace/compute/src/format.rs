//! Display formatting for indicator values.
//!
//! Money renders in German locale grouping with a trailing euro sign
//! (`42.350 €`), the convention the dashboard uses everywhere. Percentages
//! render the plain fraction times 100 with a dot decimal, matching the
//! chart tooltips.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rusty_money::{Formatter, Money, Params, Position, iso};

use crate::error::{ComputeError, Result};

fn eur_params() -> Params {
    Params {
        digit_separator: '.',
        exponent_separator: ',',
        symbol: Some("€"),
        positions: vec![
            Position::Sign,
            Position::Amount,
            Position::Space,
            Position::Symbol,
        ],
        ..Default::default()
    }
}

/// Converts the value to a decimal with exactly `digits` fraction digits.
fn decimal_amount(value: f64, digits: u32) -> Result<Decimal> {
    let mut amount = Decimal::from_f64(value)
        .ok_or_else(|| ComputeError::Format(format!("not a representable amount: {value}")))?
        .round_dp(digits);
    amount.rescale(digits);
    Ok(amount)
}

/// Formats a value as whole euros, e.g. `42.350 €`.
pub fn format_eur(value: f64) -> Result<String> {
    let money = Money::from_decimal(decimal_amount(value, 0)?, iso::EUR);
    Ok(Formatter::money(&money, eur_params()))
}

/// Formats a price level per square meter, e.g. `9,50 €/m²`.
pub fn format_eur_per_sqm(value: f64) -> Result<String> {
    let money = Money::from_decimal(decimal_amount(value, 2)?, iso::EUR);
    Ok(format!("{}/m²", Formatter::money(&money, eur_params())))
}

/// Formats a count with German thousands grouping and no unit, e.g.
/// `506.573`.
pub fn format_grouped(value: f64) -> Result<String> {
    let money = Money::from_decimal(decimal_amount(value, 0)?, iso::EUR);
    let params = Params {
        digit_separator: '.',
        exponent_separator: ',',
        positions: vec![Position::Sign, Position::Amount],
        ..Default::default()
    };
    Ok(Formatter::money(&money, params))
}

/// Formats a fraction as a percentage with one decimal, e.g. `1.8%`.
pub fn format_percentage(value: f64) -> String {
    format_percentage_with_digits(value, 1)
}

/// Formats a fraction as a percentage with the given number of decimals.
pub fn format_percentage_with_digits(value: f64, digits: usize) -> String {
    format!("{:.prec$}%", value * 100.0, prec = digits)
}
