//! Price input and display helpers.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Coerce free-form price input to a number.
///
/// Empty or non-numeric input becomes zero, which validation then rejects with the usual
/// "must be greater than zero" message rather than a separate parse error. Only `.` is a
/// decimal separator: `"9,99"` is non-numeric and coerces to zero.
pub fn coerce_price(input: &str) -> Decimal {
    let input = input.trim();

    if input.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .unwrap_or(Decimal::ZERO)
}

/// Render a price with two decimals followed by the euro sign, e.g. `9.99 €`.
pub fn format_price(price: Decimal) -> String {
    format!("{} €", two_decimals(price))
}

/// Round half away from zero to exactly two decimal places.
pub(crate) fn two_decimals(price: Decimal) -> Decimal {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    rounded
}
