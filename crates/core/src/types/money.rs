//! Monetary amount formatting.
//!
//! Receipt amounts arrive as decimal values plus an ISO 4217 currency code on
//! the order record. Display always uses exactly two fraction digits,
//! regardless of how many digits the backend sent.

use rust_decimal::Decimal;

/// Currency symbol for codes we render symbol-first.
///
/// Codes without a conventional prefix symbol (SAR, AED, KWD, ...) render as
/// `CODE amount` instead.
#[must_use]
pub fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" | "CAD" | "AUD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        _ => None,
    }
}

/// Format an amount with its currency, always two fraction digits.
///
/// `format_amount("USD", 19.5)` renders `$19.50`;
/// `format_amount("SAR", 120)` renders `SAR 120.00`.
#[must_use]
pub fn format_amount(currency_code: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    match symbol_for(currency_code) {
        Some(symbol) => format!("{symbol}{rounded:.2}"),
        None => format!("{currency_code} {rounded:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_two_fraction_digits() {
        assert_eq!(format_amount("USD", Decimal::new(195, 1)), "$19.50");
    }

    #[test]
    fn test_whole_amount_padded() {
        assert_eq!(format_amount("USD", Decimal::new(20, 0)), "$20.00");
    }

    #[test]
    fn test_excess_precision_rounded() {
        assert_eq!(format_amount("USD", Decimal::new(19_999, 3)), "$20.00");
    }

    #[test]
    fn test_unsymboled_currency_uses_code() {
        assert_eq!(format_amount("SAR", Decimal::new(12_000, 2)), "SAR 120.00");
        assert_eq!(format_amount("AED", Decimal::new(75, 1)), "AED 7.50");
    }

    #[test]
    fn test_euro_symbol() {
        assert_eq!(format_amount("EUR", Decimal::new(999, 2)), "\u{20ac}9.99");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_amount("USD", Decimal::ZERO), "$0.00");
    }
}
