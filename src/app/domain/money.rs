use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::app::infrastructure::error::LedgerError;

/// Number of decimal places kept for every currency amount.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Round an amount to currency precision (half away from zero).
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Reject negative amounts for the named field.
pub fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<Decimal, LedgerError> {
    if value < Decimal::ZERO {
        return Err(LedgerError::Validation {
            field,
            reason: format!("must not be negative (got {})", value),
        });
    }
    Ok(value)
}

/// Error for an amount that does not fit the decimal range.
pub(crate) fn too_large(field: &'static str) -> LedgerError {
    LedgerError::Validation {
        field,
        reason: "amount too large".to_string(),
    }
}

/// Parse user-entered text into a non-negative amount.
///
/// Surrounding whitespace is ignored. Empty or non-numeric input and
/// negative values are reported as validation errors for `field`.
pub fn parse_amount(field: &'static str, text: &str) -> Result<Decimal, LedgerError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation {
            field,
            reason: "is empty".to_string(),
        });
    }

    let value = Decimal::from_str(trimmed).map_err(|_| LedgerError::Validation {
        field,
        reason: format!("'{}' is not a number", trimmed),
    })?;

    ensure_non_negative(field, value)
}

/// Format an amount with exactly two decimals ("50.00").
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_currency(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_midpoint() {
        assert_eq!(round_currency(dec!(1.005)), dec!(1.01));
        assert_eq!(round_currency(dec!(1.004)), dec!(1.00));
        assert_eq!(round_currency(dec!(2.5)), dec!(2.50));
    }

    #[test]
    fn test_parse_amount_accepts_numbers() {
        assert_eq!(parse_amount("quantity", "5").unwrap(), dec!(5));
        assert_eq!(parse_amount("unit_price", " 10.25 ").unwrap(), dec!(10.25));
        assert_eq!(parse_amount("unit_price", "0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        let err = parse_amount("quantity", "five").unwrap_err();
        assert!(matches!(err, LedgerError::Validation { field: "quantity", .. }));
        assert!(err.to_string().contains("five"));
    }

    #[test]
    fn test_parse_amount_rejects_empty_and_negative() {
        assert!(matches!(
            parse_amount("unit_price", "   "),
            Err(LedgerError::Validation { field: "unit_price", .. })
        ));
        assert!(matches!(
            parse_amount("quantity", "-1"),
            Err(LedgerError::Validation { field: "quantity", .. })
        ));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(50)), "50.00");
        assert_eq!(format_amount(dec!(0.5)), "0.50");
        assert_eq!(format_amount(dec!(1234.567)), "1234.57");
    }
}
