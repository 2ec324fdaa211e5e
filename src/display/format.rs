//! Currency and percentage formatting for raw numbers
//!
//! Stored amounts are `Money` and format infallibly; these functions accept
//! floats coming from outside (ratios, user figures) and reject values that
//! cannot be rendered.

use crate::error::{FinboardError, FinboardResult};
use crate::models::{Currency, Money};

/// Largest magnitude, in major units, accepted by [`format_currency`]
///
/// Beyond 2^53 cents an `f64` no longer represents every cent.
const MAX_CURRENCY_AMOUNT: f64 = 90_071_992_547_409.91;

/// Format `amount` with en-US grouping, two decimals and the currency symbol
///
/// ```
/// use finboard::display::format::format_currency;
/// use finboard::models::Currency;
///
/// assert_eq!(format_currency(1247.50, Currency::Usd).unwrap(), "$1,247.50");
/// assert_eq!(format_currency(-10.0, Currency::Usd).unwrap(), "-$10.00");
/// assert!(format_currency(f64::NAN, Currency::Usd).is_err());
/// ```
pub fn format_currency(amount: f64, currency: Currency) -> FinboardResult<String> {
    if !amount.is_finite() {
        return Err(FinboardError::InvalidArgument(format!(
            "cannot format {} as currency",
            amount
        )));
    }
    if amount.abs() > MAX_CURRENCY_AMOUNT {
        return Err(FinboardError::InvalidArgument(format!(
            "amount {} is out of range",
            amount
        )));
    }

    let cents = (amount * 100.0).round() as i64;
    Ok(Money::from_cents(cents).format_currency(currency))
}

/// Format a fraction as a whole percentage, e.g. 0.64 -> "64%"
pub fn format_percentage(ratio: f64) -> FinboardResult<String> {
    if !ratio.is_finite() {
        return Err(FinboardError::InvalidArgument(format!(
            "cannot format {} as a percentage",
            ratio
        )));
    }

    let percent = (ratio * 100.0).round();
    if percent.abs() > i64::MAX as f64 {
        return Err(FinboardError::InvalidArgument(format!(
            "ratio {} is out of range",
            ratio
        )));
    }

    Ok(format!("{}%", percent as i64))
}

/// Share of `part` in `whole` with one decimal, e.g. "42.9%"; "0.0%" when
/// the whole is zero
pub fn format_share(part: Money, whole: Money) -> String {
    if whole.is_zero() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part.as_major() / whole.as_major() * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping_and_decimals() {
        assert_eq!(format_currency(1247.5, Currency::Usd).unwrap(), "$1,247.50");
        assert_eq!(format_currency(0.0, Currency::Usd).unwrap(), "$0.00");
        assert_eq!(
            format_currency(1_234_567.891, Currency::Usd).unwrap(),
            "$1,234,567.89"
        );
        assert_eq!(format_currency(-10.0, Currency::Usd).unwrap(), "-$10.00");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(format_currency(5.0, Currency::Eur).unwrap(), "€5.00");
        assert_eq!(format_currency(5.0, Currency::Gbp).unwrap(), "£5.00");
        assert_eq!(format_currency(2500.0, Currency::Inr).unwrap(), "₹2,500.00");
        assert_eq!(format_currency(1.0, Currency::Cad).unwrap(), "CA$1.00");
    }

    #[test]
    fn test_currency_rejects_unrenderable_values() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
            let err = format_currency(bad, Currency::Usd).unwrap_err();
            assert!(matches!(err, FinboardError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(0.64).unwrap(), "64%");
        assert_eq!(format_percentage(1.0).unwrap(), "100%");
        assert_eq!(format_percentage(0.125).unwrap(), "13%");
        assert_eq!(format_percentage(1.05).unwrap(), "105%");
        assert_eq!(format_percentage(0.0).unwrap(), "0%");
        assert!(format_percentage(f64::NAN).is_err());
        assert!(format_percentage(f64::INFINITY).is_err());
    }

    #[test]
    fn test_share() {
        let whole = Money::from_cents(70_000);
        assert_eq!(format_share(Money::from_cents(30_000), whole), "42.9%");
        assert_eq!(format_share(whole, whole), "100.0%");
        assert_eq!(format_share(Money::from_cents(100), Money::zero()), "0.0%");
    }
}
