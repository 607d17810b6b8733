// ============================================================================
// Currency Formatting
// Symbol-prefixed amounts with fixed 2-decimal precision
// ============================================================================

use super::grouping::group_digits;
use crate::config::{DisplayConfig, DEFAULT_CURRENCY_SYMBOL};
use crate::numeric::Value;

/// Formats amounts with a currency symbol and exactly 2 decimal places.
///
/// The symbol comes from [`DisplayConfig`] (or [`new`](Self::new)
/// directly); the default is `"₹"`.
///
/// # Example
/// ```
/// use finpro_core::format::CurrencyFormatter;
///
/// let inr = CurrencyFormatter::default();
/// assert_eq!(inr.format(1234.5), "₹1,234.50");
///
/// let usd = CurrencyFormatter::new("$");
/// assert_eq!(usd.format(1234.5), "$1,234.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyFormatter {
    symbol: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl CurrencyFormatter {
    /// Create a formatter with the given symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        CurrencyFormatter {
            symbol: symbol.into(),
        }
    }

    /// Create a formatter from process configuration.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.currency_symbol.clone())
    }

    /// The configured symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Render an amount as symbol + grouped digits with exactly 2 decimal
    /// places.
    ///
    /// Text input is comma-stripped and prefix-parsed first. Anything that
    /// does not resolve to a number (a missing value, empty or
    /// non-numeric text, NaN) renders as the symbol followed by a bare
    /// `"0"`: the placeholder path carries no decimals, while the success
    /// path always carries exactly 2. The number zero is a valid amount
    /// and renders as `"₹0.00"`.
    ///
    /// The 2-decimal rendering uses `format!("{:.2}")`. Signs do not
    /// survive grouping, so negative amounts render like their absolute
    /// value; callers showing signed figures re-apply the sign.
    pub fn format(&self, value: impl Into<Value>) -> String {
        let value = value.into();
        let amount = match value.to_number() {
            Some(n) => n,
            None => {
                tracing::debug!("unparseable amount {:?}, rendering placeholder", value);
                return format!("{}0", self.symbol);
            }
        };
        format!("{}{}", self.symbol, group_digits(format!("{amount:.2}")))
    }
}

/// Render an amount with the default currency symbol.
///
/// See [`CurrencyFormatter::format`] for the contract.
///
/// # Examples
/// ```
/// use finpro_core::format::format_currency;
///
/// assert_eq!(format_currency(1234.5), "₹1,234.50");
/// assert_eq!(format_currency(Option::<f64>::None), "₹0");
/// ```
pub fn format_currency(value: impl Into<Value>) -> String {
    CurrencyFormatter::default().format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_amounts() {
        assert_eq!(format_currency(1234.5), "₹1,234.50");
        assert_eq!(format_currency(100000), "₹1,00,000.00");
        assert_eq!(format_currency(0.5), "₹0.50");
        assert_eq!(format_currency(999), "₹999.00");
    }

    #[test]
    fn test_zero_is_a_valid_amount() {
        assert_eq!(format_currency(0), "₹0.00");
    }

    #[test]
    fn test_text_amounts() {
        assert_eq!(format_currency("1234.5"), "₹1,234.50");
        assert_eq!(format_currency("12,34,567"), "₹12,34,567.00");
        assert_eq!(format_currency("1200 approx"), "₹1,200.00");
    }

    #[test]
    fn test_placeholder_has_no_decimals() {
        assert_eq!(format_currency(Option::<f64>::None), "₹0");
        assert_eq!(format_currency(""), "₹0");
        assert_eq!(format_currency("abc"), "₹0");
        assert_eq!(format_currency(f64::NAN), "₹0");
    }

    #[test]
    fn test_sign_is_dropped() {
        assert_eq!(format_currency(-1234.5), "₹1,234.50");
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        assert_eq!(format_currency(1234.567), "₹1,234.57");
        assert_eq!(format_currency(1234.994), "₹1,234.99");
    }

    #[test]
    fn test_custom_symbol() {
        let usd = CurrencyFormatter::new("$");
        assert_eq!(usd.format(1234.5), "$1,234.50");
        assert_eq!(usd.format(Option::<f64>::None), "$0");
        assert_eq!(usd.symbol(), "$");
    }

    #[test]
    fn test_from_config() {
        let config = DisplayConfig::new().with_currency_symbol("Rs ");
        let formatter = CurrencyFormatter::from_config(&config);
        assert_eq!(formatter.format(1500), "Rs 1,500.00");
    }
}
