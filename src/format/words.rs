// ============================================================================
// Magnitude Words
// Compact lakh/crore word forms for large amounts
// ============================================================================

use super::grouping::group_digits;
use crate::numeric::Value;

/// One crore, in rupees.
pub const CRORE: f64 = 10_000_000.0;

/// One lakh, in rupees.
pub const LAKH: f64 = 100_000.0;

/// One thousand, in rupees.
pub const THOUSAND: f64 = 1_000.0;

/// Magnitude bucket of an amount, selected on its absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Magnitude {
    /// At least one crore (1,00,00,000).
    Crore,
    /// At least one lakh (1,00,000), below one crore.
    Lakh,
    /// At least one thousand, below one lakh.
    Thousand,
    /// Below one thousand.
    Unit,
}

impl Magnitude {
    /// Select the bucket for an amount. The sign is ignored.
    pub fn of(amount: f64) -> Self {
        let abs = amount.abs();
        if abs >= CRORE {
            Magnitude::Crore
        } else if abs >= LAKH {
            Magnitude::Lakh
        } else if abs >= THOUSAND {
            Magnitude::Thousand
        } else {
            Magnitude::Unit
        }
    }

    /// Scale divisor for this bucket.
    pub const fn divisor(self) -> f64 {
        match self {
            Magnitude::Crore => CRORE,
            Magnitude::Lakh => LAKH,
            Magnitude::Thousand => THOUSAND,
            Magnitude::Unit => 1.0,
        }
    }

    /// Literal suffix appended to the scaled amount.
    pub const fn suffix(self) -> &'static str {
        match self {
            Magnitude::Crore => " crores",
            Magnitude::Lakh => " lakhs",
            Magnitude::Thousand => "K",
            Magnitude::Unit => "",
        }
    }
}

/// Render an amount as a compact magnitude word form.
///
/// Amounts of a thousand and above are scaled down to their bucket, rounded
/// to 2 decimal places and grouped: `15000` becomes `"15K"`, `250000`
/// becomes `"2.5 lakhs"`, `12000000` becomes `"1.2 crores"`. Amounts below
/// a thousand are rounded to the nearest integer and grouped with no
/// suffix. Trailing zeros do not survive the scaling (`"2.5 lakhs"`, never
/// `"2.50 lakhs"`).
///
/// Rounding is half-away-from-zero (`f64::round`) applied at 2 decimal
/// places for the scaled buckets and at integers for the unit bucket.
///
/// Text input is comma-stripped and prefix-parsed first; blank or
/// unparseable input renders as `"0"`. Bucket selection uses the absolute
/// value and the sign is not re-applied, so negative amounts come back
/// positive; callers that show signed figures handle the sign themselves.
///
/// # Examples
/// ```
/// use finpro_core::format::to_words;
///
/// assert_eq!(to_words(999), "999");
/// assert_eq!(to_words(15000), "15K");
/// assert_eq!(to_words("2,50,000"), "2.5 lakhs");
/// assert_eq!(to_words(12000000), "1.2 crores");
/// assert_eq!(to_words("n/a"), "0");
/// ```
pub fn to_words(value: impl Into<Value>) -> String {
    let value = value.into();
    if value.is_blank() {
        return "0".to_string();
    }

    let amount = match value.to_number() {
        Some(n) => n,
        None => {
            tracing::debug!("unparseable amount {:?}, rendering placeholder", value);
            return "0".to_string();
        }
    };

    match Magnitude::of(amount) {
        Magnitude::Unit => group_digits(amount.round()),
        bucket => {
            let scaled = round_to_2(amount.abs() / bucket.divisor());
            let mut out = group_digits(scaled);
            out.push_str(bucket.suffix());
            out
        }
    }
}

/// Round to 2 decimal places, half away from zero.
fn round_to_2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_bucket_selection() {
        assert_eq!(Magnitude::of(0.0), Magnitude::Unit);
        assert_eq!(Magnitude::of(999.99), Magnitude::Unit);
        assert_eq!(Magnitude::of(1000.0), Magnitude::Thousand);
        assert_eq!(Magnitude::of(99_999.0), Magnitude::Thousand);
        assert_eq!(Magnitude::of(100_000.0), Magnitude::Lakh);
        assert_eq!(Magnitude::of(9_999_999.0), Magnitude::Lakh);
        assert_eq!(Magnitude::of(10_000_000.0), Magnitude::Crore);
        assert_eq!(Magnitude::of(-250_000.0), Magnitude::Lakh);
    }

    #[test]
    fn test_unit_amounts_grouped_not_suffixed() {
        assert_eq!(to_words(0), "0");
        assert_eq!(to_words(999), "999");
        assert_eq!(to_words(999.4), "999");
        // Rounds up across the grouping threshold
        assert_eq!(to_words(999.6), "1,000");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(to_words(1000), "1K");
        assert_eq!(to_words(1500), "1.5K");
        assert_eq!(to_words(15000), "15K");
        assert_eq!(to_words(99_999), "100K");
    }

    #[test]
    fn test_lakhs() {
        assert_eq!(to_words(100_000), "1 lakhs");
        assert_eq!(to_words(250_000), "2.5 lakhs");
        assert_eq!(to_words(1_234_567), "12.35 lakhs");
        assert_eq!(to_words(9_999_999), "100 lakhs");
    }

    #[test]
    fn test_crores() {
        assert_eq!(to_words(10_000_000), "1 crores");
        assert_eq!(to_words(12_000_000), "1.2 crores");
        assert_eq!(to_words(123_456_789_012.0), "12,345.68 crores");
    }

    #[test]
    fn test_scaled_rounding_carries_up() {
        // 9999 scales to 9.999K, which rounds to 10 at 2 decimals
        assert_eq!(to_words(9999), "10K");
    }

    #[test]
    fn test_sign_is_dropped_above_unit() {
        assert_eq!(to_words(-250_000), "2.5 lakhs");
        assert_eq!(to_words(-12_000_000), "1.2 crores");
        assert_eq!(to_words(-500), "500");
    }

    #[test]
    fn test_text_input() {
        assert_eq!(to_words("2,50,000"), "2.5 lakhs");
        assert_eq!(to_words("15000"), "15K");
        assert_eq!(to_words("15000 approx"), "15K");
    }

    #[test]
    fn test_blank_and_unparseable() {
        assert_eq!(to_words(Option::<f64>::None), "0");
        assert_eq!(to_words(""), "0");
        assert_eq!(to_words("n/a"), "0");
        assert_eq!(to_words(f64::NAN), "0");
    }

    quickcheck! {
        // Below the thousand threshold, word form is just the integer.
        fn prop_small_integers_verbatim(n: u16) -> bool {
            let n = u64::from(n % 1000);
            to_words(n) == n.to_string()
        }
    }
}
