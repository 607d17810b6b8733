// ============================================================================
// Display Value
// Raw input model for the display formatters
// ============================================================================

use super::parse::parse_loose;

/// A raw value headed for display: a number, free-form text, or nothing.
///
/// Form fields and API payloads hand the formatters a mix of numbers,
/// already-formatted strings, and absent fields. `Value` normalizes that mix
/// once so every formatter shares the same fallback behavior instead of
/// re-checking input shape.
///
/// Conversions exist from the primitive numeric types, string types,
/// `Option` (where `None` means a missing field), and
/// [`rust_decimal::Decimal`] (rendered to its exact digit string at the
/// boundary). With the `serde` feature enabled, `&serde_json::Value`
/// converts directly so response fields can be displayed without manual
/// unpacking.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A numeric amount.
    Number(f64),
    /// Free-form text, possibly already grouped or carrying stray symbols.
    Text(String),
    /// No value supplied.
    #[default]
    Missing,
}

impl Value {
    /// True when there is nothing usable to display: a missing value,
    /// empty text, or a NaN number.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Number(n) => n.is_nan(),
            Value::Text(t) => t.is_empty(),
            Value::Missing => true,
        }
    }

    /// Like [`is_blank`](Self::is_blank), but additionally treats the
    /// number zero as absent.
    ///
    /// The separator stripper works on this boundary: a bare numeric `0`
    /// (an untouched form field) yields an empty string, while the text
    /// `"0"` is a real value and passes through. Callers that need `"0"`
    /// back must pass it as text.
    pub fn is_blank_or_zero(&self) -> bool {
        self.is_blank() || matches!(self, Value::Number(n) if *n == 0.0)
    }

    /// Render to the text the formatters operate on.
    ///
    /// Numbers use `f64`'s `Display` (shortest decimal form that
    /// round-trips, never scientific notation); text passes through
    /// unchanged; missing renders empty.
    pub(crate) fn render(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Text(t) => t.clone(),
            Value::Missing => String::new(),
        }
    }

    /// Numeric view of the value.
    ///
    /// Numbers pass through (NaN counts as no value). Text is
    /// comma-stripped and then prefix-parsed with [`parse_loose`], so
    /// grouped input like `"12,34,567"` and noisy input like `"1200 approx"`
    /// both resolve. Returns `None` when nothing numeric can be recovered.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_nan() => None,
            Value::Number(n) => Some(*n),
            Value::Text(t) => parse_loose(&t.replace(',', "")),
            Value::Missing => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Missing,
        }
    }
}

impl From<rust_decimal::Decimal> for Value {
    /// Boundary conversion: the decimal is rendered to its exact digit
    /// string, so grouping preserves every supplied fractional digit.
    fn from(d: rust_decimal::Decimal) -> Self {
        Value::Text(d.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<&serde_json::Value> for Value {
    /// Maps JSON null to a missing value, numbers and strings to their
    /// obvious counterparts, and anything else (bool, array, object) to
    /// missing, since non-scalar fields have no numeric display.
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Missing,
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Missing,
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            _ => Value::Missing,
        }
    }
}
