// ============================================================================
// Format Module
// Display formatting in the Indian numbering system
// ============================================================================
//
// This module provides:
// - group_digits / strip_separators: Indian-system comma grouping and its
//   inverse
// - to_words / Magnitude: compact lakh/crore word forms
// - CurrencyFormatter / format_currency: symbol-prefixed fixed-precision
//   amounts
//
// Design principles:
// - Every function is total: malformed input degrades to a harmless
//   placeholder instead of failing a render
// - Pure, synchronous, no shared state

mod currency;
mod grouping;
mod words;

pub use currency::{format_currency, CurrencyFormatter};
pub use grouping::{group_digits, strip_separators};
pub use words::{to_words, Magnitude, CRORE, LAKH, THOUSAND};
