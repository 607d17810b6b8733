// ============================================================================
// FinancePro Core Library
// Display formatting, projection and guidance for a personal-finance app
// ============================================================================

//! # FinancePro Core
//!
//! Presentation-layer logic shared by the FinancePro screens: numeric
//! display formatting in the Indian numbering system, investment growth
//! projection, and the rule-based guidance assistant.
//!
//! ## Features
//!
//! - **Indian-system digit grouping** (`12,34,567`) with a tolerant
//!   normalizer, plus the inverse separator stripper
//! - **Magnitude word forms** (`15K`, `2.5 lakhs`, `1.2 crores`)
//! - **Currency rendering** with a configurable symbol and fixed 2-decimal
//!   precision
//! - **Total formatting functions**: malformed input renders a harmless
//!   placeholder, never an error, so a bad value can't take down a screen
//! - **Growth projection** for the investment calculator
//! - **Guidance assistant** driven by an ordered keyword rule table
//!
//! ## Example
//!
//! ```rust
//! use finpro_core::prelude::*;
//!
//! assert_eq!(group_digits(1234567), "12,34,567");
//! assert_eq!(strip_separators("12,34,567"), "1234567");
//! assert_eq!(to_words(250000), "2.5 lakhs");
//! assert_eq!(format_currency(1234.5), "₹1,234.50");
//!
//! let input = GrowthInput::new(100000.0, 12.0, 10000.0, 5);
//! let summary = summarize(&input);
//! assert!(summary.final_value > summary.total_contributions);
//! ```

pub mod advisor;
pub mod config;
pub mod format;
pub mod growth;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::advisor::{reply, Topic};
    pub use crate::config::{DisplayConfig, DEFAULT_CURRENCY_SYMBOL};
    pub use crate::format::{
        format_currency, group_digits, strip_separators, to_words, CurrencyFormatter, Magnitude,
    };
    pub use crate::growth::{project, summarize, GrowthInput, GrowthSummary};
    pub use crate::numeric::Value;
}
