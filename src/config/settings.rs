// ============================================================================
// Display Settings
// Currency symbol configuration, sourced at process start
// ============================================================================

use std::env;

use super::errors::ConfigError;

/// Currency symbol used when nothing else is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Environment variable consulted by [`DisplayConfig::from_env`].
pub const CURRENCY_SYMBOL_ENV: &str = "FINPRO_CURRENCY_SYMBOL";

/// Settings injected at process start that the formatters depend on.
///
/// Kept deliberately small: everything else about formatting (grouping
/// style, magnitude thresholds, decimal precision) is fixed behavior, not
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// Glyph prefixed to currency amounts.
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Create a configuration with the default symbol.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the currency symbol.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Build from the environment, falling back to defaults.
    ///
    /// Reads [`CURRENCY_SYMBOL_ENV`]; an unset or empty variable leaves the
    /// default in place.
    pub fn from_env() -> Self {
        match env::var(CURRENCY_SYMBOL_ENV) {
            Ok(symbol) if !symbol.is_empty() => Self::new().with_currency_symbol(symbol),
            _ => Self::new(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }
        Ok(())
    }
}
