// ============================================================================
// Growth Projection
// Yearly compounding for the investment calculator
// ============================================================================

use crate::numeric::Value;

/// Inputs to a growth projection, as entered on the investment calculator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthInput {
    /// Lump sum invested up front.
    pub initial: f64,
    /// Expected annual return, in percent.
    pub annual_return_pct: f64,
    /// Amount added at the end of each year.
    pub annual_contribution: f64,
    /// Projection horizon in years.
    pub years: u32,
}

impl GrowthInput {
    /// Create an input set from already-clean numbers.
    pub fn new(initial: f64, annual_return_pct: f64, annual_contribution: f64, years: u32) -> Self {
        GrowthInput {
            initial,
            annual_return_pct,
            annual_contribution,
            years,
        }
    }

    /// Build from raw form fields.
    ///
    /// Fields are comma-stripped and prefix-parsed; a blank or malformed
    /// field counts as zero, matching how the calculator screen cleans its
    /// inputs. Fractional or negative year counts truncate to a whole,
    /// non-negative number of years.
    pub fn from_fields(
        initial: &str,
        annual_return_pct: &str,
        annual_contribution: &str,
        years: &str,
    ) -> Self {
        GrowthInput {
            initial: field_amount(initial),
            annual_return_pct: field_amount(annual_return_pct),
            annual_contribution: field_amount(annual_contribution),
            years: field_amount(years).trunc().max(0.0) as u32,
        }
    }
}

/// Summary figures displayed next to the projection chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthSummary {
    /// Projected value at the end of the horizon.
    pub final_value: f64,
    /// Everything paid in: the lump sum plus every yearly contribution.
    pub total_contributions: f64,
    /// Final value minus contributions.
    pub total_returns: f64,
}

/// Project year-end totals over the horizon.
///
/// Each year the running total grows by the annual return and then
/// receives the yearly contribution:
/// `total = total * (1 + r/100) + contribution`. The returned totals are
/// rounded to 2 decimal places for display; the running total itself
/// compounds unrounded.
///
/// A zero-year horizon projects nothing.
///
/// # Example
/// ```
/// use finpro_core::growth::{project, GrowthInput};
///
/// let input = GrowthInput::new(1000.0, 10.0, 0.0, 2);
/// assert_eq!(project(&input), vec![1100.0, 1210.0]);
/// ```
pub fn project(input: &GrowthInput) -> Vec<f64> {
    let mut totals = Vec::with_capacity(input.years as usize);
    let mut total = input.initial;
    for _ in 0..input.years {
        total += total * (input.annual_return_pct / 100.0) + input.annual_contribution;
        totals.push(round_to_2(total));
    }
    totals
}

/// Project and reduce to the summary figures.
///
/// With a zero-year horizon the final value is 0, so the returns come out
/// at minus the lump sum; the screen only renders the summary once a
/// horizon is entered.
pub fn summarize(input: &GrowthInput) -> GrowthSummary {
    let totals = project(input);
    let final_value = totals.last().copied().unwrap_or(0.0);
    let total_contributions = input.initial + input.annual_contribution * f64::from(input.years);
    GrowthSummary {
        final_value,
        total_contributions,
        total_returns: final_value - total_contributions,
    }
}

/// Clean one form field: comma-strip, prefix-parse, default to zero.
fn field_amount(raw: &str) -> f64 {
    Value::from(raw).to_number().unwrap_or(0.0)
}

/// Round to 2 decimal places, half away from zero.
fn round_to_2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compounding_without_contributions() {
        let input = GrowthInput::new(1000.0, 10.0, 0.0, 3);
        assert_eq!(project(&input), vec![1100.0, 1210.0, 1331.0]);
    }

    #[test]
    fn test_contributions_without_growth() {
        let input = GrowthInput::new(0.0, 0.0, 100.0, 3);
        assert_eq!(project(&input), vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_zero_year_horizon() {
        let input = GrowthInput::new(5000.0, 8.0, 100.0, 0);
        assert!(project(&input).is_empty());

        let summary = summarize(&input);
        assert_eq!(summary.final_value, 0.0);
        assert_eq!(summary.total_contributions, 5000.0);
        assert_eq!(summary.total_returns, -5000.0);
    }

    #[test]
    fn test_yearly_totals_are_display_rounded() {
        // 100 * 1.033 compounds to fractions of a paisa
        let input = GrowthInput::new(100.0, 3.3, 0.0, 2);
        let totals = project(&input);
        assert_eq!(totals, vec![103.3, 106.71]);
    }

    #[test]
    fn test_summary() {
        let input = GrowthInput::new(1000.0, 10.0, 500.0, 2);
        // Year 1: 1100 + 500 = 1600; Year 2: 1760 + 500 = 2260
        let summary = summarize(&input);
        assert_eq!(summary.final_value, 2260.0);
        assert_eq!(summary.total_contributions, 2000.0);
        assert_eq!(summary.total_returns, 260.0);
    }

    #[test]
    fn test_from_fields_cleans_grouped_input() {
        let input = GrowthInput::from_fields("1,00,000", "12", "10,000", "5");
        assert_eq!(input.initial, 100000.0);
        assert_eq!(input.annual_return_pct, 12.0);
        assert_eq!(input.annual_contribution, 10000.0);
        assert_eq!(input.years, 5);
    }

    #[test]
    fn test_from_fields_defaults_malformed_to_zero() {
        let input = GrowthInput::from_fields("", "abc", "₹500", "-3");
        assert_eq!(input.initial, 0.0);
        assert_eq!(input.annual_return_pct, 0.0);
        // The stray symbol is not numeric prefix material
        assert_eq!(input.annual_contribution, 0.0);
        assert_eq!(input.years, 0);
    }

    #[test]
    fn test_from_fields_truncates_years() {
        let input = GrowthInput::from_fields("100", "5", "0", "3.9");
        assert_eq!(input.years, 3);
    }
}
