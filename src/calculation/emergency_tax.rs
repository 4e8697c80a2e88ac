//! Non-cumulative (Week1/Month1, emergency basis) tax calculation.
//!
//! This module computes tax for a single period in isolation, with no
//! memory of prior periods. It is used for new employees without a
//! verified prior tax history, or when a period is explicitly flagged
//! "emergency basis".

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TaxBands;
use crate::error::EngineResult;
use crate::models::TaxResult;

use super::cumulative_tax::taxable_pay;
use super::tax_code::{TaxCodeMode, parse_tax_code};

/// Calculates tax for one period on the non-cumulative basis.
///
/// Band thresholds are monthly (`floor(annual / 12)`) rather than
/// year-to-date cumulative thresholds, and free pay is a single month's
/// worth. Because each period is independent, no refunds are possible
/// under this mode; `tax_this_period` is never negative.
///
/// The result reuses the [`TaxResult`] shape with period-scoped values in
/// the year-to-date fields, and `tax_this_period` equal to `tax_due_ytd`.
///
/// # Arguments
///
/// * `gross_pay` - Gross pay for this period alone
/// * `tax_code` - The employee's tax code string
/// * `bands` - The *annual* band table for the tax year being calculated
///
/// # Errors
///
/// Returns `InvalidTaxCode` when the code matches no recognized pattern.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_emergency_tax;
/// use payroll_engine::config::TaxBands;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bands = TaxBands {
///     basic_rate: Decimal::from_str("0.20").unwrap(),
///     higher_rate: Decimal::from_str("0.40").unwrap(),
///     additional_rate: Decimal::from_str("0.45").unwrap(),
///     basic_threshold: Decimal::from(37700),
///     higher_threshold: Decimal::from(125140),
/// };
///
/// // Tax code 45L: monthly free pay 38.25, so 39.25 gross leaves
/// // exactly one taxable pound.
/// let result = calculate_emergency_tax(
///     Decimal::from_str("39.25").unwrap(),
///     "45L",
///     &bands,
/// ).unwrap();
/// assert_eq!(result.tax_this_period, Decimal::from_str("0.20").unwrap());
/// ```
pub fn calculate_emergency_tax(
    gross_pay: Decimal,
    tax_code: &str,
    bands: &TaxBands,
) -> EngineResult<TaxResult> {
    let tax_code = parse_tax_code(tax_code)?;

    let result = match tax_code.mode {
        TaxCodeMode::NoTax => TaxResult {
            free_pay_ytd: gross_pay,
            taxable_pay_ytd: Decimal::ZERO,
            tax_due_ytd: Decimal::ZERO,
            tax_this_period: Decimal::ZERO,
        },
        TaxCodeMode::Flat(band) => {
            let taxable = taxable_pay(gross_pay, Decimal::ZERO);
            let tax_due = (taxable * band.rate_in(bands))
                .round_dp_with_strategy(2, RoundingStrategy::ToZero);
            TaxResult {
                free_pay_ytd: Decimal::ZERO,
                taxable_pay_ytd: taxable,
                tax_due_ytd: tax_due,
                tax_this_period: tax_due,
            }
        }
        TaxCodeMode::Banded => {
            let free_pay = tax_code.monthly_free_pay;
            let taxable = taxable_pay(gross_pay, free_pay);
            let tax_due = bands.monthly().tax_on(taxable);
            TaxResult {
                free_pay_ytd: free_pay,
                taxable_pay_ytd: taxable,
                tax_due_ytd: tax_due,
                tax_this_period: tax_due,
            }
        }
    };

    Ok(result)
}
