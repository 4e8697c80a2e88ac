//! Cumulative (year-to-date) tax calculation.
//!
//! This module computes the tax payable in a pay period on the cumulative
//! basis: year-to-date free pay, taxable pay and tax due are derived from
//! year-to-date gross pay, and the period's tax is the delta against tax
//! already collected. The delta may be negative, which is a legitimate
//! in-period refund.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TaxBands;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriodTaxInput, TaxResult};

use super::tax_code::{TaxCodeMode, parse_tax_code};

/// Taxable pay from gross pay and free pay.
///
/// The authority's rule is truncation to whole pounds (not rounding),
/// floored at zero: negative taxable pay clamps to zero, it does not
/// produce negative taxable income. Free pay may itself be negative for K
/// codes, in which case the magnitude is added to taxable pay.
pub(crate) fn taxable_pay(gross_pay: Decimal, free_pay: Decimal) -> Decimal {
    (gross_pay - free_pay).floor().max(Decimal::ZERO)
}

/// Calculates tax for a pay period on the cumulative basis.
///
/// # Arguments
///
/// * `input` - The period index (1-12, April = 1), year-to-date gross pay,
///   tax code string and tax already paid year-to-date
/// * `bands` - The band table for the tax year being calculated
///
/// # Returns
///
/// Returns a [`TaxResult`] with year-to-date free pay, taxable pay and tax
/// due, and the tax payable this period, or an error if:
/// - The period is outside 1-12 (`InvalidPeriod`)
/// - The tax code matches no recognized pattern (`InvalidTaxCode`)
///
/// # Behavior
///
/// - Free pay accrues per period whether or not any pay was received, so
///   an employee paid nothing in a period can still generate a refund.
/// - First-period starters use the period index as given; there is no
///   back-pay of earlier periods' free pay.
/// - `NT` codes report all gross pay as free pay and refund everything
///   previously paid.
/// - Flat-rate codes (`BR`, `D0`, `D1`) tax the whole floored gross amount
///   at one configured rate with no banding.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_cumulative_tax;
/// use payroll_engine::config::TaxBands;
/// use payroll_engine::models::PayPeriodTaxInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// ```
pub fn calculate_cumulative_tax(
    input: &PayPeriodTaxInput,
    bands: &TaxBands,
) -> EngineResult<TaxResult> {
    if !(1..=12).contains(&input.period) {
        return Err(EngineError::InvalidPeriod {
            period: input.period,
        });
    }

    let tax_code = parse_tax_code(&input.tax_code)?;

    let result = match tax_code.mode {
        TaxCodeMode::NoTax => TaxResult {
            free_pay_ytd: input.gross_pay_ytd,
            taxable_pay_ytd: Decimal::ZERO,
            tax_due_ytd: Decimal::ZERO,
            tax_this_period: -input.tax_paid_ytd,
        },
        TaxCodeMode::Flat(band) => {
            let taxable_pay_ytd = taxable_pay(input.gross_pay_ytd, Decimal::ZERO);
            let tax_due_ytd = (taxable_pay_ytd * band.rate_in(bands))
                .round_dp_with_strategy(2, RoundingStrategy::ToZero);
            TaxResult {
                free_pay_ytd: Decimal::ZERO,
                taxable_pay_ytd,
                tax_due_ytd,
                tax_this_period: tax_due_ytd - input.tax_paid_ytd,
            }
        }
        TaxCodeMode::Banded => {
            let free_pay_ytd = tax_code.monthly_free_pay * Decimal::from(input.period);
            let taxable_pay_ytd = taxable_pay(input.gross_pay_ytd, free_pay_ytd);
            let tax_due_ytd = bands.tax_on(taxable_pay_ytd);
            TaxResult {
                free_pay_ytd,
                taxable_pay_ytd,
                tax_due_ytd,
                tax_this_period: tax_due_ytd - input.tax_paid_ytd,
            }
        }
    };

    Ok(result)
}
