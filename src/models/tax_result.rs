//! Tax calculation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of one tax calculation.
///
/// On the cumulative basis all fields are year-to-date figures; on the
/// non-cumulative (Week1/Month1) basis the same shape carries the values
/// for the single period in isolation.
///
/// Callers persist these values (converting to minor currency units for
/// storage) and render them on payslips; the engine never retains them.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = TaxResult {
///     free_pay_ytd: Decimal::from_str("1048.25").unwrap(),
///     taxable_pay_ytd: Decimal::from_str("108").unwrap(),
///     tax_due_ytd: Decimal::from_str("21.60").unwrap(),
///     tax_this_period: Decimal::from_str("21.60").unwrap(),
/// };
/// assert!(!result.is_refund());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Free pay accrued from the start of the tax year.
    pub free_pay_ytd: Decimal,
    /// Taxable pay year-to-date, truncated to whole pounds and floored
    /// at zero.
    pub taxable_pay_ytd: Decimal,
    /// Total tax due from the start of the tax year.
    pub tax_due_ytd: Decimal,
    /// Tax payable this period: the delta against tax already paid.
    /// Negative values are legitimate in-period refunds.
    pub tax_this_period: Decimal,
}

impl TaxResult {
    /// Returns true if this period's tax is a refund to the employee.
    pub fn is_refund(&self) -> bool {
        self.tax_this_period < Decimal::ZERO
    }
}
