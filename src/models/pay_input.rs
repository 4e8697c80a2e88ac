//! Pay period tax input model.
//!
//! This module defines the input value object for cumulative tax
//! calculation. Instances are constructed fresh per calculation call from
//! caller-supplied values and are not retained.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs for one cumulative tax calculation.
///
/// Year-to-date figures are accumulated by the caller from persisted payroll
/// records; the engine performs no I/O and trusts the caller to supply the
/// correct history.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriodTaxInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PayPeriodTaxInput {
///     period: 1,
///     gross_pay_ytd: Decimal::from_str("1156.25").unwrap(),
///     tax_code: "1257L".to_string(),
///     tax_paid_ytd: Decimal::ZERO,
/// };
/// assert_eq!(input.period, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodTaxInput {
    /// The pay period index, 1-12, where April is period 1.
    pub period: u32,
    /// Gross pay from the start of the tax year through this period.
    pub gross_pay_ytd: Decimal,
    /// The employee's tax code string (e.g., "1257L", "K497", "BR").
    pub tax_code: String,
    /// Tax already paid from the start of the tax year through the
    /// previous period.
    pub tax_paid_ytd: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_pay_period_tax_input() {
        let json = r#"{
            "period": 10,
            "gross_pay_ytd": "20358.23",
            "tax_code": "1257L",
            "tax_paid_ytd": "2185.80"
        }"#;

        let input: PayPeriodTaxInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.period, 10);
        assert_eq!(input.gross_pay_ytd, dec("20358.23"));
        assert_eq!(input.tax_code, "1257L");
        assert_eq!(input.tax_paid_ytd, dec("2185.80"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let input = PayPeriodTaxInput {
            period: 3,
            gross_pay_ytd: dec("5400.00"),
            tax_code: "K497".to_string(),
            tax_paid_ytd: dec("950.40"),
        };

        let json = serde_json::to_string(&input).unwrap();
        let deserialized: PayPeriodTaxInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }
}
