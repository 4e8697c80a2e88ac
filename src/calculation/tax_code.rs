//! Tax code interpretation.
//!
//! This module parses a tax code string into a signed annual allowance, a
//! monthly free pay figure and a calculation mode. Parsing is pure and
//! stateless; a [`TaxCode`] is derived once per calculation call and never
//! persisted.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TaxBands;
use crate::error::{EngineError, EngineResult};

/// The band a flat-rate tax code is pinned to.
///
/// Flat-rate codes apply a single configured rate to all taxable pay with
/// no banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatRateBand {
    /// `BR`: everything at the basic rate.
    Basic,
    /// `D0`: everything at the higher rate.
    Higher,
    /// `D1`: everything at the additional rate.
    Additional,
}

impl FlatRateBand {
    /// Resolves the concrete percentage from the configured band table.
    pub fn rate_in(&self, bands: &TaxBands) -> Decimal {
        match self {
            FlatRateBand::Basic => bands.basic_rate,
            FlatRateBand::Higher => bands.higher_rate,
            FlatRateBand::Additional => bands.additional_rate,
        }
    }
}

/// How tax is computed for a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxCodeMode {
    /// Progressive band rates applied to taxable pay. Standard suffix
    /// codes, K codes and `0T` all use this mode.
    Banded,
    /// One fixed rate applied to all taxable pay (`BR`, `D0`, `D1`).
    Flat(FlatRateBand),
    /// No tax is ever due (`NT`); a cumulative recalculation refunds any
    /// tax already paid in full.
    NoTax,
}

/// A parsed, normalized tax code.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{TaxCodeMode, parse_tax_code};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let code = parse_tax_code("1257l").unwrap();
/// assert_eq!(code.code, "1257L");
/// assert_eq!(code.mode, TaxCodeMode::Banded);
/// assert_eq!(code.allowance, 12570);
/// // (12570 + 9) / 12 rounded up to the penny
/// assert_eq!(code.monthly_free_pay, Decimal::from_str("1048.25").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxCode {
    /// The canonical uppercase form of the code.
    pub code: String,
    /// The calculation mode for this code.
    pub mode: TaxCodeMode,
    /// The signed annual allowance in whole pounds. Negative for K codes;
    /// zero for flat-rate codes, `0T` and `NT` (`NT` bypasses free-pay
    /// arithmetic entirely).
    pub allowance: i64,
    /// Free pay per monthly period. Negative for K codes, meaning the
    /// amount is added to taxable pay rather than subtracted.
    pub monthly_free_pay: Decimal,
}

/// Parses a tax code string.
///
/// Input is case-insensitive and surrounding whitespace is ignored.
/// Recognized shapes:
///
/// - Special flat codes `BR`, `D0`, `D1` (fixed rate, no free pay)
/// - `NT` (no tax ever)
/// - `0T` (zero allowance, banded rates)
/// - Standard codes: optional digits followed by suffix `L`, `M`, `N` or
///   `T` (e.g. `1257L`), giving `allowance = digits * 10`
/// - K codes: `K` followed by digits (e.g. `K497`), giving a negative
///   allowance
///
/// The monthly free pay for a standard code is
/// `(allowance + 9) / 12` rounded *up* to the nearest penny — the
/// authority's mandated rounding direction, not ordinary rounding. K codes
/// apply the same computation to the allowance magnitude and negate it.
///
/// # Errors
///
/// Returns `InvalidTaxCode` when the string matches none of the
/// recognized patterns (empty strings included).
pub fn parse_tax_code(code: &str) -> EngineResult<TaxCode> {
    let canonical = code.trim().to_uppercase();
    let invalid = || EngineError::InvalidTaxCode {
        code: code.to_string(),
    };

    if canonical.is_empty() || !canonical.is_ascii() {
        return Err(invalid());
    }

    match canonical.as_str() {
        "BR" => return Ok(special(canonical, TaxCodeMode::Flat(FlatRateBand::Basic))),
        "D0" => return Ok(special(canonical, TaxCodeMode::Flat(FlatRateBand::Higher))),
        "D1" => {
            return Ok(special(
                canonical,
                TaxCodeMode::Flat(FlatRateBand::Additional),
            ));
        }
        "NT" => return Ok(special(canonical, TaxCodeMode::NoTax)),
        "0T" => return Ok(special(canonical, TaxCodeMode::Banded)),
        _ => {}
    }

    if let Some(digits) = canonical.strip_prefix('K') {
        let numeric = parse_numeric(digits).ok_or_else(invalid)?;
        let allowance = numeric
            .checked_mul(10)
            .ok_or_else(invalid)?;
        return Ok(TaxCode {
            code: canonical,
            mode: TaxCodeMode::Banded,
            allowance: -allowance,
            monthly_free_pay: -monthly_free_pay(allowance),
        });
    }

    let suffix = canonical
        .chars()
        .next_back()
        .expect("non-empty after the empty check");
    if matches!(suffix, 'L' | 'M' | 'N' | 'T') {
        let digits = &canonical[..canonical.len() - 1];
        // A bare suffix letter is a zero-allowance standard code.
        let numeric = if digits.is_empty() {
            Some(0)
        } else {
            parse_numeric(digits)
        };
        if let Some(numeric) = numeric {
            let allowance = numeric.checked_mul(10).ok_or_else(invalid)?;
            return Ok(TaxCode {
                code: canonical,
                mode: TaxCodeMode::Banded,
                allowance,
                monthly_free_pay: monthly_free_pay(allowance),
            });
        }
    }

    Err(invalid())
}

/// Builds a special code with no free pay.
fn special(code: String, mode: TaxCodeMode) -> TaxCode {
    TaxCode {
        code,
        mode,
        allowance: 0,
        monthly_free_pay: Decimal::ZERO,
    }
}

/// Parses the numeric part of a code. All-digit strings only.
fn parse_numeric(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Monthly free pay for a non-negative annual allowance in whole pounds.
///
/// `(allowance + 9) / 12`, rounded up to the next penny.
fn monthly_free_pay(allowance: i64) -> Decimal {
    let annual_free_pay = Decimal::from(allowance + 9);
    (annual_free_pay / Decimal::from(12))
        .round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
}
