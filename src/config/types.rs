//! Configuration types for statutory tax calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

/// Metadata about the tax regime.
///
/// Contains identifying information about the statutory regime the band
/// tables were transcribed from, including the authority's source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeMetadata {
    /// The human-readable name of the regime (e.g., "UK PAYE").
    pub name: String,
    /// The jurisdiction the regime applies to.
    pub region: String,
    /// The most recent tax year covered by the shipped tables.
    pub version: String,
    /// URL to the official rates and thresholds documentation.
    pub source_url: String,
}

/// Income tax band rates and thresholds for one tax year.
///
/// Thresholds are annual amounts of *taxable* pay (pay after free pay has
/// been deducted). Taxable pay up to `basic_threshold` is taxed at
/// `basic_rate`, the portion between the two thresholds at `higher_rate`,
/// and the remainder at `additional_rate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBands {
    /// The basic rate (e.g., 0.20).
    pub basic_rate: Decimal,
    /// The higher rate (e.g., 0.40).
    pub higher_rate: Decimal,
    /// The additional rate (e.g., 0.45).
    pub additional_rate: Decimal,
    /// Annual taxable pay above which the higher rate applies.
    pub basic_threshold: Decimal,
    /// Annual taxable pay above which the additional rate applies.
    pub higher_threshold: Decimal,
}

impl TaxBands {
    /// Computes the tax due on an amount of taxable pay.
    ///
    /// Applies the three bands progressively and truncates the result to
    /// the penny (tax is always rounded in the taxpayer's favour).
    ///
    /// # Example
    ///
    /// ```
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
    /// // 40000 taxable: 37700 at 20% + 2300 at 40%
    /// assert_eq!(bands.tax_on(Decimal::from(40000)), Decimal::from_str("8460.00").unwrap());
    /// ```
    pub fn tax_on(&self, taxable_pay: Decimal) -> Decimal {
        let basic_portion = taxable_pay.min(self.basic_threshold).max(Decimal::ZERO);
        let higher_portion = (taxable_pay.min(self.higher_threshold) - self.basic_threshold)
            .max(Decimal::ZERO);
        let additional_portion = (taxable_pay - self.higher_threshold).max(Decimal::ZERO);

        (basic_portion * self.basic_rate
            + higher_portion * self.higher_rate
            + additional_portion * self.additional_rate)
            .round_dp_with_strategy(2, RoundingStrategy::ToZero)
    }

    /// Derives the non-cumulative (Week1/Month1) band table.
    ///
    /// Each annual threshold becomes `floor(annual / 12)`; the rates are
    /// unchanged.
    pub fn monthly(&self) -> TaxBands {
        TaxBands {
            basic_rate: self.basic_rate,
            higher_rate: self.higher_rate,
            additional_rate: self.additional_rate,
            basic_threshold: (self.basic_threshold / Decimal::from(12)).floor(),
            higher_threshold: (self.higher_threshold / Decimal::from(12)).floor(),
        }
    }
}

/// Band configuration for a specific tax year.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearConfig {
    /// The tax year label (e.g., "2023-24").
    pub tax_year: String,
    /// The first day of the tax year (6 April).
    pub effective_date: NaiveDate,
    /// The band rates and thresholds in force for this year.
    pub bands: TaxBands,
}

/// The complete PAYE configuration loaded from YAML files.
///
/// This struct aggregates the regime metadata and all tax year band tables
/// loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct PayeConfig {
    /// Regime metadata.
    metadata: RegimeMetadata,
    /// Band tables by effective date (sorted oldest first).
    tax_years: Vec<TaxYearConfig>,
}

impl PayeConfig {
    /// Creates a new PayeConfig from its component parts.
    pub fn new(metadata: RegimeMetadata, tax_years: Vec<TaxYearConfig>) -> Self {
        let mut sorted_years = tax_years;
        sorted_years.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            tax_years: sorted_years,
        }
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns all tax year configurations, oldest first.
    pub fn tax_years(&self) -> &[TaxYearConfig] {
        &self.tax_years
    }

    /// Returns the tax year configuration in force on a given date.
    ///
    /// The applicable configuration is the most recent one whose effective
    /// date is on or before the given date, or `None` if the date predates
    /// every configured year.
    pub fn tax_year_for(&self, date: NaiveDate) -> Option<&TaxYearConfig> {
        self.tax_years
            .iter()
            .rfind(|ty| ty.effective_date <= date)
    }
}
