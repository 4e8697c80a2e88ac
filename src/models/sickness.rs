//! Sickness scheme and absence models.
//!
//! This module defines the company sickness scheme (an ordered table of
//! service-length-based eligibility rules), individual absence records, and
//! the per-record entitlement allocation produced by the engine.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// The unit an entitlement amount is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementUnit {
    /// Calendar days.
    Days,
    /// Weeks of 7 calendar days.
    Weeks,
}

/// An entitlement amount with its unit.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Entitlement;
///
/// assert_eq!(Entitlement::weeks(4).in_days(), 28);
/// assert_eq!(Entitlement::days(10).in_days(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    /// The amount, in `unit`s.
    pub amount: u32,
    /// The unit the amount is expressed in.
    pub unit: EntitlementUnit,
}

impl Entitlement {
    /// Creates an entitlement expressed in calendar days.
    pub fn days(amount: u32) -> Self {
        Self {
            amount,
            unit: EntitlementUnit::Days,
        }
    }

    /// Creates an entitlement expressed in weeks.
    pub fn weeks(amount: u32) -> Self {
        Self {
            amount,
            unit: EntitlementUnit::Weeks,
        }
    }

    /// Converts the entitlement to calendar days.
    ///
    /// Absence records count calendar days, so weeks convert at 7.
    pub fn in_days(&self) -> u32 {
        match self.unit {
            EntitlementUnit::Days => self.amount,
            EntitlementUnit::Weeks => self.amount * 7,
        }
    }
}

/// One tier of a company sickness scheme.
///
/// A rule applies to employees whose service length, in whole months at the
/// absence start date, is at least `min_service_months` and below the next
/// rule's bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRule {
    /// Service-length lower bound for this tier, in whole months.
    pub min_service_months: u32,
    /// Entitlement paid at full rate.
    pub full_pay: Entitlement,
    /// Entitlement paid at half rate, consumed after full-pay entitlement.
    pub half_pay: Entitlement,
    /// Whether unpaid waiting days are deducted at the start of a
    /// non-continuous absence under this tier.
    pub has_waiting_days: bool,
}

/// A company's sickness scheme: an ordered table of eligibility rules.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EligibilityRule, Entitlement, SicknessScheme};
///
/// let scheme = SicknessScheme::new(vec![
///     EligibilityRule {
///         min_service_months: 0,
///         full_pay: Entitlement::days(0),
///         half_pay: Entitlement::days(0),
///         has_waiting_days: false,
///     },
///     EligibilityRule {
///         min_service_months: 12,
///         full_pay: Entitlement::weeks(4),
///         half_pay: Entitlement::weeks(4),
///         has_waiting_days: true,
///     },
/// ]);
///
/// assert_eq!(scheme.rule_for(6).unwrap().min_service_months, 0);
/// assert_eq!(scheme.rule_for(18).unwrap().min_service_months, 12);
/// ```
#[derive(Debug, Clone)]
pub struct SicknessScheme {
    /// Rules sorted by `min_service_months` ascending.
    rules: Vec<EligibilityRule>,
}

impl SicknessScheme {
    /// Creates a scheme from its rules, sorting them by service-length
    /// bound.
    pub fn new(rules: Vec<EligibilityRule>) -> Self {
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|r| r.min_service_months);
        Self {
            rules: sorted_rules,
        }
    }

    /// Returns all rules, lowest service-length bound first.
    pub fn rules(&self) -> &[EligibilityRule] {
        &self.rules
    }

    /// Selects the rule applicable to a service length.
    ///
    /// The applicable rule is the one with the greatest
    /// `min_service_months` not exceeding `service_months`. Returns `None`
    /// when no rule matches (every bound is above the service length, or
    /// the table is empty) so that an unmatched lookup is a visible case,
    /// not a silent zero-entitlement default.
    pub fn rule_for(&self, service_months: u32) -> Option<&EligibilityRule> {
        self.rules
            .iter()
            .rfind(|r| r.min_service_months <= service_months)
    }
}

/// A single absence record.
///
/// Records may be supplied in any order; the engine sorts by start date
/// before allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SicknessRecord {
    /// Caller-supplied identifier for the absence.
    pub id: String,
    /// The first day of the absence.
    pub start_date: NaiveDate,
    /// The last day of the absence, or `None` while it is ongoing.
    pub end_date: Option<NaiveDate>,
    /// Total calendar days of absence.
    pub total_days: u32,
}

impl SicknessRecord {
    /// Returns the last day of the absence.
    ///
    /// For an ongoing record the end is derived from the start date and
    /// the total calendar days recorded so far.
    pub fn effective_end(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(|| {
            self.start_date + Days::new(u64::from(self.total_days.saturating_sub(1)))
        })
    }
}

/// The payment breakdown allocated to one absence record.
///
/// The sum of the three day categories plus waiting days always equals the
/// record's total days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementAllocation {
    /// The id of the record this allocation is for.
    pub record_id: String,
    /// Days paid at full rate.
    pub full_pay_days: u32,
    /// Days paid at half rate.
    pub half_pay_days: u32,
    /// Days with no pay (entitlement exhausted).
    pub no_pay_days: u32,
    /// Unpaid waiting days deducted before entitlement was applied.
    pub waiting_days: u32,
    /// True when the record lies outside the current rolling window and
    /// had no pay impact.
    pub is_historical: bool,
    /// Human-readable summary of the split (e.g. "3 days Full, 2 days No Pay").
    pub description: String,
}
