//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_input;
mod sickness;
mod tax_result;

pub use pay_input::PayPeriodTaxInput;
pub use sickness::{
    EligibilityRule, Entitlement, EntitlementAllocation, EntitlementUnit, SicknessRecord,
    SicknessScheme,
};
pub use tax_result::TaxResult;
