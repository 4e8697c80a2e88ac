//! Calculation logic for the payroll engine.
//!
//! This module contains all the statutory calculation functions: tax code
//! interpretation, cumulative (year-to-date) income tax, non-cumulative
//! (Week1/Month1) income tax, and sickness entitlement allocation.

mod cumulative_tax;
mod emergency_tax;
mod sickness;
mod tax_code;

pub use cumulative_tax::calculate_cumulative_tax;
pub use emergency_tax::calculate_emergency_tax;
pub use sickness::{MAX_WAITING_DAYS, allocate_entitlements};
pub use tax_code::{FlatRateBand, TaxCode, TaxCodeMode, parse_tax_code};
