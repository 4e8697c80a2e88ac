//! Configuration for statutory tax calculation.
//!
//! Tax band thresholds and rates are tax-year-versioned data supplied to the
//! calculators, never hard-coded, so that historical periods can be
//! recalculated against the rules in force at the time.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayeConfig, RegimeMetadata, TaxBands, TaxYearConfig};
