//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during statutory calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every error
/// is a precondition violation to be fixed by the caller; the engine has
/// no transient failure modes.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidTaxCode {
///     code: "XYZ9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid tax code: XYZ9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No tax year configuration covers the given date.
    #[error("No tax year configuration in force on {date}")]
    TaxYearNotFound {
        /// The date for which band data was requested.
        date: NaiveDate,
    },

    /// The tax code string matches no recognized pattern.
    ///
    /// Callers must not substitute a default code silently, since doing so
    /// would misstate a real deduction.
    #[error("Invalid tax code: {code}")]
    InvalidTaxCode {
        /// The offending code, as supplied by the caller.
        code: String,
    },

    /// The pay period index is outside 1-12.
    #[error("Invalid pay period {period}: must be between 1 and 12")]
    InvalidPeriod {
        /// The offending period index.
        period: u32,
    },

    /// No eligibility rule in the sickness scheme matches a service length.
    ///
    /// This is a configuration error in the scheme's rule table; the engine
    /// fails loudly rather than silently applying a zero-entitlement default.
    #[error("No eligibility rule matches {service_months} months of service on {date}")]
    NoEligibilityRule {
        /// The employee's service length in whole months at the absence date.
        service_months: u32,
        /// The absence start date the lookup was performed for.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
