//! Statutory Payroll Calculation Engine for UK payroll
//!
//! This crate provides the statutory calculation core of a UK payroll system:
//! PAYE income tax on the cumulative and non-cumulative (Week1/Month1) bases,
//! and tiered sickness entitlement allocation over a rolling 12-month window.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
