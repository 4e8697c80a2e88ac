//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading PAYE band
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PayeConfig, RegimeMetadata, TaxBands, TaxYearConfig};

/// Loads and provides access to PAYE configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query the band table in force on a given date.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/uk-paye/
/// ├── regime.yaml          # Regime metadata
/// └── tax_years/
///     ├── 2023-24.yaml     # Bands effective from 6 April 2023
///     └── 2024-25.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/uk-paye").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
/// let bands = loader.bands_for(date).unwrap();
/// println!("Basic rate: {}", bands.basic_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/uk-paye")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load regime.yaml
        let regime_path = path.join("regime.yaml");
        let metadata = Self::load_yaml::<RegimeMetadata>(&regime_path)?;

        // Load all band tables from the tax_years directory
        let tax_years_dir = path.join("tax_years");
        let tax_years = Self::load_tax_years(&tax_years_dir)?;

        info!(
            regime = %metadata.name,
            tax_years = tax_years.len(),
            "loaded PAYE configuration"
        );

        let config = PayeConfig::new(metadata, tax_years);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all band tables from the tax_years directory.
    fn load_tax_years(tax_years_dir: &Path) -> EngineResult<Vec<TaxYearConfig>> {
        let dir_str = tax_years_dir.display().to_string();

        if !tax_years_dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(tax_years_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tax_years = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let tax_year = Self::load_yaml::<TaxYearConfig>(&path)?;
                tax_years.push(tax_year);
            }
        }

        if tax_years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax year files found)", dir_str),
            });
        }

        Ok(tax_years)
    }

    /// Returns the underlying PAYE configuration.
    pub fn config(&self) -> &PayeConfig {
        &self.config
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        self.config.regime()
    }

    /// Gets the tax year configuration in force on a given date.
    ///
    /// The method finds the most recent tax year whose effective date is on
    /// or before the given date.
    ///
    /// # Errors
    ///
    /// Returns `TaxYearNotFound` when the date predates every configured
    /// tax year.
    pub fn tax_year_for(&self, date: NaiveDate) -> EngineResult<&TaxYearConfig> {
        self.config
            .tax_year_for(date)
            .ok_or(EngineError::TaxYearNotFound { date })
    }

    /// Gets the band table in force on a given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/uk-paye")?;
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let bands = loader.bands_for(date)?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn bands_for(&self, date: NaiveDate) -> EngineResult<&TaxBands> {
        self.tax_year_for(date).map(|ty| &ty.bands)
    }
}
