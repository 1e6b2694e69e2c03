//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::EducationLevel;

use super::types::{CompanyConfig, CompanyConstants, SalaryGrid};

/// The largest day count a calendar year can hold.
const MAX_DAYS_IN_YEAR: u32 = 366;

/// Loads and provides access to company configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/company/
/// ├── company.yaml      # Company-wide constants
/// └── salary_grid.yaml  # Starting salary coefficients
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/company")?;
/// println!("Base salary: {}", loader.config().constants().base_salary);
/// # Ok::<(), hr_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CompanyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let constants = Self::load_yaml::<CompanyConstants>(&path.join("company.yaml"))?;
        let salary_grid = Self::load_yaml::<SalaryGrid>(&path.join("salary_grid.yaml"))?;

        let config = CompanyConfig::new(constants, salary_grid);
        validate(&config)?;

        tracing::debug!(path = %path.display(), "Loaded company configuration");

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

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CompanyConfig {
        self.config
    }
}

/// Checks that a configuration holds values the calculations can work with.
///
/// # Example
///
/// ```
/// use hr_engine::config::{validate, CompanyConfig};
///
/// assert!(validate(&CompanyConfig::default()).is_ok());
/// ```
pub fn validate(config: &CompanyConfig) -> EngineResult<()> {
    let constants = config.constants();

    let non_negative = [
        ("base_salary", constants.base_salary),
        ("base_annual_bonus", constants.base_annual_bonus),
        ("manager_bonus_multiplier", constants.manager_bonus_multiplier),
        ("performance_bonus_index", constants.performance_bonus_index),
        ("seniority_bonus_per_year", constants.seniority_bonus_per_year),
    ];
    for (field, value) in non_negative {
        if value < Decimal::ZERO {
            return Err(invalid(field, format!("must not be negative, got {}", value)));
        }
    }

    if constants.forfeit_day_ceiling > MAX_DAYS_IN_YEAR {
        return Err(invalid(
            "forfeit_day_ceiling",
            format!("cannot exceed {} days", MAX_DAYS_IN_YEAR),
        ));
    }
    if constants.base_leave_days > MAX_DAYS_IN_YEAR {
        return Err(invalid(
            "base_leave_days",
            format!("cannot exceed {} days", MAX_DAYS_IN_YEAR),
        ));
    }

    let grid = config.salary_grid();
    for level in EducationLevel::ALL {
        match grid.education.get(&level) {
            None => {
                return Err(invalid(
                    "salary_grid.education",
                    format!("no coefficient for {:?}", level),
                ));
            }
            Some(coefficient) if *coefficient <= Decimal::ZERO => {
                return Err(invalid(
                    "salary_grid.education",
                    format!("coefficient for {:?} must be positive", level),
                ));
            }
            Some(_) => {}
        }
    }
    for (role, levels) in &grid.role_overrides {
        if let Some((level, _)) = levels.iter().find(|(_, c)| **c <= Decimal::ZERO) {
            return Err(invalid(
                "salary_grid.role_overrides",
                format!("coefficient for {} / {:?} must be positive", role, level),
            ));
        }
    }

    Ok(())
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/company"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().constants().base_salary, dec("1521.22"));
        assert_eq!(loader.config().constants().forfeit_day_ceiling, 218);
    }

    #[test]
    fn test_bundled_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.into_config(), CompanyConfig::default());
    }

    #[test]
    fn test_bundled_salary_grid() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let grid = loader.config().salary_grid();

        assert_eq!(
            grid.coefficient(Role::Technician, EducationLevel::BtsIut),
            Some(dec("1.2"))
        );
        assert_eq!(
            grid.coefficient(Role::Manager, EducationLevel::Master),
            Some(dec("1.4"))
        );
        assert_eq!(
            grid.coefficient(Role::Commercial, EducationLevel::Engineer),
            Some(dec("1.6"))
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::load("./tests/fixtures/malformed_config");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_negative_salary_returns_invalid_config() {
        let result = ConfigLoader::load("./tests/fixtures/negative_salary_config");

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "base_salary");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_ceiling_beyond_year() {
        let constants = CompanyConstants {
            forfeit_day_ceiling: 400,
            ..CompanyConstants::default()
        };
        let config = CompanyConfig::new(constants, SalaryGrid::default());

        match validate(&config) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "forfeit_day_ceiling");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_incomplete_grid() {
        let mut grid = SalaryGrid::default();
        grid.education.remove(&EducationLevel::Licence);
        let config = CompanyConfig::new(CompanyConstants::default(), grid);

        match validate(&config) {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "salary_grid.education");
                assert!(message.contains("Licence"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_override() {
        let mut grid = SalaryGrid::default();
        grid.role_overrides.insert(
            Role::Manager,
            HashMap::from([(EducationLevel::Master, Decimal::ZERO)]),
        );
        let config = CompanyConfig::new(CompanyConstants::default(), grid);

        assert!(matches!(
            validate(&config),
            Err(EngineError::InvalidConfig { .. })
        ));
    }
}
