//! Configuration types for the company rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{EducationLevel, Role};

/// Company-wide figures every calculation reads.
///
/// `Default` yields the standard figures the bundled configuration ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConstants {
    /// Monthly base salary before role, diploma and part-time factors.
    pub base_salary: Decimal,
    /// Performance score every employee starts with and never drops below.
    pub base_performance: i32,
    /// Paid-leave days granted before seniority days.
    pub base_leave_days: u32,
    /// Statutory ceiling of worked days under a fixed-day agreement.
    pub forfeit_day_ceiling: u32,
    /// Annual bonus before multipliers.
    pub base_annual_bonus: Decimal,
    /// Multiplier applied to the base bonus for managers.
    pub manager_bonus_multiplier: Decimal,
    /// Added to the performance score to index the bonus of above-base performers.
    pub performance_bonus_index: Decimal,
    /// Bonus added per year of seniority.
    pub seniority_bonus_per_year: Decimal,
}

impl Default for CompanyConstants {
    fn default() -> Self {
        Self {
            base_salary: Decimal::new(152_122, 2),
            base_performance: 1,
            base_leave_days: 25,
            forfeit_day_ceiling: 218,
            base_annual_bonus: Decimal::new(1000, 0),
            manager_bonus_multiplier: Decimal::new(17, 1),
            performance_bonus_index: Decimal::new(3, 1),
            seniority_bonus_per_year: Decimal::new(100, 0),
        }
    }
}

/// Starting salary coefficients by diploma, with optional per-role overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryGrid {
    /// Coefficient applied to the base salary for each education level.
    pub education: HashMap<EducationLevel, Decimal>,
    /// Role-specific coefficients taking precedence over `education`.
    #[serde(default)]
    pub role_overrides: HashMap<Role, HashMap<EducationLevel, Decimal>>,
}

impl SalaryGrid {
    /// Returns the salary coefficient for a role and education level.
    ///
    /// A role override wins over the education coefficient.
    pub fn coefficient(&self, role: Role, education: EducationLevel) -> Option<Decimal> {
        self.role_overrides
            .get(&role)
            .and_then(|levels| levels.get(&education))
            .or_else(|| self.education.get(&education))
            .copied()
    }
}

impl Default for SalaryGrid {
    fn default() -> Self {
        let education = HashMap::from([
            (EducationLevel::Cap, Decimal::new(10, 1)),
            (EducationLevel::Bac, Decimal::new(11, 1)),
            (EducationLevel::BtsIut, Decimal::new(12, 1)),
            (EducationLevel::Licence, Decimal::new(12, 1)),
            (EducationLevel::Master, Decimal::new(14, 1)),
            (EducationLevel::Engineer, Decimal::new(16, 1)),
        ]);
        Self {
            education,
            role_overrides: HashMap::new(),
        }
    }
}

/// The complete company configuration.
///
/// Passed by reference into every calculation so tests can substitute
/// figures without touching process-wide state.
///
/// # Example
///
/// ```
/// use hr_engine::config::CompanyConfig;
///
/// let config = CompanyConfig::default();
/// assert_eq!(config.constants().base_leave_days, 25);
/// assert_eq!(config.constants().forfeit_day_ceiling, 218);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyConfig {
    constants: CompanyConstants,
    salary_grid: SalaryGrid,
}

impl CompanyConfig {
    /// Creates a new CompanyConfig from its component parts.
    pub fn new(constants: CompanyConstants, salary_grid: SalaryGrid) -> Self {
        Self {
            constants,
            salary_grid,
        }
    }

    /// Returns the company-wide constants.
    pub fn constants(&self) -> &CompanyConstants {
        &self.constants
    }

    /// Returns the starting salary grid.
    pub fn salary_grid(&self) -> &SalaryGrid {
        &self.salary_grid
    }
}
