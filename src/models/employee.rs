//! Employee model and related types.
//!
//! This module defines the Employee struct and EducationLevel enum
//! for representing staff members in the business-rule engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Matricule, Role};

/// The highest diploma held by a new hire. Drives the starting salary coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// CAP vocational certificate.
    Cap,
    /// Baccalauréat.
    Bac,
    /// Two-year technical degree (BTS or DUT/IUT).
    BtsIut,
    /// Bachelor-level degree.
    Licence,
    /// Master's degree.
    Master,
    /// Engineering degree.
    Engineer,
}

impl EducationLevel {
    /// All education levels, lowest first.
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::Cap,
        EducationLevel::Bac,
        EducationLevel::BtsIut,
        EducationLevel::Licence,
        EducationLevel::Master,
        EducationLevel::Engineer,
    ];
}

fn full_time() -> Decimal {
    Decimal::ONE
}

/// Represents one staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Company-wide unique identifier.
    pub matricule: Matricule,
    /// The date the employee was hired, if recorded.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Monthly base salary, if set.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// Performance score. Never below the company base performance.
    #[serde(default)]
    pub performance: Option<i32>,
    /// Fraction of full time worked, in `(0, 1]`.
    #[serde(default = "full_time")]
    pub part_time: Decimal,
}

impl Employee {
    /// Returns the role family encoded in the matricule.
    pub fn role(&self) -> Role {
        self.matricule.role()
    }

    /// Returns true if the employee is a manager.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let manager = Employee {
    ///     last_name: "Doe".to_string(),
    ///     first_name: "Jane".to_string(),
    ///     matricule: "M00001".parse().unwrap(),
    ///     hire_date: None,
    ///     salary: None,
    ///     performance: None,
    ///     part_time: Decimal::ONE,
    /// };
    /// assert!(manager.is_manager());
    /// ```
    pub fn is_manager(&self) -> bool {
        self.role() == Role::Manager
    }

    /// Returns the performance score, or `base` when none is recorded.
    pub fn performance_or(&self, base: i32) -> i32 {
        self.performance.unwrap_or(base)
    }
}
