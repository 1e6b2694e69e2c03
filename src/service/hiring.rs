//! Hiring and performance workflow.
//!
//! This module provides [`HiringPerformanceService`], which allocates
//! matricules for new hires and updates stored employee records from
//! salary and sales decisions.

use std::sync::Mutex;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    AnnualBonusResult, PerformanceAdjustment, calculate_annual_bonus,
    calculate_commercial_performance, increase_salary, starting_salary,
};
use crate::config::CompanyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{EducationLevel, Employee, Matricule, Role};

use super::clock::{Clock, SystemClock};
use super::repository::EmployeeRepository;

/// Hires employees and maintains their salary and performance records.
///
/// Matricule allocation (read last number, compute next, check, save) runs
/// under an internal lock, so concurrent callers sharing one service never
/// compute the same matricule. Storage shared between several services needs
/// its own transaction around [`EmployeeRepository::save`].
///
/// # Example
///
/// ```
/// use hr_engine::config::CompanyConfig;
/// use hr_engine::models::{EducationLevel, Role};
/// use hr_engine::service::{FixedClock, HiringPerformanceService, InMemoryEmployeeRepository};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let service = HiringPerformanceService::new(
///     InMemoryEmployeeRepository::new(),
///     CompanyConfig::default(),
///     FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()),
/// );
///
/// let employee = service
///     .hire("Doe", "Jane", Role::Manager, EducationLevel::Master, Decimal::new(5, 1))
///     .unwrap();
/// assert_eq!(employee.matricule.to_string(), "M00001");
/// assert_eq!(employee.salary, Some(Decimal::new(106_485, 2)));
/// ```
#[derive(Debug)]
pub struct HiringPerformanceService<R, C = SystemClock> {
    repository: R,
    config: CompanyConfig,
    clock: C,
    allocation_lock: Mutex<()>,
}

impl<R: EmployeeRepository, C: Clock> HiringPerformanceService<R, C> {
    /// Creates a service over the given repository, configuration and clock.
    pub fn new(repository: R, config: CompanyConfig, clock: C) -> Self {
        Self {
            repository,
            config,
            clock,
            allocation_lock: Mutex::new(()),
        }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Hires a new employee and persists the record.
    ///
    /// The matricule is the role letter followed by the next sequence number
    /// after the highest one allocated. The starting salary is the base salary
    /// times the role/education coefficient times `part_time`, rounded to cents.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `part_time` is outside `(0, 1]` or the education
    ///   level has no salary coefficient
    /// - `CapacityExceeded` if the next sequence number is above 99999
    /// - `AlreadyExists` if a record already holds the computed matricule
    /// - `Repository` if storage fails
    pub fn hire(
        &self,
        last_name: &str,
        first_name: &str,
        role: Role,
        education: EducationLevel,
        part_time: Decimal,
    ) -> EngineResult<Employee> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            role = %role,
            education = ?education,
            part_time = %part_time,
            "Processing hire"
        );

        let salary = starting_salary(&self.config, role, education, part_time)
            .inspect_err(|err| warn!(correlation_id = %correlation_id, error = %err, "Hire rejected"))?;

        let _allocation = self.allocation_lock.lock().map_err(|_| EngineError::Repository {
            message: "matricule allocation lock poisoned".to_string(),
        })?;

        let matricule = self
            .next_matricule(role)
            .inspect_err(|err| warn!(correlation_id = %correlation_id, error = %err, "Hire rejected"))?;
        debug!(correlation_id = %correlation_id, matricule = %matricule, "Allocated matricule");

        let reject = |err: &EngineError| {
            warn!(correlation_id = %correlation_id, error = %err, "Hire rejected");
        };

        if self
            .repository
            .find_by_matricule(&matricule.to_string())
            .inspect_err(reject)?
            .is_some()
        {
            warn!(
                correlation_id = %correlation_id,
                matricule = %matricule,
                "Matricule already in use"
            );
            return Err(EngineError::AlreadyExists {
                matricule: matricule.to_string(),
            });
        }

        let employee = Employee {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            matricule,
            hire_date: Some(self.clock.today()),
            salary: Some(salary),
            performance: Some(self.config.constants().base_performance),
            part_time,
        };
        let saved = self.repository.save(employee).inspect_err(reject)?;

        info!(
            correlation_id = %correlation_id,
            matricule = %saved.matricule,
            salary = %salary,
            "Employee hired"
        );
        Ok(saved)
    }

    /// Computes the matricule following the highest allocated sequence number.
    fn next_matricule(&self, role: Role) -> EngineResult<Matricule> {
        let last = match self.repository.find_last_matricule()? {
            None => 0,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| EngineError::Repository {
                    message: format!("last matricule '{}' is not a sequence number", raw),
                })?,
        };

        Matricule::new(role, last.saturating_add(1))
    }

    /// Adjusts a commercial employee's performance from their sales results.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `matricule` does not start with `C`, or either
    ///   revenue figure is negative (checked in that order)
    /// - `NotFound` if no record exists for `matricule`
    /// - `Repository` if storage fails
    pub fn adjust_commercial_performance(
        &self,
        matricule: &str,
        revenue_handled: Decimal,
        revenue_target: Decimal,
    ) -> EngineResult<PerformanceAdjustment> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            matricule = %matricule,
            revenue_handled = %revenue_handled,
            revenue_target = %revenue_target,
            "Processing performance adjustment"
        );

        validate_performance_inputs(matricule, revenue_handled, revenue_target)
            .inspect_err(|err| warn!(correlation_id = %correlation_id, error = %err, "Performance adjustment rejected"))?;

        let mut employee = self.find_existing(matricule, correlation_id)?;

        let adjustment = calculate_commercial_performance(
            employee.performance,
            revenue_handled,
            revenue_target,
            &self.config,
        );
        employee.performance = Some(adjustment.updated);
        self.repository.save(employee)?;

        info!(
            correlation_id = %correlation_id,
            matricule = %matricule,
            band = ?adjustment.band,
            previous = adjustment.previous,
            updated = adjustment.updated,
            "Performance adjusted"
        );
        Ok(adjustment)
    }

    /// Applies a salary increase to a stored employee and persists it.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record exists for `matricule`
    /// - `InvalidArgument` as for [`increase_salary`]; the stored record is unchanged
    pub fn increase_salary(&self, matricule: &str, percentage: Decimal) -> EngineResult<Employee> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            matricule = %matricule,
            percentage = %percentage,
            "Processing salary increase"
        );

        let mut employee = self.find_existing(matricule, correlation_id)?;
        increase_salary(&mut employee, percentage)
            .inspect_err(|err| warn!(correlation_id = %correlation_id, error = %err, "Salary increase rejected"))?;
        let saved = self.repository.save(employee)?;

        info!(
            correlation_id = %correlation_id,
            matricule = %matricule,
            salary = ?saved.salary,
            "Salary increased"
        );
        Ok(saved)
    }

    /// Returns the annual bonus of a stored employee as of today.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record exists for `matricule`
    pub fn annual_bonus(&self, matricule: &str) -> EngineResult<AnnualBonusResult> {
        let correlation_id = Uuid::new_v4();
        let employee = self.find_existing(matricule, correlation_id)?;
        let result = calculate_annual_bonus(&employee, &self.config, self.clock.today());

        debug!(
            correlation_id = %correlation_id,
            matricule = %matricule,
            amount = %result.amount,
            "Annual bonus computed"
        );
        Ok(result)
    }

    fn find_existing(&self, matricule: &str, correlation_id: Uuid) -> EngineResult<Employee> {
        self.repository.find_by_matricule(matricule)?.ok_or_else(|| {
            warn!(correlation_id = %correlation_id, matricule = %matricule, "Employee not found");
            EngineError::NotFound {
                matricule: matricule.to_string(),
            }
        })
    }
}

fn validate_performance_inputs(
    matricule: &str,
    revenue_handled: Decimal,
    revenue_target: Decimal,
) -> EngineResult<()> {
    if !matricule.starts_with(Role::Commercial.letter()) {
        return Err(EngineError::invalid_argument(
            "matricule",
            format!(
                "must be set and start with '{}', got '{}'",
                Role::Commercial.letter(),
                matricule
            ),
        ));
    }
    if revenue_handled < Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "revenue_handled",
            "revenue handled must not be negative",
        ));
    }
    if revenue_target < Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "revenue_target",
            "revenue target must not be negative",
        ));
    }
    Ok(())
}
