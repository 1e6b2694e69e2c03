//! Employee persistence contract and an in-memory implementation.
//!
//! The service only needs four operations from storage. Implementations hold
//! no business rules.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Storage of employee records, keyed by matricule.
pub trait EmployeeRepository: Send + Sync {
    /// Returns the highest sequence number allocated across all roles, as a
    /// zero-padded numeric string, or `None` when no employee exists.
    fn find_last_matricule(&self) -> EngineResult<Option<String>>;

    /// Looks up an employee by exact matricule.
    fn find_by_matricule(&self, matricule: &str) -> EngineResult<Option<Employee>>;

    /// Inserts or replaces the record under its matricule and returns the stored value.
    fn save(&self, employee: Employee) -> EngineResult<Employee>;

    /// Removes every record.
    fn delete_all(&self) -> EngineResult<()>;
}

/// A thread-safe, process-local employee store.
///
/// # Example
///
/// ```
/// use hr_engine::service::{EmployeeRepository, InMemoryEmployeeRepository};
///
/// let repository = InMemoryEmployeeRepository::new();
/// assert_eq!(repository.find_last_matricule().unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<BTreeMap<String, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given employees.
    pub fn with_employees<I: IntoIterator<Item = Employee>>(employees: I) -> Self {
        let records = employees
            .into_iter()
            .map(|employee| (employee.matricule.to_string(), employee))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Returns the number of stored employees.
    pub fn len(&self) -> EngineResult<usize> {
        Ok(self.records.read().map_err(poisoned)?.len())
    }

    /// Returns true if no employee is stored.
    pub fn is_empty(&self) -> EngineResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> EngineError {
    EngineError::Repository {
        message: "employee store lock poisoned".to_string(),
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_last_matricule(&self) -> EngineResult<Option<String>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .values()
            .map(|employee| employee.matricule.number())
            .max()
            .map(|number| format!("{:05}", number)))
    }

    fn find_by_matricule(&self, matricule: &str) -> EngineResult<Option<Employee>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(matricule).cloned())
    }

    fn save(&self, employee: Employee) -> EngineResult<Employee> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(employee.matricule.to_string(), employee.clone());
        Ok(employee)
    }

    fn delete_all(&self) -> EngineResult<()> {
        self.records.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_test_employee(matricule: &str) -> Employee {
        Employee {
            last_name: "Doe".to_string(),
            first_name: "John".to_string(),
            matricule: matricule.parse().unwrap(),
            hire_date: None,
            salary: Some(Decimal::new(152_122, 2)),
            performance: Some(1),
            part_time: Decimal::ONE,
        }
    }

    #[test]
    fn test_last_matricule_spans_roles() {
        let repository = InMemoryEmployeeRepository::with_employees([
            create_test_employee("T00012"),
            create_test_employee("M00345"),
            create_test_employee("C00100"),
        ]);

        assert_eq!(
            repository.find_last_matricule().unwrap(),
            Some("00345".to_string())
        );
    }

    #[test]
    fn test_save_then_find() {
        let repository = InMemoryEmployeeRepository::new();
        repository.save(create_test_employee("C12345")).unwrap();

        let found = repository.find_by_matricule("C12345").unwrap();
        assert_eq!(found.map(|e| e.last_name), Some("Doe".to_string()));
        assert_eq!(repository.find_by_matricule("C12346").unwrap(), None);
    }

    #[test]
    fn test_save_replaces_existing_record() {
        let repository = InMemoryEmployeeRepository::new();
        repository.save(create_test_employee("C12345")).unwrap();

        let mut updated = create_test_employee("C12345");
        updated.performance = Some(8);
        repository.save(updated).unwrap();

        assert_eq!(repository.len().unwrap(), 1);
        assert_eq!(
            repository
                .find_by_matricule("C12345")
                .unwrap()
                .and_then(|e| e.performance),
            Some(8)
        );
    }

    #[test]
    fn test_delete_all_empties_store() {
        let repository = InMemoryEmployeeRepository::with_employees([
            create_test_employee("T00001"),
            create_test_employee("T00002"),
        ]);
        repository.delete_all().unwrap();

        assert!(repository.is_empty().unwrap());
        assert_eq!(repository.find_last_matricule().unwrap(), None);
    }
}
