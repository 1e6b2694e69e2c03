//! Core data models for the employee business-rule engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employee;
mod matricule;

pub use audit::AuditStep;
pub use employee::{EducationLevel, Employee};
pub use matricule::{MAX_MATRICULE_NUMBER, Matricule, Role};
