//! Hiring and performance service.
//!
//! This module provides the workflow that allocates matricules for new hires
//! and updates stored employee records, together with the collaborators it
//! depends on: the employee repository and the clock.

mod clock;
mod hiring;
mod repository;

pub use clock::{Clock, FixedClock, SystemClock};
pub use hiring::HiringPerformanceService;
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository};
