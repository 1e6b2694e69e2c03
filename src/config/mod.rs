//! Configuration loading and management for the business-rule engine.
//!
//! This module provides the company-wide constants and the starting salary
//! grid, either built in or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hr_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/company").unwrap().into_config();
//! println!("Base leave: {} days", config.constants().base_leave_days);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, validate};
pub use types::{CompanyConfig, CompanyConstants, SalaryGrid};
