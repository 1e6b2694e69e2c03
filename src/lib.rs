//! Employee Business-Rule Engine
//!
//! This crate provides the calculation logic attached to an employee record
//! (seniority, paid leave, RTT days, annual bonus, salary increases) and the
//! hiring/performance service that allocates matricules and adjusts commercial
//! performance scores.

#![warn(missing_docs)]

pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
