//! Error types for the employee business-rule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during calculations, hiring and
//! performance updates.

use thiserror::Error;

/// The main error type for the engine.
///
/// All fallible operations return this error type, so callers branch on the
/// variant and its fields rather than on message text.
///
/// # Example
///
/// ```
/// use hr_engine::error::EngineError;
///
/// let error = EngineError::NotFound {
///     matricule: "C00042".to_string(),
/// };
/// assert_eq!(error.to_string(), "No employee found with matricule C00042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot work with.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration field at fault.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// An input was missing, negative or zero where a usable value is required.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was rejected.
        field: String,
        /// A description of why it was rejected.
        message: String,
    },

    /// No employee record exists for the matricule.
    #[error("No employee found with matricule {matricule}")]
    NotFound {
        /// The matricule that was looked up.
        matricule: String,
    },

    /// An employee record already exists under the matricule.
    #[error("An employee with matricule {matricule} already exists")]
    AlreadyExists {
        /// The colliding matricule.
        matricule: String,
    },

    /// The matricule sequence space is exhausted.
    #[error("Matricule sequence exhausted: numbers above {limit} cannot be allocated")]
    CapacityExceeded {
        /// The highest allocatable sequence number.
        limit: u32,
    },

    /// The persistence collaborator failed.
    #[error("Repository error: {message}")]
    Repository {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidArgument`] for the given field.
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
