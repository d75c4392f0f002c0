use crate::domain::model::{ConstraintKind, ViolationSet};
use thiserror::Error;

/// Machine-readable service error codes and their message templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ConstraintViolation,
    EntityNotFoundById,
    AuthorConstraintViolation,
}

impl ErrorCode {
    pub fn code(self) -> &'static str {
        match self {
            ErrorCode::ConstraintViolation => "000001",
            ErrorCode::EntityNotFoundById => "000101",
            ErrorCode::AuthorConstraintViolation => "001001",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::ConstraintViolation => "Validation failed",
            ErrorCode::EntityNotFoundById => "Can not find entity by id",
            ErrorCode::AuthorConstraintViolation => {
                "Author has a persistence conflict: name already exists"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Configuration,
    System,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{message}")]
    Validation {
        message: String,
        code: &'static str,
        violations: Vec<String>,
    },

    #[error("{message}")]
    EntityNotFound { message: String, code: &'static str },

    #[error("{message}")]
    EntityConflict { message: String, code: &'static str },

    #[error("Checker already registered for constraint kind '{kind}'")]
    DuplicateChecker { kind: ConstraintKind },

    #[error("Operation '{operation}' of {target} declares {expected} parameters but was called with {actual}")]
    ArityMismatch {
        target: &'static str,
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ServiceError {
    /// Aggregates every violation of one call into a single failure.
    pub fn constraint_violation(violations: &ViolationSet) -> Self {
        let descriptions: Vec<String> = violations
            .iter()
            .map(|violation| violation.description().to_string())
            .collect();
        ServiceError::Validation {
            message: format!(
                "{}: [{}]",
                ErrorCode::ConstraintViolation.message(),
                descriptions.join(", ")
            ),
            code: ErrorCode::ConstraintViolation.code(),
            violations: descriptions,
        }
    }

    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        ServiceError::EntityNotFound {
            message: format!("Can not find {} by id: {}", entity, id),
            code: ErrorCode::EntityNotFoundById.code(),
        }
    }

    pub fn conflict(code: ErrorCode) -> Self {
        ServiceError::EntityConflict {
            message: code.message().to_string(),
            code: code.code(),
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            ServiceError::Validation { code, .. }
            | ServiceError::EntityNotFound { code, .. }
            | ServiceError::EntityConflict { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::Validation { .. } => ErrorCategory::Validation,
            ServiceError::EntityNotFound { .. } => ErrorCategory::NotFound,
            ServiceError::EntityConflict { .. } => ErrorCategory::Conflict,
            ServiceError::DuplicateChecker { .. }
            | ServiceError::ArityMismatch { .. }
            | ServiceError::InvalidConfigValue { .. }
            | ServiceError::ConfigError { .. } => ErrorCategory::Configuration,
            ServiceError::IoError(_) | ServiceError::Internal { .. } => ErrorCategory::System,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation { .. })
    }
}

/// Raised by a field accessor that cannot produce a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field '{field}' of {type_name} could not be read: {reason}")]
pub struct FieldAccessError {
    pub type_name: &'static str,
    pub field: &'static str,
    pub reason: String,
}

impl FieldAccessError {
    pub fn new(type_name: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            type_name,
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
