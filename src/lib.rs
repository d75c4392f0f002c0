pub mod config;
pub mod core;
pub mod domain;
pub mod service;
pub mod utils;

pub use crate::config::GuardConfig;
pub use crate::core::{
    interceptor::{CallInterceptor, Validated, Verdict},
    registry::CheckerRegistry,
    validator::{ObjectGraphValidator, ValidationSettings},
};
pub use crate::domain::descriptor::{
    ConstrainedField, FieldDescriptor, FieldRead, OperationDescriptor, ParameterDescriptor,
    TypeDescriptor,
};
pub use crate::domain::model::{
    Constraint, ConstraintKind, ConstraintViolation, Value, ViolationSet, NOT_NULL_VIOLATION,
};
pub use crate::domain::ports::{ConstraintChecker, Constrained, DeclaresConstraints, Described};
pub use crate::utils::error::{ErrorCode, FieldAccessError, Result, ServiceError};
