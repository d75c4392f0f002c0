pub mod checkers;
pub mod interceptor;
pub mod registry;
pub mod validator;

pub use crate::domain::model::{Constraint, ConstraintKind, ConstraintViolation, Value, ViolationSet};
pub use crate::domain::ports::{ConstraintChecker, Constrained, DeclaresConstraints, Described};
pub use crate::utils::error::Result;
