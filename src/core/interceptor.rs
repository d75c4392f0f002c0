//! Argument validation in front of service operations.
//!
//! Each call moves `Validating -> Rejected` or `Validating -> Delegating`. A rejected call never
//! reaches the wrapped operation and reports every violation of every parameter at once.

use crate::core::validator::ObjectGraphValidator;
use crate::domain::descriptor::{OperationDescriptor, ParameterDescriptor};
use crate::domain::model::{Value, ViolationSet};
use crate::domain::ports::DeclaresConstraints;
use crate::utils::error::{Result, ServiceError};
use std::collections::HashMap;

/// Outcome of the validating state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Delegate,
    Reject(ViolationSet),
}

#[derive(Debug, Clone)]
pub struct CallInterceptor {
    target: &'static str,
    validator: ObjectGraphValidator,
    operations: HashMap<&'static str, &'static [ParameterDescriptor]>,
}

impl CallInterceptor {
    /// Resolves `T`'s parameter declarations once.
    pub fn for_target<T: DeclaresConstraints>(validator: ObjectGraphValidator) -> Self {
        Self::from_declarations(
            T::target_name(),
            T::contract_operations(),
            T::declared_operations(),
            validator,
        )
    }

    /// Implementation declarations replace contract declarations operation by operation.
    pub fn from_declarations(
        target: &'static str,
        contract: &'static [OperationDescriptor],
        implementation: &'static [OperationDescriptor],
        validator: ObjectGraphValidator,
    ) -> Self {
        let mut operations = HashMap::new();
        for operation in contract.iter().chain(implementation) {
            operations.insert(operation.name, operation.parameters);
        }
        tracing::debug!(
            target_type = target,
            operations = operations.len(),
            "resolved parameter constraints"
        );
        Self {
            target,
            validator,
            operations,
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn parameters(&self, operation: &str) -> Option<&'static [ParameterDescriptor]> {
        self.operations.get(operation).copied()
    }

    pub fn requires_validation(&self, operation: &str) -> bool {
        self.parameters(operation)
            .is_some_and(|parameters| parameters.iter().any(ParameterDescriptor::is_constrained))
    }

    pub fn evaluate(&self, operation: &str, args: &[Value<'_>]) -> Result<Verdict> {
        let Some(parameters) = self.parameters(operation) else {
            return Ok(Verdict::Delegate);
        };
        if !parameters.iter().any(ParameterDescriptor::is_constrained) {
            return Ok(Verdict::Delegate);
        }
        if parameters.len() != args.len() {
            return Err(ServiceError::ArityMismatch {
                target: self.target,
                operation: operation.to_string(),
                expected: parameters.len(),
                actual: args.len(),
            });
        }

        let mut violations = ViolationSet::new();
        for (parameter, arg) in parameters.iter().zip(args) {
            if parameter.is_constrained() {
                violations.extend(self.validator.validate(arg, parameter.constraints));
            }
        }

        if violations.is_empty() {
            Ok(Verdict::Delegate)
        } else {
            Ok(Verdict::Reject(violations))
        }
    }

    /// Runs validation only; `Err` carries the aggregated failure.
    pub fn before(&self, operation: &str, args: &[Value<'_>]) -> Result<()> {
        match self.evaluate(operation, args)? {
            Verdict::Delegate => Ok(()),
            Verdict::Reject(violations) => {
                tracing::info!(
                    target_type = self.target,
                    operation = operation,
                    violations = violations.len(),
                    "call rejected by constraint validation"
                );
                Err(ServiceError::constraint_violation(&violations))
            }
        }
    }

    pub fn intercept<R, F>(&self, operation: &str, args: &[Value<'_>], proceed: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        self.before(operation, args)?;
        tracing::trace!(target_type = self.target, operation = operation, "delegating");
        proceed()
    }
}

/// Decorator owning a service and the interceptor built for its concrete type.
#[derive(Debug)]
pub struct Validated<S> {
    inner: S,
    interceptor: CallInterceptor,
}

impl<S: DeclaresConstraints> Validated<S> {
    pub fn new(inner: S, validator: ObjectGraphValidator) -> Self {
        let interceptor = CallInterceptor::for_target::<S>(validator);
        Self { inner, interceptor }
    }

    pub fn with_default_validator(inner: S) -> Self {
        Self::new(inner, ObjectGraphValidator::default())
    }
}

impl<S> Validated<S> {
    pub fn call<R, F>(&self, operation: &str, args: &[Value<'_>], proceed: F) -> Result<R>
    where
        F: FnOnce(&S) -> Result<R>,
    {
        self.interceptor
            .intercept(operation, args, || proceed(&self.inner))
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn interceptor(&self) -> &CallInterceptor {
        &self.interceptor
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::CheckerRegistry;
    use crate::domain::model::Constraint;
    use std::cell::Cell;
    use std::sync::Arc;

    static CONTRACT: &[OperationDescriptor] = &[
        OperationDescriptor {
            name: "find",
            parameters: &[ParameterDescriptor {
                name: "id",
                constraints: &[Constraint::NotNull, Constraint::Min(1)],
            }],
        },
        OperationDescriptor {
            name: "rename",
            parameters: &[
                ParameterDescriptor {
                    name: "id",
                    constraints: &[Constraint::Min(1)],
                },
                ParameterDescriptor {
                    name: "name",
                    constraints: &[Constraint::Size { min: 3, max: 5 }],
                },
            ],
        },
        OperationDescriptor {
            name: "list",
            parameters: &[ParameterDescriptor {
                name: "limit",
                constraints: &[],
            }],
        },
    ];

    static RELAXED: &[OperationDescriptor] = &[OperationDescriptor {
        name: "find",
        parameters: &[ParameterDescriptor {
            name: "id",
            constraints: &[],
        }],
    }];

    fn validator() -> ObjectGraphValidator {
        ObjectGraphValidator::new(Arc::new(CheckerRegistry::with_builtin_checkers().unwrap()))
    }

    fn interceptor() -> CallInterceptor {
        CallInterceptor::from_declarations("Repo", CONTRACT, &[], validator())
    }

    #[test]
    fn test_rejects_before_delegating() {
        let called = Cell::new(false);
        let result = interceptor().intercept("find", &[Value::Int(0)], || {
            called.set(true);
            Ok(())
        });

        let err = result.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.code(), Some("000001"));
        assert!(!called.get());

        let err = interceptor().before("find", &[Value::Null]).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: [not-null constraint violated]");
    }

    #[test]
    fn test_delegates_and_returns_result_unchanged() {
        let result = interceptor().intercept("find", &[Value::Int(4)], || Ok(42));
        assert_eq!(result.unwrap(), 42);

        let failure: Result<()> =
            interceptor().intercept("find", &[Value::Int(4)], || Err(ServiceError::not_found("x", 4)));
        assert!(matches!(failure, Err(ServiceError::EntityNotFound { .. })));
    }

    #[test]
    fn test_violations_from_all_parameters_are_aggregated() {
        let verdict = interceptor()
            .evaluate("rename", &[Value::Int(-1), Value::Text("toolong")])
            .unwrap();
        match verdict {
            Verdict::Reject(violations) => assert_eq!(violations.len(), 2),
            Verdict::Delegate => panic!("expected rejection"),
        }

        let err = interceptor()
            .before("rename", &[Value::Int(-1), Value::Text("toolong")])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: [Constraint 'Min' violated for the value '-1', \
             Constraint 'Size' violated for the value 'toolong']"
        );
        match err {
            ServiceError::Validation { violations, .. } => assert_eq!(
                violations,
                vec![
                    "Constraint 'Min' violated for the value '-1'".to_string(),
                    "Constraint 'Size' violated for the value 'toolong'".to_string(),
                ]
            ),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_unconstrained_and_unknown_operations_delegate() {
        let interceptor = interceptor();
        assert!(!interceptor.requires_validation("list"));
        assert!(!interceptor.requires_validation("unknown"));
        assert_eq!(interceptor.evaluate("list", &[]).unwrap(), Verdict::Delegate);
        assert_eq!(interceptor.evaluate("unknown", &[Value::Null]).unwrap(), Verdict::Delegate);
    }

    #[test]
    fn test_implementation_declarations_override_contract() {
        let interceptor = CallInterceptor::from_declarations("RelaxedRepo", CONTRACT, RELAXED, validator());
        assert!(!interceptor.requires_validation("find"));
        assert!(interceptor.before("find", &[Value::Null]).is_ok());
        // not redeclared, so the contract still applies
        assert!(interceptor.before("rename", &[Value::Int(0), Value::Text("abc")]).is_err());
    }

    #[test]
    fn test_arity_mismatch_is_a_configuration_error() {
        let err = interceptor().before("rename", &[Value::Int(1)]).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::ArityMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }
}
