use crate::domain::descriptor::{ConstrainedField, OperationDescriptor, TypeDescriptor};
use crate::domain::model::{Constraint, Value};
use std::any::TypeId;
use std::fmt;

/// Pure predicate for one constraint kind.
pub trait ConstraintChecker: Send + Sync {
    fn check(&self, value: &Value<'_>, constraint: &Constraint) -> bool;
}

impl<F> ConstraintChecker for F
where
    F: Fn(&Value<'_>, &Constraint) -> bool + Send + Sync,
{
    fn check(&self, value: &Value<'_>, constraint: &Constraint) -> bool {
        self(value, constraint)
    }
}

/// A composite value the validator can descend into.
pub trait Constrained: fmt::Debug {
    fn type_name(&self) -> &'static str;

    /// Identifies the concrete type; paired with the address for cycle detection.
    fn type_key(&self) -> TypeId;

    fn constrained_fields(&self) -> Vec<ConstrainedField<'_>>;
}

/// Types that publish a static descriptor table.
pub trait Described: fmt::Debug + Sized + 'static {
    fn descriptor() -> &'static TypeDescriptor<Self>;
}

impl<T: Described> Constrained for T {
    fn type_name(&self) -> &'static str {
        T::descriptor().type_name
    }

    fn type_key(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn constrained_fields(&self) -> Vec<ConstrainedField<'_>> {
        T::descriptor().read(self)
    }
}

/// Parameter declarations of a service.
///
/// `contract_operations` describes the abstract operations callers dispatch through;
/// `declared_operations` describes the concrete implementation and wins for every
/// operation it lists.
pub trait DeclaresConstraints {
    fn contract_operations() -> &'static [OperationDescriptor] {
        &[]
    }

    fn declared_operations() -> &'static [OperationDescriptor];

    fn target_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
