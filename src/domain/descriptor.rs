use crate::domain::model::{Constraint, Value};
use crate::utils::error::FieldAccessError;

pub type FieldRead<'a> = Result<Value<'a>, FieldAccessError>;

/// One row of a type's descriptor table.
pub struct FieldDescriptor<T: 'static> {
    pub name: &'static str,
    pub constraints: &'static [Constraint],
    pub read: for<'a> fn(&'a T) -> FieldRead<'a>,
}

/// Static, per-type list of declared fields. Built once as a `static` item.
pub struct TypeDescriptor<T: 'static> {
    pub type_name: &'static str,
    pub fields: &'static [FieldDescriptor<T>],
}

impl<T: 'static> TypeDescriptor<T> {
    /// Reads every field that carries at least one declaration.
    pub fn read<'a>(&self, instance: &'a T) -> Vec<ConstrainedField<'a>> {
        self.fields
            .iter()
            .filter(|field| !field.constraints.is_empty())
            .map(|field| ConstrainedField {
                name: field.name,
                constraints: field.constraints,
                value: (field.read)(instance),
            })
            .collect()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A field value read from a live instance, with its declarations.
#[derive(Debug)]
pub struct ConstrainedField<'a> {
    pub name: &'static str,
    pub constraints: &'static [Constraint],
    pub value: FieldRead<'a>,
}

/// A parameter position in an operation signature.
#[derive(Debug, Clone, Copy)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub constraints: &'static [Constraint],
}

impl ParameterDescriptor {
    pub fn is_constrained(&self) -> bool {
        !self.constraints.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub parameters: &'static [ParameterDescriptor],
}

impl OperationDescriptor {
    pub fn requires_validation(&self) -> bool {
        self.parameters.iter().any(ParameterDescriptor::is_constrained)
    }
}
