use crate::domain::ports::Constrained;
use std::collections::BTreeSet;
use std::fmt;

/// Fixed description used when a `NotNull` marker meets an absent value.
pub const NOT_NULL_VIOLATION: &str = "not-null constraint violated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintKind {
    NotNull,
    Valid,
    Min,
    Max,
    Size,
}

impl ConstraintKind {
    /// Kinds backed by a checker. `Valid` is a traversal marker only.
    pub const CATALOG: [ConstraintKind; 4] = [
        ConstraintKind::NotNull,
        ConstraintKind::Min,
        ConstraintKind::Max,
        ConstraintKind::Size,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConstraintKind::NotNull => "NotNull",
            ConstraintKind::Valid => "Valid",
            ConstraintKind::Min => "Min",
            ConstraintKind::Max => "Max",
            ConstraintKind::Size => "Size",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A constraint declaration: a kind plus its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    NotNull,
    Valid,
    Min(i64),
    Max(i64),
    Size { min: usize, max: usize },
}

impl Constraint {
    pub const fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::NotNull => ConstraintKind::NotNull,
            Constraint::Valid => ConstraintKind::Valid,
            Constraint::Min(_) => ConstraintKind::Min,
            Constraint::Max(_) => ConstraintKind::Max,
            Constraint::Size { .. } => ConstraintKind::Size,
        }
    }
}

/// A borrowed view of a field or argument value as the validator sees it.
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'a str),
    Object(&'a dyn Constrained),
}

impl<'a> Value<'a> {
    pub fn object<T: Constrained>(value: &'a T) -> Self {
        Value::Object(value)
    }

    pub fn object_opt<T: Constrained>(value: Option<&'a T>) -> Self {
        match value {
            Some(value) => Value::Object(value),
            None => Value::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&'a dyn Constrained> {
        match *self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
            Value::Object(object) => write!(f, "{:?}", object),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Text(value.as_str())
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One failed declaration. Equality is by description, so the same failure found at several
/// places in an object graph counts once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintViolation {
    description: String,
}

impl ConstraintViolation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn not_null() -> Self {
        Self::new(NOT_NULL_VIOLATION)
    }

    pub fn failed(kind: ConstraintKind, value: &Value<'_>) -> Self {
        Self::new(format!(
            "Constraint '{}' violated for the value '{}'",
            kind, value
        ))
    }

    pub fn cyclic(type_name: &str) -> Self {
        Self::new(format!("cyclic reference to {} detected", type_name))
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

pub type ViolationSet = BTreeSet<ConstraintViolation>;
