use crate::domain::model::{Constraint, Value};
use crate::domain::ports::ConstraintChecker;

/// Fails iff the value is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNullChecker;

impl ConstraintChecker for NotNullChecker {
    fn check(&self, value: &Value<'_>, _constraint: &Constraint) -> bool {
        !value.is_null()
    }
}

/// Lower numeric bound. Anything that is not a number passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinChecker;

impl ConstraintChecker for MinChecker {
    fn check(&self, value: &Value<'_>, constraint: &Constraint) -> bool {
        let Constraint::Min(bound) = *constraint else {
            return true;
        };
        match *value {
            Value::Int(n) => n >= bound,
            Value::Float(x) => x >= bound as f64,
            _ => true,
        }
    }
}

/// Upper numeric bound. Anything that is not a number passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxChecker;

impl ConstraintChecker for MaxChecker {
    fn check(&self, value: &Value<'_>, constraint: &Constraint) -> bool {
        let Constraint::Max(bound) = *constraint else {
            return true;
        };
        match *value {
            Value::Int(n) => n <= bound,
            Value::Float(x) => x <= bound as f64,
            _ => true,
        }
    }
}

/// Inclusive character-count range for text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeChecker;

impl ConstraintChecker for SizeChecker {
    fn check(&self, value: &Value<'_>, constraint: &Constraint) -> bool {
        let Constraint::Size { min, max } = *constraint else {
            return true;
        };
        match *value {
            Value::Text(text) => {
                let length = text.chars().count();
                (min..=max).contains(&length)
            }
            _ => true,
        }
    }
}
