//! Object-graph validation.
//!
//! A call site carries a set of declarations. Markers are handled first: `Valid` descends into
//! the declared fields of a composite value, `NotNull` rejects an absent value. Every other
//! declaration is dispatched to the checker registered for its kind.
//!
//! Validation never fails as an operation; it only returns the set of violations found.
//! Violations carry no location: the same failure on two fields is reported once. The field
//! path of each failure is emitted as a `debug` event instead.

use crate::core::registry::CheckerRegistry;
use crate::domain::model::{Constraint, ConstraintViolation, Value, ViolationSet};
use crate::domain::ports::Constrained;
use std::any::TypeId;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSettings {
    /// Stop and report when a descent re-enters an object already on the current path.
    pub detect_cycles: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            detect_cycles: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectGraphValidator {
    registry: Arc<CheckerRegistry>,
    settings: ValidationSettings,
}

type ObjectIdentity = (usize, TypeId);

#[derive(Default)]
struct Walk {
    violations: ViolationSet,
    path: Vec<ObjectIdentity>,
}

impl Walk {
    fn record(&mut self, path: &str, violation: ConstraintViolation) {
        tracing::debug!(path = path, violation = %violation, "constraint violated");
        self.violations.insert(violation);
    }
}

impl ObjectGraphValidator {
    pub fn new(registry: Arc<CheckerRegistry>) -> Self {
        Self::with_settings(registry, ValidationSettings::default())
    }

    pub fn with_settings(registry: Arc<CheckerRegistry>, settings: ValidationSettings) -> Self {
        Self { registry, settings }
    }

    pub fn registry(&self) -> &CheckerRegistry {
        &self.registry
    }

    pub fn settings(&self) -> ValidationSettings {
        self.settings
    }

    /// Validates `value` against the declarations made at one call site.
    pub fn validate(&self, value: &Value<'_>, constraints: &[Constraint]) -> ViolationSet {
        let mut walk = Walk::default();
        self.validate_site(*value, constraints, "", &mut walk);
        walk.violations
    }

    fn validate_site(&self, value: Value<'_>, constraints: &[Constraint], path: &str, walk: &mut Walk) {
        for constraint in constraints {
            match constraint {
                Constraint::Valid => {
                    if let Value::Object(object) = value {
                        self.descend(object, path, walk);
                    }
                }
                Constraint::NotNull => {
                    if value.is_null() {
                        walk.record(path, ConstraintViolation::not_null());
                    }
                }
                other => {
                    let kind = other.kind();
                    if let Some(checker) = self.registry.lookup(kind) {
                        if !checker.check(&value, other) {
                            walk.record(path, ConstraintViolation::failed(kind, &value));
                        }
                    }
                }
            }
        }
    }

    fn descend(&self, object: &dyn Constrained, path: &str, walk: &mut Walk) {
        let identity = identity_of(object);
        if self.settings.detect_cycles && walk.path.contains(&identity) {
            tracing::warn!(
                type_name = object.type_name(),
                path = path,
                "cyclic reference in validated object graph"
            );
            walk.record(path, ConstraintViolation::cyclic(object.type_name()));
            return;
        }

        walk.path.push(identity);
        for field in object.constrained_fields() {
            let field_path = join_path(path, field.name);
            let value = match field.value {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(error = %e, path = %field_path, "skipping unreadable field");
                    continue;
                }
            };

            self.validate_site(value, field.constraints, &field_path, walk);

            // `Valid` on the field has already descended.
            if let Value::Object(nested) = value {
                if !field.constraints.contains(&Constraint::Valid) {
                    self.descend(nested, &field_path, walk);
                }
            }
        }
        walk.path.pop();
    }
}

impl Default for ObjectGraphValidator {
    fn default() -> Self {
        Self::new(CheckerRegistry::global())
    }
}

fn identity_of(object: &dyn Constrained) -> ObjectIdentity {
    let address = object as *const _ as *const () as usize;
    (address, object.type_key())
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}
