use crate::core::checkers::{MaxChecker, MinChecker, NotNullChecker, SizeChecker};
use crate::domain::model::ConstraintKind;
use crate::domain::ports::ConstraintChecker;
use crate::utils::error::{Result, ServiceError};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<Arc<CheckerRegistry>> = OnceLock::new();

/// Maps each constraint kind to its checker. Written during startup, read-only afterwards.
#[derive(Default)]
pub struct CheckerRegistry {
    checkers: HashMap<ConstraintKind, Box<dyn ConstraintChecker>>,
}

impl CheckerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_checkers() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(ConstraintKind::NotNull, NotNullChecker)?;
        registry.register(ConstraintKind::Min, MinChecker)?;
        registry.register(ConstraintKind::Max, MaxChecker)?;
        registry.register(ConstraintKind::Size, SizeChecker)?;
        Ok(registry)
    }

    /// Process-wide registry with the built-in checkers.
    ///
    /// # Panics
    ///
    /// If the built-in registration is inconsistent. This is a startup fault and must
    /// keep the process from running.
    pub fn global() -> Arc<CheckerRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| match CheckerRegistry::with_builtin_checkers() {
                Ok(registry) => {
                    tracing::debug!(kinds = registry.len(), "constraint checker registry initialised");
                    Arc::new(registry)
                }
                Err(e) => panic!("constraint checker registry misconfigured: {}", e),
            })
            .clone()
    }

    pub fn register<C>(&mut self, kind: ConstraintKind, checker: C) -> Result<()>
    where
        C: ConstraintChecker + 'static,
    {
        if self.checkers.contains_key(&kind) {
            return Err(ServiceError::DuplicateChecker { kind });
        }
        self.checkers.insert(kind, Box::new(checker));
        Ok(())
    }

    pub fn lookup(&self, kind: ConstraintKind) -> Option<&dyn ConstraintChecker> {
        self.checkers.get(&kind).map(|checker| checker.as_ref())
    }

    pub fn contains(&self, kind: ConstraintKind) -> bool {
        self.checkers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl fmt::Debug for CheckerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&ConstraintKind> = self.checkers.keys().collect();
        kinds.sort();
        f.debug_struct("CheckerRegistry").field("kinds", &kinds).finish()
    }
}
