// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::RuleError;
use crate::rules::condition::{Condition, ConditionData, ProjectRef};
use crate::rules::conditions::{
    FirstSeenEventCondition, RegressionEventCondition, TaggedEventCondition,
};

/// Builds a condition from its persisted configuration
pub type ConditionFactory = fn(ProjectRef, ConditionData) -> Box<dyn Condition>;

static BUILTIN: Lazy<ConditionRegistry> = Lazy::new(ConditionRegistry::with_builtins);

/// Maps stable condition ids to their constructors
#[derive(Clone)]
pub struct ConditionRegistry {
    factories: HashMap<String, ConditionFactory>,
}

impl ConditionRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry preloaded with the built-in conditions
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(FirstSeenEventCondition::ID, |project, data| {
            Box::new(FirstSeenEventCondition::new(project, data))
        });
        registry.register(RegressionEventCondition::ID, |project, data| {
            Box::new(RegressionEventCondition::new(project, data))
        });
        registry.register(TaggedEventCondition::ID, |project, data| {
            Box::new(TaggedEventCondition::new(project, data))
        });
        registry
    }

    /// Shared instance holding only the built-in conditions
    pub fn builtin() -> &'static ConditionRegistry {
        &BUILTIN
    }

    pub fn register(&mut self, id: impl Into<String>, factory: ConditionFactory) {
        self.factories.insert(id.into(), factory);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Instantiate the condition registered under `id`
    pub fn build(
        &self,
        id: &str,
        project: ProjectRef,
        data: ConditionData,
    ) -> Result<Box<dyn Condition>, RuleError> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| RuleError::unknown_condition(id))?;
        Ok(factory(project, data))
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
