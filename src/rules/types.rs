// SPDX-License-Identifier: MIT

//! Schema types for persisted rule definitions
//!
//! A rule file lists the conditions configured for one project. Conditions are
//! evaluated one by one; combining their results is left to the caller.

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::rules::condition::{Condition, ConditionData, ProjectRef};
use crate::rules::registry::ConditionRegistry;

/// Top-level rule definition
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RuleDefinition {
    #[serde(default)]
    pub label: Option<String>,
    /// Project the conditions are attached to
    #[serde(default)]
    pub project: ProjectRef,
    #[serde(default)]
    pub conditions: Vec<ConditionDefinition>,
}

/// One configured condition
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConditionDefinition {
    /// Registry id, e.g. "tagged_event"
    pub id: String,
    /// Condition-specific configuration
    #[serde(default)]
    pub data: ConditionData,
}

impl ConditionDefinition {
    pub fn build(
        &self,
        project: &ProjectRef,
        registry: &ConditionRegistry,
    ) -> Result<Box<dyn Condition>, RuleError> {
        registry.build(&self.id, project.clone(), self.data.clone())
    }
}

impl RuleDefinition {
    /// Instantiate every condition, failing on the first unknown id
    pub fn build_conditions(
        &self,
        registry: &ConditionRegistry,
    ) -> Result<Vec<Box<dyn Condition>>, RuleError> {
        self.conditions
            .iter()
            .map(|def| def.build(&self.project, registry))
            .collect()
    }
}
