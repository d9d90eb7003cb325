// SPDX-License-Identifier: MIT

use crate::error::ConfigurationError;
use crate::rules::condition::{Condition, ConditionBase, ConditionData, ProjectRef};
use crate::rules::event::{EvaluationContext, Event};

/// Passes when the event reopens a previously resolved issue
#[derive(Debug, Clone)]
pub struct RegressionEventCondition {
    base: ConditionBase,
}

impl RegressionEventCondition {
    pub const ID: &'static str = "regression_event";

    pub fn new(project: ProjectRef, data: ConditionData) -> Self {
        Self {
            base: ConditionBase::new(project, data),
        }
    }
}

impl Condition for RegressionEventCondition {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "An event changes state from resolved to unresolved"
    }

    fn base(&self) -> &ConditionBase {
        &self.base
    }

    fn passes(&self, _event: &Event, ctx: &EvaluationContext) -> Result<bool, ConfigurationError> {
        Ok(ctx.is_regression)
    }
}
