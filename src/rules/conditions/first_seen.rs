// SPDX-License-Identifier: MIT

use crate::error::ConfigurationError;
use crate::rules::condition::{Condition, ConditionBase, ConditionData, ProjectRef};
use crate::rules::event::{EvaluationContext, Event};

/// Passes when the event belongs to an issue seen for the first time
#[derive(Debug, Clone)]
pub struct FirstSeenEventCondition {
    base: ConditionBase,
}

impl FirstSeenEventCondition {
    pub const ID: &'static str = "first_seen_event";

    pub fn new(project: ProjectRef, data: ConditionData) -> Self {
        Self {
            base: ConditionBase::new(project, data),
        }
    }
}

impl Condition for FirstSeenEventCondition {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "An event is first seen"
    }

    fn base(&self) -> &ConditionBase {
        &self.base
    }

    fn passes(&self, _event: &Event, ctx: &EvaluationContext) -> Result<bool, ConfigurationError> {
        Ok(ctx.is_new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::conditions::test_support::{data, tagged_event};
    use serde_json::json;

    #[test]
    fn test_applies_correctly() {
        let rule = FirstSeenEventCondition::new(ProjectRef::new("p"), ConditionData::new());
        let event = tagged_event();

        assert!(rule
            .passes(&event, &EvaluationContext::new(true, true))
            .unwrap());
        assert!(!rule
            .passes(&event, &EvaluationContext::new(false, true))
            .unwrap());
    }

    #[test]
    fn test_ignores_regression_flag_and_tags() {
        let rule = FirstSeenEventCondition::new(ProjectRef::new("p"), ConditionData::new());

        for is_regression in [true, false] {
            for event in [Event::default(), tagged_event()] {
                for is_new in [true, false] {
                    let ctx = EvaluationContext::new(is_new, is_regression);
                    assert_eq!(rule.passes(&event, &ctx).unwrap(), is_new);
                }
            }
        }
    }

    #[test]
    fn test_tolerates_unrelated_data() {
        let rule = FirstSeenEventCondition::new(
            ProjectRef::new("p"),
            data(json!({"match": "bogus", "extra": [1, 2]})),
        );
        assert!(rule.validate().is_ok());
        assert!(rule
            .passes(&Event::default(), &EvaluationContext::new(true, false))
            .unwrap());
        assert_eq!(rule.render_label(), "An event is first seen");
    }
}
