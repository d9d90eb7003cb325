// SPDX-License-Identifier: MIT

//! Tag matching condition

use crate::error::ConfigurationError;
use crate::rules::condition::{Condition, ConditionBase, ConditionData, ProjectRef};
use crate::rules::event::{EvaluationContext, Event};
use crate::rules::match_type::MatchType;

/// Typed view of the `match` / `key` / `value` configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEventConfig {
    pub match_type: MatchType,
    pub key: String,
    pub value: String,
}

impl TaggedEventConfig {
    pub fn from_base(base: &ConditionBase) -> Result<Self, ConfigurationError> {
        let match_type = base.required_str("match")?.parse::<MatchType>()?;
        let key = base.required_str("key")?.to_string();
        let value = base.required_str("value")?.to_string();
        Ok(Self {
            match_type,
            key,
            value,
        })
    }

    /// Apply the operator to every value the event stores under `key`
    pub fn matches(&self, event: &Event) -> bool {
        self.match_type
            .matches_any(event.tag_values(&self.key), &self.value)
    }
}

/// Passes when the event's tags satisfy the configured match.
///
/// Configuration is read on every call, so construction never fails and a
/// broken definition surfaces as a `ConfigurationError` from `passes`.
#[derive(Debug, Clone)]
pub struct TaggedEventCondition {
    base: ConditionBase,
}

impl TaggedEventCondition {
    pub const ID: &'static str = "tagged_event";

    pub fn new(project: ProjectRef, data: ConditionData) -> Self {
        Self {
            base: ConditionBase::new(project, data),
        }
    }

    pub fn config(&self) -> Result<TaggedEventConfig, ConfigurationError> {
        TaggedEventConfig::from_base(&self.base)
    }
}

impl Condition for TaggedEventCondition {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "An event's tags match {key} {match} {value}"
    }

    fn base(&self) -> &ConditionBase {
        &self.base
    }

    fn passes(&self, event: &Event, _ctx: &EvaluationContext) -> Result<bool, ConfigurationError> {
        let config = self.config().map_err(|e| {
            log::warn!(
                "Cannot evaluate {} for project {}: {}",
                Self::ID,
                self.base.project,
                e
            );
            e
        })?;

        let result = config.matches(event);
        log::debug!(
            "{} {} {:?} on event {} -> {}",
            config.key,
            config.match_type,
            config.value,
            event.event_id,
            result
        );
        Ok(result)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        self.config().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::conditions::test_support::{data, tagged_event};
    use serde_json::json;

    fn rule(match_type: &str, value: &str) -> TaggedEventCondition {
        TaggedEventCondition::new(
            ProjectRef::new("p"),
            data(json!({"match": match_type, "key": "logger", "value": value})),
        )
    }

    fn passes(rule: &TaggedEventCondition, event: &Event) -> bool {
        rule.passes(event, &EvaluationContext::new(true, true))
            .unwrap()
    }

    #[test]
    fn test_equals() {
        let event = tagged_event();
        assert!(passes(&rule("eq", "sentry.example"), &event));
        assert!(!passes(&rule("eq", "sentry.other.example"), &event));
    }

    #[test]
    fn test_does_not_equal() {
        let event = tagged_event();
        assert!(!passes(&rule("ne", "sentry.example"), &event));
        assert!(passes(&rule("ne", "sentry.other.example"), &event));
    }

    #[test]
    fn test_starts_with() {
        let event = tagged_event();
        assert!(passes(&rule("sw", "sentry."), &event));
        assert!(!passes(&rule("sw", "bar."), &event));
    }

    #[test]
    fn test_ends_with() {
        let event = tagged_event();
        assert!(passes(&rule("ew", ".example"), &event));
        assert!(!passes(&rule("ew", ".foo"), &event));
    }

    #[test]
    fn test_contains() {
        let event = tagged_event();
        assert!(passes(&rule("co", "sentry"), &event));
        assert!(!passes(&rule("co", "bar.foo"), &event));
    }

    #[test]
    fn test_does_not_contain() {
        let event = tagged_event();
        assert!(!passes(&rule("nc", "sentry"), &event));
        assert!(passes(&rule("nc", "bar.foo"), &event));
    }

    #[test]
    fn test_empty_tags() {
        let event = Event::new("empty");
        for m in MatchType::ALL {
            let r = rule(m.token(), "anything");
            assert_eq!(passes(&r, &event), m.is_negated(), "match type {}", m);
        }
    }

    #[test]
    fn test_ignores_lifecycle_flags() {
        let event = tagged_event();
        let r = rule("eq", "foo.bar");
        let flags = [(true, true), (true, false), (false, true), (false, false)];
        for (is_new, is_regression) in flags {
            let ctx = EvaluationContext::new(is_new, is_regression);
            assert!(r.passes(&event, &ctx).unwrap());
        }
    }

    #[test]
    fn test_unknown_match_type_is_an_error() {
        let r = rule("regex", "sentry");
        let err = r
            .passes(&tagged_event(), &EvaluationContext::default())
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownMatchType("regex".to_string())
        );
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_missing_fields_are_errors() {
        for missing in ["match", "key", "value"] {
            let mut d = data(json!({"match": "eq", "key": "logger", "value": "x"}));
            d.remove(missing);
            let r = TaggedEventCondition::new(ProjectRef::new("p"), d);
            assert_eq!(
                r.passes(&tagged_event(), &EvaluationContext::default())
                    .unwrap_err(),
                ConfigurationError::missing(missing)
            );
        }
    }

    #[test]
    fn test_non_string_value_is_an_error() {
        let r = TaggedEventCondition::new(
            ProjectRef::new("p"),
            data(json!({"match": "eq", "key": "logger", "value": 5})),
        );
        assert!(matches!(
            r.validate().unwrap_err(),
            ConfigurationError::InvalidField { .. }
        ));
    }

    #[test]
    fn test_config_and_label() {
        let r = rule("nc", "debug");
        assert_eq!(
            r.config().unwrap(),
            TaggedEventConfig {
                match_type: MatchType::NotContains,
                key: "logger".to_string(),
                value: "debug".to_string(),
            }
        );
        assert_eq!(
            r.render_label(),
            "An event's tags match logger does not contain debug"
        );
    }
}
