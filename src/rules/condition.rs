// SPDX-License-Identifier: MIT

//! The shared condition contract

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigurationError;
use crate::rules::event::{EvaluationContext, Event};

/// Raw, loosely typed condition configuration as persisted with a rule
pub type ConditionData = Map<String, Value>;

/// Opaque reference to the project a rule belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProjectRef(pub String);

impl ProjectRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for predicates a rule processor evaluates per event.
///
/// # Contract
/// - `passes` is a pure function of the event, the context and the
///   configuration captured at construction
/// - `Err` means the condition could not be evaluated, which is distinct from
///   evaluating to `false`
/// - Implementations hold no per-call state, so one instance may be shared
///   across threads
pub trait Condition: Send + Sync {
    /// Stable identifier used to look the condition up in a registry
    fn id(&self) -> &str;

    /// Label template; `{key}`, `{match}` and `{value}` are substituted from data
    fn label(&self) -> &str;

    /// Shared construction state
    fn base(&self) -> &ConditionBase;

    /// Decide whether the event satisfies this condition
    fn passes(&self, event: &Event, ctx: &EvaluationContext) -> Result<bool, ConfigurationError>;

    /// Check the configuration without an event
    fn validate(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }

    fn project(&self) -> &ProjectRef {
        &self.base().project
    }

    fn data(&self) -> &ConditionData {
        &self.base().data
    }

    /// Label with configured values filled in
    fn render_label(&self) -> String {
        render_template(self.label(), self.data())
    }
}

/// Project and configuration every condition is constructed with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionBase {
    pub project: ProjectRef,
    pub data: ConditionData,
}

impl ConditionBase {
    pub fn new(project: ProjectRef, data: ConditionData) -> Self {
        Self { project, data }
    }

    /// Fetch a required string field from the configuration
    pub fn required_str(&self, field: &str) -> Result<&str, ConfigurationError> {
        match self.data.get(field) {
            None | Some(Value::Null) => Err(ConfigurationError::missing(field)),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(ConfigurationError::invalid(
                field,
                format!("expected a string, got {}", other),
            )),
        }
    }
}

fn render_template(template: &str, data: &ConditionData) -> String {
    let mut out = template.to_string();
    for (name, value) in data {
        let placeholder = format!("{{{}}}", name);
        if !out.contains(&placeholder) {
            continue;
        }
        let text = match value {
            Value::String(s) => display_value(name, s),
            other => other.to_string(),
        };
        out = out.replace(&placeholder, &text);
    }
    out
}

fn display_value(name: &str, raw: &str) -> String {
    if name == "match" {
        if let Ok(m) = raw.parse::<crate::rules::match_type::MatchType>() {
            return m.label().to_string();
        }
    }
    raw.to_string()
}
