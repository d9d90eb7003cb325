// SPDX-License-Identifier: MIT

//! Event data seen by conditions

use serde::{Deserialize, Serialize};

/// A single `(key, value)` tag attached to an event.
///
/// Serialized as a two element array, e.g. `["logger", "sentry.example"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag(pub String, pub String);

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self(key.into(), value.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> &str {
        &self.1
    }
}

/// A single occurrence of an issue.
///
/// Tags keep insertion order and keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Event {
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Event {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            tags: Vec::new(),
        }
    }

    /// Builder-style tag append
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// All values stored under `key`, in insertion order
    pub fn tag_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .iter()
            .filter(move |tag| tag.key() == key)
            .map(Tag::value)
    }
}

/// Issue lifecycle flags computed by the caller for one evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvaluationContext {
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_regression: bool,
}

impl EvaluationContext {
    pub fn new(is_new: bool, is_regression: bool) -> Self {
        Self {
            is_new,
            is_regression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_values_keeps_order_and_filters_key() {
        let event = Event::new("abc")
            .with_tag("logger", "sentry.example")
            .with_tag("notlogger", "bar.foo.baz")
            .with_tag("logger", "foo.bar");

        let values: Vec<&str> = event.tag_values("logger").collect();
        assert_eq!(values, vec!["sentry.example", "foo.bar"]);
        assert_eq!(event.tag_values("missing").count(), 0);
    }

    #[test]
    fn test_event_from_json_pairs() {
        let event: Event = serde_json::from_value(json!({
            "event_id": "e1",
            "tags": [["logger", "a"], ["level", "error"]]
        }))
        .unwrap();

        assert_eq!(event.event_id, "e1");
        assert_eq!(event.tags[1], Tag::new("level", "error"));
    }

    #[test]
    fn test_event_without_tags() {
        let event: Event = serde_json::from_value(json!({"event_id": "e2"})).unwrap();
        assert!(event.tags.is_empty());
    }

    #[test]
    fn test_context_defaults_to_false() {
        let ctx: EvaluationContext = serde_json::from_value(json!({"is_new": true})).unwrap();
        assert_eq!(ctx, EvaluationContext::new(true, false));
    }
}
