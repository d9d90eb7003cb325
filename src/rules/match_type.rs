// SPDX-License-Identifier: MIT

//! Tag value match operators

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigurationError;

/// String match operators understood by tag conditions.
///
/// The serialized tokens are persisted in rule definitions and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MatchType {
    /// eq
    #[serde(rename = "eq")]
    Equal,
    /// ne
    #[serde(rename = "ne")]
    NotEqual,
    /// sw
    #[serde(rename = "sw")]
    StartsWith,
    /// ew
    #[serde(rename = "ew")]
    EndsWith,
    /// co
    #[serde(rename = "co")]
    Contains,
    /// nc
    #[serde(rename = "nc")]
    NotContains,
}

impl MatchType {
    pub const ALL: [MatchType; 6] = [
        MatchType::Equal,
        MatchType::NotEqual,
        MatchType::StartsWith,
        MatchType::EndsWith,
        MatchType::Contains,
        MatchType::NotContains,
    ];

    /// Persisted token for this operator
    pub fn token(&self) -> &'static str {
        match self {
            MatchType::Equal => "eq",
            MatchType::NotEqual => "ne",
            MatchType::StartsWith => "sw",
            MatchType::EndsWith => "ew",
            MatchType::Contains => "co",
            MatchType::NotContains => "nc",
        }
    }

    /// Human readable form used in condition labels
    pub fn label(&self) -> &'static str {
        match self {
            MatchType::Equal => "equals",
            MatchType::NotEqual => "does not equal",
            MatchType::StartsWith => "starts with",
            MatchType::EndsWith => "ends with",
            MatchType::Contains => "contains",
            MatchType::NotContains => "does not contain",
        }
    }

    /// Whether this operator is the complement of another one
    pub fn is_negated(&self) -> bool {
        match self {
            MatchType::NotEqual | MatchType::NotContains => true,
            MatchType::Equal
            | MatchType::StartsWith
            | MatchType::EndsWith
            | MatchType::Contains => false,
        }
    }

    /// Compare a single subject against the pattern, ignoring negation.
    fn test_positive(&self, subject: &str, pattern: &str) -> bool {
        match self {
            MatchType::Equal | MatchType::NotEqual => subject == pattern,
            MatchType::StartsWith => subject.starts_with(pattern),
            MatchType::EndsWith => subject.ends_with(pattern),
            MatchType::Contains | MatchType::NotContains => subject.contains(pattern),
        }
    }

    /// Evaluate the operator over every value found under the configured key.
    ///
    /// Positive operators pass when any subject matches. Negated operators pass
    /// when no subject matches the positive form, so an empty set of subjects
    /// passes `NotEqual` and `NotContains` and fails everything else.
    pub fn matches_any<'a, I>(&self, subjects: I, pattern: &str) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let found = subjects
            .into_iter()
            .any(|subject| self.test_positive(subject, pattern));
        found != self.is_negated()
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for MatchType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(MatchType::Equal),
            "ne" => Ok(MatchType::NotEqual),
            "sw" => Ok(MatchType::StartsWith),
            "ew" => Ok(MatchType::EndsWith),
            "co" => Ok(MatchType::Contains),
            "nc" => Ok(MatchType::NotContains),
            other => Err(ConfigurationError::UnknownMatchType(other.to_string())),
        }
    }
}
