// SPDX-License-Identifier: MIT

//! Rule loader - YAML file loading and parsing
//!
//! This module handles loading rule definitions and events from disk.

use super::event::Event;
use super::types::RuleDefinition;
use crate::error::RuleError;
use std::fs;
use std::path::Path;

/// Loads rule definitions from YAML files
pub struct RuleLoader;

impl RuleLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a rule definition from a YAML (or JSON) file
    pub fn load_rule<P: AsRef<Path>>(&self, path: P) -> Result<RuleDefinition, RuleError> {
        let path = path.as_ref();
        log::debug!("Loading rule definition from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a rule definition from a YAML string
    pub fn parse_yaml(content: &str) -> Result<RuleDefinition, RuleError> {
        let def: RuleDefinition = serde_yaml::from_str(content)?;
        Ok(def)
    }

    /// Load an event from a JSON file
    pub fn load_event<P: AsRef<Path>>(&self, path: P) -> Result<Event, RuleError> {
        let content = fs::read_to_string(path)?;
        Self::parse_event(&content)
    }

    pub fn parse_event(content: &str) -> Result<Event, RuleError> {
        let event: Event = serde_json::from_str(content)?;
        Ok(event)
    }
}

impl Default for RuleLoader {
    fn default() -> Self {
        Self::new()
    }
}
