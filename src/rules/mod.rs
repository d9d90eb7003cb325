// SPDX-License-Identifier: MIT

//! Rule conditions
//!
//! This module provides:
//! - `Condition` - the contract every predicate implements
//! - `MatchType` - string operators used by tag matching
//! - `ConditionRegistry` - builds conditions from persisted definitions

pub mod condition;
pub mod conditions;
pub mod event;
pub mod loader;
pub mod match_type;
pub mod registry;
pub mod types;

pub use condition::{Condition, ConditionBase, ConditionData, ProjectRef};
pub use event::{EvaluationContext, Event, Tag};
pub use match_type::MatchType;
pub use registry::ConditionRegistry;
