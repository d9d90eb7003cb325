// SPDX-License-Identifier: MIT

//! Built-in conditions
//!
//! - `FirstSeenEventCondition` - passes the first time an issue is seen
//! - `RegressionEventCondition` - passes when a resolved issue comes back
//! - `TaggedEventCondition` - passes when an event tag matches a configured pattern

mod first_seen;
mod regression;
mod tagged_event;

pub use first_seen::FirstSeenEventCondition;
pub use regression::RegressionEventCondition;
pub use tagged_event::{TaggedEventCondition, TaggedEventConfig};
