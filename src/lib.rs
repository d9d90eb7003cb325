// SPDX-License-Identifier: MIT

pub mod error;
pub mod rules;

pub use error::{ConfigurationError, RuleError};
