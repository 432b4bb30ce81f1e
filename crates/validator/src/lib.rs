//! # vale-validator
//!
//! Named predicates over dynamically typed values. Each rule either accepts
//! a candidate or reports why not with a structured [`ValidationError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use vale_validator::prelude::*;
//!
//! let rule = starts_with("ab");
//! assert!(rule.check(&Value::from("abc")).is_ok());
//!
//! let err = rule.check(&Value::from("xyz")).unwrap_err();
//! assert_eq!(err.code, "startsWith");
//! assert_eq!(err.message, "Value must start with 'ab'");
//! ```
//!
//! ## Built-in Rules
//!
//! - **Text**: [`StartsWith`](rules::StartsWith), [`EndsWith`](rules::EndsWith)
//! - **Numeric**: [`MaxNumber`](rules::MaxNumber), [`MinNumber`](rules::MinNumber)
//! - **Date**: [`DateBeforeOrEqual`](rules::DateBeforeOrEqual),
//!   [`DateAfterOrEqual`](rules::DateAfterOrEqual)
//!
//! A candidate of the wrong runtime type never passes; the failure carries a
//! [`TypeMismatch`](foundation::TypeMismatch) cause.
//!
//! New rules are declared with the [`rule!`] macro.
//!
//! Rules can also be described declaratively and built at runtime through
//! [`RuleConfig`](config::RuleConfig).

// ValidationError is returned by value from every check; boxing it would add
// an allocation to each failure.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;

pub use foundation::ValidationError;
pub use vale_value::{Number, Value, ValueKind};
