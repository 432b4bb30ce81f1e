//! Prelude module for convenient imports.
//!
//! Provides a single `use vale_validator::prelude::*;` import that brings
//! in the rule traits, error types, every built-in rule and the value type.
//!
//! # Examples
//!
//! ```rust
//! use vale_validator::prelude::*;
//!
//! let rules: Vec<AnyRule> = vec![min_number(0.0).into(), max_number(10.0).into()];
//! assert!(rules.iter().all(|r| r.check(&Value::from(7)).is_ok()));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    AsValidatable, Context, Rule, TypeMismatch, Validate, ValidationError,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

pub use crate::rules::{
    AnyRule, DateAfterOrEqual, DateBeforeOrEqual, EndsWith, MaxNumber, MinNumber, StartsWith,
    date_after_or_equal, date_before_or_equal, ends_with, max_number, min_number, starts_with,
};

// ============================================================================
// CONFIG: Declarative rule descriptions
// ============================================================================

pub use crate::config::{ConfigError, RuleConfig};

// ============================================================================
// VALUES
// ============================================================================

pub use vale_value::{Number, Value, ValueKind};
