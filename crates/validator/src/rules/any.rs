//! Enum dispatch over every built-in rule.

use vale_value::Value;

use crate::foundation::{Context, Rule, ValidationError};
use crate::rules::{
    DateAfterOrEqual, DateBeforeOrEqual, EndsWith, MaxNumber, MinNumber, StartsWith,
};

/// Any built-in rule.
///
/// Lets rules of different kinds be stored and applied side by side, e.g.
/// after loading them from [`RuleConfig`](crate::config::RuleConfig).
///
/// # Examples
///
/// ```
/// use vale_validator::rules::{AnyRule, max_number, starts_with};
/// use vale_validator::Value;
///
/// let rules: Vec<AnyRule> = vec![starts_with("ab").into(), max_number(5.0).into()];
/// let names: Vec<&str> = rules.iter().map(AnyRule::name).collect();
/// assert_eq!(names, ["startsWith", "maxNumber"]);
///
/// assert!(rules[0].check(&Value::from("abc")).is_ok());
/// assert!(rules[1].check(&Value::from("abc")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnyRule {
    /// See [`StartsWith`].
    StartsWith(StartsWith),
    /// See [`EndsWith`].
    EndsWith(EndsWith),
    /// See [`MaxNumber`].
    MaxNumber(MaxNumber),
    /// See [`MinNumber`].
    MinNumber(MinNumber),
    /// See [`DateBeforeOrEqual`].
    DateBeforeOrEqual(DateBeforeOrEqual),
    /// See [`DateAfterOrEqual`].
    DateAfterOrEqual(DateAfterOrEqual),
}

macro_rules! dispatch {
    ($self:expr, $rule:ident => $body:expr) => {
        match $self {
            AnyRule::StartsWith($rule) => $body,
            AnyRule::EndsWith($rule) => $body,
            AnyRule::MaxNumber($rule) => $body,
            AnyRule::MinNumber($rule) => $body,
            AnyRule::DateBeforeOrEqual($rule) => $body,
            AnyRule::DateAfterOrEqual($rule) => $body,
        }
    };
}

fn name_of<R: Rule>(_: &R) -> &'static str {
    R::NAME
}

impl AnyRule {
    /// The rule's name, as used for [`ValidationError::code`].
    pub fn name(&self) -> &'static str {
        dispatch!(self, rule => name_of(rule))
    }

    /// Applies the rule to a candidate of any runtime type.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        dispatch!(self, rule => rule.check(value))
    }

    /// The rule's own parameters.
    pub fn params(&self) -> Context {
        dispatch!(self, rule => rule.params())
    }
}

macro_rules! impl_from_rule {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for AnyRule {
                fn from(rule: $variant) -> Self {
                    Self::$variant(rule)
                }
            }
        )+
    };
}

impl_from_rule!(
    StartsWith,
    EndsWith,
    MaxNumber,
    MinNumber,
    DateBeforeOrEqual,
    DateAfterOrEqual,
);
