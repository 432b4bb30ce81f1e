//! Declarative rule configuration
//!
//! [`RuleConfig`] is the serializable description of a rule, tagged by its
//! name. Building it checks the parameters and yields an [`AnyRule`].
//!
//! ```
//! use vale_validator::config::RuleConfig;
//! use vale_validator::Value;
//!
//! let rule = RuleConfig::from_json(r#"{"rule":"maxNumber","maxValue":5}"#)?.build()?;
//! assert!(rule.check(&Value::from(5)).is_ok());
//! assert!(rule.check(&Value::from(6)).is_err());
//! # Ok::<(), vale_validator::config::ConfigError>(())
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use vale_value::Value;

use crate::foundation::Rule;
use crate::rules::{
    AnyRule, DateAfterOrEqual, DateBeforeOrEqual, EndsWith, MaxNumber, MinNumber, StartsWith,
};

/// Error type for building rules from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON did not describe a known rule.
    #[error("invalid rule config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A date parameter could not be parsed.
    #[error("invalid date `{input}`: expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD")]
    InvalidDate { input: String },

    /// A numeric bound was NaN or infinite.
    #[error("`{rule}` bound must be finite, got {bound}")]
    NonFiniteBound { rule: &'static str, bound: f64 },
}

/// A declarative rule description.
///
/// Serialized with the rule name under `"rule"` and camelCase parameters:
///
/// ```json
/// {"rule": "startsWith", "str": "ab"}
/// {"rule": "maxNumber", "maxValue": 5}
/// {"rule": "dateBeforeOrEqual", "date": "2024-01-02"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RuleConfig {
    /// Text must start with `str`.
    StartsWith {
        #[serde(rename = "str")]
        prefix: String,
    },

    /// Text must end with `str`.
    EndsWith {
        #[serde(rename = "str")]
        suffix: String,
    },

    /// Number must be `<= maxValue`.
    MaxNumber { max_value: f64 },

    /// Number must be `>= minValue`.
    MinNumber { min_value: f64 },

    /// Calendar date must be on or before `date`.
    DateBeforeOrEqual { date: String },

    /// Calendar date must be on or after `date`.
    DateAfterOrEqual { date: String },
}

impl RuleConfig {
    /// Parses a single rule description.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON array of rule descriptions.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the parameters and constructs the rule.
    pub fn build(&self) -> Result<AnyRule, ConfigError> {
        let rule: AnyRule = match self {
            Self::StartsWith { prefix } => StartsWith::new(prefix.as_str()).into(),
            Self::EndsWith { suffix } => EndsWith::new(suffix.as_str()).into(),
            Self::MaxNumber { max_value } => {
                MaxNumber::new(finite(MaxNumber::NAME, *max_value)?).into()
            }
            Self::MinNumber { min_value } => {
                MinNumber::new(finite(MinNumber::NAME, *min_value)?).into()
            }
            Self::DateBeforeOrEqual { date } => DateBeforeOrEqual::new(parse_date(date)?).into(),
            Self::DateAfterOrEqual { date } => DateAfterOrEqual::new(parse_date(date)?).into(),
        };

        tracing::debug!(rule = rule.name(), "built rule from config");
        Ok(rule)
    }

    /// Builds every rule in order, stopping at the first bad one.
    pub fn build_all<'a>(
        configs: impl IntoIterator<Item = &'a Self>,
    ) -> Result<Vec<AnyRule>, ConfigError> {
        configs.into_iter().map(Self::build).collect()
    }
}

impl TryFrom<RuleConfig> for AnyRule {
    type Error = ConfigError;

    fn try_from(config: RuleConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl TryFrom<&AnyRule> for RuleConfig {
    type Error = ConfigError;

    fn try_from(rule: &AnyRule) -> Result<Self, Self::Error> {
        Ok(match rule {
            AnyRule::StartsWith(r) => Self::StartsWith {
                prefix: r.prefix.clone(),
            },
            AnyRule::EndsWith(r) => Self::EndsWith {
                suffix: r.suffix.clone(),
            },
            AnyRule::MaxNumber(r) => Self::MaxNumber {
                max_value: finite(MaxNumber::NAME, r.max_value)?,
            },
            AnyRule::MinNumber(r) => Self::MinNumber {
                min_value: finite(MinNumber::NAME, r.min_value)?,
            },
            AnyRule::DateBeforeOrEqual(r) => Self::DateBeforeOrEqual {
                date: Value::from(r.date).to_string(),
            },
            AnyRule::DateAfterOrEqual(r) => Self::DateAfterOrEqual {
                date: Value::from(r.date).to_string(),
            },
        })
    }
}

impl AnyRule {
    /// The declarative description of this rule.
    ///
    /// Fails with [`ConfigError::NonFiniteBound`] for a numeric rule built
    /// directly with a NaN or infinite bound, which no config could describe.
    pub fn to_config(&self) -> Result<RuleConfig, ConfigError> {
        RuleConfig::try_from(self)
    }
}

fn finite(rule: &'static str, bound: f64) -> Result<f64, ConfigError> {
    if bound.is_finite() {
        Ok(bound)
    } else {
        tracing::debug!(rule, bound, "rejected non-finite bound");
        Err(ConfigError::NonFiniteBound { rule, bound })
    }
}

/// Parses a date parameter.
///
/// Accepts RFC 3339 (the offset is dropped, keeping the wall clock),
/// `YYYY-MM-DDTHH:MM:SS[.fff]` and `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, ConfigError> {
    let input = input.trim();

    if let Ok(zoned) = DateTime::parse_from_rfc3339(input) {
        return Ok(zoned.naive_local());
    }
    if let Ok(naive) = input.parse::<NaiveDateTime>() {
        return Ok(naive);
    }
    if let Ok(day) = input.parse::<NaiveDate>() {
        return Ok(day.and_time(NaiveTime::MIN));
    }

    tracing::debug!(input, "rejected date parameter");
    Err(ConfigError::InvalidDate {
        input: input.to_owned(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
