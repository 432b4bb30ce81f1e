//! Error types for rule failures
//!
//! A failing rule produces a [`ValidationError`]: the rule's name as `code`,
//! an English `message`, and a `context` that always starts with the original
//! candidate under `"value"` followed by the rule's own parameters. When the
//! candidate had the wrong runtime type, `cause` carries the [`TypeMismatch`].
//!
//! String fields use `Cow<'static, str>` so the common case of static rule
//! names and keys does not allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;
use vale_value::{Value, ValueKind};

/// Ordered key/value diagnostics attached to a [`ValidationError`].
///
/// Rules carry at most a couple of parameters, so this stays inline.
pub type Context = SmallVec<[(Cow<'static, str>, Value); 3]>;

/// A candidate's runtime type did not match what the rule evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {actual}")]
pub struct TypeMismatch {
    /// What the rule accepts, e.g. `"string"`, `"number"`, `"date"`.
    pub expected: &'static str,
    /// The kind the candidate actually had.
    pub actual: ValueKind,
}

impl TypeMismatch {
    /// Creates a mismatch for the given candidate.
    #[must_use]
    pub fn new(expected: &'static str, actual: &Value) -> Self {
        Self {
            expected,
            actual: actual.kind(),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The *Invalid* outcome of applying a rule.
///
/// # Examples
///
/// ```
/// use vale_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("maxNumber", "Value must be at most 5")
///     .with_context("value", 6)
///     .with_context("maxValue", 5.0);
///
/// assert_eq!(error.code, "maxNumber");
/// assert_eq!(error.context_value("value"), Some(&6.into()));
/// assert!(!error.is_type_mismatch());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Name of the rule that failed, e.g. `"startsWith"`.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Candidate value and rule parameters, in insertion order.
    pub context: Context,

    /// Set only when the candidate had the wrong runtime type.
    pub cause: Option<TypeMismatch>,
}

impl ValidationError {
    /// Creates a new error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: Context::new(),
            cause: None,
        }
    }

    /// Appends a context entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_context(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Appends several context entries.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_context_entries(
        mut self,
        entries: impl IntoIterator<Item = (Cow<'static, str>, Value)>,
    ) -> Self {
        self.context.extend(entries);
        self
    }

    /// Records that the candidate had the wrong type.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: TypeMismatch) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Looks up a context value by key.
    #[must_use]
    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    /// Whether the failure came from type discrimination rather than comparison.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        self.cause.is_some()
    }

    /// Converts the error to a JSON structure for an external reporter.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let context: serde_json::Map<String, serde_json::Value> = self
            .context
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
            .collect();

        let mut out = json!({
            "code": self.code,
            "message": self.message,
            "context": context,
        });
        if let Some(cause) = self.cause {
            out["cause"] = json!({
                "expected": cause.expected,
                "actual": cause.actual.name(),
            });
        }
        out
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.context.is_empty() {
            write!(f, " (context: [")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if let Some(cause) = &self.cause {
            write!(f, "; {cause}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|c| c as &(dyn std::error::Error + 'static))
    }
}

// ============================================================================
// TESTS
// ============================================================================
