//! Text affix rules

use smallvec::smallvec;
use vale_value::Value;

// ============================================================================
// STARTS WITH
// ============================================================================

crate::rule! {
    /// Validates that a text candidate starts with a prefix.
    ///
    /// Matching is exact and case-sensitive. An empty prefix matches every text
    /// candidate; non-text candidates always fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use vale_validator::foundation::Rule;
    /// use vale_validator::rules::starts_with;
    /// use vale_validator::Value;
    ///
    /// let rule = starts_with("ab");
    /// assert!(rule.check(&Value::from("abc")).is_ok());
    /// assert!(rule.check(&Value::from("xabc")).is_err());
    /// assert!(rule.check(&Value::from("ABC")).is_err());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith {
        /// The required prefix.
        pub prefix: String,
    } for str;
    name "startsWith";
    holds(self, input) { input.starts_with(self.prefix.as_str()) }
    message(self) { format!("Value must start with '{}'", self.prefix) }
    params(self) { smallvec![("str".into(), Value::text(self.prefix.as_str()))] }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

// ============================================================================
// ENDS WITH
// ============================================================================

crate::rule! {
    /// Validates that a text candidate ends with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith {
        /// The required suffix.
        pub suffix: String,
    } for str;
    name "endsWith";
    holds(self, input) { input.ends_with(self.suffix.as_str()) }
    message(self) { format!("Value must end with '{}'", self.suffix) }
    params(self) { smallvec![("str".into(), Value::text(self.suffix.as_str()))] }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}

// ============================================================================
// TESTS
// ============================================================================
