//! Macros for declaring rules with minimal boilerplate.

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a complete rule: struct definition, `new`, `Validate` and `Rule`
/// implementations, and a factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. Fields keep the visibility they are declared with.
///
/// The typed [`Validate`](crate::foundation::Validate) path reports the
/// failing input converted into a [`Value`](crate::Value), so the input type
/// must be `ToOwned` into something `Value` converts from.
///
/// # Examples
///
/// ```
/// use vale_validator::foundation::{Context, Rule, Validate};
/// use vale_validator::{Value, rule};
///
/// rule! {
///     /// Text must be at least `min` bytes long.
///     #[derive(Copy, PartialEq, Eq)]
///     pub MinBytes { pub min: usize } for str;
///     name "minBytes";
///     holds(self, input) { input.len() >= self.min }
///     message(self) { format!("Value must be at least {} bytes", self.min) }
///     params(self) { Context::from_iter([("min".into(), Value::from(self.min as i64))]) }
///     new(min: usize) { Self { min } }
///     fn min_bytes(min: usize);
/// }
///
/// assert!(min_bytes(2).validate("ab").is_ok());
///
/// let err = min_bytes(2).check(&Value::from("a")).unwrap_err();
/// assert_eq!(err.code, "minBytes");
/// assert_eq!(err.context_value("min"), Some(&Value::from(2)));
/// ```
#[macro_export]
macro_rules! rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            $($(#[$fmeta:meta])* $fvis:vis $field:ident: $fty:ty),+ $(,)?
        } for $input:ty;
        name $code:literal;
        holds($hself:ident, $inp:ident) $holds:block
        message($mself:ident) $message:block
        params($pself:ident) $params:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($(#[$fmeta])* $fvis $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn validate(
                &self,
                input: &Self::Input,
            ) -> Result<(), $crate::foundation::ValidationError> {
                if $crate::foundation::Rule::holds(self, input) {
                    Ok(())
                } else {
                    let value = $crate::Value::from(::std::borrow::ToOwned::to_owned(input));
                    Err($crate::foundation::Rule::failure(self, value))
                }
            }
        }

        impl $crate::foundation::Rule for $name {
            const NAME: &'static str = $code;

            fn holds(&$hself, $inp: &Self::Input) -> bool $holds

            fn message(&$mself) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::from($message)
            }

            fn params(&$pself) -> $crate::foundation::Context $params
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] rule.")]
        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
