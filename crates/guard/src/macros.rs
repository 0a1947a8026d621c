//! Macros for starting guard chains.

/// Starts a guard chain named after the expression it checks.
///
/// - `param!(ident)` is `validate(ident, "ident")`
/// - `param!(? ident)` is `validate_option(ident, "ident")`
/// - `param!(expr, name)` uses an explicit name
///
/// # Examples
///
/// ```
/// use paramguard::prelude::*;
///
/// let count = 0;
/// let error = param!(count).is_greater_than(0).unwrap_err();
/// assert_eq!(error.parameter(), Some("count"));
///
/// let limit: Option<u32> = None;
/// assert!(param!(?limit).is_not_null().is_err());
///
/// let args = ["a", "b"];
/// assert!(param!(args[0], "args[0]").is_not_empty().is_ok());
/// ```
#[macro_export]
macro_rules! param {
    (? $value:ident) => {
        $crate::foundation::validate_option($value, ::core::stringify!($value))
    };
    ($value:ident) => {
        $crate::foundation::validate($value, ::core::stringify!($value))
    };
    ($value:expr, $name:expr $(,)?) => {
        $crate::foundation::validate($value, $name)
    };
}
