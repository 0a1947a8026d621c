//! Conditional and ad-hoc checks

use std::borrow::Cow;

use crate::foundation::{Check, GuardErrorKind, GuardResult, Params, Validator};

impl<T> Validator<T> {
    /// Runs `then` only if `condition` holds for the (possibly absent) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramguard::prelude::*;
    ///
    /// let port: Option<u16> = Some(80);
    /// validate_option(port, "port")
    ///     .when(|p| p.is_some_and(|p| *p < 1024), |v| v.is_equal_to(80))?;
    /// # Ok::<(), GuardError>(())
    /// ```
    pub fn when<C, F>(self, condition: C, then: F) -> GuardResult<Self>
    where
        C: FnOnce(Option<&T>) -> bool,
        F: FnOnce(Self) -> GuardResult<Self>,
    {
        if condition(self.value()) {
            then(self)
        } else {
            Ok(self)
        }
    }

    /// Runs `then` if `condition` holds, `otherwise` if it does not.
    pub fn when_else<C, F, G>(self, condition: C, then: F, otherwise: G) -> GuardResult<Self>
    where
        C: FnOnce(Option<&T>) -> bool,
        F: FnOnce(Self) -> GuardResult<Self>,
        G: FnOnce(Self) -> GuardResult<Self>,
    {
        if condition(self.value()) {
            then(self)
        } else {
            otherwise(self)
        }
    }

    /// Fails with `message` if `condition` holds for the (possibly absent)
    /// value.
    ///
    /// The condition is evaluated even when the value is absent, so
    /// `fail_if(|_| true, ..)` always fails.
    pub fn fail_if<C>(self, condition: C, message: impl Into<Cow<'static, str>>) -> GuardResult<Self>
    where
        C: FnOnce(Option<&T>) -> bool,
    {
        if condition(self.value()) {
            let error = self.reject(GuardErrorKind::InvalidValue, Check::Custom, Params::new());
            Err(error.with_message(message))
        } else {
            Ok(self)
        }
    }
}
