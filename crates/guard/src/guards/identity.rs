//! Presence and equality checks
//!
//! Available on every [`Validator`]. The null checks are the only checks in
//! the crate that look at absence; `is_equal_to` / `is_not_equal_to` pass
//! vacuously when the value is absent.
//!
//! The compared value only needs [`Debug`]; messages show its `{:?}` form.

use std::fmt::Debug;

use smallvec::smallvec;

use crate::foundation::{Check, GuardErrorKind, GuardResult, Params, Validator};

impl<T> Validator<T> {
    /// Requires the value to be present.
    ///
    /// Fails with [`GuardErrorKind::MissingValue`].
    pub fn is_not_null(self) -> GuardResult<Self> {
        let passed = self.is_present();
        self.ensure(passed, GuardErrorKind::MissingValue, Check::NotNull, Params::new)
    }

    /// Requires the value to be absent.
    pub fn is_null(self) -> GuardResult<Self> {
        let passed = !self.is_present();
        self.ensure(passed, GuardErrorKind::InvalidValue, Check::Null, Params::new)
    }

    /// Requires the value to be present and ends the chain with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramguard::prelude::*;
    ///
    /// let retries: Option<u8> = Some(3);
    /// let retries = validate_option(retries, "retries").is_less_than(10)?.require()?;
    /// assert_eq!(retries, 3);
    /// # Ok::<(), GuardError>(())
    /// ```
    pub fn require(mut self) -> GuardResult<T> {
        match self.value.take() {
            Some(value) => Ok(value),
            None => Err(self.reject(
                GuardErrorKind::MissingValue,
                Check::NotNull,
                Params::new(),
            )),
        }
    }

    /// Requires the value to equal `other`.
    pub fn is_equal_to<U>(self, other: U) -> GuardResult<Self>
    where
        T: PartialEq<U>,
        U: Debug,
    {
        let passed = self.value().is_none_or(|value| *value == other);
        self.ensure(passed, GuardErrorKind::InvalidValue, Check::EqualTo, || {
            smallvec![("value", format!("{other:?}"))]
        })
    }

    /// Requires the value to differ from `other`.
    pub fn is_not_equal_to<U>(self, other: U) -> GuardResult<Self>
    where
        T: PartialEq<U>,
        U: Debug,
    {
        let passed = self.value().is_none_or(|value| *value != other);
        self.ensure(passed, GuardErrorKind::InvalidValue, Check::NotEqualTo, || {
            smallvec![("value", format!("{other:?}"))]
        })
    }
}
