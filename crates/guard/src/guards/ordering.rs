//! Ordering checks
//!
//! Available when `T: PartialOrd + Display`. Every check passes vacuously
//! when the value is absent.

use std::fmt::Display;

use smallvec::smallvec;

use crate::foundation::{Check, GuardResult, Params, Validator};

fn bound_params<T: Display>(value: &T) -> Params {
    smallvec![("value", value.to_string())]
}

fn range_params<T: Display>(min: &T, max: &T) -> Params {
    smallvec![("min", min.to_string()), ("max", max.to_string())]
}

impl<T> Validator<T>
where
    T: PartialOrd + Display,
{
    /// Requires `value > bound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramguard::prelude::*;
    ///
    /// assert!(validate(6, "n").is_greater_than(5).is_ok());
    /// assert!(validate(5, "n").is_greater_than(5).is_err());
    /// ```
    pub fn is_greater_than(self, bound: T) -> GuardResult<Self> {
        self.ensure_value(|v| *v > bound, Check::GreaterThan, || bound_params(&bound))
    }

    /// Requires `value >= bound`.
    pub fn is_greater_than_or_equal_to(self, bound: T) -> GuardResult<Self> {
        self.ensure_value(|v| *v >= bound, Check::GreaterThanOrEqualTo, || {
            bound_params(&bound)
        })
    }

    /// Requires `value < bound`.
    pub fn is_less_than(self, bound: T) -> GuardResult<Self> {
        self.ensure_value(|v| *v < bound, Check::LessThan, || bound_params(&bound))
    }

    /// Requires `value <= bound`.
    pub fn is_less_than_or_equal_to(self, bound: T) -> GuardResult<Self> {
        self.ensure_value(|v| *v <= bound, Check::LessThanOrEqualTo, || {
            bound_params(&bound)
        })
    }

    /// Requires `min <= value <= max`.
    ///
    /// The lower bound is checked first, then the upper bound; both report
    /// the `between` message.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramguard::prelude::*;
    ///
    /// assert!(validate(1, "n").is_between(1, 3).is_ok());
    /// assert!(validate(3, "n").is_between(1, 3).is_ok());
    /// assert!(validate_option(None::<i32>, "n").is_between(1, 3).is_ok());
    ///
    /// let error = validate(0, "n").is_between(1, 3).unwrap_err();
    /// assert_eq!(error.message(), "Value must be between '1' and '3'.");
    /// ```
    pub fn is_between(self, min: T, max: T) -> GuardResult<Self> {
        self.ensure_value(|v| *v >= min, Check::Between, || range_params(&min, &max))?
            .ensure_value(|v| *v <= max, Check::Between, || range_params(&min, &max))
    }
}
