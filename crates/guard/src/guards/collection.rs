//! Collection checks
//!
//! [`CollectionGuard`] works on any `Validator<C>` with `C: Collection`.
//! Maps count membership by key.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use smallvec::smallvec;

use crate::foundation::{Check, GuardErrorKind, GuardResult, Params, Validator};

// ============================================================================
// COLLECTION
// ============================================================================

/// A container that can report emptiness and membership.
pub trait Collection {
    /// The element type membership is tested against.
    type Item;

    /// Returns true if the collection has no elements.
    fn is_empty(&self) -> bool;

    /// Returns true if `item` is an element (or key) of the collection.
    fn contains_item(&self, item: &Self::Item) -> bool;
}

macro_rules! impl_sequence {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: PartialEq> Collection for $ty {
                type Item = T;

                fn is_empty(&self) -> bool {
                    <$ty>::is_empty(self)
                }

                fn contains_item(&self, item: &T) -> bool {
                    self.iter().any(|element| element == item)
                }
            }
        )*
    };
}

impl_sequence!(Vec<T>, VecDeque<T>, LinkedList<T>, [T]);

impl<T: PartialEq> Collection for Box<[T]> {
    type Item = T;

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: PartialEq, const N: usize> Collection for [T; N] {
    type Item = T;

    fn is_empty(&self) -> bool {
        N == 0
    }

    fn contains_item(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Collection for HashSet<T, S> {
    type Item = T;

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = K;

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }

    fn contains_item(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Ord, V> Collection for BTreeMap<K, V> {
    type Item = K;

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }

    fn contains_item(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn is_empty(&self) -> bool {
        C::is_empty(self)
    }

    fn contains_item(&self, item: &Self::Item) -> bool {
        C::contains_item(self, item)
    }
}

// ============================================================================
// COLLECTION GUARD
// ============================================================================

/// Checks on collections.
///
/// # Examples
///
/// ```
/// use paramguard::prelude::*;
///
/// let hosts = vec!["a.example", "b.example"];
/// validate(&hosts, "hosts").is_not_empty()?.contains(&"a.example")?;
///
/// let error = validate(Vec::<i32>::new(), "ids").is_not_empty().unwrap_err();
/// assert_eq!(error.message(), "Value cannot be empty.");
/// # Ok::<(), GuardError>(())
/// ```
pub trait CollectionGuard: Sized {
    /// Element type of the checked collection.
    type Item;

    /// Requires the collection to be empty.
    fn is_empty(self) -> GuardResult<Self>;

    /// Requires at least one element.
    fn is_not_empty(self) -> GuardResult<Self>;

    /// Rejects absent ([`MissingValue`](GuardErrorKind::MissingValue)) and
    /// empty ([`InvalidValue`](GuardErrorKind::InvalidValue)) collections.
    fn is_not_null_or_empty(self) -> GuardResult<Self>;

    /// Requires `item` to be an element of the collection.
    ///
    /// The message shows `item` in its `{:?}` form.
    fn contains(self, item: &Self::Item) -> GuardResult<Self>
    where
        Self::Item: Debug;
}

impl<C: Collection> CollectionGuard for Validator<C> {
    type Item = C::Item;

    fn is_empty(self) -> GuardResult<Self> {
        self.ensure_value(Collection::is_empty, Check::Empty, Params::new)
    }

    fn is_not_empty(self) -> GuardResult<Self> {
        self.ensure_value(|c| !c.is_empty(), Check::NotEmpty, Params::new)
    }

    fn is_not_null_or_empty(self) -> GuardResult<Self> {
        let kind = if self.is_present() {
            GuardErrorKind::InvalidValue
        } else {
            GuardErrorKind::MissingValue
        };
        let passed = self.value().is_some_and(|c| !c.is_empty());
        self.ensure(passed, kind, Check::NotNullOrEmpty, Params::new)
    }

    fn contains(self, item: &C::Item) -> GuardResult<Self>
    where
        C::Item: Debug,
    {
        self.ensure_value(|c| c.contains_item(item), Check::Contains, || {
            smallvec![("value", format!("{item:?}"))]
        })
    }
}
