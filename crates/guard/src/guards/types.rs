//! Type checks
//!
//! Two kinds of subject are supported:
//!
//! - dynamically typed values (`Box<dyn Any>`, `Rc<dyn Any>`, `&dyn Any`, ...),
//!   see [`AnyValue`]
//! - type descriptors ([`TypeInfo`]), for checks about a type rather than a
//!   value
//!
//! Rust has no runtime subtyping, so assignability between descriptors is
//! declared up front with [`TypeInfo::builder`]. Each declaration takes a
//! witness closure the compiler must accept as a `&T -> &U` coercion.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use smallvec::smallvec;

use crate::foundation::{Check, GuardErrorKind, GuardResult, Params, Validator};

// ============================================================================
// TYPE INFO
// ============================================================================

/// What a [`TypeInfo`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A nominal type values can have (`u32`, `String`, a struct, ...).
    Concrete,
    /// A `dyn Trait` type.
    TraitObject,
}

/// Runtime descriptor of a type.
///
/// Equality and hashing use the [`TypeId`] only.
///
/// # Examples
///
/// ```
/// use std::fmt::Display;
/// use paramguard::prelude::*;
///
/// let info = TypeInfo::builder::<u32>()
///     .implements::<dyn Display>(|v| v)
///     .build();
///
/// assert!(info.is_assignable_to(&TypeInfo::trait_object::<dyn Display>()));
/// assert!(info.is_assignable_to(&TypeInfo::of::<u32>()));
/// assert!(!info.is_assignable_to(&TypeInfo::of::<u64>()));
/// ```
#[derive(Debug, Clone)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
    assignable_to: Vec<(TypeId, &'static str)>,
}

impl TypeInfo {
    fn new<T: ?Sized + 'static>(kind: TypeKind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            kind,
            assignable_to: Vec::new(),
        }
    }

    /// Describes the concrete type `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new::<T>(TypeKind::Concrete)
    }

    /// Describes the trait object type `T` (`dyn Trait`).
    #[must_use]
    pub fn trait_object<T: ?Sized + 'static>() -> Self {
        Self::new::<T>(TypeKind::TraitObject)
    }

    /// Describes `T` together with the types it may be used as.
    pub fn builder<T: 'static>() -> TypeInfoBuilder<T> {
        TypeInfoBuilder {
            info: Self::of::<T>(),
            _marker: PhantomData,
        }
    }

    /// The [`TypeId`] of the described type.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The name of the described type, as given by [`type_name`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is a concrete type or a trait object.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns true if values of this type can be used as `target`: the
    /// same type, or one declared with [`TypeInfoBuilder::implements`].
    #[must_use]
    pub fn is_assignable_to(&self, target: &TypeInfo) -> bool {
        self.is_assignable_to_id(target.id)
    }

    fn is_assignable_to_id(&self, target: TypeId) -> bool {
        self.id == target || self.assignable_to.iter().any(|(id, _)| *id == target)
    }

    /// Names of the declared assignment targets.
    pub fn assignable_targets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assignable_to.iter().map(|(_, name)| *name)
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl AsRef<Self> for TypeInfo {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Builder for a [`TypeInfo`] with declared assignment targets.
#[derive(Debug)]
#[must_use = "builder methods must be chained or built"]
pub struct TypeInfoBuilder<T> {
    info: TypeInfo,
    _marker: PhantomData<fn(&T)>,
}

impl<T: 'static> TypeInfoBuilder<T> {
    /// Declares that `T` can be used as `U`.
    ///
    /// `_witness` is never called; it only has to compile, which proves the
    /// coercion exists (`|v| v` for a trait `T` implements).
    pub fn implements<U: ?Sized + 'static>(mut self, _witness: fn(&T) -> &U) -> Self {
        let id = TypeId::of::<U>();
        if !self.info.is_assignable_to_id(id) {
            self.info.assignable_to.push((id, type_name::<U>()));
        }
        self
    }

    /// Finishes the descriptor.
    pub fn build(self) -> TypeInfo {
        self.info
    }
}

// ============================================================================
// DYNAMIC VALUES
// ============================================================================

/// A dynamically typed value whose concrete type can be inspected.
///
/// Implemented for `dyn Any` (optionally `+ Send`, `+ Send + Sync`) and for
/// `Box`, `Rc`, `Arc` and references wrapping an implementor. The checks look
/// at the value inside the container, never the container itself.
pub trait AnyValue {
    /// The contained value.
    fn as_any(&self) -> &dyn Any;
}

impl AnyValue for dyn Any {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AnyValue for dyn Any + Send {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AnyValue for dyn Any + Send + Sync {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

macro_rules! impl_any_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: AnyValue + ?Sized> AnyValue for $ptr<T> {
                fn as_any(&self) -> &dyn Any {
                    (**self).as_any()
                }
            }
        )*
    };
}

impl_any_pointer!(Box, Rc, Arc);

impl<T: AnyValue + ?Sized> AnyValue for &T {
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}

fn type_params(name: &str) -> Params {
    smallvec![("type", name.to_owned())]
}

impl<T: AnyValue> Validator<T> {
    /// Requires the value's concrete type to be exactly `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    /// use paramguard::prelude::*;
    ///
    /// let value: Box<dyn Any> = Box::new(7_i64);
    /// assert!(validate(value, "value").is_type::<i64>().is_ok());
    /// ```
    pub fn is_type<U: Any>(self) -> GuardResult<Self> {
        self.ensure_value(|v| v.as_any().is::<U>(), Check::Type, || {
            type_params(type_name::<U>())
        })
    }

    /// Requires the value's concrete type to be the one `info` describes.
    pub fn is_instance_of(self, info: &TypeInfo) -> GuardResult<Self> {
        self.ensure_value(|v| v.as_any().type_id() == info.id(), Check::Type, || {
            type_params(info.name())
        })
    }

    /// Borrows the value as `U`.
    ///
    /// Returns `Ok(None)` when the value is absent and fails with
    /// [`Check::Type`] when it has another type.
    pub fn downcast_ref<U: Any>(&self) -> GuardResult<Option<&U>> {
        let Some(value) = self.value() else {
            return Ok(None);
        };
        match value.as_any().downcast_ref::<U>() {
            Some(typed) => Ok(Some(typed)),
            None => Err(self.reject(
                GuardErrorKind::InvalidValue,
                Check::Type,
                type_params(type_name::<U>()),
            )),
        }
    }
}

// ============================================================================
// TYPE DESCRIPTORS
// ============================================================================

impl<T: AsRef<TypeInfo>> Validator<T> {
    /// Requires the described type to be exactly `U`.
    pub fn is_same_type<U: ?Sized + 'static>(self) -> GuardResult<Self> {
        self.ensure_value(
            |info| info.as_ref().id() == TypeId::of::<U>(),
            Check::Type,
            || type_params(type_name::<U>()),
        )
    }

    /// Requires the described type to be usable as `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::fmt::Debug;
    /// use paramguard::prelude::*;
    ///
    /// let info = TypeInfo::builder::<String>().implements::<dyn Debug>(|v| v).build();
    /// assert!(validate(&info, "type").is_assignable_to::<dyn Debug>().is_ok());
    /// assert!(validate(&info, "type").is_assignable_to::<str>().is_err());
    /// ```
    pub fn is_assignable_to<U: ?Sized + 'static>(self) -> GuardResult<Self> {
        self.ensure_value(
            |info| info.as_ref().is_assignable_to_id(TypeId::of::<U>()),
            Check::AssignableTo,
            || type_params(type_name::<U>()),
        )
    }

    /// Requires the described type to be usable as `target`.
    pub fn is_assignable_to_info(self, target: &TypeInfo) -> GuardResult<Self> {
        self.ensure_value(
            |info| info.as_ref().is_assignable_to(target),
            Check::AssignableTo,
            || type_params(target.name()),
        )
    }

    /// Requires a concrete type.
    pub fn is_concrete(self) -> GuardResult<Self> {
        self.ensure_value(
            |info| info.as_ref().kind() == TypeKind::Concrete,
            Check::Concrete,
            Params::new,
        )
    }

    /// Requires a trait object type.
    pub fn is_trait_object(self) -> GuardResult<Self> {
        self.ensure_value(
            |info| info.as_ref().kind() == TypeKind::TraitObject,
            Check::TraitObject,
            Params::new,
        )
    }
}
