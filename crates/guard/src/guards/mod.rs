//! Built-in checks
//!
//! Each family adds methods to [`Validator`](crate::foundation::Validator):
//!
//! - **Identity**: null and equality checks, on every value
//! - **Ordering**: comparisons and ranges, for `T: PartialOrd + Display`
//! - **Text**: emptiness, whitespace, length, substrings ([`TextGuard`])
//! - **Pattern**: regular expressions ([`PatternGuard`])
//! - **Collection**: emptiness and membership ([`CollectionGuard`])
//! - **Types**: `dyn Any` values and [`TypeInfo`] descriptors
//! - **Conditional**: `when`, `when_else`, `fail_if`
//!
//! Text, pattern and collection checks share method names, so they live on
//! extension traits; bring them in with the [prelude](crate::prelude).

// Inherent methods
mod conditional;
mod identity;
mod ordering;

// Extension traits
pub mod collection;
pub mod pattern;
pub mod text;
pub mod types;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use collection::{Collection, CollectionGuard};
pub use pattern::{MatchOutcome, PatternGuard, RegexMatch};
pub use text::{Case, TextGuard};
pub use types::{AnyValue, TypeInfo, TypeInfoBuilder, TypeKind};
