//! Validation rules a collection can be constrained by.
//!
//! A rule is anything implementing [`TypeRule`]: the eight built-in
//! primitive rules in [`primitive`], the class check [`InstanceOf`], or a
//! user-defined type.

pub mod primitive;

use crate::core::Value;

/// A type-membership check with a display name for error messages.
///
/// `validate` must be pure and total: it returns `false` for mismatches
/// and never fails.
pub trait TypeRule: Send + Sync {
    fn validate(&self, value: &Value) -> bool;

    /// Label used in `InvalidArgument` messages, e.g. `"int"`.
    fn name(&self) -> &str;
}

pub use primitive::{
    BoolType, CallableType, FloatType, InstanceOf, IntType, IterableType, ObjectType,
    ResourceType, StringType,
};
