//! Runtime type-validated, insertion-ordered collections.
//!
//! A [`TypedCollection`] is a key-value store that only accepts values
//! passing the validation strategy it was constructed with. The strategy
//! comes in three forms, resolved once at construction:
//!
//! - a rule object implementing [`TypeRule`] (the built-ins in
//!   [`types::primitive`], or your own),
//! - a bare predicate via [`TypeSpec::predicate`],
//! - a type name such as `"int"` or `"string"`.
//!
//! Every mutation funnels through the same validation gate; a rejected
//! value leaves the collection exactly as it was.
//!
//! # Examples
//!
//! ```
//! use typedcoll::{IntType, TypedCollection, Value};
//!
//! # fn main() -> typedcoll::Result<()> {
//! let mut numbers = TypedCollection::with_values(IntType, [1, 2, 3])?;
//!
//! numbers.push(4)?;
//! assert!(numbers.push("five").is_err());
//! assert_eq!(numbers.len(), 4);
//!
//! for (key, value) in &numbers {
//!     println!("{key} => {value}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Keys may be integers or strings; appends assign sequential integer
//! keys one past the highest integer key ever used:
//!
//! ```
//! use typedcoll::{TypeSpec, TypedCollection, Value};
//!
//! # fn main() -> typedcoll::Result<()> {
//! let mut flags = TypedCollection::new(TypeSpec::predicate(|v| {
//!     matches!(v, Value::Boolean(_))
//! }))?;
//!
//! flags.add("verbose", true)?.add("dry_run", false)?;
//! assert!(flags.contains_key("dry_run"));
//! assert_eq!(flags.get("verbose")?, &Value::Boolean(true));
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod core;
pub mod json;
pub mod types;

pub use collection::{Entry, Iter, TypeSpec, TypedCollection};
pub use core::{Callable, CollectionError, DataType, Key, Object, Resource, Result, Value};
pub use json::{value_from_json, value_to_json};
pub use types::{
    BoolType, CallableType, FloatType, InstanceOf, IntType, IterableType, ObjectType,
    ResourceType, StringType, TypeRule,
};
