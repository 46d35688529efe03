//! The typed collection and its validation-strategy dispatch.

use std::fmt;
use std::ops::Index;

use log::{debug, trace};

use crate::core::{CollectionError, DataType, Key, Result, Value};
use crate::types::{
    BoolType, CallableType, FloatType, InstanceOf, IntType, IterableType, ObjectType,
    ResourceType, StringType, TypeRule,
};

type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// A validation strategy as supplied by the caller: a rule object, a bare
/// predicate, or a type name to be resolved at construction.
pub enum TypeSpec {
    Rule(Box<dyn TypeRule>),
    Predicate {
        name: &'static str,
        f: Box<PredicateFn>,
    },
    Name(String),
}

impl TypeSpec {
    pub fn rule(rule: impl TypeRule + 'static) -> Self {
        Self::Rule(Box::new(rule))
    }

    /// Wrap a bare predicate. The closure's type name becomes the
    /// strategy's identity label in error messages.
    pub fn predicate(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate {
            name: std::any::type_name_of_val(&f),
            f: Box::new(f),
        }
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<DataType> for TypeSpec {
    fn from(kind: DataType) -> Self {
        Self::Name(kind.name().to_string())
    }
}

macro_rules! impl_from_rule {
    ($($rule:ty),+ $(,)?) => {$(
        impl From<$rule> for TypeSpec {
            fn from(rule: $rule) -> Self {
                TypeSpec::rule(rule)
            }
        }
    )+};
}

impl_from_rule!(
    BoolType,
    IntType,
    FloatType,
    StringType,
    ObjectType,
    ResourceType,
    CallableType,
    IterableType,
    InstanceOf,
);

/// The resolved strategy. Exactly one variant is active per collection and
/// it never changes after construction.
enum Validator {
    Rule(Box<dyn TypeRule>),
    Predicate {
        name: &'static str,
        f: Box<PredicateFn>,
    },
    Kind(DataType),
}

impl Validator {
    fn resolve(spec: TypeSpec) -> Result<Self> {
        match spec {
            TypeSpec::Rule(rule) => Ok(Self::Rule(rule)),
            TypeSpec::Predicate { name, f } => Ok(Self::Predicate { name, f }),
            TypeSpec::Name(name) => match DataType::parse(&name) {
                Some(kind) => {
                    debug!("resolved type name '{}' to kind {}", name, kind);
                    Ok(Self::Kind(kind))
                }
                None => Err(CollectionError::unknown_type(&name)),
            },
        }
    }

    fn validate(&self, value: &Value) -> bool {
        match self {
            Self::Rule(rule) => rule.validate(value),
            Self::Predicate { f, .. } => f(value),
            Self::Kind(kind) => kind.matches(value),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Rule(rule) => rule.name(),
            Self::Predicate { name, .. } => name,
            Self::Kind(kind) => kind.name(),
        }
    }
}

/// One key-value pair of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: Key,
    pub value: Value,
}

/// An insertion-ordered key-value collection that only accepts values
/// passing its validation strategy.
///
/// The strategy is fixed at construction: a [`TypeRule`] object, a bare
/// predicate, or a type name. Every mutation funnels through the same
/// validation gate; reads never re-validate.
///
/// # Examples
///
/// ```
/// use typedcoll::{IntType, TypedCollection, Value};
///
/// # fn main() -> typedcoll::Result<()> {
/// let mut numbers = TypedCollection::with_values(IntType, [1, 2, 3])?;
/// let key = numbers.push(4)?;
///
/// assert_eq!(numbers.len(), 4);
/// assert_eq!(numbers.get(key)?, &Value::Integer(4));
/// assert!(numbers.push("not a number").is_err());
/// assert_eq!(numbers.len(), 4);
/// # Ok(())
/// # }
/// ```
pub struct TypedCollection {
    validator: Validator,
    entries: Vec<Entry>,
    next_index: i64,
}

impl TypedCollection {
    /// Create an empty collection with the given validation strategy.
    ///
    /// Fails with `InvalidArgument` when a name-form strategy resolves to
    /// no known type.
    pub fn new(spec: impl Into<TypeSpec>) -> Result<Self> {
        Ok(Self {
            validator: Validator::resolve(spec.into())?,
            entries: Vec::new(),
            next_index: 0,
        })
    }

    /// Create a collection seeded with values under sequential integer
    /// keys starting at 0.
    ///
    /// The first invalid value aborts construction with `InvalidArgument`;
    /// no collection is produced.
    pub fn with_values<V>(
        spec: impl Into<TypeSpec>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self>
    where
        V: Into<Value>,
    {
        let mut collection = Self::new(spec)?;
        for value in values {
            let value = value.into();
            collection.ensure_valid(&value)?;
            collection.append(value);
        }
        Ok(collection)
    }

    /// Create a collection seeded with explicit key-value pairs, preserving
    /// the given keys and order. A repeated key overwrites its earlier
    /// entry in place.
    pub fn with_entries<K, V>(
        spec: impl Into<TypeSpec>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut collection = Self::new(spec)?;
        for (key, value) in entries {
            collection.set(Some(key.into()), value.into())?;
        }
        Ok(collection)
    }

    /// Check a value against the active strategy. Never errors.
    pub fn validate(&self, value: &Value) -> bool {
        self.validator.validate(value)
    }

    /// Check a value, failing with `InvalidArgument` naming the expected
    /// type when it is rejected.
    pub fn ensure_valid(&self, value: &Value) -> Result<()> {
        if !self.validate(value) {
            return Err(CollectionError::not_of_type(self.validator.name()));
        }
        Ok(())
    }

    /// Display name of the active strategy: the rule's label, the
    /// predicate's identity, or the resolved type name.
    pub fn type_name(&self) -> &str {
        self.validator.name()
    }

    /// Whether a key is present, regardless of the stored value.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.position(&key.into()).is_some()
    }

    /// Strict accessor: the value at `key`, or `UndefinedOffset` when the
    /// key is absent.
    pub fn get(&self, key: impl Into<Key>) -> Result<&Value> {
        let key = key.into();
        match self.position(&key) {
            Some(pos) => Ok(&self.entries[pos].value),
            None => Err(CollectionError::UndefinedOffset(key)),
        }
    }

    /// Insert or overwrite. `None` appends under the next sequential
    /// integer key; `Some(key)` overwrites in place or appends a new entry.
    ///
    /// Validation happens before any storage change, so a failed `set`
    /// leaves the collection untouched.
    pub fn set(&mut self, key: Option<Key>, value: Value) -> Result<()> {
        self.ensure_valid(&value)?;
        match key {
            None => {
                self.append(value);
            }
            Some(key) => match self.position(&key) {
                Some(pos) => {
                    trace!("overwriting entry at key '{}'", key);
                    self.entries[pos].value = value;
                }
                None => {
                    if let Some(i) = key.as_index()
                        && i >= self.next_index
                    {
                        self.next_index = i + 1;
                    }
                    self.entries.push(Entry { key, value });
                }
            },
        }
        Ok(())
    }

    /// Append under the next sequential integer key and return that key.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<Key> {
        let value = value.into();
        self.ensure_valid(&value)?;
        Ok(self.append(value))
    }

    /// Validating bulk append. All values are checked before any is
    /// stored, so a failure leaves the collection unchanged.
    pub fn append_all<V>(&mut self, values: impl IntoIterator<Item = V>) -> Result<()>
    where
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        for value in &values {
            self.ensure_valid(value)?;
        }
        for value in values {
            self.append(value);
        }
        Ok(())
    }

    /// Keyed insert returning the replaced value, if any.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = key.into();
        let value = value.into();
        self.ensure_valid(&value)?;
        match self.position(&key) {
            Some(pos) => Ok(Some(std::mem::replace(&mut self.entries[pos].value, value))),
            None => {
                if let Some(i) = key.as_index()
                    && i >= self.next_index
                {
                    self.next_index = i + 1;
                }
                self.entries.push(Entry { key, value });
                Ok(None)
            }
        }
    }

    /// Remove and return the value at `key`. Absent keys are a no-op
    /// returning `None`, never an error.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        let pos = self.position(&key)?;
        trace!("removing entry at key '{}'", key);
        Some(self.entries.remove(pos).value)
    }

    /// Chaining insert: `coll.add(0, v)?.add("name", w)?;`
    pub fn add(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<&mut Self> {
        self.insert(key, value)?;
        Ok(self)
    }

    /// Chaining removal; absent keys are ignored.
    pub fn discard(&mut self, key: impl Into<Key>) -> &mut Self {
        self.remove(key);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live ordered view of all entries.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Fresh borrowing iterator over `(key, value)` pairs in insertion
    /// order. Each call restarts from the first entry.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|e| &e.value)
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|e| &e.key == key)
    }

    /// Store a pre-validated value under the next auto key.
    fn append(&mut self, value: Value) -> Key {
        let key = Key::Index(self.next_index);
        self.next_index += 1;
        self.entries.push(Entry {
            key: key.clone(),
            value,
        });
        key
    }
}

impl fmt::Debug for TypedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedCollection")
            .field("type", &self.type_name())
            .field("entries", &self.entries)
            .finish()
    }
}

/// Direct accessor mirroring raw storage access: panics on an absent key.
/// Use [`TypedCollection::get`] for a recoverable lookup.
impl<K: Into<Key>> Index<K> for TypedCollection {
    type Output = Value;

    fn index(&self, key: K) -> &Value {
        let key = key.into();
        match self.position(&key) {
            Some(pos) => &self.entries[pos].value,
            None => panic!("key '{}' does not exist", key),
        }
    }
}

/// Borrowing iterator over a collection's entries in insertion order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TypedCollection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
