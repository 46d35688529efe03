use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A dynamically typed object with a class label and named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: String,
    fields: BTreeMap<String, Value>,
}

impl Object {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

/// An external handle, e.g. a file or socket stand-in. A resource stops
/// counting as one once closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    kind: String,
    open: bool,
}

impl Resource {
    pub fn open(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            open: true,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named invocable value. Equality is identity: two callables are equal
/// only when they share the same underlying function.
#[derive(Clone)]
pub struct Callable {
    name: String,
    f: Arc<CallableFn>,
}

impl Callable {
    pub fn new(
        name: impl Into<String>,
        f: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            f: Arc::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.f)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").field("name", &self.name).finish()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Array(Vec<Value>),
    Object(Object),
    Resource(Resource),
    Callable(Callable),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "bool",
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::Array(_) => "iterable",
            Self::Object(_) => "object",
            Self::Resource(_) => "resource",
            Self::Callable(_) => "callable",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => {
                if a.is_nan() && b.is_nan() {
                    return true;
                }
                (a - b).abs() < f64::EPSILON
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Resource(a), Self::Resource(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    if *fl > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else {
                    write!(f, "{}", fl)
                }
            }
            Self::Text(s) => write!(f, "{}", s),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Object(o) => write!(f, "{}", o.class()),
            Self::Resource(r) => write!(f, "resource({})", r.kind()),
            Self::Callable(c) => write!(f, "callable({})", c.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl From<Resource> for Value {
    fn from(r: Resource) -> Self {
        Self::Resource(r)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Self::Callable(c)
    }
}

/// The closed set of value kinds a collection can be constrained to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Iterable,
    Object,
    Resource,
    Callable,
}

impl DataType {
    /// Strict kind membership. Each kind accepts exactly its own values:
    /// an integer is not a float here, and `Null` belongs to no kind but
    /// `Null`. An open check applies to resources only while open.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Null, Value::Null) => true,
            (Self::Boolean, Value::Boolean(_)) => true,
            (Self::Integer, Value::Integer(_)) => true,
            (Self::Float, Value::Float(_)) => true,
            (Self::Text, Value::Text(_)) => true,
            (Self::Iterable, Value::Array(_)) => true,
            (Self::Object, Value::Object(_)) => true,
            (Self::Resource, Value::Resource(r)) => r.is_open(),
            (Self::Callable, Value::Callable(_)) => true,
            _ => false,
        }
    }

    /// Resolve a type name. Canonical names are the lowercase labels
    /// returned by [`Value::type_name`]; a few common aliases are accepted.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Null),
            "bool" | "boolean" => Some(Self::Boolean),
            "int" | "integer" => Some(Self::Integer),
            "float" | "double" => Some(Self::Float),
            "string" => Some(Self::Text),
            "iterable" | "array" => Some(Self::Iterable),
            "object" => Some(Self::Object),
            "resource" => Some(Self::Resource),
            "callable" => Some(Self::Callable),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "bool",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Text => "string",
            Self::Iterable => "iterable",
            Self::Object => "object",
            Self::Resource => "resource",
            Self::Callable => "callable",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Integer(42), Value::Integer(42));
        assert_eq!(Value::Float(3.14), Value::Float(3.14));
        assert_ne!(Value::Integer(1), Value::Integer(2));
        assert_ne!(Value::Integer(1), Value::Float(1.0));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_callable_identity_equality() {
        let a = Callable::new("id", |args| args.first().cloned().unwrap_or(Value::Null));
        let b = a.clone();
        let c = Callable::new("id", |args| args.first().cloned().unwrap_or(Value::Null));

        assert_eq!(Value::Callable(a.clone()), Value::Callable(b));
        assert_ne!(Value::Callable(a), Value::Callable(c));
    }

    #[test]
    fn test_kind_membership_is_strict() {
        assert!(DataType::Integer.matches(&Value::Integer(42)));
        assert!(!DataType::Integer.matches(&Value::Float(42.0)));
        assert!(!DataType::Float.matches(&Value::Integer(42)));
        assert!(!DataType::Integer.matches(&Value::Null));
        assert!(DataType::Null.matches(&Value::Null));
    }

    #[test]
    fn test_closed_resource_is_not_a_resource() {
        let mut r = Resource::open("stream");
        assert!(DataType::Resource.matches(&Value::Resource(r.clone())));
        r.close();
        assert!(!DataType::Resource.matches(&Value::Resource(r)));
    }

    #[test]
    fn test_parse_type_names() {
        assert_eq!(DataType::parse("int"), Some(DataType::Integer));
        assert_eq!(DataType::parse("integer"), Some(DataType::Integer));
        assert_eq!(DataType::parse("double"), Some(DataType::Float));
        assert_eq!(DataType::parse("array"), Some(DataType::Iterable));
        assert_eq!(DataType::parse("Foo"), None);
    }
}
