//! Built-in one-kind-each validation rules.

use crate::core::{DataType, Value};
use crate::types::TypeRule;

/// Accepts boolean values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolType;

impl TypeRule for BoolType {
    fn validate(&self, value: &Value) -> bool {
        DataType::Boolean.matches(value)
    }

    fn name(&self) -> &str {
        "bool"
    }
}

/// Accepts integer values.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntType;

impl TypeRule for IntType {
    fn validate(&self, value: &Value) -> bool {
        DataType::Integer.matches(value)
    }

    fn name(&self) -> &str {
        "int"
    }
}

/// Accepts floating-point values. Integers are not floats here.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatType;

impl TypeRule for FloatType {
    fn validate(&self, value: &Value) -> bool {
        DataType::Float.matches(value)
    }

    fn name(&self) -> &str {
        "float"
    }
}

/// Accepts string values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl TypeRule for StringType {
    fn validate(&self, value: &Value) -> bool {
        DataType::Text.matches(value)
    }

    fn name(&self) -> &str {
        "string"
    }
}

/// Accepts any object value regardless of class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectType;

impl TypeRule for ObjectType {
    fn validate(&self, value: &Value) -> bool {
        DataType::Object.matches(value)
    }

    fn name(&self) -> &str {
        "object"
    }
}

/// Accepts open resource handles. A closed resource is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceType;

impl TypeRule for ResourceType {
    fn validate(&self, value: &Value) -> bool {
        DataType::Resource.matches(value)
    }

    fn name(&self) -> &str {
        "resource"
    }
}

/// Accepts callable values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallableType;

impl TypeRule for CallableType {
    fn validate(&self, value: &Value) -> bool {
        DataType::Callable.matches(value)
    }

    fn name(&self) -> &str {
        "callable"
    }
}

/// Accepts iterable values (arrays).
#[derive(Debug, Clone, Copy, Default)]
pub struct IterableType;

impl TypeRule for IterableType {
    fn validate(&self, value: &Value) -> bool {
        DataType::Iterable.matches(value)
    }

    fn name(&self) -> &str {
        "iterable"
    }
}

/// Accepts objects of one specific class label.
#[derive(Debug, Clone)]
pub struct InstanceOf {
    class: String,
}

impl InstanceOf {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl TypeRule for InstanceOf {
    fn validate(&self, value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|o| o.class() == self.class)
    }

    fn name(&self) -> &str {
        &self.class
    }
}
