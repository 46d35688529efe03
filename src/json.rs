//! Conversion between dynamic values and JSON.
//!
//! Callable and resource values have no JSON rendition, so the outbound
//! direction is fallible. Inbound conversion is total: JSON objects become
//! [`Object`] values with the class label `"object"`.

use serde_json::Number;

use crate::collection::TypedCollection;
use crate::core::{CollectionError, Object, Result, Value};

pub fn value_to_json(value: &Value) -> Result<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Boolean(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Integer(i) => Ok(serde_json::Value::Number(Number::from(*i))),
        Value::Float(f) => match Number::from_f64(*f) {
            Some(n) => Ok(serde_json::Value::Number(n)),
            None => Err(CollectionError::InvalidArgument(format!(
                "float value '{}' has no JSON rendition",
                f
            ))),
        },
        Value::Text(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(value_to_json(item)?);
            }
            Ok(serde_json::Value::Array(out))
        }
        Value::Object(o) => {
            let mut map = serde_json::Map::new();
            for (name, field) in o.fields() {
                map.insert(name.clone(), value_to_json(field)?);
            }
            Ok(serde_json::Value::Object(map))
        }
        Value::Resource(_) | Value::Callable(_) => Err(CollectionError::InvalidArgument(
            format!("value of type {} has no JSON rendition", value.type_name()),
        )),
    }
}

pub fn value_from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Text(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(value_from_json).collect())
        }
        serde_json::Value::Object(map) => {
            let mut object = Object::new("object");
            for (name, field) in map {
                object.set_field(name.clone(), value_from_json(field));
            }
            Value::Object(object)
        }
    }
}

impl TypedCollection {
    /// Export as a JSON object keyed by each key's display form. Key order
    /// follows `serde_json`'s map implementation, not insertion order; use
    /// [`TypedCollection::iter`] when order matters.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        let mut map = serde_json::Map::new();
        for (key, value) in self {
            map.insert(key.to_string(), value_to_json(value)?);
        }
        Ok(serde_json::Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Callable;

    #[test]
    fn test_round_trip_for_data_values() {
        let values = vec![
            Value::Null,
            Value::Boolean(true),
            Value::Integer(42),
            Value::Float(2.5),
            Value::Text("hello".into()),
            Value::Array(vec![Value::Integer(1), Value::Text("two".into())]),
        ];

        for value in values {
            let json = value_to_json(&value).unwrap();
            assert_eq!(value_from_json(&json), value);
        }
    }

    #[test]
    fn test_object_fields_survive() {
        let object = Object::new("User").with_field("name", "Alice").with_field("age", 30);
        let json = value_to_json(&Value::Object(object)).unwrap();

        assert_eq!(json["name"], serde_json::json!("Alice"));
        assert_eq!(json["age"], serde_json::json!(30));
    }

    #[test]
    fn test_callable_has_no_json_rendition() {
        let callable = Value::Callable(Callable::new("noop", |_| Value::Null));
        let err = value_to_json(&callable).unwrap_err();
        assert!(err.to_string().contains("callable"));
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        assert!(value_to_json(&Value::Float(f64::NAN)).is_err());
    }
}
