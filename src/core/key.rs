use std::fmt;

use serde::{Deserialize, Serialize};

/// A collection key: either an integer index or a string name.
///
/// Integer `0` and the empty string are ordinary keys. "No key supplied"
/// is expressed as `Option<Key>` at the insertion gate, never as a falsy
/// key value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(s) => Some(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Index(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Self::Index(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Self::Index(i as i64)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_keys_are_distinct() {
        assert_ne!(Key::from(5), Key::from("5"));
        assert_eq!(Key::from(5), Key::Index(5));
        assert_eq!(Key::from("5"), Key::Name("5".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::from(3).to_string(), "3");
        assert_eq!(Key::from("name").to_string(), "name");
    }
}
