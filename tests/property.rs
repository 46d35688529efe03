//! Property-based tests using proptest.
//!
//! These verify the storage and validation invariants over randomly
//! generated inputs: sequential auto keys, strong exception safety on
//! rejected values, and order preservation.

use proptest::prelude::*;
use typedcoll::{IntType, Key, StringType, TypedCollection, Value};

fn int_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..32)
}

fn string_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 1..16)
}

proptest! {
    /// Seeding with n values assigns keys 0..n in order.
    #[test]
    fn prop_seeded_keys_are_sequential(values in int_values()) {
        let coll = TypedCollection::with_values(
            IntType,
            values.iter().copied().map(Value::Integer),
        ).unwrap();

        prop_assert_eq!(coll.len(), values.len());
        for (i, (key, value)) in coll.iter().enumerate() {
            prop_assert_eq!(key, &Key::Index(i as i64));
            prop_assert_eq!(value, &Value::Integer(values[i]));
        }
    }

    /// A rejected push never changes the stored entries.
    #[test]
    fn prop_rejected_push_changes_nothing(values in int_values(), bad in "[a-z]{1,8}") {
        let mut coll = TypedCollection::with_values(
            IntType,
            values.iter().copied().map(Value::Integer),
        ).unwrap();
        let before = coll.entries().to_vec();

        prop_assert!(coll.push(bad.as_str()).is_err());
        prop_assert_eq!(coll.entries(), before.as_slice());
    }

    /// Removals never lower the next auto key.
    #[test]
    fn prop_auto_key_never_decreases(values in int_values(), victim in any::<usize>()) {
        prop_assume!(!values.is_empty());

        let mut coll = TypedCollection::with_values(
            IntType,
            values.iter().copied().map(Value::Integer),
        ).unwrap();

        coll.remove(victim % values.len());
        let key = coll.push(0).unwrap();
        prop_assert_eq!(key, Key::Index(values.len() as i64));
    }

    /// Keyed overwrites keep length and key order intact.
    #[test]
    fn prop_overwrite_preserves_order(keys in string_keys()) {
        let mut coll = TypedCollection::new(StringType).unwrap();
        for key in &keys {
            coll.insert(key.as_str(), "first").unwrap();
        }
        let order_before: Vec<Key> = coll.keys().cloned().collect();
        let len_before = coll.len();

        for key in &keys {
            coll.insert(key.as_str(), "second").unwrap();
        }

        prop_assert_eq!(coll.len(), len_before);
        let order_after: Vec<Key> = coll.keys().cloned().collect();
        prop_assert_eq!(order_after, order_before);
        for key in &keys {
            prop_assert_eq!(coll.get(key.as_str()).unwrap(), &Value::from("second"));
        }
    }
}
