//! Seed a collection, append, reject a mismatch, and iterate.
//!
//! Run with: cargo run --example basic

use typedcoll::{IntType, InstanceOf, Object, TypedCollection, Value};

fn main() -> typedcoll::Result<()> {
    let mut numbers = TypedCollection::with_values(IntType, [1, 2, 3])?;

    let key = numbers.push(4)?;
    println!("appended under key {key}");

    match numbers.push("not a number") {
        Ok(_) => unreachable!(),
        Err(err) => println!("rejected as expected: {err}"),
    }

    for (key, value) in &numbers {
        println!("  {key} => {value}");
    }

    // Class-constrained collection over object values.
    let mut users = TypedCollection::new(InstanceOf::new("User"))?;
    users.add(
        "alice",
        Object::new("User").with_field("name", "Alice").with_field("age", 30),
    )?;

    assert!(!users.validate(&Value::Object(Object::new("Order"))));
    println!("users as JSON: {}", users.to_json()?);

    Ok(())
}
