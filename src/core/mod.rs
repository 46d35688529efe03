pub mod error;
pub mod key;
pub mod value;

pub use error::{CollectionError, Result};
pub use key::Key;
pub use value::{Callable, DataType, Object, Resource, Value};
