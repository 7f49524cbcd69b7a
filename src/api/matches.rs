use std::marker::PhantomData;

use crate::api::ArgumentId;
use crate::model::{Scalar, Value};

/// A typed handle to a declared argument, used to read its value out of [`Matches`].
pub struct Key<T> {
    id: ArgumentId,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    pub(crate) fn new(id: ArgumentId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// The untyped identity of the argument.
    pub fn id(&self) -> ArgumentId {
        self.id
    }
}

// Derives would needlessly require `T: Clone`, etc.
impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Key<T> {}

impl<T> std::fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("id", &self.id)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// The values bound by a successful parse, addressed by [`Key`].
///
/// ### Example
/// ```
/// use argbind::CommandLineParser;
///
/// let mut parser = CommandLineParser::new(["program", "--level=3"]);
/// let level = parser.option::<i64>(("--level", "-l")).key();
/// let name = parser.option::<String>(("--name", "-n")).key();
/// let matches = parser.parse().unwrap();
///
/// assert!(matches.contains(level));
/// assert_eq!(matches.get(level), Some(3));
/// assert!(!matches.contains(name));
/// assert_eq!(matches.get_or(name, "anonymous".to_string()), "anonymous");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matches {
    values: Vec<Option<Value>>,
}

impl Matches {
    pub(crate) fn new(values: Vec<Option<Value>>) -> Self {
        Self { values }
    }

    /// The value bound to the argument, or `None` if it was not provided.
    pub fn get<T: Scalar>(&self, key: Key<T>) -> Option<T> {
        self.value(key.id).and_then(T::from_value)
    }

    /// The value bound to the argument, or `default` if it was not provided.
    pub fn get_or<T: Scalar>(&self, key: Key<T>, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Whether the argument was provided.
    pub fn contains<T>(&self, key: Key<T>) -> bool {
        self.value(key.id).is_some()
    }

    /// The untyped value bound to the argument.
    pub fn value(&self, id: ArgumentId) -> Option<&Value> {
        self.values.get(id.0).and_then(Option::as_ref)
    }
}
