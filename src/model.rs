use std::path::PathBuf;

/// The tag of a [`Value`] variant.
///
/// Each declared argument carries the `Kind` it accepts, derived from the [`Scalar`] type it was registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`bool`]
    Boolean,
    /// [`i64`]
    Int64,
    /// [`u64`]
    UInt64,
    /// [`f64`]
    Double,
    /// [`String`]
    Text,
    /// [`PathBuf`]
    Path,
}

impl Kind {
    /// The human readable label of this kind, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Int64 => "int64",
            Kind::UInt64 => "uint64",
            Kind::Double => "double",
            Kind::Text => "string",
            Kind::Path => "path",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A decoded command line value.
///
/// The set of variants is closed: adding one means touching [`Kind`], [`Scalar`], decoding and rendering together.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean.
    Boolean(bool),
    /// A signed 64 bit integer.
    Int64(i64),
    /// An unsigned 64 bit integer.
    UInt64(u64),
    /// A double precision float.
    Double(f64),
    /// Plain text.
    Text(String),
    /// A filesystem path.
    Path(PathBuf),
}

impl Value {
    /// The tag of the active variant.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Int64(_) => Kind::Int64,
            Value::UInt64(_) => Kind::UInt64,
            Value::Double(_) => Kind::Double,
            Value::Text(_) => Kind::Text,
            Value::Path(_) => Kind::Path,
        }
    }

    /// The human readable label of the active variant.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Int64(value) => write!(f, "{value}"),
            Value::UInt64(value) => write!(f, "{value}"),
            Value::Double(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value}"),
            Value::Path(value) => write!(f, "{}", value.display()),
        }
    }
}

/// Behaviour for the Rust types an argument may be declared as.
///
/// Implemented for precisely the types backing each [`Value`] variant.
pub trait Scalar: Sized {
    /// The kind this type decodes as.
    const KIND: Kind;

    /// Wrap this value in its [`Value`] variant.
    fn into_value(self) -> Value;

    /// Extract this type from a [`Value`], or `None` if the variant does not match.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! scalar {
    ($type:ty, $variant:ident) => {
        impl Scalar for $type {
            const KIND: Kind = Kind::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }

        impl From<$type> for Value {
            fn from(value: $type) -> Self {
                value.into_value()
            }
        }
    };
}

scalar!(bool, Boolean);
scalar!(i64, Int64);
scalar!(u64, UInt64);
scalar!(f64, Double);
scalar!(String, Text);
scalar!(PathBuf, Path);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Boolean, "boolean")]
    #[case(Kind::Int64, "int64")]
    #[case(Kind::UInt64, "uint64")]
    #[case(Kind::Double, "double")]
    #[case(Kind::Text, "string")]
    #[case(Kind::Path, "path")]
    fn kind_name(#[case] kind: Kind, #[case] expected: &str) {
        assert_eq!(kind.name(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    #[case(Value::Boolean(true), Kind::Boolean, "true")]
    #[case(Value::Boolean(false), Kind::Boolean, "false")]
    #[case(Value::Int64(-12), Kind::Int64, "-12")]
    #[case(Value::UInt64(12), Kind::UInt64, "12")]
    #[case(Value::Double(1.5), Kind::Double, "1.5")]
    #[case(Value::Double(-0.25), Kind::Double, "-0.25")]
    #[case(Value::Text("abc def".to_string()), Kind::Text, "abc def")]
    #[case(Value::Path(PathBuf::from("res/out.txt")), Kind::Path, "res/out.txt")]
    fn value_render(#[case] value: Value, #[case] kind: Kind, #[case] expected: &str) {
        assert_eq!(value.kind(), kind);
        assert_eq!(value.type_name(), kind.name());
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn scalar_kinds() {
        assert_eq!(bool::KIND, Kind::Boolean);
        assert_eq!(i64::KIND, Kind::Int64);
        assert_eq!(u64::KIND, Kind::UInt64);
        assert_eq!(f64::KIND, Kind::Double);
        assert_eq!(String::KIND, Kind::Text);
        assert_eq!(PathBuf::KIND, Kind::Path);
    }

    #[test]
    fn scalar_from_value() {
        assert_eq!(i64::from_value(&Value::Int64(3)), Some(3));
        assert_eq!(i64::from_value(&Value::UInt64(3)), None);
        assert_eq!(
            PathBuf::from_value(&Value::from(PathBuf::from("a/b"))),
            Some(PathBuf::from("a/b"))
        );
        assert_eq!(String::from_value(&Value::Path(PathBuf::from("a"))), None);
        assert_eq!(Value::from(true), Value::Boolean(true));
    }
}
