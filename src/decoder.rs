use std::num::{IntErrorKind, ParseIntError};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::model::{Kind, Value};

/// The reason a raw token could not be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The token is not a literal of the kind (ex: `maybe` for a boolean, `abc` for an integer).
    #[error("bad value ({kind})")]
    Invalid {
        /// The kind decoded as.
        kind: Kind,
    },

    /// The token is numeric, but does not fit in the kind's domain.
    #[error("bad value ({kind} out of range)")]
    OutOfRange {
        /// The kind decoded as.
        kind: Kind,
    },

    /// The token starts numeric, but is followed by other characters (ex: `12px`).
    #[error("bad value (trailing characters in {kind})")]
    TrailingCharacters {
        /// The kind decoded as.
        kind: Kind,
    },

    /// A failure reported by a custom [`Decoder`].
    #[error("{0}")]
    Other(String),
}

/// Behaviour to decode a raw command line token into a [`Value`] of the expected [`Kind`].
///
/// A decoder is expected to produce a value whose variant matches `kind`.
/// The parser checks this, reporting a type mismatch otherwise.
///
/// Any `Fn(&str, Kind) -> Result<Value, DecodeError>` is a decoder.
///
/// ### Example
/// ```
/// use argbind::{CommandLineParser, DecodeError, DefaultDecoder, Decoder, Kind, Value};
///
/// // Accepts `0x` prefixed unsigned integers, otherwise falls back to the default decoding.
/// let hex = |raw: &str, kind: Kind| -> Result<Value, DecodeError> {
///     match (kind, raw.strip_prefix("0x")) {
///         (Kind::UInt64, Some(digits)) => u64::from_str_radix(digits, 16)
///             .map(Value::UInt64)
///             .map_err(|e| DecodeError::Other(e.to_string())),
///         _ => DefaultDecoder.decode(raw, kind),
///     }
/// };
///
/// let mut parser = CommandLineParser::new(["program", "0xff"]);
/// let mask = parser.positional::<u64>("mask").key();
/// let matches = parser.parse_with(&hex).unwrap();
///
/// assert_eq!(matches.get(mask), Some(255));
/// ```
pub trait Decoder {
    /// Decode `raw` as a value of `kind`.
    fn decode(&self, raw: &str, kind: Kind) -> Result<Value, DecodeError>;
}

impl<F> Decoder for F
where
    F: Fn(&str, Kind) -> Result<Value, DecodeError>,
{
    fn decode(&self, raw: &str, kind: Kind) -> Result<Value, DecodeError> {
        self(raw, kind)
    }
}

/// The built-in decoder.
///
/// * boolean: `true`, `on`, `yes` and `false`, `off`, `no`.
/// * int64/uint64: decimal integers, with a leading `-` for int64 only.
/// * double: decimal floats with optional fraction and exponent, or `inf`, `infinity`, `nan` (any case).
/// * string/path: the raw token, unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDecoder;

impl Decoder for DefaultDecoder {
    fn decode(&self, raw: &str, kind: Kind) -> Result<Value, DecodeError> {
        match kind {
            Kind::Boolean => decode_boolean(raw).map(Value::Boolean),
            Kind::Int64 => decode_integer::<i64>(raw, kind, true).map(Value::Int64),
            Kind::UInt64 => decode_integer::<u64>(raw, kind, false).map(Value::UInt64),
            Kind::Double => decode_double(raw).map(Value::Double),
            Kind::Text => Ok(Value::Text(raw.to_string())),
            Kind::Path => Ok(Value::Path(PathBuf::from(raw))),
        }
    }
}

fn decode_boolean(raw: &str) -> Result<bool, DecodeError> {
    match raw {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => Err(DecodeError::Invalid {
            kind: Kind::Boolean,
        }),
    }
}

fn decode_integer<T>(raw: &str, kind: Kind, signed: bool) -> Result<T, DecodeError>
where
    T: FromStr<Err = ParseIntError>,
{
    let end = integer_prefix(raw, signed);

    if end == 0 {
        return Err(DecodeError::Invalid { kind });
    }

    let value = raw[..end].parse::<T>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::OutOfRange { kind },
        _ => DecodeError::Invalid { kind },
    })?;

    if end < raw.len() {
        return Err(DecodeError::TrailingCharacters { kind });
    }

    Ok(value)
}

fn decode_double(raw: &str) -> Result<f64, DecodeError> {
    let kind = Kind::Double;
    let (end, literal) = double_prefix(raw);

    if end == 0 {
        return Err(DecodeError::Invalid { kind });
    }

    let value = raw[..end]
        .parse::<f64>()
        .map_err(|_| DecodeError::Invalid { kind })?;

    // Rust saturates to infinity (or zero) rather than failing.
    if !literal && (value.is_infinite() || (value == 0.0 && nonzero_mantissa(&raw[..end]))) {
        return Err(DecodeError::OutOfRange { kind });
    }

    if end < raw.len() {
        return Err(DecodeError::TrailingCharacters { kind });
    }

    Ok(value)
}

fn nonzero_mantissa(number: &str) -> bool {
    number
        .bytes()
        .take_while(|b| !b.eq_ignore_ascii_case(&b'e'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}

/// The byte length of the leading integer in `raw`, or `0` if there is none.
fn integer_prefix(raw: &str, signed: bool) -> usize {
    let bytes = raw.as_bytes();
    let sign = usize::from(signed && bytes.first() == Some(&b'-'));
    let digits = count_digits(bytes, sign);

    if digits == 0 {
        0
    } else {
        sign + digits
    }
}

/// The byte length of the leading float in `raw` (`0` if there is none), and whether it is a named literal.
fn double_prefix(raw: &str) -> (usize, bool) {
    let bytes = raw.as_bytes();
    let sign = usize::from(bytes.first() == Some(&b'-'));

    for literal in ["infinity", "inf", "nan"] {
        let matched = bytes
            .get(sign..sign + literal.len())
            .map_or(false, |candidate| {
                candidate.eq_ignore_ascii_case(literal.as_bytes())
            });

        if matched {
            return (sign + literal.len(), true);
        }
    }

    let integral = count_digits(bytes, sign);
    let mut end = sign + integral;

    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(bytes, end + 1);

        if integral + fraction == 0 {
            return (0, false);
        }

        end += 1 + fraction;
    } else if integral == 0 {
        return (0, false);
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;

        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }

        let digits = count_digits(bytes, exponent);

        // A dangling `e` is left behind as trailing characters.
        if digits > 0 {
            end = exponent + digits;
        }
    }

    (end, false)
}
