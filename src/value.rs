//! The typed value cell: a tagged union of the data types a flag or
//! positional can produce, plus the two parsing helpers the engine uses to
//! turn a raw token into one.

use std::fmt;

/// The data type declared for a flag or positional.
///
/// `Presence` may only be used for flags (see
/// [`crate::ConfigError::PresenceForPositional`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// No payload; the flag's occurrence is the information.
    Presence,
    /// Two's-complement signed integer, at least 32-bit.
    Int,
    /// IEEE-754 double.
    Double,
    /// Owned byte/UTF-8 string, taken verbatim from argv.
    String,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataType::Presence => "presence",
            DataType::Int => "int",
            DataType::Double => "double",
            DataType::String => "string",
        })
    }
}

/// A single typed value, as stored in a [`crate::NamedValueStore`].
///
/// Equality is structural: same tag, and for `String` byte-equal contents.
/// All `Presence` values compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A flag was supplied; carries no payload.
    Presence,
    /// A parsed integer.
    Int(i64),
    /// A parsed double.
    Double(f64),
    /// A string taken verbatim from argv (no un-escaping).
    String(String),
}

impl Value {
    /// The [`DataType`] tag of this value.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Presence => DataType::Presence,
            Value::Int(_) => DataType::Int,
            Value::Double(_) => DataType::Double,
            Value::String(_) => DataType::String,
        }
    }

    /// `true` iff this is a [`Value::Presence`].
    #[must_use]
    pub fn is_presence(&self) -> bool {
        matches!(self, Value::Presence)
    }

    /// `true` iff this is a [`Value::Int`].
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// `true` iff this is a [`Value::Double`].
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// `true` iff this is a [`Value::String`].
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns the contained `i64`.
    ///
    /// # Panics
    /// Panics if `self` is not [`Value::Int`]; callers must type-test first
    /// with [`Value::is_int`].
    #[must_use]
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(i) => *i,
            _ => panic!("Value::as_int called on a {} value", self.data_type()),
        }
    }

    /// Returns the contained `f64`.
    ///
    /// # Panics
    /// Panics if `self` is not [`Value::Double`]; callers must type-test
    /// first with [`Value::is_double`].
    #[must_use]
    pub fn as_double(&self) -> f64 {
        match self {
            Value::Double(d) => *d,
            _ => panic!("Value::as_double called on a {} value", self.data_type()),
        }
    }

    /// Returns the contained string slice.
    ///
    /// # Panics
    /// Panics if `self` is not [`Value::String`]; callers must type-test
    /// first with [`Value::is_string`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => panic!("Value::as_str called on a {} value", self.data_type()),
        }
    }
}

/// Parses `text` as a signed integer: optional leading `+`/`-`, then one or
/// more decimal digits, the entire input consumed.
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    let (sign, digits) = match bytes.first() {
        Some(b'+') => (1i64, &bytes[1..]),
        Some(b'-') => (-1i64, &bytes[1..]),
        _ => (1i64, bytes),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let magnitude: i64 = std::str::from_utf8(digits).ok()?.parse().ok()?;
    Some(sign * magnitude)
}

/// Parses `text` as a double: optional sign, integer part, optional
/// fractional part, optional exponent (`e`/`E` with a signed integer); the
/// entire input must be consumed.
pub(crate) fn parse_double(text: &str) -> Option<f64> {
    let mut chars = text.char_indices().peekable();
    if matches!(chars.peek(), Some((_, '+' | '-'))) {
        chars.next();
    }
    let mut saw_digit = false;
    while matches!(chars.peek(), Some((_, c)) if c.is_ascii_digit()) {
        chars.next();
        saw_digit = true;
    }
    if matches!(chars.peek(), Some((_, '.'))) {
        chars.next();
        while matches!(chars.peek(), Some((_, c)) if c.is_ascii_digit()) {
            chars.next();
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }
    if matches!(chars.peek(), Some((_, 'e' | 'E'))) {
        chars.next();
        if matches!(chars.peek(), Some((_, '+' | '-'))) {
            chars.next();
        }
        let mut saw_exp_digit = false;
        while matches!(chars.peek(), Some((_, c)) if c.is_ascii_digit()) {
            chars.next();
            saw_exp_digit = true;
        }
        if !saw_exp_digit {
            return None;
        }
    }
    if chars.next().is_some() {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_int() {
        assert_eq!(parse_int("100"), Some(100));
        assert_eq!(parse_int("+100"), Some(100));
        assert_eq!(parse_int("-100"), Some(-100));
        assert_eq!(parse_int("0"), Some(0));
    }

    #[test]
    fn rejects_malformed_int() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("+"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("1.0"), None);
        assert_eq!(parse_int("1a"), None);
        assert_eq!(parse_int(" 1"), None);
    }

    #[test]
    fn parses_doubles() {
        assert_eq!(parse_double("0"), Some(0.0));
        assert_eq!(parse_double("-1.0"), Some(-1.0));
        assert_eq!(parse_double("-100"), Some(-100.0));
        assert_eq!(parse_double("1e10"), Some(1e10));
        assert_eq!(parse_double("1.5E-3"), Some(1.5e-3));
        assert_eq!(parse_double("+.5"), Some(0.5));
    }

    #[test]
    fn rejects_malformed_double() {
        assert_eq!(parse_double(""), None);
        assert_eq!(parse_double("."), None);
        assert_eq!(parse_double("1e"), None);
        assert_eq!(parse_double("1e+"), None);
        assert_eq!(parse_double("1.0x"), None);
    }

    #[test]
    fn presence_values_are_all_equal() {
        assert_eq!(Value::Presence, Value::Presence);
    }

    #[test]
    fn string_equality_is_byte_equality() {
        assert_eq!(
            Value::String("a".to_owned()),
            Value::String("a".to_owned())
        );
        assert_ne!(
            Value::String("a".to_owned()),
            Value::String("b".to_owned())
        );
    }
}
