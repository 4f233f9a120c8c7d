//! Dynamic values for loosely typed collections.
//!
//! Most of this crate is generic over plain Rust types. Some operations,
//! however, are defined in terms of loosely typed data: `uniq` collapses
//! `1` and `"1"`, `sort_by_field` looks up a named field that may be
//! missing, and `flatten` descends into sequences nested to any depth.
//! [`Value`] is the carrier for that kind of data.
//!
//! # Examples
//!
//! ```rust
//! use underbar::value::Value;
//! use underbar::values;
//!
//! let record = Value::from(serde_json::json!({"name": "ada", "age": 36}));
//! assert_eq!(record.field("name"), &Value::from("ada"));
//! assert_eq!(record.field("email"), &Value::Undefined);
//!
//! let mixed = values![1, "1", true];
//! assert_eq!(mixed[0].coerce_to_string(), mixed[1].coerce_to_string());
//! ```

mod convert;
mod identity;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;

pub use identity::{Coercible, Kind, TypedKey};

/// An insertion-ordered set of named values.
pub type Mapping = IndexMap<String, Value>;

static UNDEFINED: Value = Value::Undefined;

/// A loosely typed value.
///
/// `Undefined` is the "missing" sentinel: it is what a lookup of an absent
/// field yields, and it is distinct from an explicit `Null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value at all.
    #[default]
    Undefined,
    /// An explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// Named values in insertion order.
    Mapping(Mapping),
}

impl Value {
    /// Builds a mapping value from `(name, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::value::Value;
    ///
    /// let point = Value::mapping([("x", 1), ("y", 2)]);
    /// assert_eq!(point.field("y"), &Value::from(2));
    /// ```
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Returns `true` for [`Value::Undefined`].
    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns the elements if this is a sequence.
    #[inline]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the entries if this is a mapping.
    #[inline]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a named field.
    ///
    /// Mappings are looked up by key. Sequences accept a decimal index.
    /// Every other lookup yields [`Value::Undefined`]; a missing field is
    /// never an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::value::Value;
    /// use underbar::values;
    ///
    /// let letters = Value::from(values!["a", "b"]);
    /// assert_eq!(letters.field("1"), &Value::from("b"));
    /// assert_eq!(letters.field("length"), &Value::Undefined);
    /// assert_eq!(Value::from(3).field("x"), &Value::Undefined);
    /// ```
    pub fn field(&self, name: &str) -> &Self {
        let found = match self {
            Self::Mapping(entries) => entries.get(name),
            Self::Sequence(elements) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| elements.get(index)),
            _ => None,
        };
        found.unwrap_or(&UNDEFINED)
    }

    /// Converts the value to its primitive string form.
    ///
    /// Numbers drop a trailing `.0`, sequences join their elements with
    /// commas (rendering `null` and `undefined` as empty), and mappings
    /// become `"[object Object]"`.
    pub fn coerce_to_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_owned(),
            Self::Null => "null".to_owned(),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(number) => format_number(*number),
            Self::String(text) => text.clone(),
            Self::Sequence(elements) => elements
                .iter()
                .map(|element| match element {
                    Self::Undefined | Self::Null => String::new(),
                    other => other.coerce_to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Mapping(_) => "[object Object]".to_owned(),
        }
    }

    /// Converts the value to a number; unconvertible values become `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Mapping(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(number) => *number,
            Self::String(text) => parse_number(text),
            Self::Sequence(_) => parse_number(&self.coerce_to_string()),
        }
    }

    /// Returns whether the value counts as true in a boolean context.
    ///
    /// `false`, `0`, `NaN`, the empty string, `null` and `undefined` are
    /// falsy; everything else, including empty sequences and mappings, is
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Sequence(_) | Self::Mapping(_) => true,
        }
    }

    /// Relational comparison between loosely typed values.
    ///
    /// Two values whose primitive form is a string compare
    /// lexicographically. Otherwise both sides are converted to numbers; a
    /// `NaN` on either side makes the pair incomparable and yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use underbar::value::Value;
    ///
    /// assert_eq!(Value::from("b").loose_cmp(&Value::from("a")), Some(Ordering::Greater));
    /// assert_eq!(Value::from("10").loose_cmp(&Value::from(9)), Some(Ordering::Greater));
    /// assert_eq!(Value::from("x").loose_cmp(&Value::from(1)), None);
    /// ```
    pub fn loose_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.to_primitive(), other.to_primitive()) {
            (Primitive::Text(left), Primitive::Text(right)) => Some(left.cmp(&right)),
            (left, right) => left.to_number().partial_cmp(&right.to_number()),
        }
    }

    fn to_primitive(&self) -> Primitive<'_> {
        match self {
            Self::String(text) => Primitive::Text(Cow::Borrowed(text)),
            Self::Sequence(_) | Self::Mapping(_) => {
                Primitive::Text(Cow::Owned(self.coerce_to_string()))
            }
            other => Primitive::Number(other.to_number()),
        }
    }
}

enum Primitive<'a> {
    Text(Cow<'a, str>),
    Number(f64),
}

impl Primitive<'_> {
    fn to_number(&self) -> f64 {
        match self {
            Self::Text(text) => parse_number(text),
            Self::Number(number) => *number,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.coerce_to_string())
    }
}

/// Formats a number the way string coercion does: integral values have no
/// fractional part, non-finite values are spelled out, and magnitudes of
/// at least `1e21` or below `1e-6` use exponent form (`1e+21`, `1.5e-7`).
pub(crate) fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_owned()
    } else if number.is_infinite() {
        (if number.is_sign_positive() { "Infinity" } else { "-Infinity" }).to_owned()
    } else if number == 0.0 {
        // covers -0
        "0".to_owned()
    } else if number.abs() >= 1e21 || number.abs() < 1e-6 {
        let formatted = format!("{number:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        number.to_string()
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed.chars().any(char::is_alphabetic) && !is_exponent_form(trimmed) => f64::NAN,
        _ => trimmed.parse().unwrap_or(f64::NAN),
    }
}

fn is_exponent_form(text: &str) -> bool {
    text.chars()
        .all(|character| character.is_ascii_digit() || matches!(character, 'e' | 'E' | '.' | '+' | '-'))
}

/// Builds a `Vec<Value>` from heterogeneous literals.
///
/// # Examples
///
/// ```rust
/// use underbar::value::Value;
/// use underbar::values;
///
/// let mixed = values![1, "one", true];
/// assert_eq!(mixed, vec![Value::Number(1.0), Value::from("one"), Value::Bool(true)]);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($element:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($element)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Number(1.0), "1")]
    #[case(Value::Number(-0.0), "0")]
    #[case(Value::Number(1.5), "1.5")]
    #[case(Value::Number(f64::NAN), "NaN")]
    #[case(Value::Number(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::Number(1e21), "1e+21")]
    #[case(Value::Number(-2.5e30), "-2.5e+30")]
    #[case(Value::Number(1e20), "100000000000000000000")]
    #[case(Value::Number(0.000_001), "0.000001")]
    #[case(Value::Number(1e-7), "1e-7")]
    #[case(Value::Number(1.5e-7), "1.5e-7")]
    #[case(Value::Bool(false), "false")]
    #[case(Value::Null, "null")]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::Sequence(vec![Value::Number(1.0), Value::Null, Value::from("a")]), "1,,a")]
    #[case(Value::mapping([("a", 1)]), "[object Object]")]
    fn coerce_to_string_matches_primitive_form(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.coerce_to_string(), expected);
    }

    #[rstest]
    #[case(Value::from(""), 0.0)]
    #[case(Value::from(" 42 "), 42.0)]
    #[case(Value::from("1e3"), 1000.0)]
    #[case(Value::from("1e-7"), 1e-7)]
    #[case(Value::Null, 0.0)]
    #[case(Value::Bool(true), 1.0)]
    #[case(Value::Sequence(vec![Value::Number(7.0)]), 7.0)]
    fn to_number_converts_primitives(#[case] value: Value, #[case] expected: f64) {
        assert!((value.to_number() - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn exponent_form_parses_back_to_the_same_number() {
        for number in [1e21, 3.25e40, 1e-7, -4.5e-9] {
            let text = Value::Number(number).coerce_to_string();
            assert_eq!(Value::from(text).to_number(), number);
        }
    }

    #[rstest]
    fn to_number_rejects_words() {
        assert!(Value::from("seven").to_number().is_nan());
        assert!(Value::from("inf").to_number().is_nan());
        assert!(Value::Undefined.to_number().is_nan());
    }

    #[rstest]
    fn truthiness_follows_boolean_context_rules() {
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::Sequence(Vec::new()).is_truthy());
    }

    #[rstest]
    fn field_lookup_never_fails() {
        let record = Value::mapping([("k", 2)]);
        assert_eq!(record.field("k"), &Value::Number(2.0));
        assert!(record.field("missing").is_undefined());
        assert!(Value::Null.field("k").is_undefined());
    }

    #[rstest]
    fn loose_cmp_prefers_string_order_for_two_strings() {
        assert_eq!(
            Value::from("10").loose_cmp(&Value::from("9")),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Number(10.0).loose_cmp(&Value::Number(9.0)),
            Some(Ordering::Greater)
        );
    }
}
