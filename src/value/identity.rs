//! Value identity for membership tests.
//!
//! Two notions of "same value" are used by the set operations:
//!
//! - **Coerced identity**: values are the same when their primitive string
//!   forms are equal, so `1` and `"1"` collapse. Used by `uniq`.
//! - **Typed identity**: values are the same when both their [`Kind`] and
//!   their primitive string forms are equal, so `1` and `"1"` stay
//!   distinct. Used by `intersection` and `difference`.

use super::{Value, format_number};

/// The type discriminant of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// The missing sentinel.
    Undefined,
    /// An explicit empty value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any number.
    Number,
    /// Text.
    String,
    /// An ordered list.
    Sequence,
    /// A keyed collection.
    Mapping,
}

/// A hashable key combining a value's [`Kind`] with its coerced string.
///
/// # Examples
///
/// ```rust
/// use underbar::value::Coercible;
///
/// assert_ne!(1_i32.typed_key(), "1".typed_key());
/// assert_eq!(1_i32.typed_key(), 1.0_f64.typed_key());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedKey {
    kind: Kind,
    text: String,
}

impl TypedKey {
    /// The kind half of the key.
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// The coerced-string half of the key.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Types that have a primitive string form and a [`Kind`].
pub trait Coercible {
    /// The primitive string form of the value.
    fn coerce_to_string(&self) -> String;

    /// The type discriminant of the value.
    fn kind(&self) -> Kind;

    /// The type-aware identity key of the value.
    fn typed_key(&self) -> TypedKey {
        TypedKey {
            kind: self.kind(),
            text: self.coerce_to_string(),
        }
    }
}

impl Coercible for Value {
    fn coerce_to_string(&self) -> String {
        Self::coerce_to_string(self)
    }

    fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Boolean,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
        }
    }
}

macro_rules! impl_coercible_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Coercible for $integer {
                fn coerce_to_string(&self) -> String {
                    self.to_string()
                }

                fn kind(&self) -> Kind {
                    Kind::Number
                }
            }
        )*
    };
}

impl_coercible_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Coercible for f64 {
    fn coerce_to_string(&self) -> String {
        format_number(*self)
    }

    fn kind(&self) -> Kind {
        Kind::Number
    }
}

impl Coercible for f32 {
    fn coerce_to_string(&self) -> String {
        format_number(f64::from(*self))
    }

    fn kind(&self) -> Kind {
        Kind::Number
    }
}

impl Coercible for bool {
    fn coerce_to_string(&self) -> String {
        self.to_string()
    }

    fn kind(&self) -> Kind {
        Kind::Boolean
    }
}

impl Coercible for char {
    fn coerce_to_string(&self) -> String {
        self.to_string()
    }

    fn kind(&self) -> Kind {
        Kind::String
    }
}

impl Coercible for str {
    fn coerce_to_string(&self) -> String {
        self.to_owned()
    }

    fn kind(&self) -> Kind {
        Kind::String
    }
}

impl Coercible for String {
    fn coerce_to_string(&self) -> String {
        self.clone()
    }

    fn kind(&self) -> Kind {
        Kind::String
    }
}

impl<T: Coercible> Coercible for Option<T> {
    fn coerce_to_string(&self) -> String {
        self.as_ref()
            .map_or_else(|| "undefined".to_owned(), Coercible::coerce_to_string)
    }

    fn kind(&self) -> Kind {
        self.as_ref().map_or(Kind::Undefined, Coercible::kind)
    }
}

impl<T: Coercible + ?Sized> Coercible for &T {
    fn coerce_to_string(&self) -> String {
        (**self).coerce_to_string()
    }

    fn kind(&self) -> Kind {
        (**self).kind()
    }
}
