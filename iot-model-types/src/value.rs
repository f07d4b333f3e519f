//! Field value contract: hashing, equality and debug rendering.
//!
//! Hashes reproduce the JVM `hashCode` of the corresponding boxed type so that
//! a shape hashes to the same `i32` as its counterpart in the JVM SDKs:
//!
//! | Rust type | JVM type | hash |
//! |---|---|---|
//! | `String` | `String` | UTF-16 polynomial, base 31 |
//! | `i32` | `Integer` | the value |
//! | `i64` | `Long` | `(int)(v ^ (v >>> 32))` |
//! | `bool` | `Boolean` | 1231 / 1237 |
//! | `f64` | `Double` | `Long` fold of the canonical bits |
//! | `Vec<T>` | `List<T>` | polynomial from 1, base 31 |
//! | `BTreeMap<String, V>` | `Map<String, V>` | sum of `key ^ value` |

use std::collections::BTreeMap;
use std::fmt;

/// Multiplier applied per field when combining hashes.
pub const HASH_PRIME: i32 = 31;

/// Hash contributed by an absent field.
pub const ABSENT_HASH: i32 = 0;

/// A type usable as a shape field.
pub trait ShapeValue {
    /// JVM-compatible hash of the value.
    fn hash_code(&self) -> i32;

    /// Structural equality.
    fn value_eq(&self, other: &Self) -> bool;

    /// Writes the debug rendering used by shape `Display` output.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Folds one field hash into the running record hash.
#[inline]
#[must_use]
pub fn combine(acc: i32, field_hash: i32) -> i32 {
    acc.wrapping_mul(HASH_PRIME).wrapping_add(field_hash)
}

/// Hash of an optional field; absent fields contribute [`ABSENT_HASH`].
#[must_use]
pub fn hash_option<T: ShapeValue>(value: &Option<T>) -> i32 {
    value.as_ref().map_or(ABSENT_HASH, ShapeValue::hash_code)
}

/// Equality of two optional fields; absent only equals absent.
#[must_use]
pub fn eq_option<T: ShapeValue>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.value_eq(b),
        (None, None) => true,
        _ => false,
    }
}

#[inline]
fn fold_long(v: i64) -> i32 {
    let bits = v as u64;
    (bits ^ (bits >> 32)) as i32
}

impl ShapeValue for String {
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(HASH_PRIME).wrapping_add(i32::from(unit)))
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl ShapeValue for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl ShapeValue for i64 {
    fn hash_code(&self) -> i32 {
        fold_long(*self)
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl ShapeValue for bool {
    fn hash_code(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Canonical bit pattern: every NaN collapses to the same value.
fn canonical_bits(v: f64) -> u64 {
    if v.is_nan() {
        0x7ff8_0000_0000_0000
    } else {
        v.to_bits()
    }
}

impl ShapeValue for f64 {
    fn hash_code(&self) -> i32 {
        fold_long(canonical_bits(*self) as i64)
    }

    // Bitwise, so NaN equals NaN and 0.0 differs from -0.0.
    fn value_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl<T: ShapeValue> ShapeValue for Vec<T> {
    fn hash_code(&self) -> i32 {
        self.iter().fold(1, |h, item| combine(h, item.hash_code()))
    }

    fn value_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.value_eq(b))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<V: ShapeValue> ShapeValue for BTreeMap<String, V> {
    fn hash_code(&self) -> i32 {
        self.iter()
            .fold(0i32, |h, (k, v)| h.wrapping_add(k.hash_code() ^ v.hash_code()))
    }

    fn value_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| v.value_eq(o)))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(k)?;
            f.write_str("=")?;
            v.render(f)?;
        }
        f.write_str("}")
    }
}

/// Builder for the `{name: value, ...}` rendering of a shape.
///
/// Absent fields are skipped entirely.
pub struct ShapeFormatter<'a, 'b> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        Self {
            fmt,
            result,
            has_fields: false,
        }
    }

    /// Appends `name: value` when the field is present.
    pub fn field<T: ShapeValue>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        let Some(value) = value else {
            return self;
        };
        self.result = self.result.and_then(|()| {
            if self.has_fields {
                self.fmt.write_str(", ")?;
            }
            self.fmt.write_str(name)?;
            self.fmt.write_str(": ")?;
            value.render(self.fmt)
        });
        self.has_fields = true;
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|()| self.fmt.write_str("}"))
    }
}
