//! The [`Value`] tagged union produced by a parse, and its
//! insertion-ordered [`Map`].
//!
//! This is a deliberately small stand-in for the "hosting
//! value library" a production deployment of this parser
//! would sit on top of: no interning, no custom allocator
//! hook, no reference counting. Just the eight variants the
//! core needs to produce, plus the trait impls idiomatic Rust
//! expects of anything it puts in a collection.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

pub use indexmap::IndexMap;

/// An insertion-ordered mapping from [`Value`] to [`Value`].
///
/// Backed by [`indexmap::IndexMap`] so that overwriting a
/// duplicate key ("last wins", per the map parser) is O(1)
/// instead of requiring a linear scan of a `Vec<(K, V)>`.
pub type Map = IndexMap<Value, Value>;

/// A single node in the parsed value tree.
#[derive(Debug, Clone)]
pub enum Value
{
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value
{
    pub fn is_null(&self) -> bool
    {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str>
    {
        match self
        {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]>
    {
        match self
        {
            Value::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map>
    {
        match self
        {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for Value
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::List(_) => f.write_str("[list]"),
            Value::Map(_) => f.write_str("{map}"),
        }
    }
}

impl From<bool> for Value
{
    fn from(b: bool) -> Self
    {
        Value::Bool(b)
    }
}

impl From<String> for Value
{
    fn from(s: String) -> Self
    {
        Value::String(s)
    }
}

impl From<&'_ str> for Value
{
    fn from(s: &str) -> Self
    {
        Value::String(s.to_owned())
    }
}

impl From<i64> for Value
{
    fn from(i: i64) -> Self
    {
        Value::Int(i)
    }
}

impl From<u64> for Value
{
    fn from(u: u64) -> Self
    {
        Value::UInt(u)
    }
}

impl From<f64> for Value
{
    fn from(f: f64) -> Self
    {
        Value::Float(f)
    }
}

/// Two [`Value`]s are equal when their variant and contents
/// match. Floats compare by bit pattern rather than `==`, so
/// that `Value` can be total over `Eq` (and thus usable as a
/// [`Map`] key).
impl PartialEq for Value
{
    fn eq(&self, other: &Self) -> bool
    {
        use Value::*;

        match (self, other)
        {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (UInt(a), UInt(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (String(a), String(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Hashes by variant discriminant plus contents, using the
/// same bit-pattern trick as [`PartialEq`] for floats.
///
/// `List` and `Map` are hashed recursively for completeness,
/// even though neither is ever used as a map key -
/// the parser never constructs such a key, but the impl must
/// still type-check for every variant.
impl Hash for Value
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        use Value::*;

        std::mem::discriminant(self).hash(state);

        match self
        {
            Null => {},
            Bool(b) => b.hash(state),
            Int(i) => i.hash(state),
            UInt(u) => u.hash(state),
            Float(f) => f.to_bits().hash(state),
            String(s) => s.hash(state),
            List(l) =>
            {
                for v in l
                {
                    v.hash(state)
                }
            },
            Map(m) =>
            {
                for (k, v) in m
                {
                    k.hash(state);
                    v.hash(state);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn float_key_bit_equality()
    {
        let mut m = Map::new();

        m.insert(Value::Float(1.5), Value::Bool(true));

        assert_eq!(m.get(&Value::Float(1.5)), Some(&Value::Bool(true)));
    }

    #[test]
    fn map_preserves_insertion_order()
    {
        let mut m = Map::new();

        m.insert(Value::from("b"), Value::Int(2));
        m.insert(Value::from("a"), Value::Int(1));

        let keys: Vec<_> = m.keys().cloned().collect();

        assert_eq!(keys, vec![Value::from("b"), Value::from("a")]);
    }

    #[test]
    fn duplicate_key_overwrite_is_last_wins()
    {
        let mut m = Map::new();

        m.insert(Value::from("k"), Value::Int(1));
        m.insert(Value::from("k"), Value::Int(2));

        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&Value::from("k")), Some(&Value::Int(2)));
    }
}
