//! Decoded value tree

use super::{Logical, RArray, TaggedList};
use num_complex::Complex64;

/// Decoded R value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(Logical),
    Int(i32),
    Double(f64),
    Complex(Complex64),
    /// Scalar string, also produced when a one-element string array is unwrapped
    Str(String),
    Symbol(String),
    Raw(Vec<u8>),
    /// Numeric, logical or string array
    Array(RArray),
    /// Heterogeneous list without names
    Vector(Vec<Value>),
    /// Tagged pairlist, or a list carrying names
    Tagged(TaggedList),
    /// Unevaluated function: formals list and body
    Closure {
        formals: Box<Value>,
        body: Box<Value>,
    },
    /// S4 object, represented by its attributes
    S4(TaggedList),
    /// Payload of a type the decoder passes through uninterpreted
    Unknown(i32),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as logical
    pub fn as_bool(&self) -> Option<Logical> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i32
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            Value::Complex(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get as string; symbols count as strings
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Value::Raw(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get as array
    pub fn as_array(&self) -> Option<&RArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as an untagged list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get as a tagged list
    pub fn as_tagged(&self) -> Option<&TaggedList> {
        match self {
            Value::Tagged(t) => Some(t),
            _ => None,
        }
    }

    /// Look up `name` in a tagged list or a named array
    pub fn get(&self, name: &str) -> Option<Value> {
        match self {
            Value::Tagged(t) | Value::S4(t) => t.get(name).cloned(),
            Value::Array(a) => a.get_by_name(name),
            _ => None,
        }
    }

    /// Interpret as an ordered list of names
    ///
    /// Accepts a string array, a single string, or a list of strings.
    pub fn to_names(&self) -> Option<Vec<String>> {
        match self {
            Value::Array(a) => a.data.strings(),
            Value::Str(s) | Value::Symbol(s) => Some(vec![s.clone()]),
            Value::Vector(items) => items
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => None,
        }
    }

    /// Interpret as a list of dimensions
    pub fn to_dims(&self) -> Option<Vec<usize>> {
        match self {
            Value::Int(i) => usize::try_from(*i).ok().map(|d| vec![d]),
            Value::Double(f) if *f >= 0.0 => Some(vec![*f as usize]),
            Value::Array(a) => (0..a.len())
                .map(|i| match a.get(i)? {
                    Value::Int(d) => usize::try_from(d).ok(),
                    Value::Double(d) if d >= 0.0 => Some(d as usize),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}

// Convenience From impls for Value
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v.into())
    }
}

impl From<Logical> for Value {
    fn from(v: Logical) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<RArray> for Value {
    fn from(v: RArray) -> Self {
        Value::Array(v)
    }
}

impl From<TaggedList> for Value {
    fn from(v: TaggedList) -> Self {
        Value::Tagged(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_from_string_array() {
        let v = Value::Array(RArray::from(vec![String::from("a"), String::from("b")]));
        assert_eq!(v.to_names(), Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_names_from_scalar_and_list() {
        assert_eq!(Value::from("a").to_names(), Some(vec!["a".to_string()]));
        let list = Value::Vector(vec![Value::from("x"), Value::Symbol("y".into())]);
        assert_eq!(list.to_names(), Some(vec!["x".to_string(), "y".to_string()]));
        let mixed = Value::Vector(vec![Value::from("x"), Value::Int(1)]);
        assert_eq!(mixed.to_names(), None);
    }

    #[test]
    fn test_dims() {
        let v = Value::Array(RArray::from(vec![4i32, 5]));
        assert_eq!(v.to_dims(), Some(vec![4, 5]));
        assert_eq!(Value::Int(3).to_dims(), Some(vec![3]));
        assert_eq!(Value::Int(-1).to_dims(), None);
        assert_eq!(Value::from("x").to_dims(), None);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(2.5).as_double(), Some(2.5));
        assert_eq!(Value::from(7).as_int(), Some(7));
        assert_eq!(Value::from(true).as_bool(), Some(Logical::True));
        assert_eq!(Value::Symbol("s".into()).as_str(), Some("s"));
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.as_int(), None);
    }
}
