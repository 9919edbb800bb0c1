//! Dynamic value model and the equality relations the engine scans with.
//!
//! Two relations matter here and they differ only on NaN:
//! - `strict_eq`: strict value/reference equality (`===`). NaN is not equal
//!   to itself; `+0` and `-0` are equal; objects compare by identity.
//! - `same_value_zero`: `strict_eq` extended so that NaN equals NaN.
//!
//! `same_value_zero` governs key uniqueness for every collection variant.

use std::fmt;
use std::rc::Rc;

/// Heap-allocated reference value with identity semantics. Two `Obj`s are
/// the same value only when they are the same allocation.
#[derive(Debug, Default)]
pub struct Obj {
    label: Option<&'static str>,
}

impl Obj {
    pub fn new() -> Rc<Self> {
        Rc::new(Self { label: None })
    }

    pub fn labeled(label: &'static str) -> Rc<Self> {
        Rc::new(Self { label: Some(label) })
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }
}

/// A dynamically typed value. Cheap to clone: strings and objects are
/// reference-counted, everything else is `Copy`-sized.
#[derive(Clone, Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Object(Rc<Obj>),
}

impl Value {
    /// Fresh object value with a new, unique identity.
    pub fn object() -> Self {
        Value::Object(Obj::new())
    }

    /// Strict value/reference equality: numbers by IEEE `==` (so NaN is
    /// unequal to itself and `+0 == -0`), strings by content, objects by
    /// allocation identity.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// `strict_eq`, except NaN equals NaN.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        if let (Value::Number(a), Value::Number(b)) = (self, other) {
            if a.is_nan() && b.is_nan() {
                return true;
            }
        }
        self.strict_eq(other)
    }

    /// True for the keys that take the reverse-scan lookup path.
    pub(crate) fn is_nan_or_zero(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan() || *n == 0.0)
    }

    /// Reference-type values are the only keys weak variants accept.
    pub fn is_reference(&self) -> bool {
        matches!(self, Value::Object(_))
    }
}

/// Equality is `same_value_zero`: reflexive even for NaN, which keeps
/// `Value` usable in test assertions over collection contents.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.same_value_zero(other)
    }
}

impl Eq for Value {}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<Rc<Obj>> for Value {
    fn from(o: Rc<Obj>) -> Self {
        Value::Object(o)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Object(o) => match o.label() {
                Some(l) => write!(f, "[object {}]", l),
                None => f.write_str("[object]"),
            },
        }
    }
}
