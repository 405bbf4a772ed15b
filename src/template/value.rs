//! Context values.
//!
//! A [`Value`] is anything a caller can hand to a template: it has a display
//! form used for `{{ name }}` substitution and a truthiness used by
//! `{% if name %}` blocks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single value in a render context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / null value. Always falsy.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Str(String),
}

impl Value {
    /// Whether this value enables an `{% if %}` block.
    ///
    /// Zero, the empty string, `false` and null are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }

    /// Type-tagged, length-prefixed encoding used in render cache keys.
    ///
    /// Two values encode identically only if they render identically *and*
    /// have the same truthiness.
    pub(crate) fn cache_repr(&self) -> String {
        match self {
            Value::Null => "n".to_string(),
            Value::Bool(b) => format!("b{}", b),
            Value::Int(i) => format!("i{}", i),
            Value::Float(f) => format!("f{:016x}", f.to_bits()),
            Value::Str(s) => format!("s{}:{}", s.len(), s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            // Whole floats keep their trailing ".0".
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    /// Parse a command-line literal.
    ///
    /// `true`/`false` become booleans, numeric literals become numbers and
    /// anything else is kept as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "true" {
            return Ok(Value::Bool(true));
        }
        if s == "false" {
            return Ok(Value::Bool(false));
        }
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Value::Int(i));
        }
        if let Ok(f) = s.parse::<f64>() {
            if f.is_finite() {
                return Ok(Value::Float(f));
            }
        }
        Ok(Value::Str(s.to_string()))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Int(i as i64)
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, u8, u16, u32);

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}
