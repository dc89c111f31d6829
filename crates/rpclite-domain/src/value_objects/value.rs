//! Dynamic values carried inside envelopes
//!
//! `Value` is externally tagged so that non-self-describing codecs
//! round-trip it as well as JSON does.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dynamically typed argument or return value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Any integer width, widened to 64 bits
    Int(i64),
    /// Any floating-point width, widened to 64 bits
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Ordered sequence
    List(Vec<Value>),
    /// String-keyed map
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Check if this is the absent value
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in conversion errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Widest type descriptor matching this value
    ///
    /// Used for dynamic calls that have no declared signature.
    pub fn inferred_type(&self) -> TypeDescriptor {
        match self {
            Self::Null => TypeDescriptor::Unit,
            Self::Bool(_) => TypeDescriptor::Bool,
            Self::Int(_) => TypeDescriptor::I64,
            Self::Float(_) => TypeDescriptor::F64,
            Self::String(_) => TypeDescriptor::String,
            Self::Bytes(_) => TypeDescriptor::Bytes,
            Self::List(_) => TypeDescriptor::List,
            Self::Map(_) => TypeDescriptor::Map,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Int(i) => Self::from(i),
            Value::Float(f) => Self::from(f),
            Value::String(s) => Self::String(s),
            Value::Bytes(bytes) => Self::Array(bytes.into_iter().map(Self::from).collect()),
            Value::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Map(map) => Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

/// Declared type of a parameter or return value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// No value
    Unit,
    /// Boolean
    Bool,
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// Unicode scalar
    Char,
    /// UTF-8 string
    String,
    /// Raw bytes
    Bytes,
    /// Ordered sequence
    List,
    /// String-keyed map
    Map,
    /// Named structured type
    Object(Cow<'static, str>),
}

impl TypeDescriptor {
    /// Named object type from a static name
    pub const fn object(name: &'static str) -> Self {
        Self::Object(Cow::Borrowed(name))
    }

    /// Check if this is an integer kind
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }

    /// Check if this is a floating-point kind
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Zero value synthesized for offline calls
    ///
    /// `false` for booleans, `0` for integer kinds, `0.0` for float kinds,
    /// and `Null` for everything else.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            t if t.is_integer() => Value::Int(0),
            t if t.is_float() => Value::Float(0.0),
            _ => Value::Null,
        }
    }
}

/// Conversion of a typed argument into a [`Value`]
pub trait IntoValue {
    /// Convert into a dynamic value
    fn into_value(self) -> Value;
}

/// Conversion of a [`Value`] back into a typed return value
pub trait FromValue: Sized {
    /// Convert from a dynamic value
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch<T>(expected: &str, value: &Value) -> Result<T> {
    Err(Error::invalid_argument(format!(
        "expected {expected}, got {}",
        value.kind()
    )))
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Null
    }
}

impl FromValue for () {
    fn from_value(_value: Value) -> Result<Self> {
        Ok(())
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => mismatch("bool", &other),
        }
    }
}

macro_rules! integer_value {
    ($($ty:ty),*) => {$(
        impl IntoValue for $ty {
            fn into_value(self) -> Value {
                Value::Int(i64::from(self))
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Int(i) => <$ty>::try_from(i).map_err(|_| {
                        Error::invalid_argument(format!(
                            "{i} does not fit in {}",
                            stringify!($ty)
                        ))
                    }),
                    other => mismatch(stringify!($ty), &other),
                }
            }
        }
    )*};
}

integer_value!(i8, i16, i32, i64, u8, u16, u32);

/// `u64` values above `i64::MAX` travel as their decimal string
impl IntoValue for u64 {
    fn into_value(self) -> Value {
        i64::try_from(self).map_or_else(|_| Value::String(self.to_string()), Value::Int)
    }
}

impl FromValue for u64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(i) => {
                u64::try_from(i).map_err(|_| Error::invalid_argument(format!("{i} does not fit in u64")))
            }
            Value::String(s) => s
                .parse::<u64>()
                .map_err(|_| Error::invalid_argument(format!("'{s}' is not a u64"))),
            other => mismatch("u64", &other),
        }
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl FromValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Int(i) => Ok(i as f64),
            other => mismatch("f64", &other),
        }
    }
}

impl FromValue for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|f| f as f32)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => mismatch("string", &other),
        }
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => mismatch("list", &other),
        }
    }
}
