//! Dynamic values that paths are resolved against.
//!
//! A [`Value`] is either a terminal scalar, an array, a keyed mapping or a
//! structured object. Mapping keys come in two flavours, plain strings and
//! symbols, which are interchangeable for lookup purposes. Structured objects
//! plug in through the [`Record`] trait.

use std::{fmt, sync::Arc};

// ============================================================
// Keys
// ============================================================

/// Key of a mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    /// A symbolic key; looked up with the same text as its string form.
    Symbol(String),
}

impl Key {
    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Key::Str(s) | Key::Symbol(s) => s,
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{}", s),
            Key::Symbol(s) => write!(f, ":{}", s),
        }
    }
}

// ============================================================
// Records
// ============================================================

/// A structured object exposing named, readable members.
///
/// Implementors return `None` for members they do not expose; the resolver
/// treats that the same as a missing mapping key.
///
/// ```
/// use proforma_eval::value::{Record, Value};
///
/// #[derive(Debug)]
/// struct Person {
///     first: String,
/// }
///
/// impl Record for Person {
///     fn member(&self, name: &str) -> Option<Value> {
///         match name {
///             "first" => Some(Value::from(self.first.as_str())),
///             _ => None,
///         }
///     }
/// }
///
/// let person = Value::object(Person { first: "Matt".to_string() });
/// assert_eq!(person.get("first"), Some(Value::from("Matt")));
/// assert_eq!(person.get("last"), None);
/// ```
pub trait Record: fmt::Debug + Send + Sync {
    fn member(&self, name: &str) -> Option<Value>;
}

// ============================================================
// Values
// ============================================================

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// Insertion-ordered mapping.
    Map(Vec<(Key, Value)>),
    Object(Arc<dyn Record>),
}

impl Value {
    /// Build a mapping from key/value pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn object(record: impl Record + 'static) -> Self {
        Value::Object(Arc::new(record))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Single-level lookup of `key`.
    ///
    /// Mappings try the string key first and the symbol key second. Objects
    /// are asked for a member of exactly that name. Every other value is
    /// non-traversable and yields `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Map(entries) => lookup(entries, |k| matches!(k, Key::Str(s) if s == key))
                .or_else(|| lookup(entries, |k| matches!(k, Key::Symbol(s) if s == key)))
                .cloned(),
            Value::Object(record) => record.member(key),
            _ => None,
        }
    }
}

fn lookup(entries: &[(Key, Value)], pred: impl Fn(&Key) -> bool) -> Option<&Value> {
    entries.iter().find(|(k, _)| pred(k)).map(|(_, v)| v)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// String form used by every formatter and classification.
///
/// `Null` renders as the empty string; integral floats keep a trailing `.0`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Object(record) => write!(f, "{:?}", record),
        }
    }
}

// ============================================================
// Conversions
// ============================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::from(items),
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (Key::Str(k), v.into())).collect())
            }
        }
    }
}
