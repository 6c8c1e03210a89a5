//! Dot-notation path resolution.
//!
//! A path such as `person.demographics.first` is split on the separator and
//! walked one segment at a time through mappings and objects. A missing key,
//! an unreadable member or a non-traversable value anywhere along the way
//! yields [`Value::Null`]; resolution itself never fails.

use log::trace;

use crate::value::Value;

pub const DEFAULT_SEPARATOR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    separator: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// An empty separator disables splitting: every expression is one segment.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Split an expression into its key segments.
    ///
    /// Never returns an empty list: `""` is the single segment `""`.
    ///
    /// ```
    /// use proforma_eval::resolver::Resolver;
    ///
    /// let resolver = Resolver::new();
    /// assert_eq!(resolver.segments("person.first"), vec!["person", "first"]);
    /// assert_eq!(resolver.segments(""), vec![""]);
    /// assert_eq!(Resolver::with_separator("").segments("a.b"), vec!["a.b"]);
    /// ```
    pub fn segments<'a>(&self, expression: &'a str) -> Vec<&'a str> {
        if self.separator.is_empty() {
            return vec![expression];
        }
        expression.split(self.separator.as_str()).collect()
    }

    /// Resolve `expression` against `record`.
    pub fn resolve(&self, expression: impl AsRef<str>, record: &Value) -> Value {
        let expression = expression.as_ref();
        let mut cursor = record.clone();

        for segment in self.segments(expression) {
            if cursor.is_null() {
                trace!("'{}': short-circuit before '{}'", expression, segment);
                return Value::Null;
            }
            cursor = cursor.get(segment).unwrap_or_else(|| {
                trace!("'{}': no value at '{}'", expression, segment);
                Value::Null
            });
        }

        cursor
    }

    /// Resolve a path given as a value; numbers and other scalars are
    /// coerced to their string form first.
    pub fn resolve_value(&self, expression: &Value, record: &Value) -> Value {
        self.resolve(expression.to_string(), record)
    }
}
