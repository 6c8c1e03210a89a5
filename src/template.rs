//! Placeholder templates: `{path::formatter::arg}`.
//!
//! The engine owns the placeholder syntax. It never looks inside values
//! itself; every lookup and every formatter call goes through the
//! [`Evaluate`] strategy it is handed.

use std::{fmt, sync::LazyLock};

use log::trace;
use regex::Regex;

use crate::error::Result;
use crate::evaluator::Evaluate;
use crate::value::Value;

pub const PLACEHOLDER_SEPARATOR: &str = "::";

// A brace pair with no braces inside; capture 1 is the body.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

/// Turns a template into text by substituting its placeholders.
pub trait TemplateEngine: fmt::Debug + Send + Sync {
    fn evaluate(&self, template: &str, record: &Value, strategy: &dyn Evaluate) -> Result<String>;
}

/// One parsed `{...}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub path: &'a str,
    pub formatter: &'a str,
    pub arg: &'a str,
}

impl<'a> Placeholder<'a> {
    /// Split a placeholder body; everything after the second `::` is the arg.
    ///
    /// ```
    /// use proforma_eval::template::Placeholder;
    ///
    /// let placeholder = Placeholder::parse("balance::currency");
    /// assert_eq!(placeholder.path, "balance");
    /// assert_eq!(placeholder.formatter, "currency");
    /// assert_eq!(placeholder.arg, "");
    /// ```
    pub fn parse(body: &'a str) -> Self {
        let mut parts = body.splitn(3, PLACEHOLDER_SEPARATOR);
        Self {
            path: parts.next().unwrap_or_default(),
            formatter: parts.next().unwrap_or_default(),
            arg: parts.next().unwrap_or_default(),
        }
    }
}

/// Default engine for the `{path::formatter::arg}` syntax.
///
/// Text outside placeholders is copied verbatim. A placeholder without a
/// formatter renders the resolved value's string form, so missing values
/// become empty text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderEngine;

impl TemplateEngine for PlaceholderEngine {
    fn evaluate(&self, template: &str, record: &Value, strategy: &dyn Evaluate) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        let mut last = 0;

        for found in PLACEHOLDER_REGEX.find_iter(template) {
            out.push_str(&template[last..found.start()]);
            last = found.end();

            let body = &template[found.start() + 1..found.end() - 1];
            let placeholder = Placeholder::parse(body);
            trace!("placeholder {:?}", placeholder);

            let value = strategy.resolve(placeholder.path, record);
            let text = strategy.format(placeholder.formatter, &value, placeholder.arg)?;
            out.push_str(&text);
        }

        out.push_str(&template[last..]);
        Ok(out)
    }
}
