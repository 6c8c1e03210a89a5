//! Facade combining a [`Resolver`] and a [`Formatter`].
//!
//! `value` answers "what does this path reference?" and `text` renders a
//! template through a [`TemplateEngine`], with the evaluator itself acting as
//! the engine's resolution and formatting strategy.

use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::resolver::Resolver;
use crate::template::{PlaceholderEngine, TemplateEngine};
use crate::value::Value;

/// What a template engine needs from its host: path lookup and formatting.
pub trait Evaluate {
    fn resolve(&self, expression: &str, record: &Value) -> Value;

    fn format(&self, formatter: &str, value: &Value, arg: &str) -> Result<String>;
}

#[derive(Debug)]
pub struct Evaluator {
    formatter: Formatter,
    resolver: Resolver,
    engine: Box<dyn TemplateEngine>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Formatter::default(), Resolver::default())
    }
}

impl Evaluator {
    pub fn new(formatter: Formatter, resolver: Resolver) -> Self {
        Self {
            formatter,
            resolver,
            engine: Box::new(PlaceholderEngine),
        }
    }

    /// Like [`Evaluator::new`], but fails when either collaborator is missing.
    ///
    /// ```
    /// use proforma_eval::{evaluator::Evaluator, formatter::Formatter};
    ///
    /// assert!(Evaluator::try_new(Some(Formatter::default()), None).is_err());
    /// ```
    pub fn try_new(formatter: Option<Formatter>, resolver: Option<Resolver>) -> Result<Self> {
        let formatter = formatter.ok_or(Error::MissingCollaborator("formatter"))?;
        let resolver = resolver.ok_or(Error::MissingCollaborator("resolver"))?;
        Ok(Self::new(formatter, resolver))
    }

    /// Replace the template engine used by [`Evaluator::text`].
    pub fn with_engine(self, engine: impl TemplateEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            ..self
        }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolve `expression` against `record`.
    pub fn value(&self, record: &Value, expression: &str) -> Value {
        self.resolver.resolve(expression, record)
    }

    /// Render a template against `record`.
    ///
    /// Arrays and null are not traversable at the root, so they are
    /// replaced by an empty mapping.
    pub fn text(&self, record: &Value, template: &str) -> Result<String> {
        let empty = Value::Map(Vec::new());
        let record = match record {
            Value::Array(_) | Value::Null => &empty,
            other => other,
        };

        self.engine.evaluate(template, record, self)
    }
}

impl Evaluate for Evaluator {
    fn resolve(&self, expression: &str, record: &Value) -> Value {
        self.resolver.resolve(expression, record)
    }

    fn format(&self, formatter: &str, value: &Value, arg: &str) -> Result<String> {
        self.formatter.format(formatter, value, arg)
    }
}
