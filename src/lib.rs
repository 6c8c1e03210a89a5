//! Proforma Eval - value resolution and text formatting for document templates
//!
//! Resolves dot-notation paths (`person.first`) through nested mappings and
//! objects, and renders values as text through named, locale-configurable
//! formatters (`{balance::currency}`, `{person.ssn::left_mask}`).
//!
//! ## Module Structure
//!
//! - `error`: Error taxonomy (configuration and parse errors)
//! - `evaluator`: Facade combining a resolver and a formatter
//! - `formatter`: Formatter registry and locale options
//! - `resolver`: Dot-notation path resolution
//! - `template`: Placeholder template engine
//! - `utils`: Shared utility functions
//! - `value`: Dynamic values, mapping keys and structured records
//!
//! ## Example
//!
//! ```
//! use proforma_eval::{evaluator::Evaluator, value::Value};
//! use serde_json::json;
//!
//! let evaluator = Evaluator::default();
//! let record = Value::from(json!({ "person": { "ssn": "123-45-6789" }, "balance": "123.445388" }));
//!
//! assert_eq!(evaluator.value(&record, "person.ssn"), Value::from("123-45-6789"));
//! assert_eq!(
//!     evaluator.text(&record, "{person.ssn::left_mask} owes {balance::currency}").unwrap(),
//!     "XXXXXXX6789 owes $123.45 USD"
//! );
//! ```

pub mod error;
pub mod evaluator;
pub mod formatter;
pub mod resolver;
pub mod template;
pub mod utils;
pub mod value;

pub use error::{Error, Result};
pub use evaluator::{Evaluate, Evaluator};
pub use formatter::{Formatter, FormatterKind, FormatterOptions};
pub use resolver::Resolver;
pub use template::{PlaceholderEngine, TemplateEngine};
pub use value::{Key, Record, Value};
