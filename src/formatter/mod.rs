//! Named, locale-configurable formatting functions.
//!
//! Each formatter turns a raw [`Value`] plus one textual argument into
//! display text. Locale differences (separators, symbols, date layouts,
//! yes/no wording) live entirely in [`FormatterOptions`]; the algorithms
//! are the same for every locale.
//!
//! ## Formatters
//!
//! - `left_mask`: mask all but the last N characters (arg: N, default 4)
//! - `date`: reformat an ISO date string
//! - `currency`: number with the currency symbol and code
//! - `number`: fixed-point number with grouping (arg: decimal places, default 6)
//! - `boolean`: yes/no text, or the null text when the arg is `nullable`

pub mod options;

use std::{fmt, fmt::Write as _, str::FromStr};

use chrono::NaiveDate;
use log::debug;

use crate::error::{Error, Result};
use crate::utils::{insert_after_matches, parse_leading_int};
use crate::value::Value;

pub use options::FormatterOptions;

const DEFAULT_KEEP_LAST: i64 = 4;
const DEFAULT_DECIMAL_PLACES: i64 = 6;
const MAX_DECIMAL_PLACES: i64 = 100;
const NULLABLE_ARG: &str = "nullable";

// ============================================================
// Registry
// ============================================================

/// The formatters a placeholder can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    LeftMask,
    Date,
    Currency,
    Number,
    Boolean,
}

impl FormatterKind {
    pub const ALL: [FormatterKind; 5] = [
        FormatterKind::LeftMask,
        FormatterKind::Date,
        FormatterKind::Currency,
        FormatterKind::Number,
        FormatterKind::Boolean,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormatterKind::LeftMask => "left_mask",
            FormatterKind::Date => "date",
            FormatterKind::Currency => "currency",
            FormatterKind::Number => "number",
            FormatterKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a name matches no formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown formatter: \"{0}\"")]
pub struct UnknownFormatter(pub String);

impl FromStr for FormatterKind {
    type Err = UnknownFormatter;

    /// Accepts both `left_mask` and `leftMask` spellings.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "left_mask" | "leftMask" => Ok(FormatterKind::LeftMask),
            "date" => Ok(FormatterKind::Date),
            "currency" => Ok(FormatterKind::Currency),
            "number" => Ok(FormatterKind::Number),
            "boolean" => Ok(FormatterKind::Boolean),
            _ => Err(UnknownFormatter(s.to_string())),
        }
    }
}

// ============================================================
// Formatter
// ============================================================

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatterOptions,
}

impl Formatter {
    /// Build a formatter, rejecting invalid date formats up front.
    pub fn new(options: FormatterOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Format `value` with the formatter called `name`.
    ///
    /// An empty or unknown name renders the value's plain string form.
    pub fn format(&self, name: &str, value: &Value, arg: &str) -> Result<String> {
        match name.parse::<FormatterKind>() {
            Ok(kind) => self.apply(kind, value, arg),
            Err(err) => {
                if !name.is_empty() {
                    debug!("{}; rendering value as text", err);
                }
                Ok(value.to_string())
            }
        }
    }

    pub fn apply(&self, kind: FormatterKind, value: &Value, arg: &str) -> Result<String> {
        match kind {
            FormatterKind::LeftMask => self.left_mask(value, arg),
            FormatterKind::Date => self.date(value, arg),
            FormatterKind::Currency => self.currency(value, arg),
            FormatterKind::Number => self.number(value, arg),
            FormatterKind::Boolean => Ok(self.boolean(value, arg)),
        }
    }

    /// Replace all but the last `arg` characters with the mask character.
    ///
    /// ```
    /// use proforma_eval::{formatter::Formatter, value::Value};
    ///
    /// let formatter = Formatter::default();
    /// let ssn = Value::from("123-45-6789");
    /// assert_eq!(formatter.left_mask(&ssn, "").unwrap(), "XXXXXXX6789");
    /// assert_eq!(formatter.left_mask(&ssn, "2").unwrap(), "XXXXXXXXX89");
    /// ```
    pub fn left_mask(&self, value: &Value, arg: &str) -> Result<String> {
        let keep_last = if arg.is_empty() {
            DEFAULT_KEEP_LAST
        } else {
            parse_leading_int(arg)
        };
        let keep_last =
            usize::try_from(keep_last).map_err(|_| Error::NegativeMaskLength(keep_last))?;

        let text = value.to_string();
        let len = text.chars().count();
        if len <= keep_last {
            return Ok(text);
        }

        let masked = len - keep_last;
        let mut out: String = std::iter::repeat_n(self.options.mask_char, masked).collect();
        out.extend(text.chars().skip(masked));
        Ok(out)
    }

    /// Reparse an ISO date and print it in the configured date format.
    pub fn date(&self, value: &Value, _arg: &str) -> Result<String> {
        if is_null_or_empty(value) {
            return Ok(String::new());
        }

        let text = value.to_string();
        let date = NaiveDate::parse_from_str(&text, &self.options.iso_date_format).map_err(
            |source| Error::DateParse {
                value: text.clone(),
                format: self.options.iso_date_format.clone(),
                source,
            },
        )?;

        let mut out = String::new();
        write!(out, "{}", date.format(&self.options.date_format)).map_err(|_| {
            Error::InvalidDateFormat {
                format: self.options.date_format.clone(),
            }
        })?;
        Ok(out)
    }

    pub fn currency(&self, value: &Value, _arg: &str) -> Result<String> {
        if is_null_or_empty(value) {
            return Ok(String::new());
        }

        let amount = self.format_number(value, i64::from(self.options.currency_round))?;

        let mut out = String::new();
        out.push_str(&self.options.currency_symbol);
        out.push_str(&amount);
        if !self.options.currency_code.is_empty() {
            out.push(' ');
            out.push_str(&self.options.currency_code);
        }
        Ok(out)
    }

    /// Fixed-point number with thousands grouping.
    ///
    /// ```
    /// use proforma_eval::{formatter::Formatter, value::Value};
    ///
    /// let formatter = Formatter::default();
    /// assert_eq!(formatter.number(&Value::from("12345.67899"), "3").unwrap(), "12,345.679");
    /// assert_eq!(formatter.number(&Value::Null, "").unwrap(), "0.000000");
    /// ```
    pub fn number(&self, value: &Value, arg: &str) -> Result<String> {
        let places = if arg.is_empty() {
            DEFAULT_DECIMAL_PLACES
        } else {
            parse_leading_int(arg)
        };

        self.format_number(value, places)
    }

    /// Yes/no text; with the `nullable` arg, nullish values get the null text.
    ///
    /// Anything that is not truthy falls through to the false text.
    pub fn boolean(&self, value: &Value, arg: &str) -> String {
        let options = &self.options;

        if arg == NULLABLE_ARG && self.is_nullish(value) {
            options.null_value.clone()
        } else if self.is_truthy(value) {
            options.true_value.clone()
        } else {
            options.false_value.clone()
        }
    }

    fn format_number(&self, value: &Value, places: i64) -> Result<String> {
        let options = &self.options;
        if !(0..=MAX_DECIMAL_PLACES).contains(&places) {
            return Err(Error::InvalidDecimalPlaces(places));
        }

        let number = to_f64(value)?;
        let fixed = format!("{:.*}", places as usize, number);
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut out =
            insert_after_matches(integer, &options.thousands_pattern, &options.thousands_separator)?;
        if let Some(fraction) = fraction {
            out.push_str(&options.decimal_separator);
            out.push_str(fraction);
        }
        Ok(out)
    }

    fn is_nullish(&self, value: &Value) -> bool {
        is_null_or_empty(value) || self.options.nullish_pattern.is_match(&value.to_string())
    }

    fn is_truthy(&self, value: &Value) -> bool {
        self.options.truthy_pattern.is_match(&value.to_string())
    }
}

fn is_null_or_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        other => other.to_string().is_empty(),
    }
}

/// Numeric reading of a value; null counts as zero.
fn to_f64(value: &Value) -> Result<f64> {
    let number = match value {
        Value::Null => Some(0.0),
        Value::Integer(i) => Some(*i as f64),
        Value::Float(x) => Some(*x),
        other => other.to_string().trim().parse::<f64>().ok(),
    };

    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| Error::InvalidNumber {
            value: value.to_string(),
        })
}
