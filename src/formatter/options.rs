use std::sync::LazyLock;

use chrono::format::{Item, StrftimeItems};
use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// Anchored, case-insensitive; matched against a value's string form.
static NULLISH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\A(nil|null)\z").unwrap());

static TRUTHY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\A(true|t|yes|y|1)\z").unwrap());

// A digit with a multiple of three digits after it, up to the end of the run.
static THOUSANDS_REGEX: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"[0-9](?=(?:[0-9]{3})+(?![0-9]))").unwrap());

/// Locale settings for a [`Formatter`](super::Formatter).
///
/// Every field can be overridden independently; the rest keep their
/// defaults. Unknown keys are rejected when loading from JSON.
///
/// ```
/// use proforma_eval::formatter::FormatterOptions;
///
/// let options = FormatterOptions::from_json_str(
///     r#"{ "currencyCode": "€", "currencySymbol": "", "decimalSeparator": ",", "thousandsSeparator": " " }"#,
/// )
/// .unwrap();
/// assert_eq!(options.currency_code, "€");
/// assert_eq!(options.currency_round, 2);
///
/// assert!(FormatterOptions::from_json_str(r#"{ "currency": "EUR" }"#).is_err());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormatterOptions {
    pub currency_code: String,
    pub currency_round: u32,
    pub currency_symbol: String,
    /// Output format of the `date` formatter.
    pub date_format: String,
    pub decimal_separator: String,
    /// Input format the `date` formatter parses with.
    pub iso_date_format: String,
    pub mask_char: char,
    pub false_value: String,
    pub null_value: String,
    #[serde(with = "pattern")]
    pub nullish_pattern: Regex,
    /// Matched against the integer digits of a number; the thousands
    /// separator goes right after every match. Needs look-ahead, hence
    /// `fancy_regex`.
    #[serde(with = "fancy_pattern")]
    pub thousands_pattern: FancyRegex,
    pub thousands_separator: String,
    pub true_value: String,
    #[serde(with = "pattern")]
    pub truthy_pattern: Regex,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            currency_code: "USD".to_string(),
            currency_round: 2,
            currency_symbol: "$".to_string(),
            date_format: "%m/%d/%Y".to_string(),
            decimal_separator: ".".to_string(),
            iso_date_format: "%Y-%m-%d".to_string(),
            mask_char: 'X',
            false_value: "No".to_string(),
            null_value: "Unknown".to_string(),
            nullish_pattern: NULLISH_REGEX.clone(),
            thousands_pattern: THOUSANDS_REGEX.clone(),
            thousands_separator: ",".to_string(),
            true_value: "Yes".to_string(),
            truthy_pattern: TRUTHY_REGEX.clone(),
        }
    }
}

impl FormatterOptions {
    /// Parse options from JSON, filling in defaults for absent keys.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that both date formats are valid strftime strings.
    pub fn validate(&self) -> Result<()> {
        for format in [&self.date_format, &self.iso_date_format] {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(Error::InvalidDateFormat {
                    format: format.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Regexes travel through serde as their source text.
mod pattern {
    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(regex.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Regex, D::Error> {
        let source = String::deserialize(deserializer)?;
        Regex::new(&source).map_err(de::Error::custom)
    }
}

mod fancy_pattern {
    use fancy_regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(regex.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Regex, D::Error> {
        let source = String::deserialize(deserializer)?;
        Regex::new(&source).map_err(de::Error::custom)
    }
}
