//! Common utility functions shared across the codebase.

use fancy_regex::Regex;

/// Parses the leading integer of a formatter argument.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit. Text without a leading integer parses as 0, and so does an
/// overflowing one.
///
/// # Examples
///
/// ```
/// use proforma_eval::utils::parse_leading_int;
///
/// assert_eq!(parse_leading_int("3"), 3);
/// assert_eq!(parse_leading_int(" 12abc"), 12);
/// assert_eq!(parse_leading_int("-2"), -2);
/// assert_eq!(parse_leading_int("abc"), 0);
/// ```
pub fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}

/// Inserts `separator` right after every match of `pattern` in `text`.
///
/// # Examples
///
/// ```
/// use fancy_regex::Regex;
/// use proforma_eval::utils::insert_after_matches;
///
/// let thousands = Regex::new(r"[0-9](?=(?:[0-9]{3})+(?![0-9]))").unwrap();
/// assert_eq!(insert_after_matches("1234567", &thousands, ",").unwrap(), "1,234,567");
/// assert_eq!(insert_after_matches("-12345", &thousands, " ").unwrap(), "-12 345");
/// assert_eq!(insert_after_matches("999", &thousands, ",").unwrap(), "999");
/// ```
pub fn insert_after_matches(
    text: &str,
    pattern: &Regex,
    separator: &str,
) -> Result<String, fancy_regex::Error> {
    let mut out = String::with_capacity(text.len() + text.len() / 3 * separator.len());
    let mut last = 0;

    for found in pattern.find_iter(text) {
        let found = found?;
        out.push_str(&text[last..found.end()]);
        out.push_str(separator);
        last = found.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}
