use pretty_assertions::assert_eq;
use proforma_eval::{Evaluator, Formatter, FormatterOptions, Resolver};

use crate::bond_record;

fn evaluator_from_json(options: &str) -> Evaluator {
    let options = FormatterOptions::from_json_str(options).unwrap();
    Evaluator::new(Formatter::new(options).unwrap(), Resolver::default())
}

#[test]
fn test_france() {
    let evaluator = evaluator_from_json(
        r#"{
            "currencyCode": "€",
            "currencyRound": 2,
            "currencySymbol": "",
            "dateFormat": "%d/%m/%Y",
            "decimalSeparator": ",",
            "thousandsSeparator": " ",
            "trueValue": "Oui",
            "falseValue": "Non"
        }"#,
    );
    let record = bond_record();

    assert_eq!(
        evaluator
            .text(&record, "{person.dob::date} | {person.smoker::boolean} | {balance::currency}")
            .unwrap(),
        "14/05/1960 | Non | 123,45 €"
    );
    assert_eq!(
        evaluator.text(&record, "{balance::number::3}").unwrap(),
        "123,445"
    );
}

#[test]
fn test_germany_number_grouping() {
    let evaluator = evaluator_from_json(
        r#"{ "currencyCode": "EUR", "currencySymbol": "", "decimalSeparator": ",", "thousandsSeparator": "." }"#,
    );
    let record = proforma_eval::Value::map([("total", "9876543.219")]);

    assert_eq!(
        evaluator.text(&record, "{total::currency}").unwrap(),
        "9.876.543,22 EUR"
    );
}

#[test]
fn test_custom_mask_and_null_text() {
    let evaluator = evaluator_from_json(r#"{ "maskChar": "*", "nullValue": "n/a" }"#);
    let record = bond_record();

    assert_eq!(
        evaluator
            .text(&record, "{person.ssn::left_mask::2} {person.spouse::boolean::nullable}")
            .unwrap(),
        "*********89 n/a"
    );
}

#[test]
fn test_unknown_option_is_rejected() {
    assert!(FormatterOptions::from_json_str(r#"{ "currency_code": "USD" }"#).is_err());
}

#[test]
fn test_india_lakh_grouping() {
    let evaluator = evaluator_from_json(
        r#"{
            "currencyCode": "INR",
            "currencySymbol": "₹",
            "thousandsPattern": "[0-9](?=(?:[0-9]{2})*[0-9]{3}(?![0-9]))"
        }"#,
    );
    let record = proforma_eval::Value::map([("total", "12345678.5")]);

    assert_eq!(
        evaluator.text(&record, "{total::currency}").unwrap(),
        "₹1,23,45,678.50 INR"
    );
}
