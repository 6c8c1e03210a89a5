use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use proforma_eval::{Error, Evaluator, Key, Record, Value};

use crate::{bond_record, render_lines};

#[test]
fn test_resolve_then_format() {
    let evaluator = Evaluator::default();
    let record = bond_record();
    let formatter = evaluator.formatter();

    let ssn = evaluator.value(&record, "person.ssn");
    assert_eq!(formatter.format("left_mask", &ssn, "").unwrap(), "XXXXXXX6789");

    let dob = evaluator.value(&record, "person.dob");
    assert_eq!(formatter.format("date", &dob, "").unwrap(), "05/14/1960");

    let balance = evaluator.value(&record, "balance");
    assert_eq!(formatter.format("currency", &balance, "").unwrap(), "$123.45 USD");
}

#[test]
fn test_render_details_pane() {
    let evaluator = Evaluator::default();
    let record = bond_record();

    let header = evaluator
        .text(&record, "Details For: {person.last}, {person.first} ({id})")
        .unwrap();
    assert_eq!(header, "Details For: Bond, James (1)");

    let contents = render_lines(
        &evaluator,
        &record,
        &[
            ("ID #", "{id::number::0}"),
            ("First Name", "{person.first}"),
            ("Last Name", "{person.last}"),
            ("Social Security #", "{person.ssn::left_mask}"),
            ("Birthdate", "{person.dob::date}"),
            ("Smoker", "{person.smoker::boolean}"),
            ("Balance", "{balance::currency}"),
        ],
    );

    assert_snapshot!(contents, @r"
    ID #: 1
    First Name: James
    Last Name: Bond
    Social Security #: XXXXXXX6789
    Birthdate: 05/14/1960
    Smoker: No
    Balance: $123.45 USD
    ");
}

#[test]
fn test_render_list_record_is_blank() {
    let evaluator = Evaluator::default();
    let records = Value::from(vec![bond_record()]);

    assert_eq!(evaluator.text(&records, "{id}{person.first}").unwrap(), "");
}

#[test]
fn test_render_sparse_record() {
    let evaluator = Evaluator::default();
    let record = Value::map([("person", Value::map([(Key::symbol("first"), "Ann")]))]);

    let contents = render_lines(
        &evaluator,
        &record,
        &[
            ("First Name", "[{person.first}]"),
            ("Social Security #", "[{person.ssn::left_mask}]"),
            ("Birthdate", "[{person.dob::date}]"),
            ("Smoker", "[{person.smoker::boolean::nullable}]"),
            ("Balance", "[{balance::currency}]"),
        ],
    );

    assert_snapshot!(contents, @r"
    First Name: [Ann]
    Social Security #: []
    Birthdate: []
    Smoker: [Unknown]
    Balance: []
    ");
}

#[test]
fn test_render_propagates_parse_errors() {
    let evaluator = Evaluator::default();
    let record = Value::map([("dob", "14/05/1960")]);

    let err = evaluator.text(&record, "Born {dob::date}").unwrap_err();
    assert!(matches!(err, Error::DateParse { .. }));
}

#[derive(Debug)]
struct Account {
    owner: Value,
    balance: f64,
}

impl Record for Account {
    fn member(&self, name: &str) -> Option<Value> {
        match name {
            "owner" => Some(self.owner.clone()),
            "balance" => Some(Value::Float(self.balance)),
            _ => None,
        }
    }
}

#[test]
fn test_render_structured_objects() {
    let evaluator = Evaluator::default();
    let account = Value::object(Account {
        owner: bond_record(),
        balance: 1234567.891,
    });
    let record = Value::map([(Key::symbol("account"), account)]);

    let text = evaluator
        .text(
            &record,
            "{account.owner.person.first} holds {account.balance::currency} ({account.missing})",
        )
        .unwrap();
    assert_eq!(text, "James holds $1,234,567.89 USD ()");
}
