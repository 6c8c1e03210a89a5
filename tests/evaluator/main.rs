use proforma_eval::{Evaluator, Value};
use serde_json::json;

mod locales;
mod rendering;

/// Record used across the rendering tests.
pub fn bond_record() -> Value {
    Value::from(json!({
        "id": 1,
        "person": {
            "first": "James",
            "last": "Bond",
            "dob": "1960-05-14",
            "smoker": false,
            "ssn": "123-45-6789"
        },
        "balance": "123.445388"
    }))
}

/// Render labelled lines the way a document pane would, one per line.
pub fn render_lines(evaluator: &Evaluator, record: &Value, lines: &[(&str, &str)]) -> String {
    lines
        .iter()
        .map(|(label, template)| {
            let value = evaluator
                .text(record, template)
                .unwrap_or_else(|err| panic!("failed to render {}: {}", template, err));
            format!("{}: {}", label, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
