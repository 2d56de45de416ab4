use serde_json::{Map, Value};

/// Strings longer than this (in UTF-16 code units, like the browser counts them)
/// are edited in a multi-line textarea.
pub const LONG_TEXT_THRESHOLD: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Null,
    ShortText,
    LongText,
    Number,
    Boolean,
    Array(Vec<Kind>),
    Object,
}

pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::String(text) if text.encode_utf16().count() > LONG_TEXT_THRESHOLD => Kind::LongText,
        Value::String(_) => Kind::ShortText,
        Value::Array(items) => Kind::Array(items.iter().map(classify).collect()),
        Value::Object(_) => Kind::Object,
    }
}

/// Blank value for a new array item, shaped after the last existing item.
///
/// An empty array gets an empty string: there is nothing to infer from, and text
/// lists are by far the most common kind of list in site copy.
pub fn default_for(items: &[Value]) -> Value {
    match items.last() {
        None => Value::String(String::new()),
        Some(Value::Object(fields)) => Value::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), blank(value)))
                .collect(),
        ),
        Some(last) => blank(last),
    }
}

fn blank(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(_) => Value::Bool(false),
        Value::Number(_) => Value::from(0),
        Value::String(_) => Value::String(String::new()),
        Value::Array(_) => Value::Array(Vec::new()),
        Value::Object(_) => Value::Object(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_switches_to_long_after_one_hundred_characters() {
        assert_eq!(classify(&json!("a".repeat(100))), Kind::ShortText);
        assert_eq!(classify(&json!("a".repeat(101))), Kind::LongText);
        assert_eq!(classify(&json!("")), Kind::ShortText);
    }

    #[test]
    fn text_length_counts_utf16_units() {
        // each emoji is a surrogate pair
        assert_eq!(classify(&json!("🚀".repeat(50))), Kind::ShortText);
        assert_eq!(classify(&json!("🚀".repeat(51))), Kind::LongText);
    }

    #[test]
    fn scalars_and_containers_classify() {
        assert_eq!(classify(&Value::Null), Kind::Null);
        assert_eq!(classify(&json!(3.5)), Kind::Number);
        assert_eq!(classify(&json!(true)), Kind::Boolean);
        assert_eq!(classify(&json!({ "a": 1 })), Kind::Object);
        assert_eq!(
            classify(&json!(["x", 1, [false]])),
            Kind::Array(vec![Kind::ShortText, Kind::Number, Kind::Array(vec![Kind::Boolean])])
        );
    }

    #[test]
    fn default_follows_the_last_item() {
        assert_eq!(default_for(&[]), json!(""));
        assert_eq!(default_for(&[json!(5), json!(7)]), json!(0));
        assert_eq!(default_for(&[json!(1), json!("x")]), json!(""));
        assert_eq!(default_for(&[json!(true)]), json!(false));
        assert_eq!(default_for(&[json!([1, 2])]), json!([]));
        assert_eq!(default_for(&[Value::Null]), Value::Null);
    }

    #[test]
    fn default_object_blanks_each_field_one_level_deep() {
        let items = [json!({ "a": "x", "b": 2, "c": true })];
        assert_eq!(default_for(&items), json!({ "a": "", "b": 0, "c": false }));

        let nested = [json!({
            "title": "Cloud",
            "features": ["Design"],
            "cta": { "label": "Go" },
            "icon": null
        })];
        assert_eq!(
            default_for(&nested),
            json!({ "title": "", "features": [], "cta": {}, "icon": null })
        );
    }

    #[test]
    fn default_object_keeps_key_order() {
        let items = [json!({ "zeta": "z", "alpha": "a" })];
        let keys: Vec<_> = default_for(&items)
            .as_object()
            .map(|fields| fields.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
