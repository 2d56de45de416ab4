//! Editable form layout for one section of the draft.
//!
//! The layout is derived from the data alone: [`classify`] picks the control for
//! every value. Controls never touch the draft; each interaction produces a
//! [`PendingEdit`] for the session to apply.

use serde_json::{json, Map, Number, Value};

use crate::cms::kind::{classify, default_for, Kind};
use crate::cms::path::FieldPath;

pub const NAV_LINKS_SECTION: &str = "navLinks";
pub const NULL_PLACEHOLDER: &str = "Enter value...";
pub const UNAVAILABLE_MESSAGE: &str = "No editable content available for this section";

/// A single path-addressed write, applied to the draft as soon as it is emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingEdit {
    pub path: FieldPath,
    pub value: Value,
}

impl PendingEdit {
    pub fn new(path: FieldPath, value: impl Into<Value>) -> Self {
        Self {
            path,
            value: value.into(),
        }
    }
}

/// An array being edited as a whole: adding or removing an item rewrites the
/// array at `path`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayEditor {
    pub path: FieldPath,
    pub items: Vec<Value>,
}

impl ArrayEditor {
    pub fn append(&self, item: Value) -> PendingEdit {
        let mut items = self.items.clone();
        items.push(item);
        PendingEdit::new(self.path.clone(), Value::Array(items))
    }

    pub fn append_default(&self) -> PendingEdit {
        self.append(default_for(&self.items))
    }

    /// Drops the item at `index`; later items move down by one.
    pub fn remove(&self, index: usize) -> Option<PendingEdit> {
        if index >= self.items.len() {
            return None;
        }
        let mut items = self.items.clone();
        items.remove(index);
        Some(PendingEdit::new(self.path.clone(), Value::Array(items)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldControl {
    Text {
        path: FieldPath,
        value: String,
        multiline: bool,
        placeholder: Option<&'static str>,
    },
    Number {
        path: FieldPath,
        value: String,
    },
    Toggle {
        path: FieldPath,
        checked: bool,
    },
    Group {
        fields: Vec<LabeledField>,
    },
    List {
        array: ArrayEditor,
        items: Vec<ListItem>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabeledField {
    pub label: String,
    pub control: FieldControl,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    pub title: String,
    pub control: FieldControl,
}

/// Fixed two-field row of the navigation section.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLinkRow {
    pub title: String,
    pub name: String,
    pub href: String,
    path: FieldPath,
    entry: Value,
}

impl NavLinkRow {
    pub fn edit_name(&self, name: &str) -> PendingEdit {
        self.edit("name", name)
    }

    pub fn edit_href(&self, href: &str) -> PendingEdit {
        self.edit("href", href)
    }

    // The whole entry is rewritten so it always carries both fields; extra keys
    // such as `submenu` ride along.
    fn edit(&self, field: &str, text: &str) -> PendingEdit {
        let mut entry = match &self.entry {
            Value::Object(fields) => fields.clone(),
            _ => Map::new(),
        };
        for key in ["name", "href"] {
            entry
                .entry(key)
                .or_insert_with(|| Value::String(String::new()));
        }
        entry.insert(field.to_string(), Value::String(text.to_string()));
        PendingEdit::new(self.path.clone(), Value::Object(entry))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionForm {
    Fields {
        heading: String,
        fields: Vec<LabeledField>,
    },
    List {
        heading: String,
        control: FieldControl,
    },
    NavLinks {
        links: ArrayEditor,
        rows: Vec<NavLinkRow>,
    },
    Unavailable,
}

impl SectionForm {
    pub fn new_nav_link() -> Value {
        json!({ "name": "New Link", "href": "#" })
    }
}

pub fn build_section(section: &str, value: Option<&Value>) -> SectionForm {
    let root = FieldPath::root().key(section);
    let heading = format!("{} Content", capitalize(section));
    let value = value.unwrap_or(&Value::Null);

    if section == NAV_LINKS_SECTION {
        match value {
            Value::Array(links) => return nav_links_form(root, links),
            Value::Null => return nav_links_form(root, &[]),
            _ => {}
        }
    }

    match value {
        Value::Null => SectionForm::Fields {
            heading,
            fields: Vec::new(),
        },
        Value::Object(fields) => SectionForm::Fields {
            heading,
            fields: fields
                .iter()
                .map(|(key, value)| LabeledField {
                    label: section_field_label(key),
                    control: build_control(value, root.key(key.as_str())),
                })
                .collect(),
        },
        Value::Array(_) => SectionForm::List {
            heading,
            control: build_control(value, root),
        },
        _ => SectionForm::Unavailable,
    }
}

pub fn build_control(value: &Value, path: FieldPath) -> FieldControl {
    match classify(value) {
        Kind::Null => FieldControl::Text {
            path,
            value: String::new(),
            multiline: false,
            placeholder: Some(NULL_PLACEHOLDER),
        },
        kind @ (Kind::ShortText | Kind::LongText) => FieldControl::Text {
            path,
            value: value.as_str().unwrap_or_default().to_string(),
            multiline: kind == Kind::LongText,
            placeholder: None,
        },
        Kind::Number => FieldControl::Number {
            path,
            value: value.to_string(),
        },
        Kind::Boolean => FieldControl::Toggle {
            path,
            checked: value.as_bool().unwrap_or_default(),
        },
        Kind::Object => FieldControl::Group {
            fields: value
                .as_object()
                .map(|fields| {
                    fields
                        .iter()
                        .map(|(key, value)| LabeledField {
                            label: capitalize(key),
                            control: build_control(value, path.key(key.as_str())),
                        })
                        .collect()
                })
                .unwrap_or_default(),
        },
        Kind::Array(_) => {
            let items = value.as_array().cloned().unwrap_or_default();
            FieldControl::List {
                items: items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| ListItem {
                        title: format!("Item {}", index + 1),
                        control: build_control(item, path.index(index)),
                    })
                    .collect(),
                array: ArrayEditor { path, items },
            }
        }
    }
}

fn nav_links_form(path: FieldPath, links: &[Value]) -> SectionForm {
    let rows = links
        .iter()
        .enumerate()
        .map(|(index, entry)| NavLinkRow {
            title: format!("Link {}", index + 1),
            name: text_field(entry, "name"),
            href: text_field(entry, "href"),
            path: path.index(index),
            entry: entry.clone(),
        })
        .collect();
    SectionForm::NavLinks {
        links: ArrayEditor {
            path,
            items: links.to_vec(),
        },
        rows,
    }
}

fn text_field(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Reads a number input. Empty input counts as zero; anything that is not a
/// finite number produces no edit. Whole numbers come back as integers so a
/// half-typed `1.` renders as `1` and the input is left as the operator typed it.
pub fn parse_number(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(Value::from(0));
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::from(int));
    }
    let float = raw.parse::<f64>().ok()?;
    if float.fract() == 0.0 && float.abs() < EXACT_INT_LIMIT {
        return Some(Value::from(float as i64));
    }
    Number::from_f64(float).map(Value::Number)
}

pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Top-level labels also split camelCase humps: `secondaryCta` -> `Secondary Cta`.
pub fn section_field_label(key: &str) -> String {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut label: String = first.to_uppercase().collect();
    for ch in chars {
        if ch.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(form: SectionForm) -> Vec<LabeledField> {
        match form {
            SectionForm::Fields { fields, .. } => fields,
            other => panic!("expected fields, got {:?}", other),
        }
    }

    #[test]
    fn labels_capitalize_and_split_humps() {
        assert_eq!(capitalize("title"), "Title");
        assert_eq!(capitalize("buttonText"), "ButtonText");
        assert_eq!(capitalize(""), "");
        assert_eq!(section_field_label("secondaryCta"), "Secondary Cta");
        assert_eq!(section_field_label("officeAddress"), "Office Address");
        assert_eq!(section_field_label("cta"), "Cta");
    }

    #[test]
    fn object_section_lists_fields_in_key_order() {
        let hero = json!({
            "title": "Simplifying Cloud",
            "description": "d".repeat(101),
            "secondaryCta": "Contact Us"
        });
        let form = build_section("hero", Some(&hero));
        let SectionForm::Fields { heading, fields } = form else {
            panic!("hero is an object");
        };

        assert_eq!(heading, "Hero Content");
        let labels: Vec<_> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Title", "Description", "Secondary Cta"]);
        assert!(matches!(fields[0].control, FieldControl::Text { multiline: false, .. }));
        assert!(matches!(fields[1].control, FieldControl::Text { multiline: true, .. }));
        assert_eq!(
            fields[2].control,
            FieldControl::Text {
                path: FieldPath::root().key("hero").key("secondaryCta"),
                value: "Contact Us".to_string(),
                multiline: false,
                placeholder: None,
            }
        );
    }

    #[test]
    fn null_renders_as_an_empty_text_field() {
        let control = build_control(&Value::Null, FieldPath::root().key("footer").key("email"));
        assert_eq!(
            control,
            FieldControl::Text {
                path: FieldPath::root().key("footer").key("email"),
                value: String::new(),
                multiline: false,
                placeholder: Some(NULL_PLACEHOLDER),
            }
        );
    }

    #[test]
    fn scalars_get_matching_controls() {
        let path = FieldPath::root().key("about").key("years");
        assert_eq!(
            build_control(&json!(15), path.clone()),
            FieldControl::Number { path: path.clone(), value: "15".to_string() }
        );
        assert_eq!(
            build_control(&json!(true), path.clone()),
            FieldControl::Toggle { path, checked: true }
        );
    }

    #[test]
    fn nested_objects_group_with_capitalized_labels() {
        let services = json!({ "cta": { "title": "Need Custom Solutions?", "buttonText": "Contact Us" } });
        let fields = fields(build_section("services", Some(&services)));
        let FieldControl::Group { fields: nested } = &fields[0].control else {
            panic!("cta is an object");
        };
        assert_eq!(nested[1].label, "ButtonText");
        assert!(matches!(
            &nested[1].control,
            FieldControl::Text { path, .. } if *path == FieldPath::root().key("services").key("cta").key("buttonText")
        ));
    }

    #[test]
    fn arrays_of_objects_address_items_by_index() {
        let about = json!({ "stats": [{ "value": "98%", "label": "Client Satisfaction" }] });
        let fields = fields(build_section("about", Some(&about)));
        let FieldControl::List { items, .. } = &fields[0].control else {
            panic!("stats is an array");
        };
        assert_eq!(items[0].title, "Item 1");
        let FieldControl::Group { fields: stat } = &items[0].control else {
            panic!("stat items are objects");
        };
        assert_eq!(stat[1].label, "Label");
        assert!(matches!(
            &stat[1].control,
            FieldControl::Text { path, .. } if *path == FieldPath::root().key("about").key("stats").index(0).key("label")
        ));
    }

    #[test]
    fn nested_arrays_recurse() {
        let control = build_control(&json!([["a"]]), FieldPath::root().key("grid"));
        let FieldControl::List { items, .. } = control else {
            panic!("outer array");
        };
        let FieldControl::List { items: inner, array } = &items[0].control else {
            panic!("inner array");
        };
        assert_eq!(array.path, FieldPath::root().key("grid").index(0));
        assert!(matches!(
            &inner[0].control,
            FieldControl::Text { path, .. } if *path == FieldPath::root().key("grid").index(0).index(0)
        ));
    }

    #[test]
    fn add_item_appends_a_blank_shaped_like_the_last() {
        let array = ArrayEditor {
            path: FieldPath::root().key("about").key("values"),
            items: vec![json!({ "icon": "🚀", "title": "Innovation", "order": 1 })],
        };
        let edit = array.append_default();
        assert_eq!(edit.path, array.path);
        assert_eq!(
            edit.value,
            json!([
                { "icon": "🚀", "title": "Innovation", "order": 1 },
                { "icon": "", "title": "", "order": 0 }
            ])
        );

        let empty = ArrayEditor { path: FieldPath::root().key("tags"), items: Vec::new() };
        assert_eq!(empty.append_default().value, json!([""]));
    }

    #[test]
    fn remove_item_shifts_later_items_down() {
        let array = ArrayEditor {
            path: FieldPath::root().key("features"),
            items: vec![json!("a"), json!("b"), json!("c")],
        };
        assert_eq!(array.remove(1).unwrap().value, json!(["a", "c"]));
        assert_eq!(array.remove(3), None);

        let single = ArrayEditor { path: FieldPath::root().key("features"), items: vec![json!("a")] };
        assert_eq!(single.remove(0).unwrap().value, json!([]));
    }

    #[test]
    fn number_input_parses_or_is_ignored() {
        assert_eq!(parse_number("42"), Some(json!(42)));
        assert_eq!(parse_number(" -3 "), Some(json!(-3)));
        assert_eq!(parse_number("2.5"), Some(json!(2.5)));
        assert_eq!(parse_number(""), Some(json!(0)));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn half_typed_decimals_render_back_unchanged() {
        let path = FieldPath::root().key("about").key("years");
        assert_eq!(parse_number("1."), Some(json!(1)));
        assert_eq!(parse_number("3.0"), Some(json!(3)));
        assert_eq!(
            build_control(&parse_number("1.").unwrap(), path.clone()),
            FieldControl::Number { path, value: "1".to_string() }
        );
    }

    #[test]
    fn nav_links_use_two_fixed_fields() {
        let links = json!([
            { "name": "Services", "href": "#services", "submenu": [{ "name": "Consulting", "href": "#services" }] },
            { "href": "#contact" },
            "stray"
        ]);
        let SectionForm::NavLinks { rows, .. } = build_section(NAV_LINKS_SECTION, Some(&links)) else {
            panic!("navLinks override");
        };

        assert_eq!(rows.len(), 3);
        assert_eq!((rows[1].title.as_str(), rows[1].name.as_str(), rows[1].href.as_str()), ("Link 2", "", "#contact"));

        let renamed = rows[0].edit_name("What we do");
        assert_eq!(renamed.path, FieldPath::root().key("navLinks").index(0));
        assert_eq!(
            renamed.value,
            json!({ "name": "What we do", "href": "#services", "submenu": [{ "name": "Consulting", "href": "#services" }] })
        );
        assert_eq!(rows[1].edit_name("Contact").value, json!({ "href": "#contact", "name": "Contact" }));
        assert_eq!(rows[2].edit_href("#top").value, json!({ "name": "", "href": "#top" }));
    }

    #[test]
    fn missing_nav_links_still_offer_adding() {
        let SectionForm::NavLinks { links, rows } = build_section(NAV_LINKS_SECTION, None) else {
            panic!("navLinks override");
        };
        assert!(rows.is_empty());
        assert_eq!(
            links.append(SectionForm::new_nav_link()).value,
            json!([{ "name": "New Link", "href": "#" }])
        );
    }

    #[test]
    fn odd_sections_fall_back_gracefully() {
        assert_eq!(build_section("hero", Some(&json!("just text"))), SectionForm::Unavailable);
        assert_eq!(build_section("hero", Some(&json!(0))), SectionForm::Unavailable);
        assert_eq!(
            build_section("footer", None),
            SectionForm::Fields { heading: "Footer Content".to_string(), fields: Vec::new() }
        );
        assert!(matches!(build_section("features", Some(&json!(["a"]))), SectionForm::List { .. }));
    }
}
