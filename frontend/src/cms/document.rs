use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cms::path::{self, FieldPath, PathError, Segment};

/// The whole site copy, keyed by section (`hero`, `about`, `navLinks`, ...).
///
/// Sections are free-form JSON. Key order is the order the document was written
/// in and is kept through edits and export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument(Map<String, Value>);

impl ContentDocument {
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        let (Segment::Key(section), rest) = path.split_first()? else {
            return None;
        };
        let rest: FieldPath = rest.iter().cloned().collect();
        path::get(self.0.get(section)?, &rest)
    }

    /// Writes `value` at `path`, where the first segment names the section.
    ///
    /// Only the touched section is rebuilt. An empty path replaces the whole
    /// document and therefore needs an object.
    pub fn apply(&mut self, path: &FieldPath, value: Value) -> Result<(), PathError> {
        let Some((head, rest)) = path.split_first() else {
            return match value {
                Value::Object(sections) => {
                    self.0 = sections;
                    Ok(())
                }
                _ => Err(PathError::InvalidPath {
                    path: path.to_string(),
                    reason: "the document root must stay an object",
                }),
            };
        };
        let Segment::Key(section) = head else {
            return Err(PathError::InvalidPath {
                path: path.to_string(),
                reason: "sections are addressed by key",
            });
        };

        let rest: FieldPath = rest.iter().cloned().collect();
        let current = self.0.get(section).unwrap_or(&Value::Null);
        let updated = path::set(current, &rest, value).map_err(
            |PathError::InvalidPath { reason, .. }| PathError::InvalidPath {
                path: path.to_string(),
                reason,
            },
        )?;
        self.0.insert(section.clone(), updated);
        Ok(())
    }
}

impl From<Map<String, Value>> for ContentDocument {
    fn from(sections: Map<String, Value>) -> Self {
        Self(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> ContentDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn apply_rewrites_one_section() {
        let mut doc = document(json!({ "hero": { "title": "A" }, "footer": { "email": "x" } }));
        doc.apply(&FieldPath::root().key("hero").key("title"), json!("B")).unwrap();
        assert_eq!(doc, document(json!({ "hero": { "title": "B" }, "footer": { "email": "x" } })));
    }

    #[test]
    fn apply_creates_missing_sections_at_the_end() {
        let mut doc = document(json!({ "hero": {} }));
        doc.apply(&FieldPath::root().key("navLinks").index(0).key("name"), json!("Home"))
            .unwrap();
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"hero":{},"navLinks":[{"name":"Home"}]}"#
        );
    }

    #[test]
    fn apply_keeps_section_order_when_replacing() {
        let mut doc = document(json!({ "hero": 1, "about": 2, "footer": 3 }));
        doc.apply(&FieldPath::root().key("about"), json!({ "title": "About" })).unwrap();
        let keys: Vec<_> = doc.0.keys().cloned().collect();
        assert_eq!(keys, vec!["hero", "about", "footer"]);
    }

    #[test]
    fn apply_rejects_bad_roots_and_mismatches() {
        let mut doc = document(json!({ "hero": { "title": "A" } }));
        let before = doc.clone();

        assert!(doc.apply(&FieldPath::root(), json!("not a document")).is_err());
        assert!(doc.apply(&FieldPath::root().index(0), json!("x")).is_err());
        let err = doc
            .apply(&FieldPath::root().key("hero").index(0), json!("x"))
            .unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidPath {
                path: "hero[0]".to_string(),
                reason: "array index applied to an object",
            }
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn get_resolves_through_the_section() {
        let doc = document(json!({ "about": { "stats": [{ "value": "98%" }] } }));
        let path = FieldPath::root().key("about").key("stats").index(0).key("value");
        assert_eq!(doc.get(&path), Some(&json!("98%")));
        assert_eq!(doc.get(&FieldPath::root()), None);
    }
}
