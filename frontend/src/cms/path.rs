//! Addressing values inside an arbitrarily nested JSON document.
//!
//! A [`FieldPath`] is a list of object keys and array indices. [`get`] walks it
//! read-only, [`set`] returns an updated copy and leaves the caller's value alone.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(Segment::Key(key.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn split_first(&self) -> Option<(&Segment, &[Segment])> {
        self.0.split_first()
    }

    fn child(&self, segment: Segment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }
}

impl FromIterator<Segment> for FieldPath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(root)");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if position == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

/// Resolves `path` inside `root`. Missing segments and kind mismatches give `None`.
pub fn get<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| match (node, segment) {
            (Value::Object(fields), Segment::Key(key)) => fields.get(key),
            (Value::Array(items), Segment::Index(index)) => items.get(*index),
            _ => None,
        })
}

/// Returns a copy of `root` with the value at `path` replaced by `value`.
///
/// Missing or `null` intermediates become containers: an array when the segment
/// applied to them is an index, an object otherwise. Writing at the index one past
/// the end of an array appends; anything further out is rejected. An empty path
/// replaces the root.
pub fn set(root: &Value, path: &FieldPath, value: Value) -> Result<Value, PathError> {
    let mut updated = root.clone();
    set_in(&mut updated, path.segments(), value).map_err(|reason| PathError::InvalidPath {
        path: path.to_string(),
        reason,
    })?;
    Ok(updated)
}

fn set_in(node: &mut Value, segments: &[Segment], value: Value) -> Result<(), &'static str> {
    let Some((segment, rest)) = segments.split_first() else {
        *node = value;
        return Ok(());
    };

    if node.is_null() {
        *node = container_for(segment);
    }

    let child = match (node, segment) {
        (Value::Object(fields), Segment::Key(key)) => {
            fields.entry(key.clone()).or_insert(Value::Null)
        }
        (Value::Array(items), Segment::Index(index)) => {
            if *index > items.len() {
                return Err("array index past the end");
            }
            if *index == items.len() {
                items.push(Value::Null);
            }
            &mut items[*index]
        }
        (Value::Object(_), Segment::Index(_)) => return Err("array index applied to an object"),
        (Value::Array(_), Segment::Key(_)) => return Err("property key applied to an array"),
        _ => return Err("cannot descend into a scalar value"),
    };

    set_in(child, rest, value)
}

fn container_for(segment: &Segment) -> Value {
    match segment {
        Segment::Index(_) => Value::Array(Vec::new()),
        Segment::Key(_) => Value::Object(Map::new()),
    }
}
