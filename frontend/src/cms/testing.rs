//! In-memory collaborators for exercising the store and session without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde_json::Value;

use crate::cms::document::ContentDocument;
use crate::cms::error::CmsError;
use crate::cms::store::{ContentStorage, ContentStore, FallbackSource};

pub const KEY: &str = "sinad_content";

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn with(key: &str, raw: &str) -> Self {
        let storage = Self::default();
        storage.items.borrow_mut().insert(key.to_string(), raw.to_string());
        storage
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl ContentStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CmsError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, json: &str) -> Result<(), CmsError> {
        if self.fail_writes {
            return Err(CmsError::Storage("quota exceeded".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), json.to_string());
        Ok(())
    }
}

/// Serves a fixed document, or fails every fetch when it has none.
pub struct ScriptedFallback {
    document: Option<ContentDocument>,
    fetches: Cell<u32>,
}

impl ScriptedFallback {
    pub fn serving(value: Value) -> Self {
        Self {
            document: Some(document(value)),
            fetches: Cell::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            document: None,
            fetches: Cell::new(0),
        }
    }

    pub fn fetches(&self) -> u32 {
        self.fetches.get()
    }
}

impl FallbackSource for ScriptedFallback {
    async fn fetch(&self) -> Result<ContentDocument, CmsError> {
        self.fetches.set(self.fetches.get() + 1);
        self.document
            .clone()
            .ok_or_else(|| CmsError::Fetch("network unreachable".to_string()))
    }
}

pub fn document(value: Value) -> ContentDocument {
    serde_json::from_value(value).expect("test documents are objects")
}

pub fn store(stored: Option<&str>, fallback: Option<Value>) -> ContentStore<MemoryStorage, ScriptedFallback> {
    let storage = match stored {
        Some(raw) => MemoryStorage::with(KEY, raw),
        None => MemoryStorage::default(),
    };
    let fallback = match fallback {
        Some(value) => ScriptedFallback::serving(value),
        None => ScriptedFallback::unreachable(),
    };
    ContentStore::new(storage, fallback, KEY)
}
