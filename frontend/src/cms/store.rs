use std::cell::{Cell, RefCell};
use std::ops::Deref;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{error, info, warn};
use web_sys::window;

use crate::cms::document::ContentDocument;
use crate::cms::error::CmsError;
use crate::config;

/// Raw key/value persistence for the serialized document.
pub trait ContentStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CmsError>;
    fn write(&self, key: &str, json: &str) -> Result<(), CmsError>;
}

/// Where the shipped default document comes from.
#[allow(async_fn_in_trait)]
pub trait FallbackSource {
    async fn fetch(&self) -> Result<ContentDocument, CmsError>;
}

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, CmsError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| CmsError::Storage("localStorage is not available".to_string()))
    }
}

impl ContentStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CmsError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| CmsError::Storage(format!("{:?}", e)))
    }

    fn write(&self, key: &str, json: &str) -> Result<(), CmsError> {
        Self::storage()?
            .set_item(key, json)
            .map_err(|e| CmsError::Storage(format!("{:?}", e)))
    }
}

pub struct HttpFallback {
    url: String,
}

impl HttpFallback {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FallbackSource for HttpFallback {
    async fn fetch(&self) -> Result<ContentDocument, CmsError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| CmsError::Fetch(e.to_string()))?;
        if !response.ok() {
            return Err(CmsError::Fetch(format!(
                "{} answered with status {}",
                self.url,
                response.status()
            )));
        }
        response
            .json::<ContentDocument>()
            .await
            .map_err(|e| CmsError::Fetch(e.to_string()))
    }
}

/// Owns the committed document and its persisted copy.
pub struct ContentStore<S, F> {
    storage: S,
    fallback: F,
    key: String,
    committed: RefCell<ContentDocument>,
    loaded: Cell<bool>,
}

impl<S: ContentStorage, F: FallbackSource> ContentStore<S, F> {
    pub fn new(storage: S, fallback: F, key: impl Into<String>) -> Self {
        Self {
            storage,
            fallback,
            key: key.into(),
            committed: RefCell::new(ContentDocument::default()),
            loaded: Cell::new(false),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    pub fn committed(&self) -> ContentDocument {
        self.committed.borrow().clone()
    }

    /// Returns the persisted document, seeding it from the fallback source on
    /// first use. A failed fetch still completes the load with an empty document.
    pub async fn load(&self) -> ContentDocument {
        let document = match self.read_persisted() {
            Some(document) => document,
            None => {
                let document = match self.fallback.fetch().await {
                    Ok(document) => {
                        info!("Seeded content from the default document");
                        document
                    }
                    Err(err) => {
                        warn!("{}", CmsError::LoadFailed(err.to_string()));
                        ContentDocument::default()
                    }
                };
                self.persist(&document);
                document
            }
        };

        *self.committed.borrow_mut() = document.clone();
        self.loaded.set(true);
        document
    }

    pub fn commit(&self, document: ContentDocument) {
        self.persist(&document);
        *self.committed.borrow_mut() = document;
        info!("Committed content");
    }

    /// Replaces the committed document with a fresh copy of the default one.
    /// Nothing changes when the default cannot be fetched.
    pub async fn reset(&self) -> Result<ContentDocument, CmsError> {
        match self.fallback.fetch().await {
            Ok(document) => {
                self.commit(document.clone());
                info!("Content reset to defaults");
                Ok(document)
            }
            Err(err) => {
                let err = CmsError::ResetFailed(err.to_string());
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Pretty JSON with two-space indentation, sections in document order.
    pub fn export(&self, document: &ContentDocument) -> Result<Vec<u8>, CmsError> {
        Ok(serde_json::to_vec_pretty(document)?)
    }

    fn read_persisted(&self) -> Option<ContentDocument> {
        let raw = match self.storage.read(&self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!("Reading stored content failed: {}", err);
                return None;
            }
        };
        match serde_json::from_str::<ContentDocument>(&raw) {
            Ok(document) => Some(document),
            Err(err) => {
                warn!("Ignoring unreadable stored content: {}", err);
                None
            }
        }
    }

    fn persist(&self, document: &ContentDocument) {
        let result = serde_json::to_string(document)
            .map_err(CmsError::from)
            .and_then(|json| self.storage.write(&self.key, &json));
        if let Err(err) = result {
            error!("Failed to persist content: {}", err);
        }
    }
}

pub type SiteStore = ContentStore<LocalStorage, HttpFallback>;

pub fn site_store() -> SiteStore {
    ContentStore::new(
        LocalStorage,
        HttpFallback::new(config::fallback_content_url()),
        config::STORAGE_KEY,
    )
}

/// Shared handle to the one store of the running site. Handles compare equal
/// when they point at the same store.
#[derive(Clone)]
pub struct StoreHandle(Rc<SiteStore>);

impl StoreHandle {
    pub fn new(store: SiteStore) -> Self {
        Self(Rc::new(store))
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for StoreHandle {
    type Target = SiteStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::cms::testing::{document, store, MemoryStorage, ScriptedFallback, KEY};

    #[test]
    fn load_prefers_the_persisted_document() {
        let storage = MemoryStorage::with(KEY, r#"{"hero":{"title":"Stored"}}"#);
        let store = ContentStore::new(storage, ScriptedFallback::serving(json!({ "hero": {} })), KEY);

        let loaded = block_on(store.load());

        assert_eq!(loaded, document(json!({ "hero": { "title": "Stored" } })));
        assert_eq!(store.fallback.fetches(), 0);
        assert!(store.is_loaded());
    }

    #[test]
    fn load_seeds_and_persists_the_default_document() {
        let store = store(None, Some(json!({ "hero": { "title": "Default" } })));

        let loaded = block_on(store.load());

        assert_eq!(loaded, document(json!({ "hero": { "title": "Default" } })));
        assert_eq!(store.storage.raw(KEY).as_deref(), Some(r#"{"hero":{"title":"Default"}}"#));
        assert_eq!(store.committed(), loaded);
    }

    #[test]
    fn failed_fallback_degrades_to_an_empty_loaded_document() {
        let store = store(None, None);

        let loaded = block_on(store.load());

        assert!(loaded.is_empty());
        assert!(store.is_loaded());
        assert_eq!(store.storage.raw(KEY).as_deref(), Some("{}"));

        // the stored empty document counts as present
        block_on(store.load());
        assert_eq!(store.fallback.fetches(), 1);
    }

    #[test]
    fn unreadable_stored_content_is_replaced_by_the_default() {
        let store = store(Some("not json"), Some(json!({ "about": {} })));
        assert_eq!(block_on(store.load()), document(json!({ "about": {} })));
        assert_eq!(store.fallback.fetches(), 1);
    }

    #[test]
    fn committed_document_is_what_the_next_load_returns() {
        let store = store(None, Some(json!({ "hero": { "title": "A" } })));
        block_on(store.load());

        let edited = document(json!({ "hero": { "title": "B", "cta": "Go" }, "footer": {} }));
        store.commit(edited.clone());

        assert_eq!(block_on(store.load()), edited);
        assert_eq!(store.committed(), edited);
    }

    #[test]
    fn storage_failures_do_not_lose_the_in_memory_commit() {
        let store = ContentStore::new(
            MemoryStorage::failing_writes(),
            ScriptedFallback::serving(json!({})),
            KEY,
        );
        let edited = document(json!({ "hero": { "title": "B" } }));
        store.commit(edited.clone());
        assert_eq!(store.committed(), edited);
    }

    #[test]
    fn reset_commits_the_default_document() {
        let store = store(Some(r#"{"hero":{"title":"Edited"}}"#), Some(json!({ "hero": { "title": "Default" } })));
        block_on(store.load());

        let reset = block_on(store.reset()).unwrap();

        assert_eq!(reset, document(json!({ "hero": { "title": "Default" } })));
        assert_eq!(store.committed(), reset);
        assert_eq!(store.storage.raw(KEY).as_deref(), Some(r#"{"hero":{"title":"Default"}}"#));
    }

    #[test]
    fn failed_reset_leaves_everything_untouched() {
        let stored = r#"{"hero":{"title":"Edited"}}"#;
        let store = store(Some(stored), None);
        block_on(store.load());
        let before = store.committed();

        let err = block_on(store.reset()).unwrap_err();

        assert!(matches!(err, CmsError::ResetFailed(_)));
        assert_eq!(store.committed(), before);
        assert_eq!(store.storage.raw(KEY).as_deref(), Some(stored));
    }

    #[test]
    fn export_is_pretty_and_keeps_document_order() {
        let store = store(None, None);
        let doc = document(json!({ "navLinks": [{ "name": "Home", "href": "#hero" }], "hero": { "title": "A" } }));

        let bytes = store.export(&doc).unwrap();

        let expected = "{\n  \"navLinks\": [\n    {\n      \"name\": \"Home\",\n      \"href\": \"#hero\"\n    }\n  ],\n  \"hero\": {\n    \"title\": \"A\"\n  }\n}";
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }
}
