use std::rc::Rc;

use log::debug;
use serde_json::Value;
use yew::prelude::*;

use crate::cms::document::ContentDocument;
use crate::cms::form::PendingEdit;
use crate::cms::path::FieldPath;
use crate::cms::store::{ContentStorage, ContentStore, FallbackSource, StoreHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Draft matches the last loaded or committed document.
    Clean,
    Dirty,
    /// Just committed or reset; falls back to `Clean` once the acknowledgement times out.
    SavedFlash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: [SectionDescriptor; 7] = [
    SectionDescriptor { id: "hero", label: "Hero Section" },
    SectionDescriptor { id: "about", label: "About Us" },
    SectionDescriptor { id: "services", label: "Services" },
    SectionDescriptor { id: "features", label: "EzyKube Features" },
    SectionDescriptor { id: "contact", label: "Contact Information" },
    SectionDescriptor { id: "footer", label: "Footer" },
    SectionDescriptor { id: "navLinks", label: "Navigation" },
];

/// The operator's working copy of the content and the manager's UI state.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorSession {
    baseline: ContentDocument,
    draft: ContentDocument,
    state: SessionState,
    active_section: &'static str,
    confirming_reset: bool,
    reset_error: Option<String>,
    flash_generation: u32,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(ContentDocument::default())
    }
}

impl EditorSession {
    pub fn new(document: ContentDocument) -> Self {
        Self {
            baseline: document.clone(),
            draft: document,
            state: SessionState::Clean,
            active_section: SECTIONS[0].id,
            confirming_reset: false,
            reset_error: None,
            flash_generation: 0,
        }
    }

    pub fn load(&mut self, document: ContentDocument) {
        self.baseline = document.clone();
        self.draft = document;
        self.state = SessionState::Clean;
        self.confirming_reset = false;
        self.reset_error = None;
    }

    /// Applies one edit to the draft. Edits whose path does not fit the draft are
    /// dropped and leave the session as it was.
    pub fn apply_edit(&mut self, edit: PendingEdit) -> bool {
        match self.draft.apply(&edit.path, edit.value) {
            Ok(()) => {
                self.state = SessionState::Dirty;
                true
            }
            Err(err) => {
                debug!("Dropping edit: {}", err);
                false
            }
        }
    }

    pub fn commit<S: ContentStorage, F: FallbackSource>(&mut self, store: &ContentStore<S, F>) {
        store.commit(self.draft.clone());
        self.baseline = self.draft.clone();
        self.enter_saved_flash();
    }

    pub fn request_reset(&mut self) {
        self.confirming_reset = true;
        self.reset_error = None;
    }

    pub fn cancel_reset(&mut self) {
        self.confirming_reset = false;
        self.reset_error = None;
    }

    pub fn reset_succeeded(&mut self, document: ContentDocument) {
        self.baseline = document.clone();
        self.draft = document;
        self.confirming_reset = false;
        self.reset_error = None;
        self.enter_saved_flash();
    }

    /// The draft and state stay as they were; the confirmation stays open with
    /// the reason so the operator can retry or cancel.
    pub fn reset_failed(&mut self, message: String) {
        self.reset_error = Some(message);
    }

    pub fn expire_flash(&mut self, generation: u32) {
        if self.state == SessionState::SavedFlash && generation == self.flash_generation {
            self.state = SessionState::Clean;
        }
    }

    pub fn select_section(&mut self, id: &str) {
        if let Some(section) = SECTIONS.iter().find(|section| section.id == id) {
            self.active_section = section.id;
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    #[cfg(test)]
    pub fn draft(&self) -> &ContentDocument {
        &self.draft
    }

    #[cfg(test)]
    pub fn baseline(&self) -> &ContentDocument {
        &self.baseline
    }

    pub fn active_section(&self) -> &'static str {
        self.active_section
    }

    pub fn active_value(&self) -> Option<&Value> {
        self.draft.get(&FieldPath::root().key(self.active_section))
    }

    pub fn confirming_reset(&self) -> bool {
        self.confirming_reset
    }

    pub fn reset_error(&self) -> Option<&str> {
        self.reset_error.as_deref()
    }

    pub fn is_saved_flash(&self) -> bool {
        self.state == SessionState::SavedFlash
    }

    pub fn flash_generation(&self) -> u32 {
        self.flash_generation
    }

    fn enter_saved_flash(&mut self) {
        self.state = SessionState::SavedFlash;
        self.flash_generation = self.flash_generation.wrapping_add(1);
    }
}

pub enum SessionAction {
    Load(ContentDocument),
    Edit(PendingEdit),
    SelectSection(&'static str),
    Commit(StoreHandle),
    RequestReset,
    CancelReset,
    ResetSucceeded(ContentDocument),
    ResetFailed(String),
    FlashExpired(u32),
}

impl Reducible for EditorSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = (*self).clone();
        match action {
            SessionAction::Load(document) => session.load(document),
            SessionAction::Edit(edit) => {
                session.apply_edit(edit);
            }
            SessionAction::SelectSection(id) => session.select_section(id),
            SessionAction::Commit(store) => session.commit(&*store),
            SessionAction::RequestReset => session.request_reset(),
            SessionAction::CancelReset => session.cancel_reset(),
            SessionAction::ResetSucceeded(document) => session.reset_succeeded(document),
            SessionAction::ResetFailed(message) => session.reset_failed(message),
            SessionAction::FlashExpired(generation) => session.expire_flash(generation),
        }
        session.into()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::cms::form::{build_section, SectionForm};
    use crate::cms::testing::{document, store};

    fn title_edit(value: &str) -> PendingEdit {
        PendingEdit::new(FieldPath::root().key("hero").key("title"), value)
    }

    #[test]
    fn loading_starts_clean_on_the_first_section() {
        let session = EditorSession::new(document(json!({ "hero": { "title": "A" } })));
        assert_eq!(session.state(), SessionState::Clean);
        assert_eq!(session.active_section(), "hero");
        assert_eq!(session.active_value(), Some(&json!({ "title": "A" })));
    }

    #[test]
    fn edits_make_the_draft_dirty_without_touching_the_baseline() {
        let mut session = EditorSession::new(document(json!({ "hero": { "title": "A" } })));

        assert!(session.apply_edit(title_edit("B")));
        assert!(session.apply_edit(title_edit("C")));

        assert_eq!(session.state(), SessionState::Dirty);
        assert_eq!(session.draft(), &document(json!({ "hero": { "title": "C" } })));
        assert_eq!(session.baseline(), &document(json!({ "hero": { "title": "A" } })));
    }

    #[test]
    fn invalid_edits_are_dropped() {
        let mut session = EditorSession::new(document(json!({ "hero": { "title": "A" } })));
        let before = session.clone();

        let applied = session.apply_edit(PendingEdit::new(
            FieldPath::root().key("hero").key("title").index(0),
            "x",
        ));

        assert!(!applied);
        assert_eq!(session, before);
    }

    #[test]
    fn commit_flashes_then_settles_clean() {
        let store = store(None, Some(json!({ "hero": { "title": "A" } })));
        let mut session = EditorSession::new(block_on(store.load()));
        session.apply_edit(title_edit("B"));

        session.commit(&store);
        assert_eq!(session.state(), SessionState::SavedFlash);
        assert_eq!(session.baseline(), session.draft());

        session.expire_flash(session.flash_generation());
        assert_eq!(session.state(), SessionState::Clean);
        assert_eq!(&block_on(store.load()), session.draft());
    }

    #[test]
    fn stale_flash_timers_are_ignored() {
        let store = store(None, None);
        let mut session = EditorSession::default();
        session.commit(&store);
        let first = session.flash_generation();
        session.commit(&store);

        session.expire_flash(first);
        assert_eq!(session.state(), SessionState::SavedFlash);

        session.apply_edit(title_edit("B"));
        session.expire_flash(session.flash_generation());
        assert_eq!(session.state(), SessionState::Dirty);
    }

    #[test]
    fn reset_replaces_the_draft_after_confirmation() {
        let store = store(None, Some(json!({ "hero": { "title": "Default" } })));
        let mut session = EditorSession::new(block_on(store.load()));
        session.apply_edit(title_edit("Edited"));
        session.request_reset();
        assert!(session.confirming_reset());

        let document = block_on(store.reset()).unwrap();
        session.reset_succeeded(document);

        assert!(!session.confirming_reset());
        assert_eq!(session.state(), SessionState::SavedFlash);
        assert_eq!(session.draft(), &store.committed());
    }

    #[test]
    fn failed_reset_keeps_state_and_committed_document() {
        let store = store(Some(r#"{"hero":{"title":"Saved"}}"#), None);
        let mut session = EditorSession::new(block_on(store.load()));
        session.apply_edit(title_edit("Unsaved"));
        session.request_reset();
        let committed_before = serde_json::to_vec(&store.committed()).unwrap();

        let err = block_on(store.reset()).unwrap_err();
        session.reset_failed(err.to_string());

        assert_eq!(session.state(), SessionState::Dirty);
        assert_eq!(session.draft(), &document(json!({ "hero": { "title": "Unsaved" } })));
        assert!(session.confirming_reset());
        assert!(session.reset_error().is_some());
        assert_eq!(serde_json::to_vec(&store.committed()).unwrap(), committed_before);

        session.cancel_reset();
        assert!(!session.confirming_reset());
        assert_eq!(session.reset_error(), None);
    }

    #[test]
    fn switching_sections_keeps_the_draft() {
        let mut session = EditorSession::new(document(json!({ "hero": { "title": "A" }, "footer": {} })));
        session.apply_edit(title_edit("B"));

        session.select_section("footer");
        session.select_section("pricing");

        assert_eq!(session.active_section(), "footer");
        assert_eq!(session.state(), SessionState::Dirty);
        assert_eq!(session.draft().section("hero"), Some(&json!({ "title": "B" })));
    }

    #[test]
    fn export_reads_the_committed_document_not_the_draft() {
        let store = store(None, Some(json!({ "hero": { "title": "A" } })));
        let mut session = EditorSession::new(block_on(store.load()));
        session.apply_edit(title_edit("Unsaved"));

        let exported: Value = serde_json::from_slice(&store.export(&store.committed()).unwrap()).unwrap();
        assert_eq!(exported["hero"]["title"], "A");
    }

    #[test]
    fn edit_commit_export_round_trip() {
        let store = store(None, Some(json!({ "hero": { "title": "A" } })));
        let mut session = EditorSession::new(block_on(store.load()));

        session.apply_edit(title_edit("B"));
        session.commit(&store);

        let exported: Value = serde_json::from_slice(&store.export(&store.committed()).unwrap()).unwrap();
        assert_eq!(exported["hero"]["title"], "B");
    }

    #[test]
    fn navigation_links_add_then_remove() {
        let mut session = EditorSession::new(document(json!({ "navLinks": [{ "name": "Home", "href": "#hero" }] })));
        session.select_section("navLinks");

        let SectionForm::NavLinks { links, .. } = build_section("navLinks", session.active_value()) else {
            panic!("navLinks override");
        };
        session.apply_edit(links.append(SectionForm::new_nav_link()));
        assert_eq!(
            session.active_value(),
            Some(&json!([{ "name": "Home", "href": "#hero" }, { "name": "New Link", "href": "#" }]))
        );

        let SectionForm::NavLinks { links, .. } = build_section("navLinks", session.active_value()) else {
            panic!("navLinks override");
        };
        session.apply_edit(links.remove(0).unwrap());
        assert_eq!(session.active_value(), Some(&json!([{ "name": "New Link", "href": "#" }])));
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let session = Rc::new(EditorSession::default());
        let session = session.reduce(SessionAction::Load(document(json!({ "hero": { "title": "A" } }))));
        let session = session.reduce(SessionAction::Edit(title_edit("B")));
        let session = session.reduce(SessionAction::Edit(title_edit("C")));
        let session = session.reduce(SessionAction::SelectSection("contact"));

        assert_eq!(session.state(), SessionState::Dirty);
        assert_eq!(session.draft().section("hero"), Some(&json!({ "title": "C" })));
        assert_eq!(session.active_section(), "contact");
    }
}
