use gloo_timers::callback::Timeout;
use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::admin::export::download_json;
use crate::admin::field_editor::SectionEditor;
use crate::cms::document::ContentDocument;
use crate::cms::form::PendingEdit;
use crate::cms::session::{EditorSession, SessionAction, SessionState, SECTIONS};
use crate::cms::store::StoreHandle;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContentManagerProps {
    pub store: StoreHandle,
    pub session: UseReducerHandle<EditorSession>,
    pub on_committed: Callback<ContentDocument>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ContentManager(props: &ContentManagerProps) -> Html {
    let session = props.session.clone();
    let store = props.store.clone();

    // Publish the new committed document and take the acknowledgement down
    // again after a while.
    {
        let generation = session.flash_generation();
        let session = session.clone();
        let store = store.clone();
        let on_committed = props.on_committed.clone();
        use_effect_with_deps(
            move |generation: &u32| {
                let timeout = session.is_saved_flash().then(|| {
                    on_committed.emit(store.committed());
                    let dispatcher = session.dispatcher();
                    let generation = *generation;
                    Timeout::new(config::SAVED_FLASH_MS, move || {
                        dispatcher.dispatch(SessionAction::FlashExpired(generation));
                    })
                });
                move || drop(timeout)
            },
            generation,
        );
    }

    let on_save = {
        let session = session.clone();
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Commit(store.clone()));
        })
    };

    let on_export = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            match store.export(&store.committed()) {
                Ok(bytes) => {
                    if let Err(e) = download_json(&bytes, config::EXPORT_FILE_NAME) {
                        error!("Export download failed: {:?}", e);
                    }
                }
                Err(e) => error!("Export failed: {}", e),
            }
        })
    };

    let on_request_reset = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::RequestReset))
    };

    let on_cancel_reset = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::CancelReset))
    };

    let on_confirm_reset = {
        let session = session.clone();
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = session.dispatcher();
            let store = store.clone();
            spawn_local(async move {
                match store.reset().await {
                    Ok(document) => dispatcher.dispatch(SessionAction::ResetSucceeded(document)),
                    Err(e) => dispatcher.dispatch(SessionAction::ResetFailed(e.to_string())),
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_edit = {
        let dispatcher = session.dispatcher();
        Callback::from(move |edit: PendingEdit| dispatcher.dispatch(SessionAction::Edit(edit)))
    };

    html! {
        <div class="cms-panel">
            <style>{MANAGER_STYLES}</style>
            <div class="cms-header">
                <h2 class="cms-title">{"Sinad.io Content Manager"}</h2>
                <div class="cms-actions">
                    if session.is_saved_flash() {
                        <span class="cms-saved">{"Changes saved successfully!"}</span>
                    }
                    if session.state() == SessionState::Dirty {
                        <span class="cms-unsaved">{"Unsaved changes"}</span>
                    }
                    <button class="cms-button primary" onclick={on_save}>{"Save Changes"}</button>
                    <button class="cms-button" onclick={on_export}>{"Export JSON"}</button>
                    <button class="cms-button danger" onclick={on_request_reset}>{"Reset Content"}</button>
                    <button class="cms-close" onclick={on_close}>{"✕"}</button>
                </div>
            </div>

            if session.confirming_reset() {
                <div class="cms-modal-backdrop">
                    <div class="cms-modal">
                        <h3>{"Reset Content?"}</h3>
                        <p>{"This will reset all content to the original default values. This action cannot be undone."}</p>
                        if let Some(reason) = session.reset_error() {
                            <p class="cms-error">{format!("Reset failed: {}", reason)}</p>
                        }
                        <div class="cms-modal-actions">
                            <button class="cms-button" onclick={on_cancel_reset}>{"Cancel"}</button>
                            <button class="cms-button danger" onclick={on_confirm_reset}>{"Reset Content"}</button>
                        </div>
                    </div>
                </div>
            }

            <div class="cms-body">
                <nav class="cms-sidebar">
                    {
                        for SECTIONS.iter().map(|section| {
                            let onclick = {
                                let session = session.clone();
                                let id = section.id;
                                Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::SelectSection(id)))
                            };
                            let active = session.active_section() == section.id;
                            html! {
                                <button key={section.id} class={classes!("cms-section-link", active.then(|| "active"))} onclick={onclick}>
                                    {section.label}
                                </button>
                            }
                        })
                    }
                </nav>
                <div class="cms-editor">
                    <SectionEditor
                        section={session.active_section()}
                        value={session.active_value().cloned()}
                        on_edit={on_edit}
                    />
                </div>
            </div>
        </div>
    }
}

const MANAGER_STYLES: &str = r#"
    .cms-overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.9); z-index: 50; overflow: auto; }
    .cms-panel { min-height: 100%; color: #fff; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; }
    .cms-header { position: sticky; top: 0; z-index: 10; display: flex; justify-content: space-between; align-items: center; padding: 16px 24px; background: rgba(0, 0, 0, 0.95); border-bottom: 1px solid rgba(54, 155, 109, 0.3); }
    .cms-title { color: #34d399; font-size: 1.25rem; margin: 0; }
    .cms-actions { display: flex; align-items: center; gap: 16px; }
    .cms-saved { color: #34d399; font-size: 0.875rem; }
    .cms-unsaved { color: #fbbf24; font-size: 0.875rem; }
    .cms-button { padding: 8px 16px; border-radius: 6px; border: 1px solid rgba(52, 211, 153, 0.4); background: transparent; color: #34d399; cursor: pointer; }
    .cms-button.primary { background: #059669; color: #fff; border-color: #059669; }
    .cms-button.danger { color: #f87171; border-color: rgba(248, 113, 113, 0.4); }
    .cms-close { background: none; border: none; color: #9ca3af; font-size: 1.25rem; cursor: pointer; }
    .cms-modal-backdrop { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.7); z-index: 60; }
    .cms-modal { background: #111827; border: 1px solid rgba(248, 113, 113, 0.2); border-radius: 8px; padding: 24px; max-width: 28rem; }
    .cms-modal-actions { display: flex; justify-content: flex-end; gap: 16px; }
    .cms-error { color: #f87171; }
    .cms-body { display: flex; min-height: 100vh; }
    .cms-sidebar { width: 16rem; padding: 16px; border-right: 1px solid rgba(52, 211, 153, 0.2); display: flex; flex-direction: column; gap: 4px; }
    .cms-section-link { text-align: left; padding: 8px 16px; border-radius: 6px; border: none; background: none; color: #9ca3af; cursor: pointer; }
    .cms-section-link.active { background: rgba(52, 211, 153, 0.2); color: #34d399; }
    .cms-editor { flex: 1; padding: 24px; }
    .cms-heading { font-size: 1.25rem; margin-bottom: 24px; }
    .cms-fields, .cms-group, .cms-list { display: flex; flex-direction: column; gap: 16px; }
    .cms-label { display: block; font-size: 0.875rem; color: #d1d5db; margin-bottom: 4px; }
    .cms-input { width: 100%; padding: 8px 12px; background: rgba(0, 0, 0, 0.4); border: 1px solid rgba(52, 211, 153, 0.2); border-radius: 6px; color: #fff; }
    .cms-item { padding: 16px; border: 1px solid rgba(52, 211, 153, 0.2); border-radius: 6px; background: rgba(0, 0, 0, 0.2); }
    .cms-item-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; }
    .cms-item-header h4 { color: #34d399; margin: 0; }
    .cms-remove-button { background: none; border: none; color: #f87171; cursor: pointer; }
    .cms-add-button { width: 100%; padding: 8px; background: rgba(52, 211, 153, 0.1); border: 1px solid rgba(52, 211, 153, 0.2); color: #34d399; border-radius: 6px; cursor: pointer; }
    .cms-unsupported { color: #f87171; }
"#;
