use log::{info, warn, Level};
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

mod config;
mod cms {
    pub mod document;
    pub mod error;
    pub mod form;
    pub mod kind;
    pub mod path;
    pub mod session;
    pub mod store;
    #[cfg(test)]
    pub mod testing;
}
mod admin {
    pub mod content_manager;
    pub mod export;
    pub mod field_editor;
}
mod components {
    pub mod footer;
    pub mod navbar;
}
mod pages {
    pub mod landing;
    pub mod sections;
    pub mod site_content;
}

use admin::content_manager::ContentManager;
use cms::document::ContentDocument;
use cms::session::{EditorSession, SessionAction};
use cms::store::{site_store, StoreHandle};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin/content")]
    ContentManager,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn is_admin_shortcut(e: &KeyboardEvent) -> bool {
    e.ctrl_key() && e.shift_key() && e.key().eq_ignore_ascii_case("a")
}

#[function_component]
fn Site() -> Html {
    let store = use_memo(|_| StoreHandle::new(site_store()), ());
    let content = use_state(|| None::<ContentDocument>);
    let session = use_reducer(EditorSession::default);
    let route = use_route::<Route>();
    let navigator = use_navigator();

    {
        let store = (*store).clone();
        let content = content.clone();
        let dispatcher = session.dispatcher();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let document = store.load().await;
                    if document.is_empty() {
                        warn!("No site content available, showing the built-in copy");
                    }
                    dispatcher.dispatch(SessionAction::Load(document.clone()));
                    content.set(Some(document));
                });
                || ()
            },
            (),
        );
    }

    {
        let navigator = navigator.clone();
        let route = route.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !is_admin_shortcut(&e) {
                return;
            }
            e.prevent_default();
            if let Some(navigator) = &navigator {
                match &route {
                    Some(Route::ContentManager) => navigator.push(&Route::Home),
                    _ => navigator.push(&Route::ContentManager),
                }
            }
        });
    }

    let on_committed = {
        let content = content.clone();
        Callback::from(move |document: ContentDocument| content.set(Some(document)))
    };

    let on_close = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let manager_open = matches!(route, Some(Route::ContentManager));
    let document = (*content).clone().unwrap_or_default();

    html! {
        <>
            <Landing content={document} />
            if manager_open && store.is_loaded() {
                <div class="cms-overlay">
                    <ContentManager
                        store={(*store).clone()}
                        session={session.clone()}
                        on_committed={on_committed}
                        on_close={on_close}
                    />
                </div>
            }
            <div class="admin-hint">{"Press CTRL+SHIFT+A to access admin panel"}</div>
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Site />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
