use dioxus::document;
use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::session::SessionStore;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component: restores the persisted session into the injectable
/// store, then mounts the router.
#[component]
pub fn App() -> Element {
    use_context_provider(SessionStore::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
