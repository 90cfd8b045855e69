use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "centered",
            div { class: "card notice-card",
                h2 { class: "notice-title",
                    "Page not found"
                }
                p {
                    "No screen exists at /{path}."
                }
                Link { to: Route::Jobs {}, class: "btn btn-primary", "Back to the job board" }
            }
        }
    )
}
