use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn BrandLink() -> Element {
    rsx!(
        Link {
            to: Route::Jobs {},
            class: "brand",
            span { class: "brand-name",
                "JobPortal"
            }
            span { class: "brand-tag",
                "beta"
            }
        }
    )
}
