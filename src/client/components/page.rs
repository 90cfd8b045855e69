use dioxus::prelude::*;

/// Content wrapper that keeps screens clear of the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "page {class}",
            {children}
        }
    )
}
