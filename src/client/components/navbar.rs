use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::components::BrandLink;
use crate::client::router::Route;
use crate::client::store::session::use_session;

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    // Which links the viewer gets is decided by role, exhaustively.
    let account_links = match session.role() {
        None => rsx! {
            li {
                Link { to: Route::Login {}, class: "nav-link", "Login" }
            }
            li {
                Link { to: Route::Register {}, class: "nav-link", "Register" }
            }
        },
        Some(role) => {
            let initial = role.initial();
            let label = role.label();

            rsx! {
                li {
                    Link { to: Route::Dashboard {}, class: "nav-link", "Dashboard" }
                }
                if role.can_post_jobs() {
                    li {
                        Link { to: Route::CreateJob {}, class: "nav-link", "Post Job" }
                    }
                }
                li {
                    span { class: "avatar-badge", title: label,
                        "{initial}"
                    }
                }
                li {
                    button {
                        class: "btn btn-outline btn-logout",
                        onclick: move |_| {
                            session.logout();
                            navigator.push(Route::Login {});
                        },
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaRightFromBracket
                        }
                        "Logout"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "navbar",
            div {
                class: "navbar-start",
                BrandLink {}
            }
            div {
                class: "navbar-end",
                ul { class: "nav-links",
                    li {
                        Link { to: Route::Jobs {}, class: "nav-link", "Jobs" }
                    }
                    {account_links}
                }
            }
        }

        Outlet::<Route> {}
    }
}
