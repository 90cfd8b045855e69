use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaLock;
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

use crate::client::router::Route;
use crate::client::store::session::use_session;

/// How long the access-denied notice stays on screen before the
/// replacement navigation to the login screen fires.
const REDIRECT_DELAY_MS: u32 = 1_500;

/// Router layout wrapping every screen that requires a session. Renders
/// the nested route when one exists; otherwise shows a short denial
/// notice and redirects to login.
#[component]
pub fn RequireSession() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let authenticated = session.is_authenticated();

    use_effect(move || {
        if !session.is_authenticated() {
            spawn(async move {
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                navigator.replace(Route::Login {});
            });
        }
    });

    if authenticated {
        rsx!( Outlet::<Route> {} )
    } else {
        rsx!(
            div {
                class: "overlay",
                div {
                    class: "card notice-card",
                    span { class: "notice-icon notice-icon-denied",
                        Icon {
                            width: 32,
                            height: 32,
                            icon: FaLock
                        }
                    }
                    h2 { class: "notice-title",
                        "Access Denied"
                    }
                    p {
                        "You need to be logged in to view this page."
                    }
                    p { class: "notice-hint",
                        "Redirecting to login page..."
                    }
                }
            }
        )
    }
}
