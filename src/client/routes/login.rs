use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleCheck;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::use_session;
use crate::client::util::auth;
use crate::model::auth::{validate_login, LoginRequest, Role, Session};
use crate::model::validate::{email_is_valid, MIN_PASSWORD_LEN};

/// Pause on the success overlay before moving to the landing screen.
const SUCCESS_REDIRECT_MS: u32 = 1_500;

/// Post-login landing screen for each role.
fn landing_route(role: Role) -> Route {
    match role {
        Role::JobSeeker => Route::Jobs {},
        Role::Employer => Route::CreateJob {},
        Role::Admin => Route::Dashboard {},
    }
}

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);
    let mut show_success = use_signal(|| false);
    let mut fields_invalid = use_signal(|| false);

    // Live hints only; submission is gated by validate_login.
    let email_valid = use_memo(move || {
        let value = email();
        value.is_empty() || email_is_valid(value.trim())
    });
    let password_valid = use_memo(move || {
        let value = password();
        value.is_empty() || value.len() >= MIN_PASSWORD_LEN
    });

    let submit = move |_evt: Event<MouseData>| {
        if let Some(message) = validate_login(&email(), &password()) {
            error.set(Some(message));
            return;
        }

        loading.set(true);
        error.set(None);
        fields_invalid.set(false);

        spawn(async move {
            let request = LoginRequest {
                email: email.peek().trim().to_string(),
                password: password.peek().clone(),
            };

            match auth::login(&request).await {
                Ok(response) => {
                    let landing = landing_route(response.role);
                    session.login(Session {
                        token: response.token,
                        role: response.role,
                        email: request.email,
                    });
                    show_success.set(true);

                    TimeoutFuture::new(SUCCESS_REDIRECT_MS).await;
                    navigator.push(landing);
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    error.set(Some("Invalid email or password".to_string()));
                    fields_invalid.set(true);
                }
            }

            loading.set(false);
        });
    };

    let email_class = if email_valid() && !fields_invalid() {
        "input"
    } else {
        "input input-error"
    };
    let password_class = if password_valid() && !fields_invalid() {
        "input"
    } else {
        "input input-error"
    };
    let password_kind = if show_password() { "text" } else { "password" };
    let toggle_label = if show_password() { "Hide" } else { "Show" };

    rsx!(
        Title { "Login | JobPortal" }
        Meta {
            name: "description",
            content: "Sign in to apply for jobs or manage your listings."
        }
        Page { class: "centered",
            div { class: "card form-card",
                h1 { class: "form-title",
                    "Welcome Back"
                }
                if let Some(message) = error() {
                    div { class: "alert alert-error",
                        "{message}"
                    }
                }
                label { class: "field-label", "Email" }
                input {
                    class: "{email_class}",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { class: "field-label", "Password" }
                div { class: "password-row",
                    input {
                        class: "{password_class}",
                        r#type: "{password_kind}",
                        placeholder: "Your password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            let visible = show_password();
                            show_password.set(!visible);
                        },
                        "{toggle_label}"
                    }
                }
                button {
                    class: "btn btn-primary form-submit",
                    disabled: loading(),
                    onclick: submit,
                    if loading() {
                        "Signing in..."
                    } else {
                        "Login"
                    }
                }
                p { class: "form-footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, class: "form-link", "Register" }
                }
            }
        }
        if show_success() {
            div { class: "overlay",
                div { class: "card notice-card",
                    span { class: "notice-icon notice-icon-success",
                        Icon {
                            width: 32,
                            height: 32,
                            icon: FaCircleCheck
                        }
                    }
                    h2 { class: "notice-title",
                        "Login Successful"
                    }
                    p {
                        "Taking you to your home screen..."
                    }
                }
            }
        }
    )
}
