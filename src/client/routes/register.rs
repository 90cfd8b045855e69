use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleCheck;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::util::auth;
use crate::model::auth::{RegistrationDraft, RegistrationErrors};
use crate::model::validate::{password_strength, strength_label};

/// Pause on the success overlay before returning to the login screen.
const SUCCESS_REDIRECT_MS: u32 = 3_000;

#[component]
pub fn Register() -> Element {
    let navigator = use_navigator();

    let mut draft = use_signal(RegistrationDraft::default);
    let mut errors = use_signal(RegistrationErrors::default);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut show_success = use_signal(|| false);

    // Display-only; never gates submission.
    let strength = use_memo(move || password_strength(&draft.read().password));

    let submit = move |_evt: Event<MouseData>| {
        let validation = draft.peek().validate();
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }

        loading.set(true);
        errors.set(RegistrationErrors::default());

        spawn(async move {
            let request = draft.peek().clone();

            match auth::register(&request).await {
                Ok(()) => {
                    show_success.set(true);

                    TimeoutFuture::new(SUCCESS_REDIRECT_MS).await;
                    navigator.push(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    errors.with_mut(|e| e.general = Some(err));
                }
            }

            loading.set(false);
        });
    };

    let current = draft.read().clone();
    let field_errors = errors.read().clone();
    let role_wire = current.role.as_wire();

    let score = strength();
    let strength_text = strength_label(score);
    let password_kind = if show_password() { "text" } else { "password" };
    let toggle_label = if show_password() { "Hide" } else { "Show" };

    let field_class = |broken: bool| if broken { "input input-error" } else { "input" };
    let name_class = field_class(field_errors.name.is_some());
    let email_class = field_class(field_errors.email.is_some());
    let password_class = field_class(field_errors.password.is_some());

    rsx!(
        Title { "Register | JobPortal" }
        Meta {
            name: "description",
            content: "Create an account to apply for jobs or hire talent."
        }
        Page { class: "centered",
            div { class: "card form-card",
                h1 { class: "form-title",
                    "Create Your Account"
                }
                if let Some(message) = &field_errors.general {
                    div { class: "alert alert-error",
                        "{message}"
                    }
                }
                label { class: "field-label", "Name" }
                input {
                    class: "{name_class}",
                    r#type: "text",
                    placeholder: "Your full name",
                    value: "{current.name}",
                    oninput: move |evt| {
                        draft.with_mut(|d| d.name = evt.value());
                        errors.with_mut(|e| e.name = None);
                    },
                }
                if let Some(message) = &field_errors.name {
                    p { class: "field-error", "{message}" }
                }
                label { class: "field-label", "Email" }
                input {
                    class: "{email_class}",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{current.email}",
                    oninput: move |evt| {
                        draft.with_mut(|d| d.email = evt.value());
                        errors.with_mut(|e| e.email = None);
                    },
                }
                if let Some(message) = &field_errors.email {
                    p { class: "field-error", "{message}" }
                }
                label { class: "field-label", "Password" }
                div { class: "password-row",
                    input {
                        class: "{password_class}",
                        r#type: "{password_kind}",
                        placeholder: "At least 6 characters",
                        value: "{current.password}",
                        oninput: move |evt| {
                            draft.with_mut(|d| d.password = evt.value());
                            errors.with_mut(|e| e.password = None);
                        },
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
                if let Some(message) = &field_errors.password {
                    p { class: "field-error", "{message}" }
                }
                if !current.password.is_empty() {
                    div { class: "strength-meter",
                        {(1..=4u8).map(|level| {
                            let class = if level <= score {
                                "strength-bar filled"
                            } else {
                                "strength-bar"
                            };

                            rsx! {
                                div { class: "{class}" }
                            }
                        })}
                    }
                    p { class: "strength-label",
                        "{strength_text}"
                    }
                }
                label { class: "field-label", "I want to" }
                select {
                    class: "input",
                    value: "{role_wire}",
                    onchange: move |evt| {
                        draft.with_mut(|d| d.role = evt.value().parse().unwrap_or_default());
                    },
                    option { value: "USER", "Find jobs (Job Seeker)" }
                    option { value: "EMPLOYER", "Hire talent (Employer)" }
                }
                button {
                    class: "btn btn-primary form-submit",
                    disabled: loading(),
                    onclick: submit,
                    if loading() {
                        "Creating account..."
                    } else {
                        "Register"
                    }
                }
                p { class: "form-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, class: "form-link", "Login" }
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
                        "Registration Successful"
                    }
                    p {
                        "Your account is ready. Sending you to the login page..."
                    }
                }
            }
        }
    )
}
