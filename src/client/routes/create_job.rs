use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::client::components::Page;
use crate::client::store::session::use_session;
use crate::client::util::jobs;
use crate::model::job::CreateJobDraft;

/// How long the transient success indicator stays visible.
const SUCCESS_NOTICE_MS: u32 = 3_000;

#[component]
pub fn CreateJob() -> Element {
    let session = use_session();

    let mut draft = use_signal(CreateJobDraft::default);
    let mut submitting = use_signal(|| false);
    let mut show_success = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_evt: Event<MouseData>| {
        let request = match draft.peek().to_request() {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        // The guard keeps guests out; the session can only be gone if a
        // logout raced this click.
        let Some(current_session) = session.current() else {
            return;
        };

        submitting.set(true);
        error.set(None);

        spawn(async move {
            match jobs::create_job(&request, &current_session.email).await {
                Ok(()) => {
                    draft.set(CreateJobDraft::default());
                    show_success.set(true);

                    TimeoutFuture::new(SUCCESS_NOTICE_MS).await;
                    show_success.set(false);
                }
                Err(err) => {
                    tracing::error!("failed to create job: {err}");
                    error.set(Some("Error creating job".to_string()));
                }
            }

            submitting.set(false);
        });
    };

    let current = draft.read().clone();

    rsx!(
        Title { "Post a Job | JobPortal" }
        Meta {
            name: "description",
            content: "Publish a new job listing."
        }
        Page { class: "centered",
            div { class: "card form-card",
                h1 { class: "form-title",
                    "Post a New Job"
                }
                label { class: "field-label", "Title" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "e.g. Backend Engineer",
                    value: "{current.title}",
                    oninput: move |evt| draft.with_mut(|d| d.title = evt.value()),
                }
                label { class: "field-label", "Description" }
                textarea {
                    class: "input",
                    rows: 5,
                    placeholder: "What does the role involve?",
                    value: "{current.description}",
                    oninput: move |evt| draft.with_mut(|d| d.description = evt.value()),
                }
                label { class: "field-label", "Location" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "e.g. Bengaluru or Remote",
                    value: "{current.location}",
                    oninput: move |evt| draft.with_mut(|d| d.location = evt.value()),
                }
                label { class: "field-label", "Salary" }
                input {
                    class: "input",
                    r#type: "number",
                    placeholder: "Annual salary",
                    value: "{current.salary}",
                    oninput: move |evt| draft.with_mut(|d| d.salary = evt.value()),
                }
                button {
                    class: "btn btn-primary form-submit",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() {
                        "Posting..."
                    } else {
                        "Post Job"
                    }
                }
                if show_success() {
                    div { class: "alert alert-success",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaCircleCheck
                        }
                        "Job posted successfully!"
                    }
                }
            }
        }
        if let Some(message) = error() {
            div { class: "overlay",
                div { class: "card notice-card",
                    span { class: "notice-icon notice-icon-denied",
                        Icon {
                            width: 32,
                            height: 32,
                            icon: FaTriangleExclamation
                        }
                    }
                    h2 { class: "notice-title",
                        "Could not post the job"
                    }
                    p {
                        "{message}"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| error.set(None),
                        "Dismiss"
                    }
                }
            }
        }
    )
}
